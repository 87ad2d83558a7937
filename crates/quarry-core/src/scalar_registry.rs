///
/// Scalar Registry
///
/// Single source of truth for leaf scalar metadata shared across the core.
///
/// Composite tags (`Optional`, `List`) are not registered here; they
/// resolve every metadata question by delegating to their inner tag.
/// Raw-representable enums likewise delegate to their underlying
/// primitive via `EnumValue::Raw`.
///

// NOTE: `default_options` carries CASE_INSENSITIVE for every tag except
// Uuid, including purely numeric and date tags. Case-insensitivity has no
// semantic meaning for non-text comparisons; the table preserves the
// backend's observed behavior, which tolerates the flag on non-text nodes.
// Do not "fix" these entries without changing the compatibility story.
macro_rules! scalar_registry_entries {
    ($macro:ident) => {
        $macro! {
            (
                Bool,
                ValueFamily::Bool,
                is_numeric = false,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Int8,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Int16,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Int32,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Int64,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Uint8,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Uint16,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Uint32,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Uint64,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Float32,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Float64,
                ValueFamily::Numeric,
                is_numeric = true,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Text,
                ValueFamily::Textual,
                is_numeric = false,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Date,
                ValueFamily::Numeric,
                is_numeric = false,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Url,
                ValueFamily::Textual,
                is_numeric = false,
                supports_ordering = true,
                default_options = CASE_INSENSITIVE
            ),
            (
                Uuid,
                ValueFamily::Identifier,
                is_numeric = false,
                supports_ordering = true,
                default_options = NONE
            ),
            (
                Blob,
                ValueFamily::Blob,
                is_numeric = false,
                supports_ordering = false,
                default_options = CASE_INSENSITIVE
            ),
            (
                Null,
                ValueFamily::Unit,
                is_numeric = false,
                supports_ordering = false,
                default_options = CASE_INSENSITIVE
            ),
        }
    };
}

macro_rules! scalar_registry {
    ($macro:ident) => {
        scalar_registry_entries!($macro);
    };
}
