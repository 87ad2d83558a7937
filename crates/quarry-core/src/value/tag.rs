use crate::predicate::CompareOptions;
use serde::{Deserialize, Serialize};

///
/// ValueFamily
///
/// Coarse classification of leaf scalar tags.
///
/// NOTE: Date is Numeric by family but is excluded from numeric widening;
/// family is a grouping surface, not a coercion rule.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ValueFamily {
    Bool,
    Numeric,
    Textual,
    Identifier,
    Blob,
    Unit,
}

///
/// ScalarTag
///
/// Closed classification of a value's kind.
///
/// Leaf tags are registered in the scalar registry; `Optional` and `List`
/// compose by wrapping an inner tag and delegate all metadata to it.
/// Tags compose but never cycle.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ScalarTag {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Text,
    Date,
    Url,
    Uuid,
    Blob,
    Null,
    Optional(Box<ScalarTag>),
    List(Box<ScalarTag>),
}

impl ScalarTag {
    /// Wrap this tag as an optional-of tag.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Wrap this tag as an array-of tag.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Strip `Optional`/`List` wrappers down to the leaf tag.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Optional(inner) | Self::List(inner) => inner.leaf(),
            other => other,
        }
    }
}

macro_rules! leaf_tag_metadata {
    (
        $((
            $tag:ident,
            $family:expr,
            is_numeric = $numeric:literal,
            supports_ordering = $ordered:literal,
            default_options = $options:ident
        )),+ $(,)?
    ) => {
        impl ScalarTag {
            /// Every registered leaf tag, in registry order.
            pub const LEAF_TAGS: &'static [Self] = &[
                $( Self::$tag, )+
            ];

            /// Coarse family of this tag's leaf.
            #[must_use]
            pub fn family(&self) -> ValueFamily {
                match self {
                    $( Self::$tag => $family, )+
                    Self::Optional(inner) | Self::List(inner) => inner.family(),
                }
            }

            /// Whether values of this tag participate in numeric widening.
            #[must_use]
            pub fn is_numeric(&self) -> bool {
                match self {
                    $( Self::$tag => $numeric, )+
                    Self::Optional(inner) | Self::List(inner) => inner.is_numeric(),
                }
            }

            /// Whether values of this tag have a meaningful order.
            #[must_use]
            pub fn supports_ordering(&self) -> bool {
                match self {
                    $( Self::$tag => $ordered, )+
                    Self::Optional(inner) | Self::List(inner) => inner.supports_ordering(),
                }
            }

            /// Default comparison options for comparisons against values of
            /// this tag. Uuid resolves to no options; every other leaf tag
            /// resolves to case-insensitive (see the registry note on the
            /// non-text entries).
            #[must_use]
            pub fn default_compare_options(&self) -> CompareOptions {
                match self {
                    $( Self::$tag => CompareOptions::$options, )+
                    Self::Optional(inner) | Self::List(inner) => {
                        inner.default_compare_options()
                    }
                }
            }

            /// Stable human-readable tag label for diagnostics.
            #[must_use]
            pub fn label(&self) -> &'static str {
                match self {
                    $( Self::$tag => stringify!($tag), )+
                    Self::Optional(_) => "Optional",
                    Self::List(_) => "List",
                }
            }
        }
    };
}

scalar_registry!(leaf_tag_metadata);
