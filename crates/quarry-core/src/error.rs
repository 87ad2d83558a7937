use thiserror::Error as ThisError;

///
/// LowerError
///
/// Representation failures raised while lowering predicates, expressions,
/// or request specifications into native backend nodes.
///
/// These are construction bugs, not user-input errors: lowering either
/// fully succeeds and yields one complete native request, or it fails
/// atomically before any request is returned.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum LowerError {
    #[error("cannot lower an empty key path; property references must carry a backend attribute name")]
    EmptyKeyPath,

    #[error("between comparison requires exactly two bounds, found {found}")]
    MalformedRange { found: usize },

    #[error("membership comparison requires a list literal, found {found}")]
    MalformedMembership { found: &'static str },
}

///
/// DecodeError
///
/// Shape mismatches raised while decoding a fetched attribute map into a
/// typed entity value.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("attribute '{attribute}' is missing from the fetched row")]
    MissingAttribute { attribute: String },

    #[error("attribute '{attribute}' holds a {found} value, expected {expected}")]
    AttributeType {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },
}
