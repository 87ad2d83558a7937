//! Core runtime for Quarry: the scalar/value model, expression and
//! predicate ASTs, the typed operator surface, the lowering compiler, and
//! the session boundary, with ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

#[macro_use]
pub(crate) mod scalar_registry;

mod macros;

// public exports are one module level down
pub mod error;
pub mod expr;
pub mod lower;
pub mod native;
pub mod predicate;
pub mod request;
pub mod session;
pub mod sort;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No native nodes, lowering internals, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::{Expr, Property},
        predicate::{CompareOp, CompareOptions, Predicate},
        request::RequestSpec,
        session::{AttributeMap, FetchError, Session},
        sort::{SortCriterion, SortDirection},
        traits::{EntityKind, EntityValue, FieldValue, Many, Rel},
        value::{ScalarTag, Value},
    };
}
