//! ## Crate layout
//! - `core`: scalar/value model, expression and predicate ASTs, typed
//!   operator surface, lowering compiler, and the session boundary.
//!
//! The `prelude` module mirrors the surface used by application code
//! building predicates and request specs.

pub use quarry_core as core;

// Macros
pub use quarry_core::{entity, raw_enum_value};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        expr::{CollectionExpr, EntityElement, Expr, Property},
        predicate::{CompareOp, CompareOptions, Predicate},
        request::RequestSpec,
        session::{AttributeMap, FetchError, Session},
        sort::{SortCriterion, SortDirection},
        traits::{
            EntityKind as _, EntityValue as _, FieldValue as _, Many, OrderedValue as _, Rel,
            TextValue as _,
        },
        types::{Bytes, Url},
        value::{ScalarTag, Value},
    };
}
