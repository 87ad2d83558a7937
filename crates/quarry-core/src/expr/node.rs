use crate::predicate::{CompareModifier, PredicateNode};
use serde::{Deserialize, Serialize};

///
/// Expression AST
///
/// Pure, schema-agnostic representation of a derivable value rooted at an
/// entity: property access, array element selection, reductions, identity
/// projection, and sub-queries. The typed layer guarantees that only
/// well-typed nodes are constructed; lowering renders them into native
/// expressions with an exhaustive match.
///

///
/// ElementSelector
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ElementSelector {
    First,
    Last,
    At(u32),
    Any,
    All,
    NoneOf,
}

///
/// ReduceOp
///
/// Collection reductions. `Size` is intentionally separate from `Count`:
/// the backend renders counting as a function call but sizing as a
/// sentinel-token path, and the two forms must not be confused.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ReduceOp {
    Count,
    Sum,
    Average,
    Min,
    Max,
    Mode,
    Size,
}

///
/// Qualifier
///
/// Collection qualifier carried by a typed expression. Hoisted into the
/// comparison's modifier when the comparison is constructed; this
/// derivation is an invariant, not a choice left to callers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Qualifier {
    Direct,
    Any,
    All,
    NoneOf,
}

impl Qualifier {
    /// The comparison modifier this qualifier induces.
    #[must_use]
    pub const fn modifier(self) -> CompareModifier {
        match self {
            Self::Direct => CompareModifier::Direct,
            Self::Any => CompareModifier::Any,
            Self::All => CompareModifier::All,
            Self::NoneOf => CompareModifier::NoneOf,
        }
    }

    /// The qualifier induced by an element selector, if any.
    #[must_use]
    pub(crate) const fn from_selector(selector: ElementSelector) -> Self {
        match selector {
            ElementSelector::First | ElementSelector::Last | ElementSelector::At(_) => Self::Direct,
            ElementSelector::Any => Self::Any,
            ElementSelector::All => Self::All,
            ElementSelector::NoneOf => Self::NoneOf,
        }
    }
}

///
/// ExprNode
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExprNode {
    /// Reference to a named attribute or relationship.
    KeyPath { path: String },

    /// Element selection over a collection-valued base, optionally
    /// drilling into a sub-property of the element type.
    Element {
        base: Box<ExprNode>,
        selector: ElementSelector,
        sub_path: Option<String>,
    },

    /// Reduction of a collection-valued base to a scalar.
    Reduce { base: Box<ExprNode>, op: ReduceOp },

    /// Stable identifier of an entity-valued base. The identifier
    /// attribute name is captured at construction, keeping the mapping
    /// total without runtime reflection.
    Identity {
        base: Box<ExprNode>,
        id_attribute: String,
    },

    /// A collection property filtered by a predicate over its element
    /// type; evaluates to the filtered collection.
    Subquery {
        collection: String,
        predicate: Box<PredicateNode>,
    },
}

impl ExprNode {
    #[must_use]
    pub fn key_path(path: impl Into<String>) -> Self {
        Self::KeyPath { path: path.into() }
    }
}
