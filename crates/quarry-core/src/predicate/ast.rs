use crate::{
    expr::{ExprNode, Qualifier},
    predicate::CompareOptions,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of filter predicates.
/// This layer contains no type checking and no backend knowledge; the
/// typed operator surface enforces operand compatibility at construction
/// and the lowering pass renders these nodes into native form.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    LessThan,
    LessThanOrEqual,
    Equal,
    NotEqual,
    GreaterThanOrEqual,
    GreaterThan,
    Between,
    BeginsWith,
    Contains,
    EndsWith,
    Like,
    Matches,
    In,
}

impl CompareOp {
    /// Every comparison operator, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThanOrEqual,
        Self::GreaterThan,
        Self::Between,
        Self::BeginsWith,
        Self::Contains,
        Self::EndsWith,
        Self::Like,
        Self::Matches,
        Self::In,
    ];
}

///
/// CompareModifier
///
/// Qualifier indicating whether a comparison applies directly, or to
/// any/all/none of the elements of a collection-valued expression.
/// Always derived from the expression's qualifier, never chosen freely.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareModifier {
    Direct,
    Any,
    All,
    NoneOf,
}

///
/// Comparison
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub expr: ExprNode,
    pub op: CompareOp,
    pub options: CompareOptions,
    pub value: Value,
    pub modifier: CompareModifier,
}

impl Comparison {
    /// Construct a comparison with options derived from the compared
    /// value's scalar tag and the modifier derived from the expression's
    /// collection qualifier.
    #[must_use]
    pub(crate) fn new(expr: ExprNode, qualifier: Qualifier, op: CompareOp, value: Value) -> Self {
        let options = value.tag().default_compare_options();

        Self {
            expr,
            op,
            options,
            value,
            modifier: qualifier.modifier(),
        }
    }

    /// Construct a comparison with an explicit option set.
    #[must_use]
    pub(crate) fn with_options(
        expr: ExprNode,
        qualifier: Qualifier,
        op: CompareOp,
        options: CompareOptions,
        value: Value,
    ) -> Self {
        Self {
            expr,
            op,
            options,
            value,
            modifier: qualifier.modifier(),
        }
    }
}

///
/// PredicateNode
///
/// Recursive tagged union describing a filter. Carries no entity
/// reference; immutable once built and shared/cloned by value.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PredicateNode {
    Comparison(Comparison),
    Literal(bool),
    And(Box<PredicateNode>, Box<PredicateNode>),
    Or(Box<PredicateNode>, Box<PredicateNode>),
    Not(Box<PredicateNode>),
}

impl PredicateNode {
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::Not(Box::new(inner))
    }
}
