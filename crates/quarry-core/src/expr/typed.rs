use crate::{
    expr::{ElementSelector, ExprNode, Property, Qualifier, ReduceOp},
    predicate::{CompareOp, CompareOptions, Comparison, Predicate, PredicateNode},
    traits::{EntityKind, FieldValue, OptionalValue, OrderedValue, TextValue},
    value::Value,
};
use std::fmt;
use std::marker::PhantomData;

///
/// Expr
///
/// Typed expression producing a value of type `V` rooted at entity `R`.
///
/// Carries the untyped node plus the collection qualifier that will be
/// hoisted into the comparison modifier when a comparison is built from
/// this expression.
///

pub struct Expr<R, V> {
    node: ExprNode,
    qualifier: Qualifier,
    _marker: PhantomData<fn() -> (R, V)>,
}

impl<R, V> Expr<R, V> {
    #[must_use]
    pub(crate) const fn new(node: ExprNode, qualifier: Qualifier) -> Self {
        Self {
            node,
            qualifier,
            _marker: PhantomData,
        }
    }

    /// Borrow the untyped node.
    #[must_use]
    pub const fn node(&self) -> &ExprNode {
        &self.node
    }

    /// The collection qualifier this expression carries.
    #[must_use]
    pub const fn qualifier(&self) -> Qualifier {
        self.qualifier
    }
}

impl<R, V: FieldValue> Expr<R, V> {
    /// Build a comparison with derived options and modifier.
    #[must_use]
    pub fn compare(self, op: CompareOp, value: impl Into<V>) -> Predicate<R> {
        let value = value.into().to_value();

        Predicate::from_node(PredicateNode::Comparison(Comparison::new(
            self.node,
            self.qualifier,
            op,
            value,
        )))
    }

    /// Build a comparison with an explicit option set.
    #[must_use]
    pub fn compare_with_options(
        self,
        op: CompareOp,
        options: CompareOptions,
        value: impl Into<V>,
    ) -> Predicate<R> {
        let value = value.into().to_value();

        Predicate::from_node(PredicateNode::Comparison(Comparison::with_options(
            self.node,
            self.qualifier,
            op,
            options,
            value,
        )))
    }

    #[must_use]
    pub fn eq(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::Equal, value)
    }

    #[must_use]
    pub fn ne(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::NotEqual, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::LessThan, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::LessThanOrEqual, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::GreaterThan, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<V>) -> Predicate<R> {
        self.compare(CompareOp::GreaterThanOrEqual, value)
    }

    /// Membership test against a fixed list.
    #[must_use]
    pub fn in_list<I>(self, values: I) -> Predicate<R>
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        let values = values
            .into_iter()
            .map(|v| v.into().to_value())
            .collect::<Vec<_>>();

        self.compare_raw(CompareOp::In, Value::List(values))
    }

    pub(crate) fn compare_raw(self, op: CompareOp, value: Value) -> Predicate<R> {
        Predicate::from_node(PredicateNode::Comparison(Comparison::new(
            self.node,
            self.qualifier,
            op,
            value,
        )))
    }
}

impl<R, V: OrderedValue> Expr<R, V> {
    /// Inclusive range test.
    #[must_use]
    pub fn between(self, lower: impl Into<V>, upper: impl Into<V>) -> Predicate<R> {
        let bounds = vec![lower.into().to_value(), upper.into().to_value()];

        self.compare_raw(CompareOp::Between, Value::List(bounds))
    }
}

impl<R, V: TextValue> Expr<R, V> {
    #[must_use]
    pub fn begins_with(self, prefix: impl Into<String>) -> Predicate<R> {
        self.compare_raw(CompareOp::BeginsWith, Value::Text(prefix.into()))
    }

    #[must_use]
    pub fn contains(self, needle: impl Into<String>) -> Predicate<R> {
        self.compare_raw(CompareOp::Contains, Value::Text(needle.into()))
    }

    #[must_use]
    pub fn ends_with(self, suffix: impl Into<String>) -> Predicate<R> {
        self.compare_raw(CompareOp::EndsWith, Value::Text(suffix.into()))
    }

    /// Wildcard match (`*` spans any run, `?` matches one character).
    #[must_use]
    pub fn like(self, pattern: impl Into<String>) -> Predicate<R> {
        self.compare_raw(CompareOp::Like, Value::Text(pattern.into()))
    }

    /// Regular-expression match, evaluated by the backend.
    #[must_use]
    pub fn matches(self, pattern: impl Into<String>) -> Predicate<R> {
        self.compare_raw(CompareOp::Matches, Value::Text(pattern.into()))
    }

    /// Explicitly case-insensitive text equality.
    #[must_use]
    pub fn eq_ci(self, value: impl Into<String>) -> Predicate<R> {
        Predicate::from_node(PredicateNode::Comparison(Comparison::with_options(
            self.node,
            self.qualifier,
            CompareOp::Equal,
            CompareOptions::CASE_INSENSITIVE,
            Value::Text(value.into()),
        )))
    }
}

impl<R, V: OptionalValue> Expr<R, V> {
    /// Equality against the backend's null sentinel.
    #[must_use]
    pub fn eq_null(self) -> Predicate<R> {
        self.compare_raw(CompareOp::Equal, Value::Null)
    }

    /// Inequality against the backend's null sentinel.
    #[must_use]
    pub fn ne_null(self) -> Predicate<R> {
        self.compare_raw(CompareOp::NotEqual, Value::Null)
    }
}

impl<R, V> Clone for Expr<R, V> {
    fn clone(&self) -> Self {
        Self::new(self.node.clone(), self.qualifier)
    }
}

impl<R, V> fmt::Debug for Expr<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("node", &self.node)
            .field("qualifier", &self.qualifier)
            .finish()
    }
}

///
/// EntityElement
///
/// Element selection over an entity collection, awaiting a drill-down
/// into a sub-property of the element type.
///

pub struct EntityElement<R, E> {
    base: ExprNode,
    selector: ElementSelector,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<R, E: EntityKind> EntityElement<R, E> {
    #[must_use]
    pub(crate) const fn new(base: ExprNode, selector: ElementSelector) -> Self {
        Self {
            base,
            selector,
            _marker: PhantomData,
        }
    }

    /// Drill into a sub-property of the selected element.
    #[must_use]
    pub fn attr<V: FieldValue>(self, property: Property<E, V>) -> Expr<R, V> {
        let qualifier = Qualifier::from_selector(self.selector);

        Expr::new(
            ExprNode::Element {
                base: Box::new(self.base),
                selector: self.selector,
                sub_path: Some(property.key_path().to_string()),
            },
            qualifier,
        )
    }
}

///
/// CollectionExpr
///
/// A filtered collection produced by a sub-query, usable as a base for
/// further reduction or element selection.
///

pub struct CollectionExpr<R, E> {
    node: ExprNode,
    _marker: PhantomData<fn() -> (R, E)>,
}

impl<R, E: EntityKind> CollectionExpr<R, E> {
    #[must_use]
    pub(crate) const fn new(node: ExprNode) -> Self {
        Self {
            node,
            _marker: PhantomData,
        }
    }

    /// Borrow the untyped node.
    #[must_use]
    pub const fn node(&self) -> &ExprNode {
        &self.node
    }

    /// Size of the filtered collection (sentinel-path form).
    #[must_use]
    pub fn size(self) -> Expr<R, u64> {
        Expr::new(
            ExprNode::Reduce {
                base: Box::new(self.node),
                op: ReduceOp::Size,
            },
            Qualifier::Direct,
        )
    }

    /// Count of the filtered collection (function-call form).
    #[must_use]
    pub fn count(self) -> Expr<R, u64> {
        Expr::new(
            ExprNode::Reduce {
                base: Box::new(self.node),
                op: ReduceOp::Count,
            },
            Qualifier::Direct,
        )
    }

    #[must_use]
    pub fn first(self) -> EntityElement<R, E> {
        EntityElement::new(self.node, ElementSelector::First)
    }

    #[must_use]
    pub fn last(self) -> EntityElement<R, E> {
        EntityElement::new(self.node, ElementSelector::Last)
    }

    #[must_use]
    pub fn at(self, index: u32) -> EntityElement<R, E> {
        EntityElement::new(self.node, ElementSelector::At(index))
    }
}

impl<R, E> Clone for CollectionExpr<R, E> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R, E> fmt::Debug for CollectionExpr<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}
