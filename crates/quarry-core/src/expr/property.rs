use crate::{
    expr::{CollectionExpr, ElementSelector, EntityElement, Expr, ExprNode, Qualifier, ReduceOp},
    predicate::{CompareOp, CompareOptions, Comparison, Predicate, PredicateNode},
    traits::{EntityKind, EntityValue, FieldValue, Many, NumericValue, OptionalValue, OrderedValue, Rel, TextValue},
};
use std::fmt;
use std::marker::PhantomData;

///
/// Property
///
/// Typed reference to a declared attribute or relationship of entity `R`
/// with value type `V`.
///
/// Carries only the backend attribute name (supplied at declaration, so
/// path rendering is total by construction) and phantom typing. Zero-cost
/// and `Copy`; predicate builders consume a copy.
///

pub struct Property<R, V> {
    path: &'static str,
    _marker: PhantomData<fn() -> (R, V)>,
}

impl<R, V> Property<R, V> {
    /// Create a property reference from its backend attribute name.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// The backend attribute name.
    #[must_use]
    pub const fn key_path(&self) -> &'static str {
        self.path
    }
}

impl<R, V> Clone for Property<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for Property<R, V> {}

impl<R, V> fmt::Debug for Property<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.path).finish()
    }
}

// ------------------------------------------------------------------
// Scalar comparisons (delegate to the typed expression)
// ------------------------------------------------------------------

impl<R, V: FieldValue> Property<R, V> {
    /// Lift this property into a typed expression.
    #[must_use]
    pub fn to_expr(self) -> Expr<R, V> {
        Expr::new(ExprNode::key_path(self.path), Qualifier::Direct)
    }

    #[must_use]
    pub fn compare(self, op: CompareOp, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().compare(op, value)
    }

    #[must_use]
    pub fn compare_with_options(
        self,
        op: CompareOp,
        options: CompareOptions,
        value: impl Into<V>,
    ) -> Predicate<R> {
        self.to_expr().compare_with_options(op, options, value)
    }

    #[must_use]
    pub fn eq(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().eq(value)
    }

    #[must_use]
    pub fn ne(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().ne(value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().lt(value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().lte(value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().gt(value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<V>) -> Predicate<R> {
        self.to_expr().gte(value)
    }

    /// Membership test against a fixed list.
    #[must_use]
    pub fn in_list<I>(self, values: I) -> Predicate<R>
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        self.to_expr().in_list(values)
    }
}

impl<R, V: OrderedValue> Property<R, V> {
    /// Inclusive range test.
    #[must_use]
    pub fn between(self, lower: impl Into<V>, upper: impl Into<V>) -> Predicate<R> {
        self.to_expr().between(lower, upper)
    }
}

impl<R, V: TextValue> Property<R, V> {
    #[must_use]
    pub fn begins_with(self, prefix: impl Into<String>) -> Predicate<R> {
        self.to_expr().begins_with(prefix)
    }

    #[must_use]
    pub fn contains(self, needle: impl Into<String>) -> Predicate<R> {
        self.to_expr().contains(needle)
    }

    #[must_use]
    pub fn ends_with(self, suffix: impl Into<String>) -> Predicate<R> {
        self.to_expr().ends_with(suffix)
    }

    #[must_use]
    pub fn like(self, pattern: impl Into<String>) -> Predicate<R> {
        self.to_expr().like(pattern)
    }

    #[must_use]
    pub fn matches(self, pattern: impl Into<String>) -> Predicate<R> {
        self.to_expr().matches(pattern)
    }

    #[must_use]
    pub fn eq_ci(self, value: impl Into<String>) -> Predicate<R> {
        self.to_expr().eq_ci(value)
    }
}

impl<R, V: OptionalValue> Property<R, V> {
    /// Equality against the backend's null sentinel.
    #[must_use]
    pub fn eq_null(self) -> Predicate<R> {
        self.to_expr().eq_null()
    }

    /// Inequality against the backend's null sentinel.
    #[must_use]
    pub fn ne_null(self) -> Predicate<R> {
        self.to_expr().ne_null()
    }
}

// ------------------------------------------------------------------
// Scalar collections
// ------------------------------------------------------------------

impl<R, V: FieldValue> Property<R, Vec<V>> {
    fn select(self, selector: ElementSelector) -> Expr<R, V> {
        Expr::new(
            ExprNode::Element {
                base: Box::new(ExprNode::key_path(self.path)),
                selector,
                sub_path: None,
            },
            Qualifier::from_selector(selector),
        )
    }

    fn reduce<T>(self, op: ReduceOp) -> Expr<R, T> {
        Expr::new(
            ExprNode::Reduce {
                base: Box::new(ExprNode::key_path(self.path)),
                op,
            },
            Qualifier::Direct,
        )
    }

    /// First element of the collection.
    #[must_use]
    pub fn first(self) -> Expr<R, V> {
        self.select(ElementSelector::First)
    }

    /// Last element of the collection.
    #[must_use]
    pub fn last(self) -> Expr<R, V> {
        self.select(ElementSelector::Last)
    }

    /// Element at a zero-based index.
    #[must_use]
    pub fn at(self, index: u32) -> Expr<R, V> {
        self.select(ElementSelector::At(index))
    }

    /// Number of elements, sentinel-path form.
    #[must_use]
    pub fn size(self) -> Expr<R, u64> {
        self.reduce(ReduceOp::Size)
    }

    /// Number of elements, function-call form.
    #[must_use]
    pub fn count(self) -> Expr<R, u64> {
        self.reduce(ReduceOp::Count)
    }

    /// Qualify a comparison to match when any element matches.
    #[must_use]
    pub fn any(self) -> Expr<R, V> {
        self.select(ElementSelector::Any)
    }

    /// Qualify a comparison to match when every element matches.
    #[must_use]
    pub fn all(self) -> Expr<R, V> {
        self.select(ElementSelector::All)
    }

    /// Qualify a comparison to match when no element matches.
    #[must_use]
    pub fn none_of(self) -> Expr<R, V> {
        self.select(ElementSelector::NoneOf)
    }
}

impl<R, V: NumericValue> Property<R, Vec<V>> {
    /// Sum of the elements.
    #[must_use]
    pub fn sum(self) -> Expr<R, V> {
        self.reduce(ReduceOp::Sum)
    }

    /// Arithmetic mean of the elements.
    #[must_use]
    pub fn average(self) -> Expr<R, f64> {
        self.reduce(ReduceOp::Average)
    }

    /// Most frequent element.
    #[must_use]
    pub fn mode(self) -> Expr<R, V> {
        self.reduce(ReduceOp::Mode)
    }
}

impl<R, V: OrderedValue> Property<R, Vec<V>> {
    /// Smallest element.
    #[must_use]
    pub fn min(self) -> Expr<R, V> {
        self.reduce(ReduceOp::Min)
    }

    /// Largest element.
    #[must_use]
    pub fn max(self) -> Expr<R, V> {
        self.reduce(ReduceOp::Max)
    }
}

// ------------------------------------------------------------------
// Entity collections (to-many relationships)
// ------------------------------------------------------------------

impl<R, E: EntityKind> Property<R, Many<E>> {
    fn qualified<V: FieldValue>(
        self,
        selector: ElementSelector,
        element: Property<E, V>,
    ) -> Expr<R, V> {
        Expr::new(
            ExprNode::Element {
                base: Box::new(ExprNode::key_path(self.path)),
                selector,
                sub_path: Some(element.key_path().to_string()),
            },
            Qualifier::from_selector(selector),
        )
    }

    /// Compare against any related entity's sub-property.
    #[must_use]
    pub fn any<V: FieldValue>(self, element: Property<E, V>) -> Expr<R, V> {
        self.qualified(ElementSelector::Any, element)
    }

    /// Compare against every related entity's sub-property.
    #[must_use]
    pub fn all<V: FieldValue>(self, element: Property<E, V>) -> Expr<R, V> {
        self.qualified(ElementSelector::All, element)
    }

    /// Compare against no related entity's sub-property.
    #[must_use]
    pub fn none_of<V: FieldValue>(self, element: Property<E, V>) -> Expr<R, V> {
        self.qualified(ElementSelector::NoneOf, element)
    }

    /// First related entity.
    #[must_use]
    pub fn first(self) -> EntityElement<R, E> {
        EntityElement::new(ExprNode::key_path(self.path), ElementSelector::First)
    }

    /// Last related entity.
    #[must_use]
    pub fn last(self) -> EntityElement<R, E> {
        EntityElement::new(ExprNode::key_path(self.path), ElementSelector::Last)
    }

    /// Related entity at a zero-based index.
    #[must_use]
    pub fn at(self, index: u32) -> EntityElement<R, E> {
        EntityElement::new(ExprNode::key_path(self.path), ElementSelector::At(index))
    }

    /// Number of related entities, function-call form.
    #[must_use]
    pub fn count(self) -> Expr<R, u64> {
        Expr::new(
            ExprNode::Reduce {
                base: Box::new(ExprNode::key_path(self.path)),
                op: ReduceOp::Count,
            },
            Qualifier::Direct,
        )
    }

    /// Number of related entities, sentinel-path form.
    #[must_use]
    pub fn size(self) -> Expr<R, u64> {
        Expr::new(
            ExprNode::Reduce {
                base: Box::new(ExprNode::key_path(self.path)),
                op: ReduceOp::Size,
            },
            Qualifier::Direct,
        )
    }

    /// Filter the related collection with a predicate over its element
    /// type, producing a sub-query usable for further reduction.
    #[must_use]
    pub fn matching(self, predicate: Predicate<E>) -> CollectionExpr<R, E> {
        CollectionExpr::new(ExprNode::Subquery {
            collection: self.path.to_string(),
            predicate: Box::new(predicate.into_node()),
        })
    }
}

// ------------------------------------------------------------------
// Entity references (to-one relationships)
// ------------------------------------------------------------------

impl<R, E: EntityValue> Property<R, Rel<E>> {
    fn identity(self) -> ExprNode {
        ExprNode::Identity {
            base: Box::new(ExprNode::key_path(self.path)),
            id_attribute: E::ID_ATTRIBUTE.to_string(),
        }
    }

    /// Identity-based equality against a concrete entity.
    #[must_use]
    pub fn eq_entity(self, entity: &E) -> Predicate<R> {
        Predicate::from_node(PredicateNode::Comparison(Comparison::new(
            self.identity(),
            Qualifier::Direct,
            CompareOp::Equal,
            entity.id_value(),
        )))
    }

    /// Identity-based inequality against a concrete entity.
    #[must_use]
    pub fn ne_entity(self, entity: &E) -> Predicate<R> {
        Predicate::from_node(PredicateNode::Comparison(Comparison::new(
            self.identity(),
            Qualifier::Direct,
            CompareOp::NotEqual,
            entity.id_value(),
        )))
    }

    /// Drill into a sub-property of the referenced entity.
    #[must_use]
    pub fn attr<V: FieldValue>(self, property: Property<E, V>) -> Expr<R, V> {
        let path = format!("{}.{}", self.path, property.key_path());

        Expr::new(ExprNode::KeyPath { path }, Qualifier::Direct)
    }
}
