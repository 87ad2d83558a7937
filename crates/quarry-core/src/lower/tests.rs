use crate::{
    error::LowerError,
    expr::{ExprNode, Property, Qualifier},
    lower::lower_predicate,
    native::{
        operator_code, CompoundKind, IndexKey, NativeExpr, NativeModifier, NativePredicate,
    },
    predicate::{CompareOp, Comparison, PredicateNode},
    test_support::fixtures::{fixture_id, Account, Customer, Message, Profile},
    value::Value,
};
use proptest::prelude::*;

fn minimal_comparison(op: CompareOp, qualifier: Qualifier) -> PredicateNode {
    let value = match op {
        CompareOp::Between => Value::List(vec![Value::Int64(1), Value::Int64(2)]),
        CompareOp::In => Value::List(vec![Value::Int64(1)]),
        _ => Value::Int64(1),
    };

    PredicateNode::Comparison(Comparison::new(
        ExprNode::key_path("views"),
        qualifier,
        op,
        value,
    ))
}

fn lowered_comparison(predicate: &NativePredicate) -> &crate::native::NativeComparison {
    match predicate {
        NativePredicate::Comparison(comparison) => comparison,
        other => panic!("expected lowered comparison, got {other}"),
    }
}

// ---- operator and option mapping ---------------------------------------

#[test]
fn every_operator_lowers_to_its_mapped_code() {
    for op in CompareOp::ALL {
        let lowered = lower_predicate(&minimal_comparison(op, Qualifier::Direct)).unwrap();
        let comparison = lowered_comparison(&lowered);

        assert_eq!(
            comparison.operator,
            operator_code(op),
            "operator mismatch for {op:?}"
        );
    }
}

#[test]
fn lowered_options_follow_the_derived_defaults() {
    let text = Message::text().eq("ice").lower().unwrap();
    assert_eq!(lowered_comparison(&text).options.bits(), 0x01);

    let uuid = Message::id().eq(fixture_id(2)).lower().unwrap();
    assert_eq!(lowered_comparison(&uuid).options.bits(), 0);
}

// ---- modifiers ---------------------------------------------------------

#[test]
fn none_of_lowers_to_not_wrapping_an_any_comparison() {
    let lowered = Account::profiles()
        .none_of(Profile::name())
        .eq("John Doe")
        .lower()
        .unwrap();

    let NativePredicate::Compound {
        kind: CompoundKind::Not,
        subpredicates,
    } = &lowered
    else {
        panic!("expected NOT compound, got {lowered}");
    };

    let [inner] = subpredicates.as_slice() else {
        panic!("NOT must wrap exactly one subpredicate");
    };

    let comparison = lowered_comparison(inner);
    assert_eq!(comparison.modifier, NativeModifier::Any);
    assert_eq!(comparison.left, NativeExpr::KeyPath("profiles.name".to_string()));

    assert_eq!(lowered.to_string(), "NOT (ANY profiles.name ==[c] \"John Doe\")");
}

#[test]
fn any_and_all_lower_to_plain_paths_with_modifiers() {
    let any = Account::profiles().any(Profile::name()).eq("x").lower().unwrap();
    let comparison = lowered_comparison(&any);
    assert_eq!(comparison.modifier, NativeModifier::Any);
    assert_eq!(comparison.left, NativeExpr::KeyPath("profiles.name".to_string()));

    let all = Account::profiles().all(Profile::name()).eq("x").lower().unwrap();
    assert_eq!(lowered_comparison(&all).modifier, NativeModifier::All);
}

// ---- array selection and reductions ------------------------------------

#[test]
fn array_selection_renders_indexed_paths() {
    let at = Message::tags().at(4).eq("one").lower().unwrap();
    assert_eq!(lowered_comparison(&at).left.to_string(), "tags[4]");

    let first = Message::tags().first().eq("one").lower().unwrap();
    assert_eq!(lowered_comparison(&first).left.to_string(), "tags[FIRST]");

    let last = Message::tags().last().eq("one").lower().unwrap();
    assert_eq!(lowered_comparison(&last).left.to_string(), "tags[LAST]");

    let size = Message::tags().size().eq(5u64).lower().unwrap();
    assert_eq!(lowered_comparison(&size).left.to_string(), "tags[SIZE]");
}

#[test]
fn reductions_render_function_calls_except_size() {
    let cases = [
        (Customer::purchases().count().eq(5u64), "count:(purchases)"),
        (Customer::purchases().sum().eq(150i64), "sum:(purchases)"),
        (Customer::purchases().average().eq(30.0), "average:(purchases)"),
        (Customer::purchases().min().eq(10i64), "min:(purchases)"),
        (Customer::purchases().max().eq(50i64), "max:(purchases)"),
        (Customer::purchases().mode().eq(10i64), "mode:(purchases)"),
    ];

    for (predicate, expected) in cases {
        let lowered = predicate.lower().unwrap();
        assert_eq!(lowered_comparison(&lowered).left.to_string(), expected);
    }

    // Same base collection, sentinel form: the two renderings must never
    // be confused.
    let size = Customer::purchases().size().eq(5u64).lower().unwrap();
    assert_eq!(lowered_comparison(&size).left.to_string(), "purchases[SIZE]");
}

#[test]
fn entity_element_drill_renders_through_the_index() {
    let lowered = Account::profiles()
        .first()
        .attr(Profile::name())
        .eq("x")
        .lower()
        .unwrap();

    assert_eq!(
        lowered_comparison(&lowered).left.to_string(),
        "profiles[FIRST].name"
    );
}

// ---- sub-queries --------------------------------------------------------

#[test]
fn subquery_paths_bind_to_the_iterator_variable() {
    let predicate = Account::profiles()
        .matching(Profile::name().contains("Doe"))
        .size()
        .eq(2u64);

    let lowered = predicate.lower().unwrap();
    let comparison = lowered_comparison(&lowered);

    let NativeExpr::Index { base, key } = &comparison.left else {
        panic!("expected sized subquery, got {}", comparison.left);
    };
    assert_eq!(*key, IndexKey::Size);

    let NativeExpr::Subquery {
        collection,
        variable,
        predicate,
    } = base.as_ref()
    else {
        panic!("expected subquery base, got {base}");
    };
    assert_eq!(collection, "profiles");
    assert_eq!(variable, "x");

    let inner = lowered_comparison(predicate);
    assert_eq!(inner.left, NativeExpr::KeyPath("$x.name".to_string()));

    assert_eq!(
        lowered.to_string(),
        "SUBQUERY(profiles, $x, $x.name CONTAINS[c] \"Doe\")[SIZE] ==[c] 2"
    );
}

#[test]
fn subquery_count_uses_the_function_form() {
    let lowered = Account::profiles()
        .matching(Profile::name().contains("Doe"))
        .count()
        .eq(2u64)
        .lower()
        .unwrap();

    let comparison = lowered_comparison(&lowered);
    let NativeExpr::Function { name, arg } = &comparison.left else {
        panic!("expected counted subquery, got {}", comparison.left);
    };
    assert_eq!(*name, "count:");
    assert!(matches!(arg.as_ref(), NativeExpr::Subquery { .. }));
}

#[test]
fn nested_subqueries_get_fresh_variables_and_prefixed_collections() {
    let inner = Profile::friends()
        .matching(Profile::name().eq("a"))
        .count()
        .gt(0u64);
    let outer = Account::profiles().matching(inner).count().gt(0u64);

    let lowered = outer.lower().unwrap();
    let comparison = lowered_comparison(&lowered);

    let NativeExpr::Function { arg, .. } = &comparison.left else {
        panic!("expected counted subquery");
    };
    let NativeExpr::Subquery {
        variable,
        predicate,
        ..
    } = arg.as_ref()
    else {
        panic!("expected outer subquery");
    };
    assert_eq!(variable, "x");

    let inner_comparison = lowered_comparison(predicate);
    let NativeExpr::Function { arg, .. } = &inner_comparison.left else {
        panic!("expected inner counted subquery");
    };
    let NativeExpr::Subquery {
        collection,
        variable,
        predicate,
    } = arg.as_ref()
    else {
        panic!("expected inner subquery");
    };
    assert_eq!(collection, "$x.friends");
    assert_eq!(variable, "y");

    let innermost = lowered_comparison(predicate);
    assert_eq!(innermost.left, NativeExpr::KeyPath("$y.name".to_string()));
}

// ---- nil and identity ---------------------------------------------------

#[test]
fn nil_comparisons_lower_to_the_null_constant() {
    let scalar = Message::subtitle().eq_null().lower().unwrap();
    let comparison = lowered_comparison(&scalar);
    assert_eq!(comparison.right, NativeExpr::Constant(Value::Null));
    assert_eq!(scalar.to_string(), "subtitle ==[c] nil");

    // Collection-valued optional properties take the same lowering.
    let collection = Account::aliases().eq_null().lower().unwrap();
    assert_eq!(
        lowered_comparison(&collection).right,
        NativeExpr::Constant(Value::Null)
    );
}

#[test]
fn identity_comparisons_lower_to_the_identifier_attribute() {
    let profile = Profile {
        id: fixture_id(5),
        name: "Doe".to_string(),
    };

    let lowered = Account::owner().eq_entity(&profile).lower().unwrap();
    let comparison = lowered_comparison(&lowered);

    assert_eq!(comparison.left, NativeExpr::KeyPath("owner.id".to_string()));
    assert_eq!(comparison.options.bits(), 0);
    assert_eq!(
        comparison.right,
        NativeExpr::Constant(Value::Uuid(fixture_id(5)))
    );
}

// ---- logical connectives ------------------------------------------------

#[test]
fn connectives_lower_to_compound_predicates() {
    let lowered = (Message::text().begins_with("Hello") & Message::views().gte(40i64))
        .lower()
        .unwrap();

    let NativePredicate::Compound {
        kind: CompoundKind::And,
        subpredicates,
    } = &lowered
    else {
        panic!("expected AND compound");
    };
    assert_eq!(subpredicates.len(), 2);

    assert_eq!(
        lowered.to_string(),
        "(text BEGINSWITH[c] \"Hello\" AND views >=[c] 40)"
    );
}

#[test]
fn literals_lower_to_constant_predicates() {
    let lowered = lower_predicate(&PredicateNode::Literal(true)).unwrap();
    assert_eq!(lowered, NativePredicate::Constant(true));
}

// ---- failure atomicity --------------------------------------------------

#[test]
fn empty_key_paths_fail_lowering() {
    let bad: Property<Message, i64> = Property::new("");
    let result = bad.eq(1i64).lower();

    assert_eq!(result, Err(LowerError::EmptyKeyPath));
}

#[test]
fn malformed_ranges_fail_lowering() {
    let node = PredicateNode::Comparison(Comparison::new(
        ExprNode::key_path("views"),
        Qualifier::Direct,
        CompareOp::Between,
        Value::List(vec![Value::Int64(1)]),
    ));

    assert_eq!(
        lower_predicate(&node),
        Err(LowerError::MalformedRange { found: 1 })
    );
}

#[test]
fn malformed_membership_fails_lowering() {
    let node = PredicateNode::Comparison(Comparison::new(
        ExprNode::key_path("views"),
        Qualifier::Direct,
        CompareOp::In,
        Value::Int64(3),
    ));

    assert_eq!(
        lower_predicate(&node),
        Err(LowerError::MalformedMembership { found: "Int64" })
    );
}

// ---- structural properties ---------------------------------------------

fn comparison_strategy() -> impl Strategy<Value = PredicateNode> {
    (0..CompareOp::ALL.len(), any::<i64>()).prop_map(|(index, seed)| {
        let op = CompareOp::ALL[index];
        let value = match op {
            CompareOp::Between => Value::List(vec![
                Value::Int64(seed),
                Value::Int64(seed.wrapping_add(1)),
            ]),
            CompareOp::In => Value::List(vec![Value::Int64(seed)]),
            _ => Value::Int64(seed),
        };

        PredicateNode::Comparison(Comparison::new(
            ExprNode::key_path("views"),
            Qualifier::Direct,
            op,
            value,
        ))
    })
}

fn predicate_strategy() -> impl Strategy<Value = PredicateNode> {
    let leaf = prop_oneof![
        comparison_strategy(),
        any::<bool>().prop_map(PredicateNode::Literal),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| PredicateNode::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| PredicateNode::or(a, b)),
            inner.prop_map(PredicateNode::not),
        ]
    })
}

proptest! {
    /// Lowering is total over well-formed predicate trees.
    #[test]
    fn lowering_never_fails_on_wellformed_trees(tree in predicate_strategy()) {
        prop_assert!(lower_predicate(&tree).is_ok());
    }

    /// Lowered trees render without panicking, whatever the shape.
    #[test]
    fn lowered_trees_always_render(tree in predicate_strategy()) {
        let lowered = lower_predicate(&tree).unwrap();
        let rendered = lowered.to_string();

        prop_assert!(!rendered.is_empty());
    }
}
