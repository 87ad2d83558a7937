//! Test-only evaluation of lowered native predicates against attribute
//! maps. Pure row-at-a-time semantics: no schema access, no planning.
//! Comparisons the simulated backend cannot express (regex matches,
//! sub-query resolution) evaluate to non-matches.

use crate::{
    native::{
        CompoundKind, IndexKey, NativeComparison, NativeExpr, NativeModifier, NativeOperator,
        NativeOptions, NativePredicate,
    },
    session::AttributeMap,
    value::{canonical_cmp, strict_order_cmp, text_compare, TextMode, TextOp, Value},
};
use std::cmp::Ordering;

/// Evaluate a lowered predicate against a single row.
pub(crate) fn eval_predicate(predicate: &NativePredicate, row: &AttributeMap) -> bool {
    match predicate {
        NativePredicate::Constant(value) => *value,

        NativePredicate::Compound {
            kind,
            subpredicates,
        } => match kind {
            CompoundKind::And => subpredicates.iter().all(|sub| eval_predicate(sub, row)),
            CompoundKind::Or => subpredicates.iter().any(|sub| eval_predicate(sub, row)),
            CompoundKind::Not => !subpredicates
                .iter()
                .any(|sub| eval_predicate(sub, row)),
        },

        NativePredicate::Comparison(comparison) => eval_comparison(comparison, row),
    }
}

fn eval_comparison(comparison: &NativeComparison, row: &AttributeMap) -> bool {
    let Some(right) = resolve(&comparison.right, row) else {
        return false;
    };

    match comparison.modifier {
        NativeModifier::Direct => resolve(&comparison.left, row).is_some_and(|left| {
            compare_values(comparison.operator, comparison.options, &left, &right)
        }),
        NativeModifier::Any => elements(&comparison.left, row).is_some_and(|items| {
            items
                .iter()
                .any(|left| compare_values(comparison.operator, comparison.options, left, &right))
        }),
        NativeModifier::All => elements(&comparison.left, row).is_some_and(|items| {
            items
                .iter()
                .all(|left| compare_values(comparison.operator, comparison.options, left, &right))
        }),
    }
}

/// Resolve a qualified comparison's left side to its element list.
fn elements(expr: &NativeExpr, row: &AttributeMap) -> Option<Vec<Value>> {
    match resolve(expr, row)? {
        Value::List(items) => Some(items),
        other => Some(vec![other]),
    }
}

/// Resolve a native expression to a value for one row.
fn resolve(expr: &NativeExpr, row: &AttributeMap) -> Option<Value> {
    match expr {
        NativeExpr::Constant(value) => Some(value.clone()),

        NativeExpr::KeyPath(path) => row.get(path).cloned(),

        NativeExpr::Index { base, key } => {
            let Value::List(items) = resolve(base, row)? else {
                return None;
            };

            match key {
                IndexKey::First => items.first().cloned(),
                IndexKey::Last => items.last().cloned(),
                IndexKey::At(index) => items.get(*index as usize).cloned(),
                IndexKey::Size => Some(Value::Uint64(items.len() as u64)),
            }
        }

        NativeExpr::Function { name, arg } => {
            let Value::List(items) = resolve(arg, row)? else {
                return None;
            };

            apply_function(name, &items)
        }

        // Relationship traversal and sub-query resolution belong to the
        // real backend; the simulated store does not materialize them.
        NativeExpr::KeyPathFrom { .. } | NativeExpr::Subquery { .. } => None,
    }
}

fn apply_function(name: &str, items: &[Value]) -> Option<Value> {
    match name {
        "count:" => Some(Value::Uint64(items.len() as u64)),
        "sum:" => numeric_items(items).map(|nums| Value::Float64(nums.iter().sum())),
        "average:" => numeric_items(items).and_then(|nums| {
            if nums.is_empty() {
                return None;
            }

            let count = nums.len() as f64;
            Some(Value::Float64(nums.iter().sum::<f64>() / count))
        }),
        "min:" => items
            .iter()
            .min_by(|a, b| canonical_cmp(a, b))
            .cloned(),
        "max:" => items
            .iter()
            .max_by(|a, b| canonical_cmp(a, b))
            .cloned(),
        "mode:" => mode(items),
        _ => None,
    }
}

fn numeric_items(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}

/// Most frequent element; first-observed wins ties.
fn mode(items: &[Value]) -> Option<Value> {
    let mut best: Option<(&Value, usize)> = None;
    for candidate in items {
        let frequency = items
            .iter()
            .filter(|item| canonical_cmp(item, candidate) == Ordering::Equal)
            .count();

        let better = best.is_none_or(|(_, best_frequency)| frequency > best_frequency);
        if better {
            best = Some((candidate, frequency));
        }
    }

    best.map(|(value, _)| value.clone())
}

fn compare_values(
    operator: NativeOperator,
    options: NativeOptions,
    left: &Value,
    right: &Value,
) -> bool {
    let mode = if options.contains(NativeOptions::CASE_INSENSITIVE) {
        TextMode::Ci
    } else {
        TextMode::Cs
    };

    match operator {
        NativeOperator::Equal => equal_values(left, right, mode),
        NativeOperator::NotEqual => !equal_values(left, right, mode),

        NativeOperator::LessThan => ordered(left, right, Ordering::is_lt),
        NativeOperator::LessThanOrEqual => ordered(left, right, Ordering::is_le),
        NativeOperator::GreaterThan => ordered(left, right, Ordering::is_gt),
        NativeOperator::GreaterThanOrEqual => ordered(left, right, Ordering::is_ge),

        NativeOperator::BeginsWith => {
            text_compare(left, right, TextOp::BeginsWith, mode).unwrap_or(false)
        }
        NativeOperator::EndsWith => {
            text_compare(left, right, TextOp::EndsWith, mode).unwrap_or(false)
        }
        NativeOperator::Like => text_compare(left, right, TextOp::Like, mode).unwrap_or(false),

        // Regex evaluation is the real backend's job.
        NativeOperator::Matches => false,

        NativeOperator::Contains => match left {
            Value::List(items) => items.iter().any(|item| equal_values(item, right, mode)),
            _ => text_compare(left, right, TextOp::Contains, mode).unwrap_or(false),
        },

        NativeOperator::In => right
            .as_list()
            .is_some_and(|items| items.iter().any(|item| equal_values(left, item, mode))),

        NativeOperator::Between => right.as_list().is_some_and(|bounds| match bounds {
            [lower, upper] => {
                ordered(left, lower, Ordering::is_ge) && ordered(left, upper, Ordering::is_le)
            }
            _ => false,
        }),
    }
}

fn equal_values(left: &Value, right: &Value, mode: TextMode) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        _ => {
            if left.as_text().is_some() && right.as_text().is_some() {
                return text_compare(left, right, TextOp::Equals, mode).unwrap_or(false);
            }

            strict_order_cmp(left, right) == Some(Ordering::Equal) || left == right
        }
    }
}

fn ordered(left: &Value, right: &Value, check: impl Fn(Ordering) -> bool) -> bool {
    strict_order_cmp(left, right).is_some_and(check)
}
