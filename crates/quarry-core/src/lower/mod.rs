#[cfg(test)]
mod tests;

use crate::{
    error::LowerError,
    expr::{ElementSelector, ExprNode, ReduceOp},
    native::{
        modifier_code, modifier_negates, operator_code, option_mask, IndexKey, NativeComparison,
        NativeExpr, NativePredicate,
    },
    predicate::{CompareOp, Comparison, Predicate, PredicateNode},
    value::Value,
};

///
/// Lowering
///
/// Translates the internal predicate/expression representation into the
/// backend's native nodes. One walk per call; no I/O, no shared state.
/// Lowering either fully succeeds or fails atomically with a
/// `LowerError` naming the offending node.
///

///
/// LowerCtx
///
/// Recursion state threaded through lowering: the current sub-query
/// binding (iterator variable) and nesting depth. Property paths inside
/// a sub-query's inner predicate resolve relative to the bound variable,
/// never to the outer entity.
///

#[derive(Clone, Debug, Default)]
struct LowerCtx {
    binding: Option<String>,
    depth: usize,
}

impl LowerCtx {
    const fn root() -> Self {
        Self {
            binding: None,
            depth: 0,
        }
    }

    /// Iterator variable for the next sub-query at this depth.
    fn fresh_variable(&self) -> String {
        match self.depth {
            0 => "x".to_string(),
            1 => "y".to_string(),
            2 => "z".to_string(),
            n => format!("v{n}"),
        }
    }

    fn in_subquery(&self, variable: String) -> Self {
        Self {
            binding: Some(variable),
            depth: self.depth + 1,
        }
    }

    /// Render a property path relative to the current binding.
    fn prefixed(&self, path: &str) -> String {
        match &self.binding {
            Some(variable) => format!("${variable}.{path}"),
            None => path.to_string(),
        }
    }
}

/// Lower an untyped predicate into a native predicate.
pub fn lower_predicate(node: &PredicateNode) -> Result<NativePredicate, LowerError> {
    lower_predicate_with(node, &LowerCtx::root())
}

/// Lower an untyped expression into a native expression.
pub fn lower_expr(node: &ExprNode) -> Result<NativeExpr, LowerError> {
    lower_expr_with(node, &LowerCtx::root())
}

impl<R> Predicate<R> {
    /// Lower this predicate into a native predicate.
    pub fn lower(&self) -> Result<NativePredicate, LowerError> {
        lower_predicate(self.node())
    }
}

fn lower_predicate_with(
    node: &PredicateNode,
    ctx: &LowerCtx,
) -> Result<NativePredicate, LowerError> {
    match node {
        PredicateNode::Literal(value) => Ok(NativePredicate::Constant(*value)),

        PredicateNode::And(left, right) => Ok(NativePredicate::and(vec![
            lower_predicate_with(left, ctx)?,
            lower_predicate_with(right, ctx)?,
        ])),

        PredicateNode::Or(left, right) => Ok(NativePredicate::or(vec![
            lower_predicate_with(left, ctx)?,
            lower_predicate_with(right, ctx)?,
        ])),

        PredicateNode::Not(inner) => Ok(NativePredicate::not(lower_predicate_with(inner, ctx)?)),

        PredicateNode::Comparison(comparison) => lower_comparison(comparison, ctx),
    }
}

fn lower_comparison(
    comparison: &Comparison,
    ctx: &LowerCtx,
) -> Result<NativePredicate, LowerError> {
    check_operand_shape(comparison)?;

    let lowered = NativeComparison {
        left: lower_expr_with(&comparison.expr, ctx)?,
        operator: operator_code(comparison.op),
        options: option_mask(comparison.options),
        modifier: modifier_code(comparison.modifier),
        right: NativeExpr::Constant(comparison.value.clone()),
    };

    // The backend has no "none" modifier: render as ANY, then negate.
    let predicate = NativePredicate::Comparison(lowered);
    if modifier_negates(comparison.modifier) {
        Ok(NativePredicate::not(predicate))
    } else {
        Ok(predicate)
    }
}

fn check_operand_shape(comparison: &Comparison) -> Result<(), LowerError> {
    match comparison.op {
        CompareOp::Between => match &comparison.value {
            Value::List(items) if items.len() == 2 => Ok(()),
            Value::List(items) => Err(LowerError::MalformedRange {
                found: items.len(),
            }),
            _ => Err(LowerError::MalformedRange { found: 1 }),
        },
        CompareOp::In => match &comparison.value {
            Value::List(_) => Ok(()),
            other => Err(LowerError::MalformedMembership {
                found: other.kind_label(),
            }),
        },
        _ => Ok(()),
    }
}

fn lower_expr_with(node: &ExprNode, ctx: &LowerCtx) -> Result<NativeExpr, LowerError> {
    match node {
        ExprNode::KeyPath { path } => {
            require_path(path)?;

            Ok(NativeExpr::KeyPath(ctx.prefixed(path)))
        }

        ExprNode::Element {
            base,
            selector,
            sub_path,
        } => lower_element(base, *selector, sub_path.as_deref(), ctx),

        ExprNode::Reduce { base, op } => {
            let base = Box::new(lower_expr_with(base, ctx)?);

            // `size` uses the sentinel-path form; every other reduction is
            // a function call. The asymmetry mirrors the backend's two
            // rendering strategies and must not be collapsed.
            Ok(match op {
                ReduceOp::Size => NativeExpr::Index {
                    base,
                    key: IndexKey::Size,
                },
                ReduceOp::Count => function("count:", base),
                ReduceOp::Sum => function("sum:", base),
                ReduceOp::Average => function("average:", base),
                ReduceOp::Min => function("min:", base),
                ReduceOp::Max => function("max:", base),
                ReduceOp::Mode => function("mode:", base),
            })
        }

        ExprNode::Identity { base, id_attribute } => {
            require_path(id_attribute)?;
            let base = lower_expr_with(base, ctx)?;

            Ok(extend_key_path(base, id_attribute))
        }

        ExprNode::Subquery {
            collection,
            predicate,
        } => {
            require_path(collection)?;
            let variable = ctx.fresh_variable();
            let inner = ctx.in_subquery(variable.clone());
            let predicate = lower_predicate_with(predicate, &inner)?;

            Ok(NativeExpr::Subquery {
                collection: ctx.prefixed(collection),
                variable,
                predicate: Box::new(predicate),
            })
        }
    }
}

fn lower_element(
    base: &ExprNode,
    selector: ElementSelector,
    sub_path: Option<&str>,
    ctx: &LowerCtx,
) -> Result<NativeExpr, LowerError> {
    let base = lower_expr_with(base, ctx)?;

    // Direct selectors render the indexed-path form, then the drill-down
    // sub-path if one was given. Aggregate qualifiers render as a plain
    // relationship path; the qualifier was hoisted into the comparison's
    // modifier at construction.
    let selected = match selector {
        ElementSelector::First => indexed(base, IndexKey::First),
        ElementSelector::Last => indexed(base, IndexKey::Last),
        ElementSelector::At(index) => indexed(base, IndexKey::At(index)),
        ElementSelector::Any | ElementSelector::All | ElementSelector::NoneOf => base,
    };

    Ok(match sub_path {
        Some(path) => extend_key_path(selected, path),
        None => selected,
    })
}

fn indexed(base: NativeExpr, key: IndexKey) -> NativeExpr {
    NativeExpr::Index {
        base: Box::new(base),
        key,
    }
}

/// Append a key-path segment to a lowered base, merging into a plain
/// key path when possible.
fn extend_key_path(base: NativeExpr, segment: &str) -> NativeExpr {
    match base {
        NativeExpr::KeyPath(path) => NativeExpr::KeyPath(format!("{path}.{segment}")),
        other => NativeExpr::KeyPathFrom {
            base: Box::new(other),
            key_path: segment.to_string(),
        },
    }
}

fn function(name: &'static str, arg: Box<NativeExpr>) -> NativeExpr {
    NativeExpr::Function { name, arg }
}

fn require_path(path: &str) -> Result<(), LowerError> {
    if path.is_empty() {
        return Err(LowerError::EmptyKeyPath);
    }

    Ok(())
}
