use crate::{
    native::{NativeModifier, NativeOperator, NativeOptions},
    predicate::{CompareModifier, CompareOp, CompareOptions},
};

///
/// Backend Adapter
///
/// Pure, total mapping from the internal comparison enums onto the
/// backend's operator codes, option bitmask, and modifier codes.
/// Exhaustive by construction: there is no unsupported-operator case.
///

/// Backend operator code for an internal comparison operator.
#[must_use]
pub const fn operator_code(op: CompareOp) -> NativeOperator {
    match op {
        CompareOp::LessThan => NativeOperator::LessThan,
        CompareOp::LessThanOrEqual => NativeOperator::LessThanOrEqual,
        CompareOp::Equal => NativeOperator::Equal,
        CompareOp::NotEqual => NativeOperator::NotEqual,
        CompareOp::GreaterThanOrEqual => NativeOperator::GreaterThanOrEqual,
        CompareOp::GreaterThan => NativeOperator::GreaterThan,
        CompareOp::Between => NativeOperator::Between,
        CompareOp::BeginsWith => NativeOperator::BeginsWith,
        CompareOp::Contains => NativeOperator::Contains,
        CompareOp::EndsWith => NativeOperator::EndsWith,
        CompareOp::Like => NativeOperator::Like,
        CompareOp::Matches => NativeOperator::Matches,
        CompareOp::In => NativeOperator::In,
    }
}

/// Backend option bitmask for an internal option set.
#[must_use]
pub const fn option_mask(options: CompareOptions) -> NativeOptions {
    let mut mask = NativeOptions::NONE;
    if options.contains(CompareOptions::CASE_INSENSITIVE) {
        mask = mask.union(NativeOptions::CASE_INSENSITIVE);
    }
    if options.contains(CompareOptions::DIACRITIC_INSENSITIVE) {
        mask = mask.union(NativeOptions::DIACRITIC_INSENSITIVE);
    }
    if options.contains(CompareOptions::NORMALIZED) {
        mask = mask.union(NativeOptions::NORMALIZED);
    }

    mask
}

/// Backend modifier code for an internal comparison modifier.
///
/// `NoneOf` maps to `Any` at the comparison level; the lowering pass
/// wraps the enclosing predicate in NOT (the backend has no direct
/// "none" modifier).
#[must_use]
pub const fn modifier_code(modifier: CompareModifier) -> NativeModifier {
    match modifier {
        CompareModifier::Direct => NativeModifier::Direct,
        CompareModifier::All => NativeModifier::All,
        CompareModifier::Any | CompareModifier::NoneOf => NativeModifier::Any,
    }
}

/// Whether the enclosing predicate must be negated for this modifier.
#[must_use]
pub const fn modifier_negates(modifier: CompareModifier) -> bool {
    matches!(modifier, CompareModifier::NoneOf)
}
