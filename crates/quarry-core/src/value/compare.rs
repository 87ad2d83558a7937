use crate::value::{TextMode, Value};
use std::cmp::Ordering;

///
/// TextOp
///
/// Text comparison shapes shared by evaluation and diagnostics surfaces.
/// `Like` uses the backend's wildcard syntax: `*` matches any run of
/// characters and `?` matches exactly one.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextOp {
    Equals,
    BeginsWith,
    Contains,
    EndsWith,
    Like,
}

/// Total canonical comparator used by sort fallback and evaluation.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = canonical_rank(left).cmp(&canonical_rank(right));
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Strict comparator for orderable operand pairs.
///
/// Identical variants compare directly; mixed numeric variants widen to
/// f64 first. Returns `None` for pairs with no meaningful order.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Url(a), Value::Url(b)) => Some(a.cmp(b)),
        (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        _ => {
            let a = left.as_f64()?;
            let b = right.as_f64()?;

            Some(a.total_cmp(&b))
        }
    }
}

/// Case-aware text comparison.
///
/// Returns `None` when either operand has no textual form.
#[must_use]
pub fn text_compare(left: &Value, right: &Value, op: TextOp, mode: TextMode) -> Option<bool> {
    let left = fold_case(left.as_text()?, mode);
    let right = fold_case(right.as_text()?, mode);

    let matched = match op {
        TextOp::Equals => left == right,
        TextOp::BeginsWith => left.starts_with(&right),
        TextOp::Contains => left.contains(&right),
        TextOp::EndsWith => left.ends_with(&right),
        TextOp::Like => like_match(&left, &right),
    };

    Some(matched)
}

fn fold_case(text: &str, mode: TextMode) -> String {
    match mode {
        TextMode::Cs => text.to_string(),
        TextMode::Ci => text.to_lowercase(),
    }
}

/// Wildcard match: `*` spans any run, `?` consumes one character.
fn like_match(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    like_match_at(&text, &pattern)
}

fn like_match_at(text: &[char], pattern: &[char]) -> bool {
    match pattern.first() {
        None => text.is_empty(),
        Some('*') => {
            (0..=text.len()).any(|skip| like_match_at(&text[skip..], &pattern[1..]))
        }
        Some('?') => !text.is_empty() && like_match_at(&text[1..], &pattern[1..]),
        Some(ch) => text.first() == Some(ch) && like_match_at(&text[1..], &pattern[1..]),
    }
}

const fn canonical_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int8(_) => 2,
        Value::Int16(_) => 3,
        Value::Int32(_) => 4,
        Value::Int64(_) => 5,
        Value::Uint8(_) => 6,
        Value::Uint16(_) => 7,
        Value::Uint32(_) => 8,
        Value::Uint64(_) => 9,
        Value::Float32(_) => 10,
        Value::Float64(_) => 11,
        Value::Text(_) => 12,
        Value::Date(_) => 13,
        Value::Url(_) => 14,
        Value::Uuid(_) => 15,
        Value::Blob(_) => 16,
        Value::List(_) => 17,
    }
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Int8(a), Value::Int8(b)) => a.cmp(b),
        (Value::Int16(a), Value::Int16(b)) => a.cmp(b),
        (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
        (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
        (Value::Uint8(a), Value::Uint8(b)) => a.cmp(b),
        (Value::Uint16(a), Value::Uint16(b)) => a.cmp(b),
        (Value::Uint32(a), Value::Uint32(b)) => a.cmp(b),
        (Value::Uint64(a), Value::Uint64(b)) => a.cmp(b),
        (Value::Float32(a), Value::Float32(b)) => a.total_cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.total_cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Url(a), Value::Url(b)) => a.cmp(b),
        (Value::Uuid(a), Value::Uuid(b)) => a.cmp(b),
        (Value::Blob(a), Value::Blob(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => canonical_cmp_list(a, b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => Ordering::Equal,
    }
}

fn canonical_cmp_list(left: &[Value], right: &[Value]) -> Ordering {
    for (left, right) in left.iter().zip(right.iter()) {
        let cmp = canonical_cmp(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    left.len().cmp(&right.len())
}
