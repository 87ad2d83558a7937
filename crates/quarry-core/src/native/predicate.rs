use crate::native::{NativeExpr, NativeModifier, NativeOperator, NativeOptions};
use std::fmt;

///
/// NativeComparison
///
/// Backend binary-comparison node: lowered expression on the left, a
/// constant on the right, tagged with mapped operator/option/modifier
/// codes.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NativeComparison {
    pub left: NativeExpr,
    pub operator: NativeOperator,
    pub options: NativeOptions,
    pub modifier: NativeModifier,
    pub right: NativeExpr,
}

impl fmt::Display for NativeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{} {}",
            self.modifier.prefix(),
            self.left,
            self.operator.symbol(),
            self.options.suffix(),
            self.right
        )
    }
}

///
/// CompoundKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompoundKind {
    And,
    Or,
    Not,
}

///
/// NativePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativePredicate {
    /// Constant-boolean predicate.
    Constant(bool),

    Comparison(NativeComparison),

    /// Compound predicate joining lowered operands. `Not` carries exactly
    /// one subpredicate.
    Compound {
        kind: CompoundKind,
        subpredicates: Vec<NativePredicate>,
    },
}

impl NativePredicate {
    #[must_use]
    pub fn and(subpredicates: Vec<Self>) -> Self {
        Self::Compound {
            kind: CompoundKind::And,
            subpredicates,
        }
    }

    #[must_use]
    pub fn or(subpredicates: Vec<Self>) -> Self {
        Self::Compound {
            kind: CompoundKind::Or,
            subpredicates,
        }
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(inner: Self) -> Self {
        Self::Compound {
            kind: CompoundKind::Not,
            subpredicates: vec![inner],
        }
    }
}

impl fmt::Display for NativePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(true) => write!(f, "TRUEPREDICATE"),
            Self::Constant(false) => write!(f, "FALSEPREDICATE"),
            Self::Comparison(comparison) => write!(f, "{comparison}"),
            Self::Compound {
                kind,
                subpredicates,
            } => match kind {
                CompoundKind::Not => {
                    // Invariant: Not carries exactly one subpredicate.
                    match subpredicates.as_slice() {
                        [inner] => write!(f, "NOT ({inner})"),
                        _ => write!(f, "NOT (?)"),
                    }
                }
                CompoundKind::And | CompoundKind::Or => {
                    let joiner = if *kind == CompoundKind::And {
                        " AND "
                    } else {
                        " OR "
                    };

                    write!(f, "(")?;
                    for (index, sub) in subpredicates.iter().enumerate() {
                        if index > 0 {
                            write!(f, "{joiner}")?;
                        }
                        write!(f, "{sub}")?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}
