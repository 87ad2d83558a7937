use crate::{native::NativePredicate, value::Value};
use std::fmt;

///
/// IndexKey
///
/// Sentinel tokens of the backend's indexed-path syntax.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexKey {
    First,
    Last,
    Size,
    At(u32),
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "FIRST"),
            Self::Last => write!(f, "LAST"),
            Self::Size => write!(f, "SIZE"),
            Self::At(index) => write!(f, "{index}"),
        }
    }
}

///
/// NativeExpr
///
/// Backend expression node. Rendering follows the backend's
/// format-string syntax exactly; tests assert against `Display`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeExpr {
    /// Plain key-path expression.
    KeyPath(String),

    /// Literal/constant expression.
    Constant(Value),

    /// Function-call expression over one argument, e.g. `sum:`.
    Function {
        name: &'static str,
        arg: Box<NativeExpr>,
    },

    /// Indexed-path expression with a sentinel token, e.g. `tags[FIRST]`.
    Index {
        base: Box<NativeExpr>,
        key: IndexKey,
    },

    /// Key-path continuation over a non-key-path base, e.g.
    /// `profiles[FIRST].name`.
    KeyPathFrom {
        base: Box<NativeExpr>,
        key_path: String,
    },

    /// Sub-query over a collection with a bound iterator variable.
    Subquery {
        collection: String,
        variable: String,
        predicate: Box<NativePredicate>,
    },
}

impl fmt::Display for NativeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyPath(path) => write!(f, "{path}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Function { name, arg } => write!(f, "{name}({arg})"),
            Self::Index { base, key } => write!(f, "{base}[{key}]"),
            Self::KeyPathFrom { base, key_path } => write!(f, "{base}.{key_path}"),
            Self::Subquery {
                collection,
                variable,
                predicate,
            } => write!(f, "SUBQUERY({collection}, ${variable}, {predicate})"),
        }
    }
}
