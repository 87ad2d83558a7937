use std::fmt;

///
/// NativeOperator
///
/// Operator codes of the backend's comparison node. The raw values are
/// part of the backend contract and must remain fixed.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum NativeOperator {
    LessThan = 0,
    LessThanOrEqual = 1,
    GreaterThan = 2,
    GreaterThanOrEqual = 3,
    Equal = 4,
    NotEqual = 5,
    Matches = 6,
    Like = 7,
    BeginsWith = 8,
    EndsWith = 9,
    In = 10,
    Contains = 99,
    Between = 100,
}

impl NativeOperator {
    /// Stable backend operator code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Format-string symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Matches => "MATCHES",
            Self::Like => "LIKE",
            Self::BeginsWith => "BEGINSWITH",
            Self::EndsWith => "ENDSWITH",
            Self::In => "IN",
            Self::Contains => "CONTAINS",
            Self::Between => "BETWEEN",
        }
    }
}

///
/// NativeOptions
///
/// Backend comparison option bitmask.
///

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct NativeOptions(u32);

impl NativeOptions {
    pub const NONE: Self = Self(0);
    pub const CASE_INSENSITIVE: Self = Self(0x01);
    pub const DIACRITIC_INSENSITIVE: Self = Self(0x02);
    pub const NORMALIZED: Self = Self(0x04);

    /// Raw backend bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Format-string suffix, e.g. `[cd]`; empty when no options are set.
    #[must_use]
    pub fn suffix(self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut flags = String::new();
        if self.contains(Self::CASE_INSENSITIVE) {
            flags.push('c');
        }
        if self.contains(Self::DIACRITIC_INSENSITIVE) {
            flags.push('d');
        }
        if self.contains(Self::NORMALIZED) {
            flags.push('n');
        }

        format!("[{flags}]")
    }
}

impl fmt::Debug for NativeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeOptions({:#04x})", self.0)
    }
}

///
/// NativeModifier
///
/// Backend comparison modifier. The backend has no "none" modifier;
/// none-of comparisons lower as `NOT(ANY …)`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum NativeModifier {
    Direct = 0,
    All = 1,
    Any = 2,
}

impl NativeModifier {
    /// Stable backend modifier code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Format-string prefix for this modifier.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Direct => "",
            Self::All => "ALL ",
            Self::Any => "ANY ",
        }
    }
}
