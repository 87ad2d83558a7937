use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

///
/// CompareOptions
///
/// Bit set of comparison options attached to a comparison predicate.
///
/// Defaults are derived from the compared value's scalar tag (see the
/// scalar registry): Uuid comparisons default to `NONE`, everything else
/// to `CASE_INSENSITIVE`.
///

#[derive(Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CompareOptions(u8);

impl CompareOptions {
    pub const NONE: Self = Self(0);
    pub const CASE_INSENSITIVE: Self = Self(0b0001);
    pub const DIACRITIC_INSENSITIVE: Self = Self(0b0010);
    pub const NORMALIZED: Self = Self(0b0100);

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
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
}

impl BitOr for CompareOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompareOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for CompareOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "CompareOptions(NONE)");
        }

        let mut labels = Vec::new();
        if self.contains(Self::CASE_INSENSITIVE) {
            labels.push("CASE_INSENSITIVE");
        }
        if self.contains(Self::DIACRITIC_INSENSITIVE) {
            labels.push("DIACRITIC_INSENSITIVE");
        }
        if self.contains(Self::NORMALIZED) {
            labels.push("NORMALIZED");
        }

        write!(f, "CompareOptions({})", labels.join(" | "))
    }
}
