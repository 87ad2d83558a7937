use crate::{expr::Property, value::Value};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

///
/// SortDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

///
/// SortComparator
///
/// Custom element comparator for a sort criterion.
///
/// Returns `None` when it cannot order the given pair (the analogue of a
/// failed operand downcast); callers then fall back to the fixed
/// canonical value ordering instead of failing.
///

pub type SortComparator = Arc<dyn Fn(&Value, &Value) -> Option<Ordering> + Send + Sync>;

///
/// SortCriterion
///
/// One sort key: property path, direction, and an optional custom
/// comparator. Criteria are applied in the order they are appended to a
/// request spec; the first-applied criterion is the primary key.
///

#[derive(Clone)]
pub struct SortCriterion {
    pub path: String,
    pub direction: SortDirection,
    pub comparator: Option<SortComparator>,
}

impl SortCriterion {
    /// Ascending sort on a property.
    #[must_use]
    pub fn asc<R, V>(property: Property<R, V>) -> Self {
        Self {
            path: property.key_path().to_string(),
            direction: SortDirection::Ascending,
            comparator: None,
        }
    }

    /// Descending sort on a property.
    #[must_use]
    pub fn desc<R, V>(property: Property<R, V>) -> Self {
        Self {
            path: property.key_path().to_string(),
            direction: SortDirection::Descending,
            comparator: None,
        }
    }

    /// Attach a custom comparator.
    #[must_use]
    pub fn with_comparator(mut self, comparator: SortComparator) -> Self {
        self.comparator = Some(comparator);
        self
    }
}

impl fmt::Debug for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortCriterion")
            .field("path", &self.path)
            .field("direction", &self.direction)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

impl PartialEq for SortCriterion {
    fn eq(&self, other: &Self) -> bool {
        let comparator_eq = match (&self.comparator, &other.comparator) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };

        self.path == other.path && self.direction == other.direction && comparator_eq
    }
}
