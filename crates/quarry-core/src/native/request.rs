use crate::{native::NativePredicate, sort::SortComparator};
use std::fmt;
use std::sync::Arc;

///
/// ResultShape
///
/// Shape of the rows the backend returns for a request.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResultShape {
    Entities,
    AttributeMaps,
}

///
/// NativeSortDescriptor
///
/// Backend sort descriptor. Carries either the default ordering or a
/// custom comparator; a comparator that declines a value pair falls back
/// to the canonical value ordering.
///

#[derive(Clone)]
pub struct NativeSortDescriptor {
    pub key: String,
    pub ascending: bool,
    pub comparator: Option<SortComparator>,
}

impl fmt::Debug for NativeSortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeSortDescriptor")
            .field("key", &self.key)
            .field("ascending", &self.ascending)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

impl PartialEq for NativeSortDescriptor {
    fn eq(&self, other: &Self) -> bool {
        let comparator_eq = match (&self.comparator, &other.comparator) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };

        self.key == other.key && self.ascending == other.ascending && comparator_eq
    }
}

///
/// NativeRequest
///
/// Fully lowered backend request.
///
/// Every field except the entity name is optional: `None` leaves the
/// backend's own default untouched. Consumed exactly once by the
/// executing store; never persisted.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NativeRequest {
    pub entity_name: String,
    pub predicate: Option<NativePredicate>,
    pub sort_descriptors: Vec<NativeSortDescriptor>,
    pub fetch_limit: Option<u32>,
    pub fetch_offset: Option<u32>,
    pub fetch_batch_size: Option<u32>,
    pub prefetch_key_paths: Option<Vec<String>>,
    pub includes_pending_changes: Option<bool>,
    pub properties_to_fetch: Option<Vec<String>>,
    pub returns_distinct_results: Option<bool>,
    pub group_by: Option<Vec<String>>,
    pub having_predicate: Option<NativePredicate>,
    pub includes_subentities: Option<bool>,
    pub returns_objects_as_faults: Option<bool>,
    pub result_shape: ResultShape,
}

impl NativeRequest {
    /// Empty request for an entity; all backend defaults in place.
    #[must_use]
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            predicate: None,
            sort_descriptors: Vec::new(),
            fetch_limit: None,
            fetch_offset: None,
            fetch_batch_size: None,
            prefetch_key_paths: None,
            includes_pending_changes: None,
            properties_to_fetch: None,
            returns_distinct_results: None,
            group_by: None,
            having_predicate: None,
            includes_subentities: None,
            returns_objects_as_faults: None,
            result_shape: ResultShape::Entities,
        }
    }
}

impl fmt::Display for NativeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FETCH {}", self.entity_name)?;

        if let Some(predicate) = &self.predicate {
            writeln!(f, "  WHERE {predicate}")?;
        }
        for descriptor in &self.sort_descriptors {
            let direction = if descriptor.ascending { "ASC" } else { "DESC" };
            writeln!(f, "  SORT {} {direction}", descriptor.key)?;
        }
        if let Some(limit) = self.fetch_limit {
            writeln!(f, "  LIMIT {limit}")?;
        }
        if let Some(offset) = self.fetch_offset {
            writeln!(f, "  OFFSET {offset}")?;
        }
        if let Some(batch_size) = self.fetch_batch_size {
            writeln!(f, "  BATCH {batch_size}")?;
        }
        if let Some(paths) = &self.prefetch_key_paths {
            writeln!(f, "  PREFETCH {}", paths.join(", "))?;
        }
        if let Some(properties) = &self.properties_to_fetch {
            writeln!(f, "  PROPERTIES {}", properties.join(", "))?;
        }
        if self.returns_distinct_results == Some(true) {
            writeln!(f, "  DISTINCT")?;
        }
        if let Some(group_by) = &self.group_by {
            writeln!(f, "  GROUP BY {}", group_by.join(", "))?;
        }
        if let Some(having) = &self.having_predicate {
            writeln!(f, "  HAVING {having}")?;
        }

        Ok(())
    }
}
