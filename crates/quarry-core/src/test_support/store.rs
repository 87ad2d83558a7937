//! Test-only in-memory store: executes lowered native requests against
//! seeded attribute maps. Covers filtering, ordering with comparator
//! fallback, pagination, distinct, and projection — enough to exercise
//! the lowering end to end without a real backend.

use crate::{
    native::{NativeRequest, NativeSortDescriptor},
    session::{AttributeMap, Session},
    test_support::eval::eval_predicate,
    traits::EntityKind,
    value::{canonical_cmp, Value},
};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub(crate) enum StoreError {
    #[error("unknown entity: {entity}")]
    UnknownEntity { entity: String },
}

///
/// MemoryStore
///

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    tables: HashMap<String, Vec<AttributeMap>>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed one row for an entity.
    pub(crate) fn insert<E: EntityKind>(&mut self, row: AttributeMap) {
        self.tables
            .entry(E::ENTITY_NAME.to_string())
            .or_default()
            .push(row);
    }

    fn matching(&self, request: &NativeRequest) -> Result<Vec<AttributeMap>, StoreError> {
        let rows = self
            .tables
            .get(&request.entity_name)
            .ok_or_else(|| StoreError::UnknownEntity {
                entity: request.entity_name.clone(),
            })?;

        Ok(rows
            .iter()
            .filter(|row| {
                request
                    .predicate
                    .as_ref()
                    .is_none_or(|predicate| eval_predicate(predicate, row))
            })
            .cloned()
            .collect())
    }
}

impl Session for MemoryStore {
    type Error = StoreError;

    fn fetch(&self, request: &NativeRequest) -> Result<Vec<AttributeMap>, Self::Error> {
        let mut rows = self.matching(request)?;

        if !request.sort_descriptors.is_empty() {
            rows.sort_by(|a, b| compare_rows(&request.sort_descriptors, a, b));
        }

        let offset = request.fetch_offset.unwrap_or(0) as usize;
        let mut rows: Vec<AttributeMap> = rows.into_iter().skip(offset).collect();

        if let Some(limit) = request.fetch_limit {
            rows.truncate(limit as usize);
        }

        if let Some(properties) = &request.properties_to_fetch {
            rows = rows.into_iter().map(|row| project(&row, properties)).collect();
        }

        if request.returns_distinct_results == Some(true) {
            rows = distinct(rows);
        }

        Ok(rows)
    }

    fn count(&self, request: &NativeRequest) -> Result<u64, Self::Error> {
        Ok(self.matching(request)?.len() as u64)
    }
}

/// Compare two rows under an ordered descriptor list: first-applied
/// descriptor is the primary key.
fn compare_rows(
    descriptors: &[NativeSortDescriptor],
    left: &AttributeMap,
    right: &AttributeMap,
) -> Ordering {
    for descriptor in descriptors {
        let left_value = left.get(&descriptor.key).cloned().unwrap_or(Value::Null);
        let right_value = right.get(&descriptor.key).cloned().unwrap_or(Value::Null);

        // A custom comparator that declines the pair falls back to the
        // fixed canonical ordering instead of failing.
        let ordering = descriptor
            .comparator
            .as_ref()
            .and_then(|comparator| comparator(&left_value, &right_value))
            .unwrap_or_else(|| canonical_cmp(&left_value, &right_value));

        let ordering = if descriptor.ascending {
            ordering
        } else {
            ordering.reverse()
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn project(row: &AttributeMap, properties: &[String]) -> AttributeMap {
    properties
        .iter()
        .filter_map(|property| {
            row.get(property)
                .map(|value| (property.clone(), value.clone()))
        })
        .collect()
}

fn distinct(rows: Vec<AttributeMap>) -> Vec<AttributeMap> {
    let mut seen: Vec<AttributeMap> = Vec::new();
    for row in rows {
        if !seen.contains(&row) {
            seen.push(row);
        }
    }

    seen
}
