use crate::{
    error::LowerError,
    expr::Property,
    lower::lower_predicate,
    native::{NativeRequest, NativeSortDescriptor, ResultShape},
    predicate::Predicate,
    session::{FetchError, Session},
    sort::{SortCriterion, SortDirection},
    traits::{EntityKind, EntityValue, Many},
};
use std::fmt;
use std::sync::Arc;

///
/// Inspector
///
/// Debug-only callback receiving the fully lowered native request
/// immediately before execution. Never invoked in release builds; never
/// affects the request actually executed.
///

pub type Inspector = Arc<dyn Fn(&NativeRequest) + Send + Sync>;

///
/// RequestSpec
///
/// Typed, declarative fetch-request builder for entity `R`.
///
/// This builder:
/// - Collects predicate, ordering, pagination, and fetch modifiers
/// - Is purely declarative (no backend access or execution)
/// - Returns a new value from every modifier; nothing is mutated in
///   place, so specs can be built and handed across threads freely
///
/// Unset fields stay unset through lowering and leave the backend's own
/// defaults untouched.
///

pub struct RequestSpec<R: EntityKind> {
    predicate: Option<Predicate<R>>,
    sort: Vec<SortCriterion>,
    limit: Option<u32>,
    offset: Option<u32>,
    batch_size: Option<u32>,
    prefetch: Option<Vec<String>>,
    include_pending_changes: Option<bool>,
    properties_to_fetch: Option<Vec<String>>,
    distinct: Option<bool>,
    group_by: Option<Vec<String>>,
    having: Option<Predicate<R>>,
    include_subentities: Option<bool>,
    return_as_faults: Option<bool>,
    inspector: Option<Inspector>,
}

impl<R: EntityKind> RequestSpec<R> {
    /// Create an empty request spec.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            predicate: None,
            sort: Vec::new(),
            limit: None,
            offset: None,
            batch_size: None,
            prefetch: None,
            include_pending_changes: None,
            properties_to_fetch: None,
            distinct: None,
            group_by: None,
            having: None,
            include_subentities: None,
            return_as_faults: None,
            inspector: None,
        }
    }

    // ------------------------------------------------------------------
    // Predicate refinement
    // ------------------------------------------------------------------

    /// Add a filter predicate, implicitly AND-ing with any existing one.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate<R>) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => existing & predicate,
            None => predicate,
        });
        self
    }

    /// Add a having predicate, implicitly AND-ing with any existing one.
    /// Lowered separately from the filter predicate.
    #[must_use]
    pub fn having(mut self, predicate: Predicate<R>) -> Self {
        self.having = Some(match self.having.take() {
            Some(existing) => existing & predicate,
            None => predicate,
        });
        self
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Append a sort criterion. Application order is preserved; the
    /// first-applied criterion is the primary sort key.
    #[must_use]
    pub fn sorted_by(mut self, criterion: SortCriterion) -> Self {
        self.sort.push(criterion);
        self
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn order_by<V>(self, property: Property<R, V>) -> Self {
        self.sorted_by(SortCriterion::asc(property))
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn order_by_desc<V>(self, property: Property<R, V>) -> Self {
        self.sorted_by(SortCriterion::desc(property))
    }

    // ------------------------------------------------------------------
    // Pagination and fetch shaping
    // ------------------------------------------------------------------

    /// Set or replace the result limit.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set or replace the result offset.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set or replace the fetch batch size.
    #[must_use]
    pub const fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Append a relationship key path to prefetch.
    #[must_use]
    pub fn prefetch<E: EntityKind>(mut self, relationship: Property<R, Many<E>>) -> Self {
        self.prefetch
            .get_or_insert_with(Vec::new)
            .push(relationship.key_path().to_string());
        self
    }

    /// Include or exclude pending (unsaved) changes.
    #[must_use]
    pub const fn include_pending_changes(mut self, include: bool) -> Self {
        self.include_pending_changes = Some(include);
        self
    }

    /// Append a property to the explicit projection list.
    #[must_use]
    pub fn fetching_property<V>(mut self, property: Property<R, V>) -> Self {
        self.properties_to_fetch
            .get_or_insert_with(Vec::new)
            .push(property.key_path().to_string());
        self
    }

    /// Request distinct results.
    #[must_use]
    pub const fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = Some(distinct);
        self
    }

    /// Append a group-by key path.
    #[must_use]
    pub fn group_by<V>(mut self, property: Property<R, V>) -> Self {
        self.group_by
            .get_or_insert_with(Vec::new)
            .push(property.key_path().to_string());
        self
    }

    /// Include or exclude subentities.
    #[must_use]
    pub const fn include_subentities(mut self, include: bool) -> Self {
        self.include_subentities = Some(include);
        self
    }

    /// Return rows as faults or fully materialized.
    #[must_use]
    pub const fn return_as_faults(mut self, faults: bool) -> Self {
        self.return_as_faults = Some(faults);
        self
    }

    /// Attach a debug inspector. Invoked with the lowered request
    /// immediately before execution, in debug builds only.
    #[must_use]
    pub fn inspect(mut self, inspector: impl Fn(&NativeRequest) + Send + Sync + 'static) -> Self {
        self.inspector = Some(Arc::new(inspector));
        self
    }

    // ------------------------------------------------------------------
    // Lowering
    // ------------------------------------------------------------------

    /// Lower this spec into a native request returning typed entities.
    pub fn lower(&self) -> Result<NativeRequest, LowerError> {
        self.lower_with_shape(ResultShape::Entities)
    }

    fn lower_with_shape(&self, result_shape: ResultShape) -> Result<NativeRequest, LowerError> {
        let mut request = NativeRequest::new(R::ENTITY_NAME);

        if let Some(predicate) = &self.predicate {
            request.predicate = Some(lower_predicate(predicate.node())?);
        }
        if let Some(having) = &self.having {
            request.having_predicate = Some(lower_predicate(having.node())?);
        }

        request.sort_descriptors = self
            .sort
            .iter()
            .map(|criterion| NativeSortDescriptor {
                key: criterion.path.clone(),
                ascending: criterion.direction == SortDirection::Ascending,
                comparator: criterion.comparator.clone(),
            })
            .collect();

        request.fetch_limit = self.limit;
        request.fetch_offset = self.offset;
        request.fetch_batch_size = self.batch_size;
        request.prefetch_key_paths = self.prefetch.clone();
        request.includes_pending_changes = self.include_pending_changes;
        request.properties_to_fetch = self.properties_to_fetch.clone();
        request.returns_distinct_results = self.distinct;
        request.group_by = self.group_by.clone();
        request.includes_subentities = self.include_subentities;
        request.returns_objects_as_faults = self.return_as_faults;
        request.result_shape = result_shape;

        Ok(request)
    }

    /// Render the lowered native request without executing it.
    pub fn explain(&self) -> Result<String, LowerError> {
        Ok(self.lower()?.to_string())
    }

    // ------------------------------------------------------------------
    // Execution routing (single semantic boundary)
    // ------------------------------------------------------------------

    /// Lower, inspect, and fetch typed entities through a session.
    pub fn fetch<S: Session>(&self, session: &S) -> Result<Vec<R>, FetchError<S::Error>>
    where
        R: EntityValue,
    {
        let request = self.lower()?;
        self.notify_inspector(&request);

        let rows = session.fetch(&request).map_err(FetchError::Execute)?;

        rows.iter()
            .map(R::from_attributes)
            .collect::<Result<Vec<_>, _>>()
            .map_err(FetchError::from)
    }

    /// Lower, inspect, and fetch raw attribute maps through a session.
    pub fn fetch_attributes<S: Session>(
        &self,
        session: &S,
    ) -> Result<Vec<crate::session::AttributeMap>, FetchError<S::Error>> {
        let request = self.lower_with_shape(ResultShape::AttributeMaps)?;
        self.notify_inspector(&request);

        session.fetch(&request).map_err(FetchError::Execute)
    }

    /// Lower, inspect, and count matching rows through a session.
    pub fn count<S: Session>(&self, session: &S) -> Result<u64, FetchError<S::Error>> {
        let request = self.lower()?;
        self.notify_inspector(&request);

        session.count(&request).map_err(FetchError::Execute)
    }

    #[cfg(debug_assertions)]
    fn notify_inspector(&self, request: &NativeRequest) {
        if let Some(inspector) = &self.inspector {
            inspector(request);
        }
    }

    #[cfg(not(debug_assertions))]
    #[expect(clippy::unused_self)]
    const fn notify_inspector(&self, _request: &NativeRequest) {}
}

impl<R: EntityKind> Default for RequestSpec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntityKind> Clone for RequestSpec<R> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            sort: self.sort.clone(),
            limit: self.limit,
            offset: self.offset,
            batch_size: self.batch_size,
            prefetch: self.prefetch.clone(),
            include_pending_changes: self.include_pending_changes,
            properties_to_fetch: self.properties_to_fetch.clone(),
            distinct: self.distinct,
            group_by: self.group_by.clone(),
            having: self.having.clone(),
            include_subentities: self.include_subentities,
            return_as_faults: self.return_as_faults,
            inspector: self.inspector.clone(),
        }
    }
}

impl<R: EntityKind> fmt::Debug for RequestSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("entity", &R::ENTITY_NAME)
            .field("predicate", &self.predicate)
            .field("sort", &self.sort)
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("batch_size", &self.batch_size)
            .field("prefetch", &self.prefetch)
            .field("include_pending_changes", &self.include_pending_changes)
            .field("properties_to_fetch", &self.properties_to_fetch)
            .field("distinct", &self.distinct)
            .field("group_by", &self.group_by)
            .field("having", &self.having)
            .field("include_subentities", &self.include_subentities)
            .field("return_as_faults", &self.return_as_faults)
            .field("inspector", &self.inspector.is_some())
            .finish()
    }
}
