//! Pinned-query cache overlay.
//!
//! Wraps a normalized cache behind the `GraphCache` trait and
//! special-cases a configured set of named queries: their results are
//! stored verbatim in a snapshot store keyed by operation name and
//! served back from there. Everything else delegates to the wrapped
//! cache unchanged.

use std::collections::BTreeSet;

use serde_json::Value;

use linkfeed_core::cache::{
    decode_pinned_state, merge_pinned_state, take_pinned_state, CacheDiff, CacheObject,
    GraphCache, PinnedSnapshots, QuerySnapshot, ReadRequest, Result, WriteRequest,
};
use linkfeed_core::query::operation_name;

/// Cache decorator that pins named queries.
///
/// A write whose operation name is in the pin set is stored as a
/// verbatim `{result, variables}` snapshot instead of being forwarded
/// for normalization; reads and diffs for the same name with deeply
/// equal variables are answered from that snapshot, complete, without
/// consulting the wrapped cache.
///
/// Pinned results never enter the normalized graph, so writes to other
/// queries touching the same entities do not update a snapshot. The
/// intended use is a large, rarely-changing initial payload whose
/// normalization cost outweighs its staleness risk.
///
/// # Type Parameters
///
/// * `C` - The wrapped normalized cache implementation
pub struct PinnedQueryCache<C>
where
    C: GraphCache,
{
    inner: C,
    pins: BTreeSet<String>,
    snapshots: PinnedSnapshots,
}

impl<C> PinnedQueryCache<C>
where
    C: GraphCache,
{
    /// Creates an overlay around `inner` pinning the given operation
    /// names.
    ///
    /// The pin set is fixed for the overlay's lifetime. Snapshots are
    /// populated lazily by the first write for each pinned name.
    pub fn new<I, S>(inner: C, pinned_queries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner,
            pins: pinned_queries.into_iter().map(Into::into).collect(),
            snapshots: PinnedSnapshots::new(),
        }
    }

    /// Returns the configured pinned operation names.
    pub fn pinned_queries(&self) -> impl Iterator<Item = &str> {
        self.pins.iter().map(String::as_str)
    }

    /// Returns the snapshot currently held for an operation name.
    pub fn snapshot(&self, name: &str) -> Option<&QuerySnapshot> {
        self.snapshots.get(name)
    }

    /// Returns a reference to the wrapped cache.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the overlay and returns the wrapped cache.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Returns the snapshot matching a read/diff request: same
    /// operation name, deeply equal variables.
    fn matching_snapshot(&self, request: &ReadRequest) -> Option<(&str, &QuerySnapshot)> {
        let name = operation_name(&request.query)?;
        let (key, snapshot) = self.snapshots.get_key_value(name)?;
        (snapshot.variables == request.variables).then_some((key.as_str(), snapshot))
    }
}

impl<C> GraphCache for PinnedQueryCache<C>
where
    C: GraphCache,
{
    fn write(&mut self, request: WriteRequest) -> Result<()> {
        let pinned = operation_name(&request.query)
            .filter(|name| self.pins.contains(*name))
            .map(str::to_owned);

        match pinned {
            Some(name) => {
                self.snapshots.insert(
                    name.clone(),
                    QuerySnapshot::new(request.result, request.variables),
                );
                // Pinned writes still notify watchers like any other
                // mutation.
                self.inner.broadcast_watches();
                tracing::debug!(operation = %name, "Pinned query result stored");
                Ok(())
            }
            None => self.inner.write(request),
        }
    }

    fn read(&self, request: &ReadRequest) -> Result<Option<Value>> {
        if let Some((name, snapshot)) = self.matching_snapshot(request) {
            tracing::trace!(operation = %name, "Pinned snapshot hit");
            return Ok(Some(snapshot.result.clone()));
        }

        self.inner.read(request)
    }

    fn diff(&self, request: &ReadRequest) -> Result<CacheDiff> {
        if let Some((name, snapshot)) = self.matching_snapshot(request) {
            tracing::trace!(operation = %name, "Pinned snapshot satisfies diff");
            return Ok(CacheDiff {
                result: Some(snapshot.result.clone()),
                complete: true,
            });
        }

        self.inner.diff(request)
    }

    fn extract(&self, optimistic: bool) -> Result<CacheObject> {
        let state = self.inner.extract(optimistic)?;
        merge_pinned_state(state, &self.snapshots)
    }

    fn restore(&mut self, state: CacheObject) -> Result<()> {
        let mut remainder = state;

        self.snapshots = match take_pinned_state(&mut remainder) {
            None => PinnedSnapshots::new(),
            Some(value) => match decode_pinned_state(value) {
                Ok(mut snapshots) => {
                    // Snapshots exist only for configured pins
                    snapshots.retain(|name, _| {
                        let pinned = self.pins.contains(name.as_str());
                        if !pinned {
                            tracing::warn!(
                                operation = %name,
                                "Discarding restored snapshot outside the pin set"
                            );
                        }
                        pinned
                    });
                    snapshots
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Malformed pinned state ignored during restore");
                    PinnedSnapshots::new()
                }
            },
        };

        if !self.snapshots.is_empty() {
            tracing::debug!(count = self.snapshots.len(), "Pinned snapshots restored");
        }

        self.inner.restore(remainder)
    }

    fn reset(&mut self) -> Result<()> {
        self.snapshots.clear();
        self.inner.reset()
    }

    fn broadcast_watches(&mut self) {
        self.inner.broadcast_watches();
    }
}
