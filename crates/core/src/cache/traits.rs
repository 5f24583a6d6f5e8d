use serde_json::Value;

use super::{CacheDiff, CacheObject, ReadRequest, Result, WriteRequest};

/// Contract shared by the normalized graph cache and any cache that
/// wraps it.
///
/// All operations are synchronous and run on the client's single
/// logical thread: each call executes to completion before control
/// returns, so implementations need no locking.
pub trait GraphCache {
    /// Stores a query result.
    fn write(&mut self, request: WriteRequest) -> Result<()>;

    /// Returns the cached data for a query, or `None` when not cached.
    fn read(&self, request: &ReadRequest) -> Result<Option<Value>>;

    /// Reports what the cache holds for a query and whether it is
    /// complete enough to skip a network fetch.
    fn diff(&self, request: &ReadRequest) -> Result<CacheDiff>;

    /// Serializes the cache contents; `optimistic` includes
    /// optimistic-layer data when the implementation has any.
    fn extract(&self, optimistic: bool) -> Result<CacheObject>;

    /// Replaces the cache contents from previously extracted state.
    fn restore(&mut self, state: CacheObject) -> Result<()>;

    /// Clears the cache entirely.
    fn reset(&mut self) -> Result<()>;

    /// Notifies active watchers that cached data changed.
    fn broadcast_watches(&mut self);
}
