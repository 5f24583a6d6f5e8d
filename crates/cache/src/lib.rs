//! linkfeed_cache - pinned-query cache overlay for the linkfeed client.
//!
//! Wraps any [`linkfeed_core::cache::GraphCache`] implementation and
//! serves a configured set of named queries from verbatim snapshots
//! instead of the normalized graph.

mod pinned;

pub use pinned::PinnedQueryCache;
