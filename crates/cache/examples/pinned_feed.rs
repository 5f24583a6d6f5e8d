//! Pinned-query cache demo.
//!
//! This example demonstrates:
//! - Wrapping a cache in `PinnedQueryCache` with a pinned feed query
//! - Pinned writes served back verbatim, bypassing the wrapped cache
//! - Delegation for every other query
//! - Carrying pinned snapshots through `extract`/`restore`
//!
//! # Running
//! ```bash
//! cargo run --example pinned_feed -p linkfeed_cache
//! ```

use std::collections::HashMap;

use anyhow::Result;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linkfeed_cache::PinnedQueryCache;
use linkfeed_core::cache::{
    CacheDiff, CacheObject, GraphCache, ReadRequest, Result as CacheResult, Variables,
    WriteRequest,
};
use linkfeed_core::query::{operation_name, parse_executable_document, ExecutableDocument};

const FEED_QUERY: &str = "query FeedQuery($first: Int) { feed { id url description } }";
const USER_QUERY: &str = "query CurrentUser { me { id name } }";

/// Flat stand-in for the normalized cache, keyed by operation name.
struct DemoCache {
    store: HashMap<String, Value>,
    watchers_notified: usize,
}

impl DemoCache {
    fn new() -> Self {
        Self {
            store: HashMap::new(),
            watchers_notified: 0,
        }
    }

    fn key(query: &ExecutableDocument) -> String {
        operation_name(query).unwrap_or("(anonymous)").to_string()
    }
}

impl GraphCache for DemoCache {
    fn write(&mut self, request: WriteRequest) -> CacheResult<()> {
        let key = Self::key(&request.query);
        tracing::info!(operation = %key, "Demo cache write");
        self.store.insert(key, request.result);
        Ok(())
    }

    fn read(&self, request: &ReadRequest) -> CacheResult<Option<Value>> {
        Ok(self.store.get(&Self::key(&request.query)).cloned())
    }

    fn diff(&self, request: &ReadRequest) -> CacheResult<CacheDiff> {
        let result = self.store.get(&Self::key(&request.query)).cloned();
        let complete = result.is_some();
        Ok(CacheDiff { result, complete })
    }

    fn extract(&self, _optimistic: bool) -> CacheResult<CacheObject> {
        Ok(self
            .store
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn restore(&mut self, state: CacheObject) -> CacheResult<()> {
        self.store = state.into_iter().collect();
        Ok(())
    }

    fn reset(&mut self) -> CacheResult<()> {
        self.store.clear();
        Ok(())
    }

    fn broadcast_watches(&mut self) {
        self.watchers_notified += 1;
        tracing::info!(total = self.watchers_notified, "Demo cache watchers notified");
    }
}

fn parse(source: &str) -> Result<ExecutableDocument> {
    parse_executable_document(source).map_err(|e| anyhow::anyhow!("{e}"))
}

fn variables(value: Value) -> Variables {
    value.as_object().cloned().unwrap_or_default()
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinned_feed=info,linkfeed_cache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut cache = PinnedQueryCache::new(DemoCache::new(), ["FeedQuery"]);

    // The expensive initial feed payload; stored verbatim, never
    // normalized.
    let feed = json!({
        "feed": {
            "links": [
                {"id": "1", "url": "https://howtographql.com", "description": "GraphQL tutorial"},
                {"id": "2", "url": "https://graphql.org", "description": "Official docs"},
            ],
            "count": 2,
        }
    });
    cache.write(
        WriteRequest::new(parse(FEED_QUERY)?, feed).with_variables(variables(json!({"first": 10}))),
    )?;

    let read = cache.read(
        &ReadRequest::new(parse(FEED_QUERY)?).with_variables(variables(json!({"first": 10}))),
    )?;
    tracing::info!(hit = read.is_some(), "Read pinned feed");

    let diff = cache.diff(
        &ReadRequest::new(parse(FEED_QUERY)?).with_variables(variables(json!({"first": 10}))),
    )?;
    tracing::info!(complete = diff.complete, "Diffed pinned feed");

    // Any other query delegates to the demo cache.
    cache.write(WriteRequest::new(
        parse(USER_QUERY)?,
        json!({"me": {"id": "u1", "name": "alice"}}),
    ))?;
    let user = cache.read(&ReadRequest::new(parse(USER_QUERY)?))?;
    tracing::info!(hit = user.is_some(), "Read delegated user query");

    // Snapshots travel with the serialized cache state.
    let state = cache.extract(false)?;
    tracing::info!("Extracted state:\n{}", serde_json::to_string_pretty(&state)?);

    let mut restored = PinnedQueryCache::new(DemoCache::new(), ["FeedQuery"]);
    restored.restore(state)?;
    let read = restored.read(
        &ReadRequest::new(parse(FEED_QUERY)?).with_variables(variables(json!({"first": 10}))),
    )?;
    tracing::info!(hit = read.is_some(), "Read pinned feed after restore");

    Ok(())
}
