//! Shared value types for the client cache.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variables attached to a query, keyed by variable name.
///
/// A request without variables carries an empty map. Matching compares
/// variables structurally (`serde_json::Value` equality recurses
/// through nested maps and sequences), never by identity.
pub type Variables = serde_json::Map<String, Value>;

/// The serializable state of a cache, as produced by `extract` and
/// consumed by `restore`. Keys are the cache's own (entity) keys plus
/// any reserved keys layered on top by a wrapping cache.
pub type CacheObject = serde_json::Map<String, Value>;

/// Pinned snapshots keyed by operation name.
pub type PinnedSnapshots = BTreeMap<String, QuerySnapshot>;

/// The verbatim result stored for a pinned query.
///
/// Holds the raw result payload exactly as written, together with the
/// variables it was written under. Reads and diffs only serve the
/// snapshot when their variables are deeply equal to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySnapshot {
    /// The result payload, unnormalized.
    pub result: Value,
    /// Variables the result was written with.
    pub variables: Variables,
}

impl QuerySnapshot {
    /// Creates a snapshot from a result payload and its variables.
    pub fn new(result: Value, variables: Variables) -> Self {
        Self { result, variables }
    }
}

/// Outcome of a `diff` call.
///
/// `complete` tells the query layer whether the cached data fully
/// answers the query (no network fetch needed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheDiff {
    /// The cached data, possibly partial, if any.
    pub result: Option<Value>,
    /// True when `result` fully satisfies the query.
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variables_compare_structurally() {
        let mut first = Variables::new();
        first.insert("filter".to_string(), json!({"tags": ["rust", "cache"]}));
        first.insert("skip".to_string(), json!(0));

        // Same content assembled in a different order and from
        // different allocations.
        let mut second = Variables::new();
        second.insert("skip".to_string(), json!(0));
        let tags = Value::Array(vec![json!("rust"), json!("cache")]);
        second.insert("filter".to_string(), json!({ "tags": tags }));

        assert_eq!(first, second);
    }

    #[test]
    fn test_variables_differ_on_nested_value() {
        let mut first = Variables::new();
        first.insert("filter".to_string(), json!({"tags": ["rust"]}));

        let mut second = Variables::new();
        second.insert("filter".to_string(), json!({"tags": ["go"]}));

        assert_ne!(first, second);
    }

    #[test]
    fn test_snapshot_serialized_shape() {
        let mut variables = Variables::new();
        variables.insert("first".to_string(), json!(10));
        let snapshot = QuerySnapshot::new(json!({"feed": {"links": []}}), variables);

        let value = serde_json::to_value(&snapshot).expect("serialize should succeed");
        assert_eq!(
            value,
            json!({
                "result": {"feed": {"links": []}},
                "variables": {"first": 10},
            })
        );
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut variables = Variables::new();
        variables.insert("orderBy".to_string(), json!({"createdAt": "desc"}));
        let snapshot = QuerySnapshot::new(json!([1, 2, 3]), variables);

        let value = serde_json::to_value(&snapshot).expect("serialize should succeed");
        let back: QuerySnapshot =
            serde_json::from_value(value).expect("deserialize should succeed");

        assert_eq!(snapshot, back);
    }
}
