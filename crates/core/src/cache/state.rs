//! Pure functions for the extracted-state wire shape.
//!
//! `extract` produces a single JSON object holding both the underlying
//! cache's fields and the pinned snapshot store. These helpers define
//! that shape: one reserved key, present only while snapshots exist.

use serde_json::Value;

use super::{CacheError, CacheObject, PinnedSnapshots, Result};

/// Reserved extracted-state key carrying pinned snapshots.
///
/// The leading underscore keeps it outside the normalized cache's
/// entity key scheme, so it can never collide with a real entity key.
pub const PINNED_STATE_KEY: &str = "_PINNED_QUERIES";

/// Merges pinned snapshots into an extracted state object.
///
/// The reserved key is omitted when `snapshots` is empty; absence of
/// the key is the marker for "no pinned state".
pub fn merge_pinned_state(state: CacheObject, snapshots: &PinnedSnapshots) -> Result<CacheObject> {
    if snapshots.is_empty() {
        return Ok(state);
    }

    let encoded =
        serde_json::to_value(snapshots).map_err(|e| CacheError::Serialization(e.to_string()))?;
    let mut merged = state;
    merged.insert(PINNED_STATE_KEY.to_string(), encoded);
    Ok(merged)
}

/// Removes and returns the reserved pinned-state value, if present.
///
/// The remaining fields are exactly what the underlying cache's
/// `restore` should receive.
pub fn take_pinned_state(state: &mut CacheObject) -> Option<Value> {
    state.remove(PINNED_STATE_KEY)
}

/// Decodes a pinned-state value into snapshots.
///
/// A JSON `null` decodes to an empty store (a serialized cache that
/// held no snapshots). Any other undecodable value is an error; the
/// caller decides whether to fail open.
pub fn decode_pinned_state(value: Value) -> Result<PinnedSnapshots> {
    if value.is_null() {
        return Ok(PinnedSnapshots::new());
    }

    serde_json::from_value(value).map_err(|e| CacheError::Serialization(e.to_string()))
}
