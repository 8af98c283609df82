use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::KeyValueStore;

/// Load a record sequence from a named slot.
///
/// An absent slot, a backend read failure, malformed JSON, and a payload whose
/// shape does not match `T` all fall back to `default` unchanged. A stored
/// payload is never trusted past typed deserialization.
pub fn load_slot<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    slot: &str,
    default: Vec<T>,
) -> Vec<T> {
    let raw = match store.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!("slot '{}' unreadable, falling back to defaults: {}", slot, err);
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            warn!("slot '{}' payload malformed, falling back to defaults: {}", slot, err);
            default
        }
    }
}

/// Serialize the full sequence and overwrite the slot. Best-effort: a failed
/// write is logged and swallowed, the in-memory ledger stays authoritative.
pub fn save_slot<T: Serialize>(store: &dyn KeyValueStore, slot: &str, records: &[T]) {
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("slot '{}' serialization failed: {}", slot, err);
            return;
        }
    };
    if let Err(err) = store.set(slot, &payload) {
        warn!("slot '{}' write failed: {}", slot, err);
    }
}
