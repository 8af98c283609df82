use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

/// Build a category-prefixed unique id, e.g. `stage-550e8400-e29b-...`.
/// Never blocks and never fails.
pub fn entity_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Category-prefixed id with a compact 8-char alphanumeric token. Used for
/// entries that never leave the session, where a full UUID is overkill.
pub fn compact_id(prefix: &str) -> String {
    format!("{}-{}", prefix, short_token())
}

/// Pseudo-random 8-char alphanumeric token.
pub fn short_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect()
}
