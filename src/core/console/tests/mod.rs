
use std::sync::Arc;
use std::time::Duration;

use crate::core::console::OpsConsole;
use crate::storage::MemoryStore;

/// Console over a fresh in-memory store with a short revert delay.
fn test_console() -> (OpsConsole, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let console = OpsConsole::open(store.clone()).with_revert_delay(Duration::from_millis(50));
    (console, store)
}
