//! Session-scoped state core for the creator ops console: workflow stage and
//! automation-play ledgers, a simulated run lifecycle, derived sprint metrics,
//! and an activity feed, all mirrored to a key-value store on every mutation.

pub mod core;
pub mod ids;
pub mod logging;
pub mod storage;

pub use crate::core::console::{
    AUTOMATIONS_SLOT, ConsoleError, OpsConsole, STAGES_SLOT, SprintSummary,
};
pub use crate::core::types::{
    ActivityItem, ActivityTone, AutomationDraft, AutomationPlay, PerformanceMetric, PlayStatus,
    StageDraft, WorkflowStage,
};
pub use crate::storage::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
