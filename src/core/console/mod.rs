//! Session-scoped console context. Owns the ledgers, metric board, and
//! activity feed behind one lock, and mirrors every ledger change to the
//! key-value store. Callers construct isolated instances per session; there
//! is no ambient global state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::core::activity::{ActivityFeed, stamp};
use crate::core::automations::AutomationLedger;
use crate::core::metrics::MetricBoard;
use crate::core::seeds;
use crate::core::stages::StageLedger;
use crate::core::types::{
    ActivityItem, ActivityTone, AutomationDraft, AutomationPlay, PerformanceMetric, PlayStatus,
    StageDraft, WorkflowStage, split_list,
};
use crate::ids;
use crate::storage::{KeyValueStore, load_slot, save_slot};

/// Slot holding the JSON array of workflow stages.
pub const STAGES_SLOT: &str = "stages";
/// Slot holding the JSON array of automation plays.
pub const AUTOMATIONS_SLOT: &str = "automations";

/// How long a play stays `running` before reverting to `scheduled`.
const REVERT_DELAY: Duration = Duration::from_millis(1500);
/// Lead time stamped into `next_run` when a play executes.
const NEXT_RUN_LEAD_HOURS: i64 = 8;
/// Average confidence at or above this reads as launch-ready.
const LAUNCH_READY_CONFIDENCE: u8 = 85;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("stage title must not be empty")]
    EmptyTitle,
    #[error("automation name must not be empty")]
    EmptyName,
    #[error("no automation play with id '{0}'")]
    AutomationNotFound(String),
}

/// Header roll-up over the stage ledger.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintSummary {
    pub stage_count: usize,
    pub total_minutes: u32,
    pub sprint_hours: u32,
    pub confidence_index: u8,
    pub launch_ready: bool,
}

struct ConsoleState {
    stages: StageLedger,
    automations: AutomationLedger,
    metrics: MetricBoard,
    activity: ActivityFeed,
    reverts: HashMap<String, JoinHandle<()>>,
}

pub struct OpsConsole {
    state: Arc<Mutex<ConsoleState>>,
    store: Arc<dyn KeyValueStore>,
    revert_delay: Duration,
}

impl OpsConsole {
    /// Load both slots (falling back to the built-in defaults) and seed the
    /// metric board and activity feed.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let stages = StageLedger::new(load_slot(
            store.as_ref(),
            STAGES_SLOT,
            seeds::default_stages(),
        ));
        let automations = AutomationLedger::new(load_slot(
            store.as_ref(),
            AUTOMATIONS_SLOT,
            seeds::default_automations(),
        ));
        info!(
            "console opened with {} stages and {} automation plays",
            stages.len(),
            automations.len()
        );

        Self {
            state: Arc::new(Mutex::new(ConsoleState {
                stages,
                automations,
                metrics: MetricBoard::new(seeds::default_metrics()),
                activity: ActivityFeed::new(seeds::seed_activity()),
                reverts: HashMap::new(),
            })),
            store,
            revert_delay: REVERT_DELAY,
        }
    }

    /// Override the running-to-scheduled revert delay. Tests use this to
    /// avoid sleeping the full production delay.
    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay = delay;
        self
    }

    /// Append a new stage to the pipeline and mirror the ledger.
    pub async fn add_stage(&self, draft: StageDraft) -> Result<WorkflowStage, ConsoleError> {
        let stage = stage_from_draft(draft)?;

        let mut state = self.state.lock().await;
        state.stages.push(stage.clone());
        state.activity.record(
            format!("{} deployed", stage.title),
            "Stage locked into pipeline. Confidence monitors activated.".to_string(),
            ActivityTone::Positive,
        );
        save_slot(self.store.as_ref(), STAGES_SLOT, state.stages.as_slice());
        info!("stage '{}' appended to pipeline", stage.title);
        Ok(stage)
    }

    /// Insert a new play at the head of the ledger and mirror it.
    pub async fn add_automation(
        &self,
        draft: AutomationDraft,
    ) -> Result<AutomationPlay, ConsoleError> {
        let play = play_from_draft(draft)?;

        let mut state = self.state.lock().await;
        state.automations.insert_front(play.clone());
        state.activity.record(
            format!("{} is live", play.name),
            format!("Trigger: {}. Channel: {}.", play.trigger, play.channel),
            ActivityTone::Positive,
        );
        save_slot(
            self.store.as_ref(),
            AUTOMATIONS_SLOT,
            state.automations.as_slice(),
        );
        info!("automation play '{}' is live", play.name);
        Ok(play)
    }

    /// Execute a play: flip it to `running`, stamp its timestamps, note the
    /// velocity uplift, and schedule the revert to `scheduled`.
    ///
    /// The prior status is not consulted; re-running a play that is already
    /// `running` re-stamps it and supersedes its pending revert, so a stale
    /// timer can never flip a newer run back early.
    pub async fn run_automation(&self, id: &str) -> Result<(), ConsoleError> {
        let now = Local::now();
        let last_run = stamp(now);
        let next_run = stamp(now + chrono::Duration::hours(NEXT_RUN_LEAD_HOURS));

        let mut state = self.state.lock().await;
        if !state.automations.mark_running(id, last_run, next_run) {
            return Err(ConsoleError::AutomationNotFound(id.to_string()));
        }
        state.activity.record(
            "Automation executed".to_string(),
            format!("Playbook {} dispatched. Queue monitoring now.", id),
            ActivityTone::Neutral,
        );
        state.metrics.record_run_uplift();
        save_slot(
            self.store.as_ref(),
            AUTOMATIONS_SLOT,
            state.automations.as_slice(),
        );

        if let Some(pending) = state.reverts.remove(id) {
            pending.abort();
            debug!("superseded pending revert for play '{}'", id);
        }
        let handle = tokio::spawn(revert_after(
            self.state.clone(),
            self.store.clone(),
            id.to_string(),
            self.revert_delay,
        ));
        state.reverts.insert(id.to_string(), handle);
        info!("automation play '{}' dispatched", id);
        Ok(())
    }

    pub async fn stages(&self) -> Vec<WorkflowStage> {
        self.state.lock().await.stages.as_slice().to_vec()
    }

    pub async fn automations(&self) -> Vec<AutomationPlay> {
        self.state.lock().await.automations.as_slice().to_vec()
    }

    pub async fn metrics(&self) -> Vec<PerformanceMetric> {
        self.state.lock().await.metrics.as_slice().to_vec()
    }

    pub async fn activity(&self) -> Vec<ActivityItem> {
        self.state.lock().await.activity.as_slice().to_vec()
    }

    pub async fn total_duration_minutes(&self) -> u32 {
        self.state.lock().await.stages.total_duration_minutes()
    }

    pub async fn average_confidence(&self) -> u8 {
        self.state.lock().await.stages.average_confidence()
    }

    pub async fn sprint_summary(&self) -> SprintSummary {
        let state = self.state.lock().await;
        let total_minutes = state.stages.total_duration_minutes();
        let confidence_index = state.stages.average_confidence();
        SprintSummary {
            stage_count: state.stages.len(),
            total_minutes,
            sprint_hours: total_minutes.div_ceil(60),
            confidence_index,
            launch_ready: confidence_index >= LAUNCH_READY_CONFIDENCE,
        }
    }
}

/// Deferred revert task, one per live run, keyed by play id in the console's
/// revert map. Holds no lock while sleeping and tolerates the play having
/// vanished by the time it fires.
async fn revert_after(
    state: Arc<Mutex<ConsoleState>>,
    store: Arc<dyn KeyValueStore>,
    id: String,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let mut state = state.lock().await;
    if state.automations.mark_scheduled(&id) {
        save_slot(store.as_ref(), AUTOMATIONS_SLOT, state.automations.as_slice());
        debug!("play '{}' reverted to scheduled", id);
    }
    state.reverts.remove(&id);
}

fn stage_from_draft(draft: StageDraft) -> Result<WorkflowStage, ConsoleError> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(ConsoleError::EmptyTitle);
    }
    Ok(WorkflowStage {
        id: ids::entity_id("stage"),
        title,
        persona: draft.persona.trim().to_string(),
        objective: draft.objective.trim().to_string(),
        content_focus: draft.content_focus.trim().to_string(),
        ai_prompt: draft.ai_prompt.trim().to_string(),
        deliverables: split_list(&draft.deliverables),
        duration_minutes: draft.duration_minutes.max(1),
        confidence: draft.confidence.min(100),
    })
}

fn play_from_draft(draft: AutomationDraft) -> Result<AutomationPlay, ConsoleError> {
    let name = draft.name.trim().to_string();
    if name.is_empty() {
        return Err(ConsoleError::EmptyName);
    }
    Ok(AutomationPlay {
        id: ids::entity_id("automation"),
        name,
        trigger: draft.trigger.trim().to_string(),
        action: draft.action.trim().to_string(),
        channel: draft.channel.trim().to_string(),
        cadence: draft.cadence.trim().to_string(),
        tools: split_list(&draft.tools),
        status: PlayStatus::Scheduled,
        last_run: None,
        next_run: draft.next_run,
    })
}

#[cfg(test)]
mod tests;
