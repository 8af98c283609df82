use super::types::{AutomationPlay, PlayStatus};

/// Ordered sequence of automation plays, most-recent-first. Plays are never
/// deleted; the run lifecycle mutates status and timestamps in place.
#[derive(Debug, Clone, Default)]
pub struct AutomationLedger {
    plays: Vec<AutomationPlay>,
}

impl AutomationLedger {
    pub fn new(plays: Vec<AutomationPlay>) -> Self {
        Self { plays }
    }

    pub fn insert_front(&mut self, play: AutomationPlay) {
        self.plays.insert(0, play);
    }

    pub fn get(&self, id: &str) -> Option<&AutomationPlay> {
        self.plays.iter().find(|play| play.id == id)
    }

    pub fn as_slice(&self) -> &[AutomationPlay] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Flip the play to `running` and stamp both timestamps. Returns false
    /// when no play carries the id. The prior status is not consulted;
    /// re-running an already-running play just re-stamps it.
    pub fn mark_running(&mut self, id: &str, last_run: String, next_run: String) -> bool {
        match self.plays.iter_mut().find(|play| play.id == id) {
            Some(play) => {
                play.status = PlayStatus::Running;
                play.last_run = Some(last_run);
                play.next_run = Some(next_run);
                true
            }
            None => false,
        }
    }

    /// Flip the play back to `scheduled`, leaving timestamps as stamped by
    /// the run. Returns false when no play carries the id.
    pub fn mark_scheduled(&mut self, id: &str) -> bool {
        match self.plays.iter_mut().find(|play| play.id == id) {
            Some(play) => {
                play.status = PlayStatus::Scheduled;
                true
            }
            None => false,
        }
    }
}
