use super::types::WorkflowStage;

/// Append-only ordered sequence of pipeline stages. Stages are never deleted,
/// reordered, or mutated after creation.
#[derive(Debug, Clone, Default)]
pub struct StageLedger {
    stages: Vec<WorkflowStage>,
}

impl StageLedger {
    pub fn new(stages: Vec<WorkflowStage>) -> Self {
        Self { stages }
    }

    pub fn push(&mut self, stage: WorkflowStage) {
        self.stages.push(stage);
    }

    pub fn as_slice(&self) -> &[WorkflowStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Sum of stage durations. 0 for an empty ledger.
    pub fn total_duration_minutes(&self) -> u32 {
        self.stages.iter().map(|stage| stage.duration_minutes).sum()
    }

    /// Arithmetic mean of stage confidence, rounded to the nearest integer.
    /// 0 for an empty ledger.
    pub fn average_confidence(&self) -> u8 {
        if self.stages.is_empty() {
            return 0;
        }
        let sum: u32 = self.stages.iter().map(|stage| u32::from(stage.confidence)).sum();
        (f64::from(sum) / self.stages.len() as f64).round() as u8
    }
}
