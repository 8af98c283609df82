use super::types::PerformanceMetric;

/// The one metric a run overwrites.
pub const CONTENT_VELOCITY: &str = "Content velocity";

const UPLIFT_VALUE: &str = "15 assets / wk";
const UPLIFT_HELPER: &str = "Runbook uplift detected";
const UPLIFT_CHANGE_STEP: i32 = 2;

/// Fixed label-keyed set of dashboard metrics. Seeded once per session;
/// entries are never added or removed at runtime.
#[derive(Debug, Clone, Default)]
pub struct MetricBoard {
    metrics: Vec<PerformanceMetric>,
}

impl MetricBoard {
    pub fn new(metrics: Vec<PerformanceMetric>) -> Self {
        Self { metrics }
    }

    pub fn get(&self, label: &str) -> Option<&PerformanceMetric> {
        self.metrics.iter().find(|metric| metric.label == label)
    }

    pub fn as_slice(&self) -> &[PerformanceMetric] {
        &self.metrics
    }

    /// Overwrite the content-velocity metric after a run. The change step
    /// accumulates across runs and is never reverted.
    pub fn record_run_uplift(&mut self) {
        if let Some(metric) = self
            .metrics
            .iter_mut()
            .find(|metric| metric.label == CONTENT_VELOCITY)
        {
            metric.value = UPLIFT_VALUE.to_string();
            metric.change += UPLIFT_CHANGE_STEP;
            metric.helper_text = UPLIFT_HELPER.to_string();
        }
    }
}
