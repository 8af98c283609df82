//! Record types for the console ledgers. Serialized field names stay
//! camelCase so slot payloads written by earlier builds keep round-tripping.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStage {
    pub id: String,
    pub title: String,
    pub persona: String,
    pub objective: String,
    pub content_focus: String,
    pub ai_prompt: String,
    pub deliverables: Vec<String>,
    pub duration_minutes: u32,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayStatus {
    Scheduled,
    Running,
    Idle,
}

impl PlayStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayStatus::Scheduled => "scheduled",
            PlayStatus::Running => "running",
            PlayStatus::Idle => "idle",
        }
    }

    pub fn from_status(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(PlayStatus::Scheduled),
            "running" => Some(PlayStatus::Running),
            "idle" => Some(PlayStatus::Idle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPlay {
    pub id: String,
    pub name: String,
    pub trigger: String,
    pub action: String,
    pub channel: String,
    pub cadence: String,
    pub tools: Vec<String>,
    pub status: PlayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    pub label: String,
    pub value: String,
    pub change: i32,
    pub helper_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTone {
    Positive,
    Neutral,
    Alert,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub timestamp: String,
    pub tone: ActivityTone,
}

/// Stage submission before an id is assigned. Deliverables arrive as a single
/// comma-separated field, matching the submission surface.
#[derive(Debug, Clone, Default)]
pub struct StageDraft {
    pub title: String,
    pub persona: String,
    pub objective: String,
    pub content_focus: String,
    pub ai_prompt: String,
    pub deliverables: String,
    pub duration_minutes: u32,
    pub confidence: u8,
}

/// Automation-play submission before an id is assigned. New plays always
/// start out `scheduled`; `next_run` may be pre-seeded by the caller.
#[derive(Debug, Clone, Default)]
pub struct AutomationDraft {
    pub name: String,
    pub trigger: String,
    pub action: String,
    pub channel: String,
    pub cadence: String,
    pub tools: String,
    pub next_run: Option<String>,
}

/// Split a comma-separated field into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
