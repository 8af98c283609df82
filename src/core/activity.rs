use chrono::{DateTime, Local};

use super::types::{ActivityItem, ActivityTone};
use crate::ids;

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a wall-clock instant the way the feed and run timestamps display it.
pub(crate) fn stamp(at: DateTime<Local>) -> String {
    at.format(STAMP_FORMAT).to_string()
}

/// Session-only audit trail. Entries are prepended and never mutated,
/// removed, or persisted.
#[derive(Debug, Clone, Default)]
pub struct ActivityFeed {
    items: Vec<ActivityItem>,
}

impl ActivityFeed {
    pub fn new(seed: Vec<ActivityItem>) -> Self {
        Self { items: seed }
    }

    /// Prepend an entry stamped with the current wall-clock time.
    pub fn record(&mut self, title: String, detail: String, tone: ActivityTone) {
        self.items.insert(
            0,
            ActivityItem {
                id: ids::compact_id("activity"),
                title,
                detail,
                timestamp: stamp(Local::now()),
                tone,
            },
        );
    }

    pub fn as_slice(&self) -> &[ActivityItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_prepends_entries() {
        let mut feed = ActivityFeed::default();
        feed.record("first".to_string(), "detail".to_string(), ActivityTone::Positive);
        feed.record("second".to_string(), "detail".to_string(), ActivityTone::Neutral);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.as_slice()[0].title, "second");
        assert_eq!(feed.as_slice()[1].title, "first");
    }

    #[test]
    fn record_stamps_id_and_timestamp() {
        let mut feed = ActivityFeed::default();
        feed.record("entry".to_string(), "detail".to_string(), ActivityTone::Alert);

        let entry = &feed.as_slice()[0];
        assert!(entry.id.starts_with("activity-"));
        assert!(!entry.timestamp.is_empty());
        assert_eq!(entry.tone, ActivityTone::Alert);
    }

    #[test]
    fn seed_entries_stay_behind_new_ones() {
        let seed = vec![ActivityItem {
            id: "log-001".to_string(),
            title: "seeded".to_string(),
            detail: "detail".to_string(),
            timestamp: "Today · 11:40".to_string(),
            tone: ActivityTone::Positive,
        }];
        let mut feed = ActivityFeed::new(seed);
        feed.record("fresh".to_string(), "detail".to_string(), ActivityTone::Neutral);

        assert_eq!(feed.as_slice()[0].title, "fresh");
        assert_eq!(feed.as_slice()[1].id, "log-001");
    }
}
