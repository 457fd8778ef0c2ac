use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Max antal poster i aktivitetsloggen
pub const MAX_ACTIVITY_ENTRIES: usize = 50;

/// En loggad händelse för "senaste aktivitet"-visning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Begränsad, nyast-först-logg över händelser
///
/// Vid överflöd kastas den äldsta posten, loggen är aldrig längre än
/// [`MAX_ACTIVITY_ENTRIES`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lägg till en post först i loggen
    pub fn record(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.entries.insert(
            0,
            ActivityEntry {
                message: message.into(),
                timestamp: now,
            },
        );
        self.entries.truncate(MAX_ACTIVITY_ENTRIES);
    }

    /// Alla poster, nyast först
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    /// De `limit` senaste posterna, nyast först
    pub fn recent(&self, limit: usize) -> &[ActivityEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
