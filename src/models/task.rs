use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Priority;

/// En uppgift med deadline, valfritt kopplad till ett ämne
///
/// `subject_id` är en svag referens - ämnet kan vara borttaget och
/// uppslag måste då falla tillbaka på en platshållare, inte fela.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub subject_id: Option<i64>,
    #[serde(rename = "type")]
    pub task_type: String,
    pub deadline: DateTime<Utc>,
    pub priority: Priority,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            subject_id: None,
            task_type: String::new(),
            deadline,
            priority: Priority::default(),
            description: String::new(),
            completed: false,
        }
    }

    /// Ej slutförd och deadline har passerat
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.deadline < now
    }

    /// Ej slutförd och deadline ligger i framtiden
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.deadline > now
    }
}
