use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::time;

/// Ett planerat studiepass på ett visst datum
///
/// `start_time`/`end_time` är väggklockeslag "HH:MM" inom samma dag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: Option<i64>,
    pub subject_id: Option<i64>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub notes: String,
}

impl StudySession {
    pub fn new(date: NaiveDate, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id: None,
            subject_id: None,
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            session_type: String::new(),
            notes: String::new(),
        }
    }

    /// Passets längd i minuter, 0 om slutet ligger före starten
    pub fn duration_minutes(&self) -> i64 {
        time::duration_minutes(&self.start_time, &self.end_time)
    }

    /// Passets längd i timmar
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes() as f64 / 60.0
    }
}
