//! Dashboard-tjänst - räknare, kommande deadlines och senaste aktivitet

use chrono::{DateTime, Utc};

use crate::store::Store;
use crate::utils::time;

/// Standardantal rader i dashboardens listor
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Räknare för dashboardens statistikkort
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCounts {
    pub subject_count: usize,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    /// Studietimmar från veckostart (söndag 00:00) och framåt
    pub week_hours: f64,
}

/// Hur brådskande en deadline är
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Danger,
    Warning,
    Normal,
}

impl Urgency {
    /// Högst en dag kvar är kritiskt, upp till tre dagar en varning
    pub fn from_days_left(days: i64) -> Self {
        if days <= 1 {
            Self::Danger
        } else if days <= 3 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// En kommande deadline, redo att visas
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingDeadline {
    pub task_id: i64,
    pub title: String,
    pub subject_name: String,
    pub deadline: DateTime<Utc>,
    pub days_left: i64,
    pub urgency: Urgency,
}

/// En aktivitetspost med relativ ålder
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityView {
    pub message: String,
    pub age: String,
}

/// Dashboard-tjänst
pub struct DashboardService<'a> {
    store: &'a Store,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Räknare för statistikkorten
    pub fn counts(&self, now: DateTime<Utc>) -> DashboardCounts {
        let week_start = time::week_start_date(now.date_naive());
        let week_minutes: i64 = self
            .store
            .schedule()
            .iter()
            .filter(|s| s.date >= week_start)
            .map(|s| s.duration_minutes())
            .sum();

        DashboardCounts {
            subject_count: self.store.subjects().len(),
            active_tasks: self.store.tasks().iter().filter(|t| !t.completed).count(),
            completed_tasks: self.store.tasks().iter().filter(|t| t.completed).count(),
            week_hours: week_minutes as f64 / 60.0,
        }
    }

    /// Ej slutförda uppgifter med deadline i framtiden, närmast först
    pub fn upcoming_deadlines(&self, now: DateTime<Utc>, limit: usize) -> Vec<UpcomingDeadline> {
        let mut upcoming: Vec<_> = self
            .store
            .tasks()
            .iter()
            .filter(|t| t.is_upcoming(now))
            .collect();
        upcoming.sort_by_key(|t| t.deadline);
        upcoming.truncate(limit);

        upcoming
            .into_iter()
            .map(|task| {
                let days_left = time::days_left(now, task.deadline);
                UpcomingDeadline {
                    task_id: task.id.unwrap_or(0),
                    title: task.title.clone(),
                    subject_name: self.store.subject_name(task.subject_id),
                    deadline: task.deadline,
                    days_left,
                    urgency: Urgency::from_days_left(days_left),
                }
            })
            .collect()
    }

    /// De senaste aktivitetsposterna med relativ ålder
    pub fn recent_activity(&self, now: DateTime<Utc>, limit: usize) -> Vec<ActivityView> {
        self.store
            .activity()
            .recent(limit)
            .iter()
            .map(|entry| ActivityView {
                message: entry.message.clone(),
                age: time::format_age(now, entry.timestamp),
            })
            .collect()
    }
}
