//! Uppgiftslista med filtrering och visningsnivåer

use chrono::{DateTime, Utc};
use std::fmt;

use crate::models::{Priority, Task};
use crate::store::Store;

/// Filterval för uppgiftslistan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    /// Ej slutförd med deadline i framtiden
    Pending,
    Completed,
    /// Ej slutförd med passerad deadline
    Overdue,
}

impl TaskFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "Alla",
            Self::Pending => "Väntande",
            Self::Completed => "Slutförda",
            Self::Overdue => "Försenade",
        }
    }

    pub fn all() -> &'static [TaskFilter] {
        &[Self::All, Self::Pending, Self::Completed, Self::Overdue]
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// Visningsnivå för en uppgiftsrad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskTier {
    /// Försenad slår allt annat
    Overdue,
    HighPriority,
    Normal,
}

/// En uppgiftsrad redo att visas
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub task: Task,
    pub subject_name: String,
    pub is_overdue: bool,
    pub tier: TaskTier,
}

/// Tjänst för uppgiftsvyn
pub struct TaskListService<'a> {
    store: &'a Store,
}

impl<'a> TaskListService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Filtrera och sortera uppgifter, tidigast deadline först
    pub fn filtered(&self, filter: TaskFilter, now: DateTime<Utc>) -> Vec<TaskRow> {
        let mut tasks: Vec<_> = self
            .store
            .tasks()
            .iter()
            .filter(|t| match filter {
                TaskFilter::All => true,
                TaskFilter::Pending => !t.completed && t.deadline > now,
                TaskFilter::Completed => t.completed,
                TaskFilter::Overdue => !t.completed && t.deadline <= now,
            })
            .collect();
        tasks.sort_by_key(|t| t.deadline);

        tasks
            .into_iter()
            .map(|task| {
                let is_overdue = task.is_overdue(now);
                let tier = if is_overdue {
                    TaskTier::Overdue
                } else if task.priority == Priority::High {
                    TaskTier::HighPriority
                } else {
                    TaskTier::Normal
                };

                TaskRow {
                    subject_name: self.store.subject_name(task.subject_id),
                    is_overdue,
                    tier,
                    task: task.clone(),
                }
            })
            .collect()
    }
}
