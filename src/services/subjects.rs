//! Ämneslista grupperad per prioritet

use crate::models::{Priority, Subject};
use crate::store::Store;

/// Ett ämne med antal väntande uppgifter
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOverview {
    pub subject: Subject,
    pub pending_tasks: usize,
}

/// En prioritetsgrupp i fast ordning (hög, medel, låg)
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectGroup {
    pub priority: Priority,
    pub subjects: Vec<SubjectOverview>,
}

/// Tjänst för ämnesvyn
pub struct SubjectListService<'a> {
    store: &'a Store,
}

impl<'a> SubjectListService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Partitionera ämnena i prioritetsgrupper
    ///
    /// Alla grupper returneras alltid, även tomma - UI:t avgör vad som visas.
    pub fn grouped(&self) -> Vec<SubjectGroup> {
        Priority::all()
            .iter()
            .map(|&priority| SubjectGroup {
                priority,
                subjects: self
                    .store
                    .subjects()
                    .iter()
                    .filter(|s| s.priority == priority)
                    .map(|subject| SubjectOverview {
                        pending_tasks: self.pending_tasks_for(subject.id),
                        subject: subject.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn pending_tasks_for(&self, subject_id: Option<i64>) -> usize {
        self.store
            .tasks()
            .iter()
            .filter(|t| !t.completed && t.subject_id == subject_id)
            .count()
    }
}
