use serde::{Deserialize, Serialize};
use std::fmt;

/// Prioritetsnivå för ämnen och uppgifter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Hög",
            Self::Medium => "Medel",
            Self::Low => "Låg",
        }
    }

    /// Alla nivåer i fast gruppordning (högst först)
    pub fn all() -> &'static [Priority] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Ett ämne/kurs som användaren studerar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub priority: Priority,
    /// Visningsfärg, följer bara med till UI:t och påverkar inga beräkningar
    pub color: String,
    pub teacher: String,
    pub description: String,
}

impl Default for Subject {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: String::new(),
            priority: Priority::default(),
            color: String::new(),
            teacher: String::new(),
            description: String::new(),
        }
    }
}

impl Subject {
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Priority::all(),
            &[Priority::High, Priority::Medium, Priority::Low]
        );
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(Priority::Medium.label(), "Medel");
    }

    #[test]
    fn test_new_subject_has_no_id() {
        let subject = Subject::new("Matematik", Priority::High);
        assert_eq!(subject.id, None);
        assert_eq!(subject.name, "Matematik");
        assert_eq!(subject.priority, Priority::High);
    }
}
