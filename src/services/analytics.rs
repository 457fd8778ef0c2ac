//! Analys - ämnesframsteg, tidsfördelning och veckostatistik

use chrono::{DateTime, Duration, Utc};

use crate::store::Store;
use crate::utils::time;

/// Andel slutförda uppgifter per ämne
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectProgress {
    pub subject_id: i64,
    pub name: String,
    pub color: String,
    pub completed: usize,
    pub total: usize,
    /// Avrundad procent, 0 när ämnet saknar uppgifter
    pub percent: u32,
}

/// Studietimmar per ämne med andel av totalen
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectHours {
    pub subject_id: i64,
    pub name: String,
    pub color: String,
    pub hours: f64,
    /// Avrundad andel av alla timmar, 0 när totalen är 0
    pub percent: u32,
}

/// Sammanfattning av veckan som innehåller "nu"
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyStats {
    pub session_count: usize,
    pub total_hours: f64,
    /// Uppgifter med deadline inom veckofönstret
    pub tasks_due: usize,
    /// Ej slutförda uppgifter med passerad deadline, utan fönsterbegränsning
    pub overdue_tasks: usize,
    /// Slutförda av samtliga uppgifter, avrundad procent
    pub completion_rate: u32,
}

/// Analys-tjänst
pub struct AnalyticsService<'a> {
    store: &'a Store,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Framsteg per ämne i samlingsordning
    pub fn subject_progress(&self) -> Vec<SubjectProgress> {
        self.store
            .subjects()
            .iter()
            .map(|subject| {
                let tasks: Vec<_> = self
                    .store
                    .tasks()
                    .iter()
                    .filter(|t| t.subject_id == subject.id)
                    .collect();
                let completed = tasks.iter().filter(|t| t.completed).count();

                SubjectProgress {
                    subject_id: subject.id.unwrap_or(0),
                    name: subject.name.clone(),
                    color: subject.color.clone(),
                    completed,
                    total: tasks.len(),
                    percent: ratio_percent(completed as f64, tasks.len() as f64),
                }
            })
            .collect()
    }

    /// Timmar per ämne och andel av totalen över alla ämnen
    ///
    /// Pass vars ämnesreferens dinglar räknas inte in någonstans.
    pub fn time_distribution(&self) -> Vec<SubjectHours> {
        let per_subject: Vec<(i64, String, String, f64)> = self
            .store
            .subjects()
            .iter()
            .map(|subject| {
                let minutes: i64 = self
                    .store
                    .schedule()
                    .iter()
                    .filter(|s| s.subject_id == subject.id)
                    .map(|s| s.duration_minutes())
                    .sum();
                (
                    subject.id.unwrap_or(0),
                    subject.name.clone(),
                    subject.color.clone(),
                    minutes as f64 / 60.0,
                )
            })
            .collect();

        let total_hours: f64 = per_subject.iter().map(|(_, _, _, h)| h).sum();

        per_subject
            .into_iter()
            .map(|(subject_id, name, color, hours)| SubjectHours {
                subject_id,
                name,
                color,
                hours,
                percent: ratio_percent(hours, total_hours),
            })
            .collect()
    }

    /// Statistik för veckan söndag 00:00 till nästa söndag (exklusiv)
    pub fn weekly_stats(&self, now: DateTime<Utc>) -> WeeklyStats {
        let window_start = time::week_start(now);
        let window_end = window_start + Duration::days(7);
        let start_date = window_start.date_naive();
        let end_date = window_end.date_naive();

        let week_sessions: Vec<_> = self
            .store
            .schedule()
            .iter()
            .filter(|s| s.date >= start_date && s.date < end_date)
            .collect();
        let minutes: i64 = week_sessions.iter().map(|s| s.duration_minutes()).sum();

        let tasks = self.store.tasks();
        let completed = tasks.iter().filter(|t| t.completed).count();

        WeeklyStats {
            session_count: week_sessions.len(),
            total_hours: minutes as f64 / 60.0,
            tasks_due: tasks
                .iter()
                .filter(|t| t.deadline >= window_start && t.deadline < window_end)
                .count(),
            overdue_tasks: tasks.iter().filter(|t| t.is_overdue(now)).count(),
            completion_rate: ratio_percent(completed as f64, tasks.len() as f64),
        }
    }
}

/// Avrundad procentandel, 0 vid nolldelare
fn ratio_percent(part: f64, total: f64) -> u32 {
    if total == 0.0 {
        return 0;
    }
    (part / total * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, StudySession, Subject, Task};
    use chrono::NaiveDate;

    fn now() -> DateTime<Utc> {
        // Tisdag, veckofönstret är 2026-08-23 till 2026-08-30
        "2026-08-25T12:00:00Z".parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_task_for(store: &mut Store, subject_id: i64, title: &str, completed: bool) {
        let mut task = Task::new(title, now() + Duration::days(1));
        task.subject_id = Some(subject_id);
        let id = store.add_task(task, now());
        if completed {
            store.toggle_task(id, now());
        }
    }

    #[test]
    fn test_one_of_four_tasks_is_25_percent() {
        let mut store = Store::in_memory();
        let subject_id = store.add_subject(Subject::new("Matematik", Priority::High), now());

        add_task_for(&mut store, subject_id, "A", true);
        add_task_for(&mut store, subject_id, "B", false);
        add_task_for(&mut store, subject_id, "C", false);
        add_task_for(&mut store, subject_id, "D", false);

        let progress = AnalyticsService::new(&store).subject_progress();
        assert_eq!(progress[0].completed, 1);
        assert_eq!(progress[0].total, 4);
        assert_eq!(progress[0].percent, 25);
    }

    #[test]
    fn test_progress_zero_without_tasks() {
        let mut store = Store::in_memory();
        store.add_subject(Subject::new("Fysik", Priority::Low), now());

        let progress = AnalyticsService::new(&store).subject_progress();
        assert_eq!(progress[0].percent, 0);
        assert_eq!(progress[0].total, 0);
    }

    #[test]
    fn test_two_sessions_sum_to_two_and_a_half_hours() {
        let mut store = Store::in_memory();
        let subject_id = store.add_subject(Subject::new("Kemi", Priority::Medium), now());

        for (start, end) in [("09:00", "10:30"), ("14:00", "15:00")] {
            let mut session = StudySession::new(date(2026, 8, 24), start, end);
            session.subject_id = Some(subject_id);
            store.add_session(session, now());
        }

        let distribution = AnalyticsService::new(&store).time_distribution();
        assert_eq!(distribution[0].hours, 2.5);
        assert_eq!(distribution[0].percent, 100);
    }

    #[test]
    fn test_distribution_percentages_sum_to_100() {
        let mut store = Store::in_memory();
        let a = store.add_subject(Subject::new("A", Priority::High), now());
        let b = store.add_subject(Subject::new("B", Priority::Medium), now());
        let c = store.add_subject(Subject::new("C", Priority::Low), now());

        for (subject_id, end) in [(a, "10:00"), (b, "11:00"), (c, "12:00")] {
            let mut session = StudySession::new(date(2026, 8, 24), "09:00", end);
            session.subject_id = Some(subject_id);
            store.add_session(session, now());
        }

        let distribution = AnalyticsService::new(&store).time_distribution();
        let sum: u32 = distribution.iter().map(|d| d.percent).sum();
        // Summan blir 100 inom avrundningsfel
        assert!((99..=101).contains(&sum), "summa {}", sum);
    }

    #[test]
    fn test_distribution_all_zero_without_hours() {
        let mut store = Store::in_memory();
        store.add_subject(Subject::new("A", Priority::High), now());
        store.add_subject(Subject::new("B", Priority::Low), now());

        let distribution = AnalyticsService::new(&store).time_distribution();
        assert_eq!(distribution.len(), 2);
        assert!(distribution.iter().all(|d| d.percent == 0 && d.hours == 0.0));
    }

    #[test]
    fn test_dangling_sessions_excluded_from_distribution() {
        let mut store = Store::in_memory();
        store.add_subject(Subject::new("A", Priority::High), now());

        let mut orphan = StudySession::new(date(2026, 8, 24), "09:00", "17:00");
        orphan.subject_id = Some(424242);
        store.add_session(orphan, now());

        let distribution = AnalyticsService::new(&store).time_distribution();
        assert_eq!(distribution[0].hours, 0.0);
        assert_eq!(distribution[0].percent, 0);
    }

    #[test]
    fn test_weekly_stats_window() {
        let mut store = Store::in_memory();

        // Två pass i veckan, ett utanför
        store.add_session(StudySession::new(date(2026, 8, 23), "09:00", "10:00"), now());
        store.add_session(StudySession::new(date(2026, 8, 29), "09:00", "10:30"), now());
        store.add_session(StudySession::new(date(2026, 8, 30), "09:00", "18:00"), now());

        // Deadline i veckan, en utanför, en försenad (förra veckan)
        store.add_task(Task::new("I veckan", now() + Duration::days(2)), now());
        store.add_task(Task::new("Nästa månad", now() + Duration::days(20)), now());
        store.add_task(Task::new("Försenad", now() - Duration::days(10)), now());
        let done = store.add_task(Task::new("Klar", now() + Duration::days(1)), now());
        store.toggle_task(done, now());

        let stats = AnalyticsService::new(&store).weekly_stats(now());
        assert_eq!(stats.session_count, 2);
        assert_eq!(stats.total_hours, 2.5);
        assert_eq!(stats.tasks_due, 2);
        assert_eq!(stats.overdue_tasks, 1);
        // 1 av 4 slutförd
        assert_eq!(stats.completion_rate, 25);
    }

    #[test]
    fn test_weekly_stats_empty_store() {
        let store = Store::in_memory();
        let stats = AnalyticsService::new(&store).weekly_stats(now());

        assert_eq!(stats.session_count, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.completion_rate, 0);
    }
}
