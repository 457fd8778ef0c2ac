//! Veckovy för schemat

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::StudySession;
use crate::store::Store;
use crate::utils::time;

/// Ett studiepass med uppslagen ämnesinformation
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub session: StudySession,
    pub subject_name: String,
    /// Ämnets färg om ämnet finns kvar
    pub subject_color: Option<String>,
}

/// En dag i veckovyn med sina pass
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub sessions: Vec<SessionView>,
}

impl DayPlan {
    pub fn weekday_label(&self) -> &'static str {
        time::weekday_label(self.weekday)
    }
}

/// Tjänst för schemavyn
pub struct ScheduleService<'a> {
    store: &'a Store,
}

impl<'a> ScheduleService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// De sju dagarna söndag..lördag i veckan som innehåller `reference`
    ///
    /// Pass matchas på kalenderdag, inte tidpunkt. Referensdatumet är
    /// användarens val, inte nödvändigtvis idag.
    pub fn week(&self, reference: NaiveDate) -> Vec<DayPlan> {
        let week_start = time::week_start_date(reference);

        (0..7)
            .map(|offset| {
                let date = week_start + Duration::days(offset);
                DayPlan {
                    date,
                    weekday: date.weekday(),
                    sessions: self
                        .store
                        .schedule()
                        .iter()
                        .filter(|s| s.date == date)
                        .map(|session| SessionView {
                            subject_name: self.store.subject_name(session.subject_id),
                            subject_color: session
                                .subject_id
                                .and_then(|id| self.store.find_subject(id))
                                .map(|s| s.color.clone()),
                            session: session.clone(),
                        })
                        .collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Subject};
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        "2026-08-25T12:00:00Z".parse().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_runs_sunday_to_saturday() {
        let store = Store::in_memory();
        // Onsdag som referens ger veckan söndag 23:e till lördag 29:e
        let week = ScheduleService::new(&store).week(date(2026, 8, 26));

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date(2026, 8, 23));
        assert_eq!(week[0].weekday, Weekday::Sun);
        assert_eq!(week[0].weekday_label(), "Söndag");
        assert_eq!(week[6].date, date(2026, 8, 29));
        assert_eq!(week[6].weekday, Weekday::Sat);
    }

    #[test]
    fn test_sessions_matched_per_day() {
        let mut store = Store::in_memory();
        let subject_id = store.add_subject(
            {
                let mut s = Subject::new("Matematik", Priority::High);
                s.color = "#6366f1".into();
                s
            },
            now(),
        );

        let mut monday_session = StudySession::new(date(2026, 8, 24), "09:00", "10:30");
        monday_session.subject_id = Some(subject_id);
        store.add_session(monday_session, now());

        // Pass utanför veckan syns inte
        store.add_session(StudySession::new(date(2026, 9, 7), "09:00", "10:00"), now());

        let week = ScheduleService::new(&store).week(date(2026, 8, 25));
        let monday = &week[1];

        assert_eq!(monday.sessions.len(), 1);
        assert_eq!(monday.sessions[0].subject_name, "Matematik");
        assert_eq!(monday.sessions[0].subject_color.as_deref(), Some("#6366f1"));
        assert!(week.iter().map(|d| d.sessions.len()).sum::<usize>() == 1);
    }

    #[test]
    fn test_dangling_subject_reference() {
        let mut store = Store::in_memory();
        let mut session = StudySession::new(date(2026, 8, 24), "09:00", "10:00");
        session.subject_id = Some(999);
        store.add_session(session, now());

        let week = ScheduleService::new(&store).week(date(2026, 8, 24));
        assert_eq!(week[1].sessions[0].subject_name, "Okänd");
        assert_eq!(week[1].sessions[0].subject_color, None);
    }
}
