//! Tjänster för Studyflow
//!
//! Rena, sidoeffektsfria beräkningar över ett store-tillstånd. Varje
//! tidsberoende funktion tar "nu" som explicit parameter och returnerar
//! vanliga vymodeller utan någon kännedom om rendering.

pub mod analytics;
pub mod dashboard;
pub mod export;
pub mod schedule;
pub mod subjects;
pub mod tasks;

pub use analytics::{AnalyticsService, SubjectHours, SubjectProgress, WeeklyStats};
pub use dashboard::{ActivityView, DashboardCounts, DashboardService, UpcomingDeadline, Urgency};
pub use export::{ExportResult, ExportService};
pub use schedule::{DayPlan, ScheduleService, SessionView};
pub use subjects::{SubjectGroup, SubjectListService, SubjectOverview};
pub use tasks::{TaskFilter, TaskListService, TaskRow, TaskTier};
