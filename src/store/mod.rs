//! Auktoritativt tillstånd för studieplaneraren
//!
//! `Store` äger samtliga samlingar och muteras bara genom explicita
//! operationer. Varje mutation persisterar hela tillståndet som sidoeffekt
//! och loggar en aktivitetspost. Tidpunkter injiceras av anroparen så att
//! resultat går att reproducera i tester.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ActivityLog, Settings, StudySession, Subject, Task, Theme};
use crate::storage::{default_data_path, Storage};

/// Platshållare när en uppgift eller ett pass pekar på ett borttaget ämne
pub const UNKNOWN_SUBJECT: &str = "Okänd";

/// Hela det persisterade applikationstillståndet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub schedule: Vec<StudySession>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub activity: ActivityLog,
}

/// Ägt, explicit konstruerat tillstånd - ingen global singleton
pub struct Store {
    data: AppData,
    storage: Option<Storage>,
}

impl Store {
    /// Öppna mot en given fil, laddar sparat tillstånd om det finns
    pub fn open(path: &Path) -> Self {
        let storage = Storage::new(path);
        let data = storage.load();
        Self {
            data,
            storage: Some(storage),
        }
    }

    /// Öppna mot plattformens standardsökväg
    pub fn open_default() -> Self {
        Self::open(&default_data_path())
    }

    /// Rent minnesbaserad store utan persistens (för tester)
    pub fn in_memory() -> Self {
        Self {
            data: AppData::default(),
            storage: None,
        }
    }

    // --- Läsning ---

    pub fn subjects(&self) -> &[Subject] {
        &self.data.subjects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn schedule(&self) -> &[StudySession] {
        &self.data.schedule
    }

    pub fn settings(&self) -> &Settings {
        &self.data.settings
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.data.activity
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn find_subject(&self, id: i64) -> Option<&Subject> {
        self.data.subjects.iter().find(|s| s.id == Some(id))
    }

    /// Ämnesnamn för en svag referens, platshållare om ämnet saknas
    pub fn subject_name(&self, subject_id: Option<i64>) -> String {
        subject_id
            .and_then(|id| self.find_subject(id))
            .map(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string())
    }

    // --- Ämnen ---

    /// Lägg till ett ämne och returnera dess tilldelade id
    pub fn add_subject(&mut self, mut subject: Subject, now: DateTime<Utc>) -> i64 {
        let id = next_id(self.data.subjects.iter().map(|s| s.id));
        subject.id = Some(id);
        let message = format!("Ämne tillagt: {}", subject.name);
        self.data.subjects.push(subject);
        self.commit(message, now);
        id
    }

    /// Ta bort ett ämne och kaskadera till uppgifter och studiepass
    ///
    /// No-op om id saknas - borttagning är idempotent.
    pub fn delete_subject(&mut self, id: i64, now: DateTime<Utc>) {
        let before = self.data.subjects.len();
        self.data.subjects.retain(|s| s.id != Some(id));
        if self.data.subjects.len() == before {
            return;
        }

        self.data.tasks.retain(|t| t.subject_id != Some(id));
        self.data.schedule.retain(|s| s.subject_id != Some(id));
        self.commit("Ämne borttaget", now);
    }

    // --- Uppgifter ---

    /// Lägg till en uppgift, alltid ej slutförd från start
    pub fn add_task(&mut self, mut task: Task, now: DateTime<Utc>) -> i64 {
        let id = next_id(self.data.tasks.iter().map(|t| t.id));
        task.id = Some(id);
        task.completed = false;
        let message = format!("Uppgift tillagd: {}", task.title);
        self.data.tasks.push(task);
        self.commit(message, now);
        id
    }

    /// Växla slutförd/ej slutförd, returnerar nya tillståndet
    ///
    /// No-op och `None` om id saknas.
    pub fn toggle_task(&mut self, id: i64, now: DateTime<Utc>) -> Option<bool> {
        let task = self.data.tasks.iter_mut().find(|t| t.id == Some(id))?;
        task.completed = !task.completed;
        let completed = task.completed;

        let message = if completed {
            "Uppgift slutförd"
        } else {
            "Uppgift återupptagen"
        };
        self.commit(message, now);
        Some(completed)
    }

    pub fn delete_task(&mut self, id: i64, now: DateTime<Utc>) {
        let before = self.data.tasks.len();
        self.data.tasks.retain(|t| t.id != Some(id));
        if self.data.tasks.len() < before {
            self.commit("Uppgift borttagen", now);
        }
    }

    // --- Studiepass ---

    pub fn add_session(&mut self, mut session: StudySession, now: DateTime<Utc>) -> i64 {
        let id = next_id(self.data.schedule.iter().map(|s| s.id));
        session.id = Some(id);
        self.data.schedule.push(session);
        self.commit("Studiepass tillagt", now);
        id
    }

    pub fn delete_session(&mut self, id: i64, now: DateTime<Utc>) {
        let before = self.data.schedule.len();
        self.data.schedule.retain(|s| s.id != Some(id));
        if self.data.schedule.len() < before {
            self.commit("Studiepass borttaget", now);
        }
    }

    // --- Inställningar ---

    /// Uppdatera inställningar, persisterar men loggar ingen aktivitet
    pub fn update_settings(&mut self, settings: Settings) {
        self.data.settings = settings;
        self.persist();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.data.settings.theme = self.data.settings.theme.toggled();
        self.persist();
        self.data.settings.theme
    }

    // --- Återställning ---

    /// Rensa allt tillstånd och ta bort den sparade filen
    ///
    /// Destruktiv - anroparen ansvarar för att användaren bekräftat först.
    pub fn reset(&mut self) {
        self.data = AppData::default();
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.clear() {
                warn!("Kunde inte rensa sparat tillstånd: {}", e);
            }
        }
    }

    // --- Internt ---

    fn commit(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.data.activity.record(message, now);
        self.persist();
    }

    /// Skrivfel är inte fatala - sessionen i minnet lever vidare
    fn persist(&self) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.save(&self.data) {
                warn!("Kunde inte spara tillståndet: {}", e);
            }
        }
    }
}

/// Nästa lediga id i en samling: högsta befintliga + 1
fn next_id<I>(ids: I) -> i64
where
    I: Iterator<Item = Option<i64>>,
{
    ids.flatten().max().unwrap_or(0) + 1
}
