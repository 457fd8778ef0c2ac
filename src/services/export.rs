//! Export av hela tillståndet som formaterad JSON
//!
//! Ren läsning - ingenting i tillståndet muteras av en export.

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

use crate::store::Store;

/// Export-tjänst
pub struct ExportService<'a> {
    store: &'a Store,
}

impl<'a> ExportService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Generera tidsstämplat filnamn för exporten
    pub fn generate_filename() -> String {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        format!("studyflow_export_{}.json", timestamp)
    }

    /// Hela tillståndet som formaterad JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.store.data()).context("JSON-serialisering misslyckades")
    }

    /// Skriv exporten till fil
    pub fn export_to_file(&self, path: &Path) -> Result<ExportResult> {
        let content = self.to_json()?;
        std::fs::write(path, &content).context("Kunde inte skriva exportfil")?;

        Ok(ExportResult {
            subject_count: self.store.subjects().len(),
            task_count: self.store.tasks().len(),
            session_count: self.store.schedule().len(),
            file_size: content.len(),
        })
    }
}

/// Resultat av en export
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub subject_count: usize,
    pub task_count: usize,
    pub session_count: usize,
    pub file_size: usize,
}

impl ExportResult {
    pub fn summary(&self) -> String {
        format!(
            "Exporterad: {} ämnen, {} uppgifter, {} studiepass, {} bytes",
            self.subject_count, self.task_count, self.session_count, self.file_size
        )
    }
}
