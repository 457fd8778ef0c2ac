//! Persistenslager
//!
//! Hela applikationstillståndet sparas som en enda JSON-blob under en fast
//! sökväg. Saknad eller korrupt fil ger tomt standardtillstånd - laddning
//! får aldrig propagera ett parsefel till användaren.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::store::AppData;
use crate::utils::error::AppResult;

/// Standardsökväg för den sparade datan
pub fn default_data_path() -> PathBuf {
    directories::ProjectDirs::from("se", "studyflow", "Studyflow")
        .map(|dirs| dirs.data_dir().join("studyflow.json"))
        .unwrap_or_else(|| PathBuf::from("studyflow.json"))
}

/// Filbaserat nyckel/värde-lager för applikationstillståndet
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Läs in sparat tillstånd
    ///
    /// Saknad fil ger standardtillstånd. Korrupt innehåll loggas och ger
    /// också standardtillstånd (fail closed).
    pub fn load(&self) -> AppData {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return AppData::default(),
            Err(e) => {
                warn!("Kunde inte läsa {}: {}", self.path.display(), e);
                return AppData::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                warn!(
                    "Korrupt sparat tillstånd i {}, startar tomt: {}",
                    self.path.display(),
                    e
                );
                AppData::default()
            }
        }
    }

    /// Skriv hela tillståndet till disk
    pub fn save(&self, data: &AppData) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Ta bort den sparade filen, no-op om den inte finns
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
