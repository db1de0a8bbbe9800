//! # Preferences Repository
//!
//! File-backed storage for the notification settings record. The desktop
//! analogue of the single local-storage key the web version used.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! └── gradelink-preferences.json    <- this module manages this file
//! ```
//!
//! The record is the `NotificationPreferences` DTO serialized as camelCase
//! JSON, overwritten wholesale on every save (temp file + rename, so a
//! crashed save never leaves a half-written record). A missing file means
//! defaults. An unreadable or malformed file is treated the same as a
//! missing one: logged and replaced by defaults, since no user flow could
//! repair it otherwise.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use shared::NotificationPreferences;
use std::fs;
use std::path::PathBuf;

use crate::storage::traits::PreferencesStorage;

/// Well-known name of the persisted settings record
pub const PREFERENCES_FILE: &str = "gradelink-preferences.json";

#[derive(Clone)]
pub struct PreferencesRepository {
    base_directory: PathBuf,
}

impl PreferencesRepository {
    pub fn new(base_directory: PathBuf) -> Self {
        Self { base_directory }
    }

    fn preferences_path(&self) -> PathBuf {
        self.base_directory.join(PREFERENCES_FILE)
    }
}

impl PreferencesStorage for PreferencesRepository {
    fn load(&self) -> Result<NotificationPreferences> {
        let path = self.preferences_path();
        if !path.exists() {
            debug!("No preferences file at {:?}, using defaults", path);
            return Ok(NotificationPreferences::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read preferences file {:?}", path))?;
        match serde_json::from_str(&contents) {
            Ok(preferences) => {
                debug!("Loaded preferences from {:?}", path);
                Ok(preferences)
            }
            Err(e) => {
                warn!(
                    "Preferences file {:?} is malformed ({}), falling back to defaults",
                    path, e
                );
                Ok(NotificationPreferences::default())
            }
        }
    }

    fn save(&self, preferences: &NotificationPreferences) -> Result<()> {
        fs::create_dir_all(&self.base_directory).with_context(|| {
            format!("failed to create data directory {:?}", self.base_directory)
        })?;

        let path = self.preferences_path();
        let json = serde_json::to_string_pretty(preferences)
            .context("failed to serialize preferences")?;

        // Write to a temp file first, then rename for an atomic replace
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("failed to write temp preferences file {:?}", temp_path))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to move preferences into place at {:?}", path))?;

        info!("Saved preferences to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn repository() -> (tempfile::TempDir, PreferencesRepository) {
        let dir = tempdir().unwrap();
        let repo = PreferencesRepository::new(dir.path().to_path_buf());
        (dir, repo)
    }

    #[test]
    fn absent_file_yields_defaults() {
        let (_dir, repo) = repository();
        assert_eq!(repo.load().unwrap(), NotificationPreferences::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, repo) = repository();
        let mut prefs = NotificationPreferences::default();
        prefs.email_notifications = true;
        prefs.grade_threshold = 70;
        prefs.reminder_days = 5;

        repo.save(&prefs).unwrap();
        assert_eq!(repo.load().unwrap(), prefs);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let (dir, repo) = repository();
        fs::write(dir.path().join(PREFERENCES_FILE), "{not json at all").unwrap();
        assert_eq!(repo.load().unwrap(), NotificationPreferences::default());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let (_dir, repo) = repository();
        let mut prefs = NotificationPreferences::default();
        prefs.grade_threshold = 95;
        repo.save(&prefs).unwrap();

        prefs.grade_threshold = 50;
        repo.save(&prefs).unwrap();
        assert_eq!(repo.load().unwrap().grade_threshold, 50);
    }
}
