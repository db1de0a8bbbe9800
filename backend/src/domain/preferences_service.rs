use anyhow::Result;
use log::info;
use shared::{
    NotificationPreferences, GRADE_THRESHOLD_MAX, GRADE_THRESHOLD_MIN, GRADE_THRESHOLD_STEP,
    REMINDER_DAY_CHOICES,
};
use std::sync::Arc;

use crate::error::StoreError;
use crate::storage::traits::PreferencesStorage;

/// Service for the notification settings record.
///
/// Lifecycle: defaults at first load, overwritten wholesale on save, and
/// reset hands back the fixed default record without persisting it; the
/// user still has to save explicitly, matching the settings page contract.
#[derive(Clone)]
pub struct PreferencesService {
    repository: Arc<dyn PreferencesStorage>,
}

impl PreferencesService {
    pub fn new(repository: Arc<dyn PreferencesStorage>) -> Self {
        Self { repository }
    }

    /// Load the persisted preferences (defaults when absent or unreadable)
    pub fn load(&self) -> Result<NotificationPreferences> {
        self.repository.load()
    }

    /// Validate and persist the record wholesale
    pub fn save(&self, preferences: &NotificationPreferences) -> Result<()> {
        Self::validate(preferences)?;
        self.repository.save(preferences)?;
        info!(
            "Saved preferences (threshold {}%, reminders {} days ahead)",
            preferences.grade_threshold, preferences.reminder_days
        );
        Ok(())
    }

    /// The fixed default record; does not touch storage
    pub fn reset(&self) -> NotificationPreferences {
        info!("Resetting preferences to defaults (not persisted until saved)");
        NotificationPreferences::default()
    }

    fn validate(preferences: &NotificationPreferences) -> Result<(), StoreError> {
        let threshold = preferences.grade_threshold;
        if !(GRADE_THRESHOLD_MIN..=GRADE_THRESHOLD_MAX).contains(&threshold)
            || threshold % GRADE_THRESHOLD_STEP != 0
        {
            return Err(StoreError::validation(format!(
                "grade threshold must be between {GRADE_THRESHOLD_MIN} and {GRADE_THRESHOLD_MAX} \
                 in steps of {GRADE_THRESHOLD_STEP}, got {threshold}"
            )));
        }
        if !REMINDER_DAY_CHOICES.contains(&preferences.reminder_days) {
            return Err(StoreError::validation(format!(
                "reminder days must be one of {REMINDER_DAY_CHOICES:?}, got {}",
                preferences.reminder_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PreferencesRepository;
    use tempfile::tempdir;

    fn service() -> (tempfile::TempDir, PreferencesService) {
        let dir = tempdir().unwrap();
        let repo = PreferencesRepository::new(dir.path().to_path_buf());
        (dir, PreferencesService::new(Arc::new(repo)))
    }

    #[test]
    fn first_load_is_defaults() {
        let (_dir, service) = service();
        assert_eq!(service.load().unwrap(), NotificationPreferences::default());
    }

    #[test]
    fn save_persists_and_load_round_trips() {
        let (_dir, service) = service();
        let mut prefs = NotificationPreferences::default();
        prefs.push_notifications = false;
        prefs.grade_threshold = 65;
        prefs.reminder_days = 7;

        service.save(&prefs).unwrap();
        assert_eq!(service.load().unwrap(), prefs);
    }

    #[test]
    fn save_rejects_out_of_range_threshold() {
        let (_dir, service) = service();
        let mut prefs = NotificationPreferences::default();

        prefs.grade_threshold = 45;
        assert!(service.save(&prefs).is_err());
        prefs.grade_threshold = 100;
        assert!(service.save(&prefs).is_err());
        prefs.grade_threshold = 82; // not on a step boundary
        assert!(service.save(&prefs).is_err());
    }

    #[test]
    fn save_rejects_disallowed_reminder_days() {
        let (_dir, service) = service();
        let mut prefs = NotificationPreferences::default();
        prefs.reminder_days = 4;
        assert!(service.save(&prefs).is_err());
    }

    #[test]
    fn reset_returns_defaults_without_persisting() {
        let (_dir, service) = service();
        let mut prefs = NotificationPreferences::default();
        prefs.grade_threshold = 65;
        service.save(&prefs).unwrap();

        let reset = service.reset();
        assert_eq!(reset, NotificationPreferences::default());
        // The stored record is untouched until an explicit save
        assert_eq!(service.load().unwrap(), prefs);
    }
}
