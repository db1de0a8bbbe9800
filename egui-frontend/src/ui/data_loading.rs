//! # Data Loading Module
//!
//! All traffic between the UI thread and the record store goes through
//! here. Each page load spawns one task on the app's tokio runtime; the
//! task joins the page's independent fetches (the page renders only once
//! everything it needs has arrived), then posts the outcome back over an
//! mpsc channel that `update()` drains every frame.
//!
//! ## Stale loads
//!
//! Every load bumps a sequence number and tags its completion with it.
//! When the channel is drained, completions whose tag no longer matches
//! the current sequence are dropped, so a slow response to a superseded
//! request can never overwrite newer state. Mutation completions
//! (mark-as-read, preference saves) are untagged: applying them is
//! idempotent, so they are safe to apply whenever they arrive.

use anyhow::Result;
use log::{debug, info, warn};
use shared::{Assignment, Notification, NotificationPreferences, Student, Subject};
use std::future::Future;
use std::time::Duration;

use crate::ui::app_state::{GradeLinkApp, MainTab};
use gradelink_backend::domain::commands::notifications::MarkAsReadCommand;

/// Everything the dashboard page needs before it can render
pub struct DashboardData {
    pub student: Option<Student>,
    pub subjects: Vec<Subject>,
    pub assignments: Vec<Assignment>,
    pub notifications: Vec<Notification>,
}

/// Everything the assignments page needs before it can render
pub struct AssignmentsData {
    pub assignments: Vec<Assignment>,
    pub subjects: Vec<Subject>,
}

/// A completed backend call, delivered to the UI thread
pub enum LoadPayload {
    Dashboard(Result<DashboardData, String>),
    Assignments(Result<AssignmentsData, String>),
    Subjects(Result<Vec<Subject>, String>),
    SubjectAssignments {
        subject_id: String,
        result: Result<Vec<Assignment>, String>,
    },
    Notifications(Result<Vec<Notification>, String>),
    Preferences(Result<NotificationPreferences, String>),
    PreferencesSaved(Result<(), String>),
    MarkedRead(Result<Notification, String>),
    MarkedAllRead(Result<Vec<Notification>, String>),
}

pub struct LoadMessage {
    /// `Some(seq)` for page loads (guarded), `None` for mutations
    pub seq: Option<u64>,
    pub payload: LoadPayload,
}

/// The original mock settings endpoint took about a second to "save"
const SAVE_LATENCY: Duration = Duration::from_secs(1);

impl GradeLinkApp {
    /// Bump the load sequence; anything in flight becomes stale
    fn next_seq(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// Spawn a backend call, tagging its completion for the stale check
    fn spawn_load<F>(&mut self, future: F)
    where
        F: Future<Output = LoadPayload> + Send + 'static,
    {
        let seq = self.next_seq();
        self.spawn(Some(seq), future);
    }

    /// Spawn an untagged mutation
    fn spawn_mutation<F>(&self, future: F)
    where
        F: Future<Output = LoadPayload> + Send + 'static,
    {
        self.spawn(None, future);
    }

    fn spawn<F>(&self, seq: Option<u64>, future: F)
    where
        F: Future<Output = LoadPayload> + Send + 'static,
    {
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let payload = future.await;
            // The app may be shutting down; a closed channel is fine
            let _ = tx.send(LoadMessage { seq, payload });
            ctx.request_repaint();
        });
    }

    /// Load everything the dashboard shows, in one joined round trip
    pub fn load_dashboard(&mut self) {
        info!("Loading dashboard data");
        self.dashboard.loading = true;
        self.dashboard.error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            let (student, subjects, assignments, notifications) = tokio::join!(
                backend.student_service.get_selected_student(),
                backend.subject_service.get_subjects(),
                backend.assignment_service.get_assignments(),
                backend.notification_service.get_notifications(),
            );
            let data = move || -> Result<DashboardData> {
                Ok(DashboardData {
                    student: student?,
                    subjects: subjects?,
                    assignments: assignments?,
                    notifications: notifications?,
                })
            };
            LoadPayload::Dashboard(data().map_err(|e| e.to_string()))
        });
    }

    /// Load the assignments page (assignments joined with subjects for
    /// name resolution)
    pub fn load_assignments(&mut self) {
        info!("Loading assignments data");
        self.assignments_page.loading = true;
        self.assignments_page.error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            let (assignments, subjects) = tokio::join!(
                backend.assignment_service.get_assignments(),
                backend.subject_service.get_subjects(),
            );
            let data = move || -> Result<AssignmentsData> {
                Ok(AssignmentsData {
                    assignments: assignments?,
                    subjects: subjects?,
                })
            };
            LoadPayload::Assignments(data().map_err(|e| e.to_string()))
        });
    }

    pub fn load_subjects(&mut self) {
        info!("Loading subjects");
        self.subjects_page.loading = true;
        self.subjects_page.error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            LoadPayload::Subjects(
                backend
                    .subject_service
                    .get_subjects()
                    .await
                    .map_err(|e| e.to_string()),
            )
        });
    }

    /// Load the detail panel for one subject
    pub fn load_subject_assignments(&mut self, subject_id: String) {
        info!("Loading assignments for subject {}", subject_id);
        self.subjects_page.detail_loading = true;
        self.subjects_page.detail_error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            let result = backend
                .assignment_service
                .get_assignments_by_subject(&subject_id)
                .await
                .map_err(|e| e.to_string());
            LoadPayload::SubjectAssignments { subject_id, result }
        });
    }

    pub fn load_notifications(&mut self) {
        info!("Loading notifications");
        self.notifications_page.loading = true;
        self.notifications_page.error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            LoadPayload::Notifications(
                backend
                    .notification_service
                    .get_notifications()
                    .await
                    .map_err(|e| e.to_string()),
            )
        });
    }

    pub fn load_preferences(&mut self) {
        info!("Loading preferences");
        self.settings_page.loading = true;
        self.settings_page.error = None;

        let backend = self.backend.clone();
        self.spawn_load(async move {
            // load() is synchronous file IO under the hood, cheap enough
            // to run inline on the worker
            LoadPayload::Preferences(
                backend
                    .preferences_service
                    .load()
                    .map_err(|e| e.to_string()),
            )
        });
    }

    /// Persist the settings edit buffer
    pub fn save_preferences(&mut self) {
        info!("Saving preferences");
        self.settings_page.saving = true;

        let backend = self.backend.clone();
        let preferences = self.settings_page.preferences.clone();
        self.spawn_mutation(async move {
            tokio::time::sleep(SAVE_LATENCY).await;
            LoadPayload::PreferencesSaved(
                backend
                    .preferences_service
                    .save(&preferences)
                    .map_err(|e| e.to_string()),
            )
        });
    }

    /// Replace the settings edit buffer with the fixed default record;
    /// nothing is persisted until the user saves
    pub fn reset_preferences(&mut self) {
        self.settings_page.preferences = self.backend.preferences_service.reset();
        self.success_message = Some("Preferences reset to defaults".to_string());
    }

    pub fn mark_notification_read(&mut self, notification_id: String) {
        let backend = self.backend.clone();
        self.spawn_mutation(async move {
            LoadPayload::MarkedRead(
                backend
                    .notification_service
                    .mark_as_read(MarkAsReadCommand { notification_id })
                    .await
                    .map(|r| r.notification)
                    .map_err(|e| e.to_string()),
            )
        });
    }

    pub fn mark_all_notifications_read(&mut self) {
        let backend = self.backend.clone();
        self.spawn_mutation(async move {
            LoadPayload::MarkedAllRead(
                backend
                    .notification_service
                    .mark_all_as_read()
                    .await
                    .map(|r| r.notifications)
                    .map_err(|e| e.to_string()),
            )
        });
    }

    /// Drain completed backend calls, dropping stale page loads
    pub fn poll_loads(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            if let Some(seq) = message.seq {
                if seq != self.load_seq {
                    debug!(
                        "Dropping stale load completion (seq {} != current {})",
                        seq, self.load_seq
                    );
                    continue;
                }
            }
            self.apply(message.payload);
        }
    }

    fn apply(&mut self, payload: LoadPayload) {
        match payload {
            LoadPayload::Dashboard(result) => {
                self.dashboard.loading = false;
                match result {
                    Ok(data) => {
                        self.dashboard.student = data.student;
                        self.dashboard.subjects = data.subjects;
                        self.dashboard.assignments = data.assignments;
                        self.dashboard.notifications = data.notifications;
                    }
                    Err(e) => {
                        warn!("Dashboard load failed: {}", e);
                        self.dashboard.error = Some(e);
                    }
                }
            }
            LoadPayload::Assignments(result) => {
                self.assignments_page.loading = false;
                match result {
                    Ok(data) => {
                        self.assignments_page.assignments = data.assignments;
                        self.assignments_page.subjects = data.subjects;
                        self.assignments_page.derive();
                    }
                    Err(e) => {
                        warn!("Assignments load failed: {}", e);
                        self.assignments_page.error = Some(e);
                    }
                }
            }
            LoadPayload::Subjects(result) => {
                self.subjects_page.loading = false;
                match result {
                    Ok(subjects) => self.subjects_page.subjects = subjects,
                    Err(e) => {
                        warn!("Subjects load failed: {}", e);
                        self.subjects_page.error = Some(e);
                    }
                }
            }
            LoadPayload::SubjectAssignments { subject_id, result } => {
                // Only meaningful if that subject is still the selected one
                let still_selected = self
                    .subjects_page
                    .selected
                    .as_ref()
                    .map(|s| s.id == subject_id)
                    .unwrap_or(false);
                if !still_selected {
                    return;
                }
                self.subjects_page.detail_loading = false;
                match result {
                    Ok(assignments) => self.subjects_page.detail_assignments = assignments,
                    Err(e) => {
                        warn!("Subject detail load failed: {}", e);
                        self.subjects_page.detail_error = Some(e);
                    }
                }
            }
            LoadPayload::Notifications(result) => {
                self.notifications_page.loading = false;
                match result {
                    Ok(notifications) => {
                        self.notifications_page.notifications = notifications;
                        self.notifications_page.derive();
                    }
                    Err(e) => {
                        warn!("Notifications load failed: {}", e);
                        self.notifications_page.error = Some(e);
                    }
                }
            }
            LoadPayload::Preferences(result) => {
                self.settings_page.loading = false;
                match result {
                    Ok(preferences) => self.settings_page.preferences = preferences,
                    Err(e) => {
                        warn!("Preferences load failed: {}", e);
                        self.settings_page.error = Some(e);
                    }
                }
            }
            LoadPayload::PreferencesSaved(result) => {
                self.settings_page.saving = false;
                match result {
                    Ok(()) => {
                        self.success_message = Some("Preferences saved successfully".to_string())
                    }
                    Err(e) => {
                        warn!("Preferences save failed: {}", e);
                        self.error_message = Some(format!("Failed to save preferences: {}", e));
                    }
                }
            }
            LoadPayload::MarkedRead(result) => match result {
                Ok(notification) => {
                    self.replace_notification(&notification);
                    self.success_message = Some("Notification marked as read".to_string());
                }
                Err(e) => {
                    warn!("Mark-as-read failed: {}", e);
                    self.error_message =
                        Some(format!("Failed to mark notification as read: {}", e));
                }
            },
            LoadPayload::MarkedAllRead(result) => match result {
                Ok(notifications) => {
                    self.notifications_page.notifications = notifications.clone();
                    self.notifications_page.derive();
                    self.dashboard.notifications = notifications;
                    self.success_message =
                        Some("All notifications marked as read".to_string());
                }
                Err(e) => {
                    warn!("Mark-all-as-read failed: {}", e);
                    self.error_message =
                        Some(format!("Failed to mark all notifications as read: {}", e));
                }
            },
        }
    }

    /// Apply a single updated notification to every collection holding it
    fn replace_notification(&mut self, updated: &Notification) {
        for n in self.notifications_page.notifications.iter_mut() {
            if n.id == updated.id {
                *n = updated.clone();
            }
        }
        self.notifications_page.derive();
        for n in self.dashboard.notifications.iter_mut() {
            if n.id == updated.id {
                *n = updated.clone();
            }
        }
    }

    /// Kick off the load for whatever tab is active
    pub fn load_current_tab(&mut self) {
        match self.current_tab {
            MainTab::Dashboard => self.load_dashboard(),
            MainTab::Assignments => self.load_assignments(),
            MainTab::Subjects => self.load_subjects(),
            MainTab::Notifications => self.load_notifications(),
            MainTab::Settings => self.load_preferences(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gradelink_backend::Backend;
    use shared::{NotificationPriority, NotificationType};
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (GradeLinkApp, TempDir) {
        let dir = tempdir().unwrap();
        let backend = Arc::new(Backend::for_tests(dir.path().to_path_buf()));
        let ctx = eframe::egui::Context::default();
        let app = GradeLinkApp::with_backend(backend, &ctx).unwrap();
        (app, dir)
    }

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            notification_type: NotificationType::Grade,
            title: "Grade posted".to_string(),
            message: "A new grade was posted".to_string(),
            timestamp: Utc::now(),
            read,
            priority: NotificationPriority::Medium,
        }
    }

    #[test]
    fn stale_load_completions_are_dropped() {
        let (mut app, _dir) = test_app();
        let stale = app.next_seq();
        let current = app.next_seq();
        app.subjects_page.loading = true;

        app.tx
            .send(LoadMessage {
                seq: Some(stale),
                payload: LoadPayload::Subjects(Err("request superseded".to_string())),
            })
            .unwrap();
        app.tx
            .send(LoadMessage {
                seq: Some(current),
                payload: LoadPayload::Subjects(Ok(Vec::new())),
            })
            .unwrap();
        app.poll_loads();

        assert!(app.subjects_page.error.is_none());
        assert!(!app.subjects_page.loading);
    }

    #[test]
    fn mutation_completions_apply_regardless_of_sequence() {
        let (mut app, _dir) = test_app();
        app.next_seq();
        app.settings_page.saving = true;

        app.tx
            .send(LoadMessage {
                seq: None,
                payload: LoadPayload::PreferencesSaved(Ok(())),
            })
            .unwrap();
        app.poll_loads();

        assert!(!app.settings_page.saving);
        assert!(app.success_message.is_some());
    }

    #[test]
    fn marked_read_updates_every_collection_holding_the_record() {
        let (mut app, _dir) = test_app();
        app.notifications_page.notifications = vec![notification("n1", false)];
        app.notifications_page.derive();
        app.dashboard.notifications = vec![notification("n1", false)];

        app.tx
            .send(LoadMessage {
                seq: None,
                payload: LoadPayload::MarkedRead(Ok(notification("n1", true))),
            })
            .unwrap();
        app.poll_loads();

        assert!(app.notifications_page.notifications[0].read);
        assert!(app.dashboard.notifications[0].read);
        assert_eq!(app.notifications_page.counts.unread, 0);
    }

    #[test]
    fn subject_detail_completion_for_a_deselected_subject_is_ignored() {
        let (mut app, _dir) = test_app();
        let seq = app.next_seq();
        app.subjects_page.selected = None;
        app.subjects_page.detail_loading = true;

        app.tx
            .send(LoadMessage {
                seq: Some(seq),
                payload: LoadPayload::SubjectAssignments {
                    subject_id: "1".to_string(),
                    result: Ok(Vec::new()),
                },
            })
            .unwrap();
        app.poll_loads();

        // Nothing selected, so the completion must not touch detail state
        assert!(app.subjects_page.detail_loading);
    }
}
