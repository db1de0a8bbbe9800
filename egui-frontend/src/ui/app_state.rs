//! # App State Module
//!
//! Central application state for the GradeLink dashboard.
//!
//! ## Key Types:
//! - `MainTab` - the five pages of the app
//! - `GradeLinkApp` - the single state struct the whole UI hangs off
//! - one `*State` struct per page, each holding its raw collections, the
//!   active filter, and the derived (filtered/sorted/counted) view state
//!
//! ## State Management:
//! Pages never compute their own view state; they hold whatever the
//! derivation layer last produced. Controllers orchestrate (trigger loads,
//! swap filters, forward mutations) and re-run the derivation functions
//! whenever a raw collection or filter changes.

use anyhow::Result;
use chrono::Utc;
use eframe::egui;
use gradelink_backend::domain::derivation::{
    assignment_counts, filter_assignments, filter_notifications, notification_counts,
    sort_assignments, sort_notifications, AssignmentCategory, AssignmentCounts,
    NotificationCategory, NotificationCounts,
};
use gradelink_backend::Backend;
use shared::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use crate::ui::data_loading::LoadMessage;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Assignments,
    Subjects,
    Notifications,
    Settings,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Dashboard,
        MainTab::Assignments,
        MainTab::Subjects,
        MainTab::Notifications,
        MainTab::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Assignments => "Assignments",
            MainTab::Subjects => "Subjects",
            MainTab::Notifications => "Notifications",
            MainTab::Settings => "Settings",
        }
    }
}

/// Dashboard page: one student, headline stats, recent activity
#[derive(Default)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub student: Option<Student>,
    pub subjects: Vec<Subject>,
    pub assignments: Vec<Assignment>,
    pub notifications: Vec<Notification>,
}

/// Assignments page: raw collection plus the derived filter view
pub struct AssignmentsState {
    pub loading: bool,
    pub error: Option<String>,
    pub assignments: Vec<Assignment>,
    pub subjects: Vec<Subject>,
    pub active_filter: AssignmentCategory,
    /// Derived: filtered then sorted copy of `assignments`
    pub filtered: Vec<Assignment>,
    /// Derived: badge counts over the unfiltered collection
    pub counts: AssignmentCounts,
}

impl Default for AssignmentsState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            assignments: Vec::new(),
            subjects: Vec::new(),
            active_filter: AssignmentCategory::All,
            filtered: Vec::new(),
            counts: AssignmentCounts::default(),
        }
    }
}

impl AssignmentsState {
    /// Re-run the derivation layer after a collection or filter change
    pub fn derive(&mut self) {
        let now = Utc::now();
        self.filtered =
            sort_assignments(filter_assignments(&self.assignments, self.active_filter, now));
        self.counts = assignment_counts(&self.assignments, now);
    }
}

/// Subjects page: the card list plus an optional detail panel
#[derive(Default)]
pub struct SubjectsState {
    pub loading: bool,
    pub error: Option<String>,
    pub subjects: Vec<Subject>,
    pub selected: Option<Subject>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    pub detail_assignments: Vec<Assignment>,
}

/// Notifications page: raw collection plus the derived filter view
pub struct NotificationsState {
    pub loading: bool,
    pub error: Option<String>,
    pub notifications: Vec<Notification>,
    pub active_filter: NotificationCategory,
    /// Derived: filtered then sorted copy of `notifications`
    pub filtered: Vec<Notification>,
    /// Derived: badge counts over the unfiltered collection
    pub counts: NotificationCounts,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            notifications: Vec::new(),
            active_filter: NotificationCategory::All,
            filtered: Vec::new(),
            counts: NotificationCounts::default(),
        }
    }
}

impl NotificationsState {
    pub fn derive(&mut self) {
        self.filtered =
            sort_notifications(filter_notifications(&self.notifications, self.active_filter));
        self.counts = notification_counts(&self.notifications);
    }
}

/// Settings page: an edit buffer over the persisted preferences record
#[derive(Default)]
pub struct SettingsState {
    pub loading: bool,
    pub error: Option<String>,
    pub saving: bool,
    pub preferences: NotificationPreferences,
}

/// Main application struct for the egui dashboard
pub struct GradeLinkApp {
    pub backend: Arc<Backend>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) ctx: egui::Context,
    pub(crate) tx: Sender<LoadMessage>,
    pub(crate) rx: Receiver<LoadMessage>,
    /// Sequence number of the most recent page load; completions tagged
    /// with an older sequence are stale and get dropped
    pub(crate) load_seq: u64,
    pub(crate) started: bool,

    pub current_tab: MainTab,
    pub dashboard: DashboardState,
    pub assignments_page: AssignmentsState,
    pub subjects_page: SubjectsState,
    pub notifications_page: NotificationsState,
    pub settings_page: SettingsState,

    /// Transient feedback lines, cleared after a short delay
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl GradeLinkApp {
    pub fn new(ctx: &egui::Context) -> Result<Self> {
        Self::with_backend(Arc::new(Backend::new()?), ctx)
    }

    /// Build the app around an existing backend (tests hand in a
    /// latency-free one)
    pub fn with_backend(backend: Arc<Backend>, ctx: &egui::Context) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (tx, rx) = channel();

        Ok(Self {
            backend,
            runtime,
            ctx: ctx.clone(),
            tx,
            rx,
            load_seq: 0,
            started: false,
            current_tab: MainTab::Dashboard,
            dashboard: DashboardState::default(),
            assignments_page: AssignmentsState::default(),
            subjects_page: SubjectsState::default(),
            notifications_page: NotificationsState::default(),
            settings_page: SettingsState::default(),
            success_message: None,
            error_message: None,
        })
    }

    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }
}
