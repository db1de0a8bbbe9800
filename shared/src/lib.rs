use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student being tracked by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Grade level as displayed, e.g. "8th Grade"
    pub grade_level: String,
    pub school: String,
    /// Cumulative GPA on a 4.0 scale
    pub gpa: f64,
    /// Attendance rate as a whole percentage (0-100)
    pub attendance_rate: u8,
}

/// Direction a subject grade is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// A subject the student is enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub teacher: String,
    /// Letter grade as displayed, e.g. "A-"
    pub current_grade: String,
    /// Numeric grade as a whole percentage (0-100)
    pub grade_percentage: u8,
    pub trend: TrendDirection,
}

/// Persisted workflow status of an assignment.
///
/// Note that the "upcoming" filter bucket shown in the UI is *derived* from
/// the due date, not read from this field; an `InProgress` assignment whose
/// due date has not passed still counts as upcoming in the filter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
    Upcoming,
    InProgress,
    Submitted,
    Graded,
    Overdue,
}

impl AssignmentStatus {
    /// Human-readable label for status badges
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Upcoming => "Upcoming",
            AssignmentStatus::InProgress => "In Progress",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
            AssignmentStatus::Overdue => "Overdue",
        }
    }

    /// True once the assignment no longer needs work from the student
    pub fn is_complete(&self) -> bool {
        matches!(self, AssignmentStatus::Graded | AssignmentStatus::Submitted)
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An assignment belonging to exactly one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    /// Foreign key into the subject collection. Not enforced at runtime;
    /// an unresolved id renders as "Unknown Subject".
    pub subject_id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: AssignmentStatus,
    /// Awarded score; present whenever status is `Graded`
    pub score: Option<f64>,
    pub max_score: f64,
    /// Optional priority label, e.g. "High"
    pub priority: Option<String>,
}

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Grade,
    Assignment,
    Attendance,
    /// Catch-all for notification types the UI has no dedicated bucket for
    #[serde(other)]
    Generic,
}

impl NotificationType {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::Grade => "Grade",
            NotificationType::Assignment => "Assignment",
            NotificationType::Attendance => "Attendance",
            NotificationType::Generic => "Update",
        }
    }
}

/// Display priority of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    High,
    Medium,
    Low,
}

/// A notification shown to the parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// One-way flag: false -> true via mark-as-read, never back
    pub read: bool,
    pub priority: NotificationPriority,
}

/// Allowed values for [`NotificationPreferences::reminder_days`]
pub const REMINDER_DAY_CHOICES: [u8; 5] = [1, 2, 3, 5, 7];

/// Inclusive bounds for [`NotificationPreferences::grade_threshold`]
pub const GRADE_THRESHOLD_MIN: u8 = 50;
pub const GRADE_THRESHOLD_MAX: u8 = 95;
/// Threshold slider moves in steps of this size
pub const GRADE_THRESHOLD_STEP: u8 = 5;

/// Notification settings, persisted wholesale on explicit save.
///
/// Serialized field names match the record the web version kept under its
/// local-storage key, so the on-disk format stays camelCase JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub grade_alerts: bool,
    pub assignment_reminders: bool,
    pub attendance_alerts: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    /// Alert when a grade falls below this percentage (50-95, steps of 5)
    pub grade_threshold: u8,
    /// Days before a due date to send reminders (one of 1, 2, 3, 5, 7)
    pub reminder_days: u8,
    pub notification_sound: bool,
    pub auto_mark_read: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            grade_alerts: true,
            assignment_reminders: true,
            attendance_alerts: true,
            email_notifications: false,
            push_notifications: true,
            grade_threshold: 80,
            reminder_days: 2,
            notification_sound: true,
            auto_mark_read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_status_round_trips_kebab_case() {
        let json = serde_json::to_string(&AssignmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: AssignmentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AssignmentStatus::InProgress);
    }

    #[test]
    fn unknown_notification_type_falls_back_to_generic() {
        let parsed: NotificationType = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(parsed, NotificationType::Generic);
    }

    #[test]
    fn preferences_serialize_camel_case() {
        let json = serde_json::to_value(NotificationPreferences::default()).unwrap();
        assert_eq!(json["gradeAlerts"], true);
        assert_eq!(json["gradeThreshold"], 80);
        assert_eq!(json["reminderDays"], 2);
        assert_eq!(json["autoMarkRead"], false);
    }

    #[test]
    fn default_preferences_match_reset_record() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.grade_alerts);
        assert!(!prefs.email_notifications);
        assert_eq!(prefs.grade_threshold, 80);
        assert_eq!(prefs.reminder_days, 2);
    }
}
