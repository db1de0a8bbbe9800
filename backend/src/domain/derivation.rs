//! # Derivation Engine
//!
//! Pure view-state computation over the raw record collections: filter
//! buckets, sort order, count badges, and the aggregate percentages shown on
//! the dashboard. Everything here is synchronous, never mutates its input,
//! and depends on nothing but the DTOs and a caller-supplied `now`.
//!
//! ## Categories vs. statuses
//!
//! The filter categories are a *view over* the status enum, not the enum
//! itself. "Upcoming" is derived from the due date: an assignment stored as
//! `InProgress` whose due date has not passed still lands in the upcoming
//! bucket. Because of that overlay the assignment buckets are not a strict
//! partition; a stored-overdue assignment with a future due date counts in
//! both the overdue and upcoming badges, which is exactly how the counts are
//! meant to read ("needs attention" and "due later" are both true).

use chrono::{DateTime, Utc};
use shared::{Assignment, AssignmentStatus, Notification, NotificationType};

use crate::error::StoreError;

/// Filter buckets for the assignments page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentCategory {
    All,
    Upcoming,
    Overdue,
    Graded,
    Submitted,
}

impl AssignmentCategory {
    /// Buckets in the order the filter bar shows them
    pub const ALL_CATEGORIES: [AssignmentCategory; 5] = [
        AssignmentCategory::All,
        AssignmentCategory::Upcoming,
        AssignmentCategory::Overdue,
        AssignmentCategory::Graded,
        AssignmentCategory::Submitted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentCategory::All => "All",
            AssignmentCategory::Upcoming => "Upcoming",
            AssignmentCategory::Overdue => "Overdue",
            AssignmentCategory::Graded => "Graded",
            AssignmentCategory::Submitted => "Submitted",
        }
    }

    /// Parse a category key. Unknown keys deliberately map to `All`, so a
    /// stale or misspelled filter id degrades to the unfiltered view.
    pub fn from_key(key: &str) -> Self {
        match key {
            "upcoming" => AssignmentCategory::Upcoming,
            "overdue" => AssignmentCategory::Overdue,
            "graded" => AssignmentCategory::Graded,
            "submitted" => AssignmentCategory::Submitted,
            _ => AssignmentCategory::All,
        }
    }
}

/// Filter buckets for the notifications page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationCategory {
    All,
    Unread,
    Grade,
    Assignment,
    Attendance,
}

impl NotificationCategory {
    pub const ALL_CATEGORIES: [NotificationCategory; 5] = [
        NotificationCategory::All,
        NotificationCategory::Unread,
        NotificationCategory::Grade,
        NotificationCategory::Assignment,
        NotificationCategory::Attendance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationCategory::All => "All",
            NotificationCategory::Unread => "Unread",
            NotificationCategory::Grade => "Grades",
            NotificationCategory::Assignment => "Assignments",
            NotificationCategory::Attendance => "Attendance",
        }
    }

    /// Unknown keys map to `All`, like the assignment buckets
    pub fn from_key(key: &str) -> Self {
        match key {
            "unread" => NotificationCategory::Unread,
            "grade" => NotificationCategory::Grade,
            "assignment" => NotificationCategory::Assignment,
            "attendance" => NotificationCategory::Attendance,
            _ => NotificationCategory::All,
        }
    }
}

/// True when the assignment belongs in the derived "upcoming" bucket: due
/// strictly after `now` and not yet turned in or graded.
pub fn is_upcoming(assignment: &Assignment, now: DateTime<Utc>) -> bool {
    assignment.due_date > now && !assignment.status.is_complete()
}

/// Classify an assignment for display. The stored status is authoritative
/// for overdue, graded, submitted, and in-progress; only the upcoming label
/// is derived from the due date. A stored `Overdue` stays overdue even if
/// its due date is somehow in the future; the flag is trusted.
pub fn classify_assignment(assignment: &Assignment, now: DateTime<Utc>) -> AssignmentStatus {
    match assignment.status {
        AssignmentStatus::Overdue | AssignmentStatus::Graded | AssignmentStatus::Submitted => {
            assignment.status
        }
        AssignmentStatus::InProgress | AssignmentStatus::Upcoming => {
            if assignment.due_date > now {
                AssignmentStatus::Upcoming
            } else {
                assignment.status
            }
        }
    }
}

/// Filtered copy of the collection for one assignment bucket. `All` is an
/// identity copy; the input is never mutated.
pub fn filter_assignments(
    assignments: &[Assignment],
    category: AssignmentCategory,
    now: DateTime<Utc>,
) -> Vec<Assignment> {
    assignments
        .iter()
        .filter(|a| match category {
            AssignmentCategory::All => true,
            AssignmentCategory::Upcoming => is_upcoming(a, now),
            AssignmentCategory::Overdue => a.status == AssignmentStatus::Overdue,
            AssignmentCategory::Graded => a.status == AssignmentStatus::Graded,
            AssignmentCategory::Submitted => a.status == AssignmentStatus::Submitted,
        })
        .cloned()
        .collect()
}

/// Filtered copy of the collection for one notification bucket
pub fn filter_notifications(
    notifications: &[Notification],
    category: NotificationCategory,
) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| match category {
            NotificationCategory::All => true,
            NotificationCategory::Unread => !n.read,
            NotificationCategory::Grade => n.notification_type == NotificationType::Grade,
            NotificationCategory::Assignment => {
                n.notification_type == NotificationType::Assignment
            }
            NotificationCategory::Attendance => {
                n.notification_type == NotificationType::Attendance
            }
        })
        .cloned()
        .collect()
}

/// Sort assignments for display: everything stored overdue first, then
/// ascending by due date. `sort_by` is stable, so equal keys keep their
/// input order.
pub fn sort_assignments(mut assignments: Vec<Assignment>) -> Vec<Assignment> {
    assignments.sort_by(|a, b| {
        let a_overdue = a.status == AssignmentStatus::Overdue;
        let b_overdue = b.status == AssignmentStatus::Overdue;
        b_overdue
            .cmp(&a_overdue)
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    assignments
}

/// Sort notifications most recent first; stable for equal timestamps
pub fn sort_notifications(mut notifications: Vec<Notification>) -> Vec<Notification> {
    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    notifications
}

/// Badge counts for the assignment filter bar, always computed over the
/// full unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssignmentCounts {
    pub total: usize,
    pub upcoming: usize,
    pub overdue: usize,
    pub graded: usize,
    pub submitted: usize,
}

impl AssignmentCounts {
    pub fn for_category(&self, category: AssignmentCategory) -> usize {
        match category {
            AssignmentCategory::All => self.total,
            AssignmentCategory::Upcoming => self.upcoming,
            AssignmentCategory::Overdue => self.overdue,
            AssignmentCategory::Graded => self.graded,
            AssignmentCategory::Submitted => self.submitted,
        }
    }
}

pub fn assignment_counts(assignments: &[Assignment], now: DateTime<Utc>) -> AssignmentCounts {
    AssignmentCounts {
        total: assignments.len(),
        upcoming: assignments.iter().filter(|a| is_upcoming(a, now)).count(),
        overdue: count_status(assignments, AssignmentStatus::Overdue),
        graded: count_status(assignments, AssignmentStatus::Graded),
        submitted: count_status(assignments, AssignmentStatus::Submitted),
    }
}

fn count_status(assignments: &[Assignment], status: AssignmentStatus) -> usize {
    assignments.iter().filter(|a| a.status == status).count()
}

/// Badge counts for the notification filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationCounts {
    pub total: usize,
    pub unread: usize,
    pub grade: usize,
    pub assignment: usize,
    pub attendance: usize,
}

impl NotificationCounts {
    pub fn for_category(&self, category: NotificationCategory) -> usize {
        match category {
            NotificationCategory::All => self.total,
            NotificationCategory::Unread => self.unread,
            NotificationCategory::Grade => self.grade,
            NotificationCategory::Assignment => self.assignment,
            NotificationCategory::Attendance => self.attendance,
        }
    }
}

pub fn notification_counts(notifications: &[Notification]) -> NotificationCounts {
    let of_type = |t: NotificationType| {
        notifications
            .iter()
            .filter(|n| n.notification_type == t)
            .count()
    };
    NotificationCounts {
        total: notifications.len(),
        unread: notifications.iter().filter(|n| !n.read).count(),
        grade: of_type(NotificationType::Grade),
        assignment: of_type(NotificationType::Assignment),
        attendance: of_type(NotificationType::Attendance),
    }
}

/// Percentage of assignments that are graded or submitted, rounded half
/// away from zero. Zero for an empty collection so the dashboard never
/// divides by zero.
pub fn completion_rate(assignments: &[Assignment]) -> u8 {
    if assignments.is_empty() {
        return 0;
    }
    let complete = assignments
        .iter()
        .filter(|a| a.status.is_complete())
        .count();
    round_percentage(complete as f64, assignments.len() as f64)
}

/// Score as a whole percentage of the maximum. The caller guarantees a
/// score exists; a non-positive maximum is rejected rather than divided by.
pub fn score_percentage(score: f64, max_score: f64) -> Result<u8, StoreError> {
    if max_score <= 0.0 {
        return Err(StoreError::validation(format!(
            "max score must be positive, got {max_score}"
        )));
    }
    Ok(round_percentage(score, max_score))
}

/// Single rounding policy for every percentage in the app: half away from
/// zero (`f64::round`).
fn round_percentage(part: f64, whole: f64) -> u8 {
    ((part / whole) * 100.0).round() as u8
}

/// Trend arrow for the attendance stat card
pub fn attendance_trend(attendance_rate: u8) -> shared::TrendDirection {
    if attendance_rate >= 95 {
        shared::TrendDirection::Up
    } else if attendance_rate >= 90 {
        shared::TrendDirection::Stable
    } else {
        shared::TrendDirection::Down
    }
}

/// Trend arrow for the completion-rate stat card
pub fn completion_trend(completion_rate: u8) -> shared::TrendDirection {
    if completion_rate >= 90 {
        shared::TrendDirection::Up
    } else if completion_rate >= 80 {
        shared::TrendDirection::Stable
    } else {
        shared::TrendDirection::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shared::NotificationPriority;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn assignment(id: &str, due: DateTime<Utc>, status: AssignmentStatus) -> Assignment {
        Assignment {
            id: id.to_string(),
            subject_id: "1".to_string(),
            title: format!("Assignment {id}"),
            description: String::new(),
            due_date: due,
            status,
            score: None,
            max_score: 100.0,
            priority: None,
        }
    }

    fn notification(id: &str, ts: DateTime<Utc>, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            notification_type: NotificationType::Grade,
            title: format!("Notification {id}"),
            message: String::new(),
            timestamp: ts,
            read,
            priority: NotificationPriority::Medium,
        }
    }

    #[test]
    fn classify_trusts_stored_overdue_over_future_due_date() {
        let now = at(2024, 1, 15);
        let a = assignment("1", now + Duration::days(3), AssignmentStatus::Overdue);
        assert_eq!(classify_assignment(&a, now), AssignmentStatus::Overdue);
    }

    #[test]
    fn classify_derives_upcoming_for_in_progress_with_future_due_date() {
        let now = at(2024, 1, 15);
        let a = assignment("1", now + Duration::days(1), AssignmentStatus::InProgress);
        assert_eq!(classify_assignment(&a, now), AssignmentStatus::Upcoming);
    }

    #[test]
    fn classify_keeps_in_progress_once_due_date_passes() {
        let now = at(2024, 1, 15);
        let a = assignment("1", now - Duration::days(1), AssignmentStatus::InProgress);
        assert_eq!(classify_assignment(&a, now), AssignmentStatus::InProgress);
    }

    #[test]
    fn due_exactly_now_is_not_upcoming() {
        let now = at(2024, 1, 15);
        let a = assignment("1", now, AssignmentStatus::InProgress);
        assert!(!is_upcoming(&a, now));
    }

    #[test]
    fn graded_with_future_due_date_is_not_upcoming() {
        let now = at(2024, 1, 15);
        let a = assignment("1", now + Duration::days(2), AssignmentStatus::Graded);
        assert!(!is_upcoming(&a, now));
    }

    #[test]
    fn filter_all_is_identity() {
        let now = at(2024, 1, 15);
        let items = vec![
            assignment("1", now - Duration::days(1), AssignmentStatus::Overdue),
            assignment("2", now + Duration::days(1), AssignmentStatus::Upcoming),
        ];
        let once = filter_assignments(&items, AssignmentCategory::All, now);
        let twice = filter_assignments(&once, AssignmentCategory::All, now);
        assert_eq!(items, once);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_filter_key_degrades_to_all() {
        assert_eq!(AssignmentCategory::from_key("bogus"), AssignmentCategory::All);
        assert_eq!(
            NotificationCategory::from_key("bogus"),
            NotificationCategory::All
        );
    }

    #[test]
    fn sort_puts_overdue_first_then_ascending_due_date() {
        // The concrete scenario from the view contract: overdue (Jan 1),
        // upcoming (Jan 2), graded (Dec 1) must come out overdue, graded,
        // upcoming.
        let items = vec![
            assignment("overdue", at(2024, 1, 1), AssignmentStatus::Overdue),
            assignment("upcoming", at(2024, 1, 2), AssignmentStatus::Upcoming),
            assignment("graded", at(2023, 12, 1), AssignmentStatus::Graded),
        ];
        let sorted = sort_assignments(items);
        let order: Vec<&str> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(order, vec!["overdue", "graded", "upcoming"]);
    }

    #[test]
    fn sort_assignments_is_stable_and_idempotent() {
        let due = at(2024, 3, 1);
        let items = vec![
            assignment("first", due, AssignmentStatus::InProgress),
            assignment("second", due, AssignmentStatus::InProgress),
            assignment("third", due - Duration::days(2), AssignmentStatus::Overdue),
        ];
        let sorted = sort_assignments(items);
        let order: Vec<&str> = sorted.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(order, vec!["third", "first", "second"]);

        let resorted = sort_assignments(sorted.clone());
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn overdue_partition_precedes_all_non_overdue() {
        let now = at(2024, 1, 15);
        let items = vec![
            assignment("1", now + Duration::days(9), AssignmentStatus::Upcoming),
            assignment("2", now - Duration::days(1), AssignmentStatus::Overdue),
            assignment("3", now - Duration::days(30), AssignmentStatus::Graded),
            assignment("4", now + Duration::days(1), AssignmentStatus::Overdue),
        ];
        let sorted = sort_assignments(items);
        let first_non_overdue = sorted
            .iter()
            .position(|a| a.status != AssignmentStatus::Overdue)
            .unwrap();
        assert!(sorted[first_non_overdue..]
            .iter()
            .all(|a| a.status != AssignmentStatus::Overdue));
    }

    #[test]
    fn sort_notifications_most_recent_first_and_stable() {
        let base = at(2024, 2, 1);
        let items = vec![
            notification("old", base - Duration::hours(5), true),
            notification("tie_a", base, false),
            notification("tie_b", base, false),
            notification("new", base + Duration::hours(1), false),
        ];
        let sorted = sort_notifications(items);
        let order: Vec<&str> = sorted.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, vec!["new", "tie_a", "tie_b", "old"]);

        let resorted = sort_notifications(sorted.clone());
        assert_eq!(sorted, resorted);
    }

    #[test]
    fn counts_cover_full_collection_regardless_of_filter() {
        let now = at(2024, 1, 15);
        let items = vec![
            assignment("1", now + Duration::days(1), AssignmentStatus::InProgress),
            assignment("2", now - Duration::days(1), AssignmentStatus::Overdue),
            assignment("3", now - Duration::days(3), AssignmentStatus::Graded),
            assignment("4", now - Duration::days(2), AssignmentStatus::Submitted),
        ];
        let counts = assignment_counts(&items, now);
        assert_eq!(counts.total, items.len());
        assert_eq!(counts.upcoming, 1);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.graded, 1);
        assert_eq!(counts.submitted, 1);

        // Counts are a function of the collection alone; filtering does not
        // change them
        let filtered = filter_assignments(&items, AssignmentCategory::Overdue, now);
        assert_eq!(filtered.len(), 1);
        assert_eq!(assignment_counts(&items, now), counts);
    }

    #[test]
    fn stored_overdue_with_future_due_date_counts_in_both_buckets() {
        let now = at(2024, 1, 15);
        let items = vec![assignment(
            "1",
            now + Duration::days(1),
            AssignmentStatus::Overdue,
        )];
        let counts = assignment_counts(&items, now);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.upcoming, 1);
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn notification_counts_by_bucket() {
        let base = at(2024, 2, 1);
        let mut items = vec![
            notification("1", base, false),
            notification("2", base, true),
        ];
        items[1].notification_type = NotificationType::Attendance;
        let counts = notification_counts(&items);
        assert_eq!(counts.total, 2);
        assert_eq!(counts.unread, 1);
        assert_eq!(counts.grade, 1);
        assert_eq!(counts.attendance, 1);
        assert_eq!(counts.assignment, 0);
    }

    #[test]
    fn completion_rate_of_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn completion_rate_counts_graded_and_submitted() {
        let now = at(2024, 1, 15);
        let items = vec![
            assignment("1", now, AssignmentStatus::Graded),
            assignment("2", now, AssignmentStatus::Submitted),
            assignment("3", now, AssignmentStatus::InProgress),
            assignment("4", now, AssignmentStatus::Overdue),
        ];
        assert_eq!(completion_rate(&items), 50);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 1 of 8 complete = 12.5% -> 13
        let now = at(2024, 1, 15);
        let mut items: Vec<Assignment> = (0..8)
            .map(|i| assignment(&i.to_string(), now, AssignmentStatus::InProgress))
            .collect();
        items[0].status = AssignmentStatus::Graded;
        assert_eq!(completion_rate(&items), 13);
    }

    #[test]
    fn score_percentage_concrete_case() {
        assert_eq!(score_percentage(18.0, 20.0).unwrap(), 90);
    }

    #[test]
    fn score_percentage_rejects_non_positive_max() {
        assert!(score_percentage(5.0, 0.0).is_err());
        assert!(score_percentage(5.0, -10.0).is_err());
    }

    #[test]
    fn trend_bucketing_matches_stat_cards() {
        use shared::TrendDirection::*;
        assert_eq!(attendance_trend(96), Up);
        assert_eq!(attendance_trend(92), Stable);
        assert_eq!(attendance_trend(89), Down);
        assert_eq!(completion_trend(95), Up);
        assert_eq!(completion_trend(85), Stable);
        assert_eq!(completion_trend(40), Down);
    }
}
