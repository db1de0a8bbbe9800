//! # Seed Data
//!
//! Static demo records the store is initialized from. Dates are generated
//! relative to the current instant so the upcoming/overdue buckets stay
//! meaningful no matter when the app is launched.

use chrono::{Duration, Utc};
use shared::{
    Assignment, AssignmentStatus, Notification, NotificationPriority, NotificationType, Student,
    Subject, TrendDirection,
};

pub fn students() -> Vec<Student> {
    vec![Student {
        id: "1".to_string(),
        name: "Emma Johnson".to_string(),
        grade_level: "8th Grade".to_string(),
        school: "Lincoln Middle School".to_string(),
        gpa: 3.7,
        attendance_rate: 96,
    }]
}

pub fn subjects() -> Vec<Subject> {
    let subject = |id: &str, name: &str, teacher: &str, grade: &str, pct: u8, trend| Subject {
        id: id.to_string(),
        name: name.to_string(),
        teacher: teacher.to_string(),
        current_grade: grade.to_string(),
        grade_percentage: pct,
        trend,
    };

    vec![
        subject("1", "Mathematics", "Mr. Rodriguez", "A-", 91, TrendDirection::Up),
        subject("2", "English Language Arts", "Ms. Chen", "B+", 88, TrendDirection::Stable),
        subject("3", "Science", "Dr. Patel", "A", 94, TrendDirection::Up),
        subject("4", "Social Studies", "Mrs. Thompson", "B", 84, TrendDirection::Down),
        subject("5", "Spanish", "Sr. Morales", "A-", 90, TrendDirection::Stable),
        subject("6", "Art", "Ms. Okafor", "A", 97, TrendDirection::Up),
    ]
}

pub fn assignments() -> Vec<Assignment> {
    let now = Utc::now();
    let assignment = |id: &str,
                      subject_id: &str,
                      title: &str,
                      description: &str,
                      due_offset_days: i64,
                      status: AssignmentStatus,
                      score: Option<f64>,
                      max_score: f64,
                      priority: Option<&str>| Assignment {
        id: id.to_string(),
        subject_id: subject_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_date: now + Duration::days(due_offset_days),
        status,
        score,
        max_score,
        priority: priority.map(str::to_string),
    };

    vec![
        assignment(
            "1",
            "1",
            "Algebra Problem Set 12",
            "Quadratic equations, problems 1-24.",
            3,
            AssignmentStatus::InProgress,
            None,
            50.0,
            Some("High"),
        ),
        assignment(
            "2",
            "2",
            "Book Report: The Giver",
            "Five-paragraph analysis of theme and character.",
            -2,
            AssignmentStatus::Overdue,
            None,
            100.0,
            Some("High"),
        ),
        assignment(
            "3",
            "3",
            "Lab Report: Photosynthesis",
            "Write up last week's chloroplast observation lab.",
            -7,
            AssignmentStatus::Graded,
            Some(18.0),
            20.0,
            None,
        ),
        assignment(
            "4",
            "1",
            "Geometry Quiz Corrections",
            "Rework missed problems from the chapter 6 quiz.",
            -1,
            AssignmentStatus::Submitted,
            None,
            25.0,
            None,
        ),
        assignment(
            "5",
            "4",
            "Civil War Timeline",
            "Illustrated timeline of ten major events.",
            5,
            AssignmentStatus::Upcoming,
            None,
            40.0,
            Some("Medium"),
        ),
        assignment(
            "6",
            "5",
            "Oral Presentation: Mi Familia",
            "Three-minute presentation with vocabulary list.",
            7,
            AssignmentStatus::Upcoming,
            None,
            30.0,
            None,
        ),
        assignment(
            "7",
            "3",
            "Element Flash Cards",
            "First 30 elements with atomic numbers.",
            -10,
            AssignmentStatus::Graded,
            Some(28.0),
            30.0,
            None,
        ),
        assignment(
            "8",
            "6",
            "Self-Portrait Study",
            "Charcoal self-portrait, shading techniques from class.",
            2,
            AssignmentStatus::InProgress,
            None,
            50.0,
            Some("Low"),
        ),
        assignment(
            "9",
            "2",
            "Vocabulary Unit 9",
            "Definitions and sentences for all 20 words.",
            -4,
            AssignmentStatus::Overdue,
            None,
            20.0,
            Some("Medium"),
        ),
        assignment(
            "10",
            "4",
            "Map Skills Worksheet",
            "Latitude and longitude practice.",
            -6,
            AssignmentStatus::Graded,
            Some(36.0),
            40.0,
            None,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let now = Utc::now();
    let notification = |id: &str,
                        notification_type: NotificationType,
                        title: &str,
                        message: &str,
                        age_hours: i64,
                        read: bool,
                        priority: NotificationPriority| Notification {
        id: id.to_string(),
        notification_type,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: now - Duration::hours(age_hours),
        read,
        priority,
    };

    vec![
        notification(
            "1",
            NotificationType::Assignment,
            "Assignment Overdue",
            "Book Report: The Giver was due two days ago and has not been submitted.",
            2,
            false,
            NotificationPriority::High,
        ),
        notification(
            "2",
            NotificationType::Grade,
            "New Grade Posted",
            "Lab Report: Photosynthesis was graded: 18/20 (90%).",
            6,
            false,
            NotificationPriority::Medium,
        ),
        notification(
            "3",
            NotificationType::Attendance,
            "Tardy Recorded",
            "Emma arrived 10 minutes late to first period on Tuesday.",
            26,
            false,
            NotificationPriority::Low,
        ),
        notification(
            "4",
            NotificationType::Grade,
            "Grade Below Threshold",
            "Social Studies dropped to 84%, below your 85% alert threshold.",
            48,
            true,
            NotificationPriority::High,
        ),
        notification(
            "5",
            NotificationType::Assignment,
            "Due Date Reminder",
            "Civil War Timeline is due in 5 days.",
            50,
            true,
            NotificationPriority::Medium,
        ),
        notification(
            "6",
            NotificationType::Generic,
            "Parent-Teacher Conferences",
            "Conference sign-ups open Monday. Slots fill quickly.",
            72,
            true,
            NotificationPriority::Low,
        ),
        notification(
            "7",
            NotificationType::Attendance,
            "Perfect Attendance Week",
            "Emma attended every class last week.",
            120,
            true,
            NotificationPriority::Low,
        ),
    ]
}
