use chrono::{DateTime, Utc};
use shared::{Assignment, AssignmentStatus};

/// Input for creating an assignment; the store assigns the id
#[derive(Debug, Clone)]
pub struct CreateAssignmentCommand {
    pub subject_id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub score: Option<f64>,
    pub max_score: f64,
    pub priority: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateAssignmentResult {
    pub assignment: Assignment,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct UpdateAssignmentCommand {
    pub assignment_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<AssignmentStatus>,
    pub score: Option<f64>,
    pub max_score: Option<f64>,
    pub priority: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAssignmentResult {
    pub assignment: Assignment,
}

#[derive(Debug, Clone)]
pub struct DeleteAssignmentCommand {
    pub assignment_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteAssignmentResult {
    pub assignment: Assignment,
}
