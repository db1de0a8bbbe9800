use anyhow::Result;
use log::info;
use shared::{Assignment, AssignmentStatus};
use std::sync::Arc;

use crate::domain::commands::assignments::{
    CreateAssignmentCommand, CreateAssignmentResult, DeleteAssignmentCommand,
    DeleteAssignmentResult, UpdateAssignmentCommand, UpdateAssignmentResult,
};
use crate::error::StoreError;
use crate::storage::traits::AssignmentStorage;

/// Service for assignment records: reads for the views, validated CRUD for
/// the mutation surface of the record store.
#[derive(Clone)]
pub struct AssignmentService {
    repository: Arc<dyn AssignmentStorage>,
}

impl AssignmentService {
    pub fn new(repository: Arc<dyn AssignmentStorage>) -> Self {
        Self { repository }
    }

    /// List all assignments
    pub async fn get_assignments(&self) -> Result<Vec<Assignment>> {
        let assignments = self.repository.get_all().await?;
        info!("Loaded {} assignments", assignments.len());
        Ok(assignments)
    }

    /// Get an assignment by ID
    pub async fn get_assignment(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        self.repository.get_by_id(assignment_id).await
    }

    /// List assignments for one subject
    pub async fn get_assignments_by_subject(&self, subject_id: &str) -> Result<Vec<Assignment>> {
        let assignments = self.repository.get_by_subject(subject_id).await?;
        info!(
            "Loaded {} assignments for subject {}",
            assignments.len(),
            subject_id
        );
        Ok(assignments)
    }

    /// Create a new assignment
    pub async fn create_assignment(
        &self,
        command: CreateAssignmentCommand,
    ) -> Result<CreateAssignmentResult> {
        info!("Creating assignment: {}", command.title);

        let assignment = Assignment {
            id: String::new(), // assigned by the store
            subject_id: command.subject_id,
            title: command.title,
            description: command.description,
            due_date: command.due_date,
            status: command.status,
            score: command.score,
            max_score: command.max_score,
            priority: command.priority,
        };
        Self::validate(&assignment)?;

        let assignment = self.repository.create(assignment).await?;
        info!("Created assignment {} ({})", assignment.id, assignment.title);
        Ok(CreateAssignmentResult { assignment })
    }

    /// Apply a partial update to an existing assignment
    pub async fn update_assignment(
        &self,
        command: UpdateAssignmentCommand,
    ) -> Result<UpdateAssignmentResult> {
        info!("Updating assignment: {}", command.assignment_id);

        let mut assignment = self
            .repository
            .get_by_id(&command.assignment_id)
            .await?
            .ok_or_else(|| StoreError::not_found("assignment", &command.assignment_id))?;

        if let Some(title) = command.title {
            assignment.title = title;
        }
        if let Some(description) = command.description {
            assignment.description = description;
        }
        if let Some(due_date) = command.due_date {
            assignment.due_date = due_date;
        }
        if let Some(status) = command.status {
            assignment.status = status;
        }
        if let Some(score) = command.score {
            assignment.score = Some(score);
        }
        if let Some(max_score) = command.max_score {
            assignment.max_score = max_score;
        }
        if let Some(priority) = command.priority {
            assignment.priority = Some(priority);
        }
        Self::validate(&assignment)?;

        let assignment = self.repository.update(assignment).await?;
        Ok(UpdateAssignmentResult { assignment })
    }

    /// Delete an assignment
    pub async fn delete_assignment(
        &self,
        command: DeleteAssignmentCommand,
    ) -> Result<DeleteAssignmentResult> {
        info!("Deleting assignment: {}", command.assignment_id);
        let assignment = self.repository.delete(&command.assignment_id).await?;
        Ok(DeleteAssignmentResult { assignment })
    }

    /// Domain rules every stored assignment must satisfy
    fn validate(assignment: &Assignment) -> Result<(), StoreError> {
        if assignment.max_score <= 0.0 {
            return Err(StoreError::validation(format!(
                "max score must be positive, got {}",
                assignment.max_score
            )));
        }
        if assignment.status == AssignmentStatus::Graded {
            match assignment.score {
                None => {
                    return Err(StoreError::validation(
                        "a graded assignment must have a score",
                    ))
                }
                Some(score) if score < 0.0 || score > assignment.max_score => {
                    return Err(StoreError::validation(format!(
                        "score {} outside 0..={}",
                        score, assignment.max_score
                    )))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::AssignmentRepository;
    use crate::storage::MemoryStore;
    use chrono::Utc;

    fn service() -> AssignmentService {
        let store = Arc::new(MemoryStore::without_latency());
        AssignmentService::new(Arc::new(AssignmentRepository::new(store)))
    }

    fn create_command() -> CreateAssignmentCommand {
        CreateAssignmentCommand {
            subject_id: "1".to_string(),
            title: "Chapter 7 Review".to_string(),
            description: "Even-numbered problems.".to_string(),
            due_date: Utc::now(),
            status: AssignmentStatus::Upcoming,
            score: None,
            max_score: 20.0,
            priority: None,
        }
    }

    #[tokio::test]
    async fn create_and_fetch() {
        let service = service();
        let created = service.create_assignment(create_command()).await.unwrap();
        let fetched = service
            .get_assignment(&created.assignment.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.title, "Chapter 7 Review");
    }

    #[tokio::test]
    async fn create_rejects_non_positive_max_score() {
        let service = service();
        let mut command = create_command();
        command.max_score = 0.0;
        assert!(service.create_assignment(command).await.is_err());
    }

    #[tokio::test]
    async fn graded_requires_score_within_bounds() {
        let service = service();

        let mut missing_score = create_command();
        missing_score.status = AssignmentStatus::Graded;
        assert!(service.create_assignment(missing_score).await.is_err());

        let mut score_too_high = create_command();
        score_too_high.status = AssignmentStatus::Graded;
        score_too_high.score = Some(25.0);
        assert!(service.create_assignment(score_too_high).await.is_err());

        let mut valid = create_command();
        valid.status = AssignmentStatus::Graded;
        valid.score = Some(18.0);
        assert!(service.create_assignment(valid).await.is_ok());
    }

    #[tokio::test]
    async fn partial_update_keeps_unset_fields() {
        let service = service();
        let original = service
            .get_assignment("1")
            .await
            .unwrap()
            .unwrap();

        let command = UpdateAssignmentCommand {
            assignment_id: "1".to_string(),
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = service.update_assignment(command).await.unwrap().assignment;

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.due_date, original.due_date);
    }

    #[tokio::test]
    async fn update_unknown_assignment_fails() {
        let service = service();
        let command = UpdateAssignmentCommand {
            assignment_id: "missing".to_string(),
            title: Some("x".to_string()),
            ..Default::default()
        };
        assert!(service.update_assignment(command).await.is_err());
    }

    #[tokio::test]
    async fn delete_round_trip() {
        let service = service();
        let deleted = service
            .delete_assignment(DeleteAssignmentCommand {
                assignment_id: "1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(deleted.assignment.id, "1");
        assert!(service.get_assignment("1").await.unwrap().is_none());
    }
}
