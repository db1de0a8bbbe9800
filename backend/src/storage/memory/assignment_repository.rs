//! In-memory assignment repository with full CRUD plus the by-subject
//! relation lookup.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use shared::Assignment;
use std::sync::Arc;

use super::{latency, MemoryStore};
use crate::error::StoreError;
use crate::storage::traits::AssignmentStorage;

#[derive(Clone)]
pub struct AssignmentRepository {
    store: Arc<MemoryStore>,
}

impl AssignmentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AssignmentStorage for AssignmentRepository {
    async fn get_all(&self) -> Result<Vec<Assignment>> {
        self.store.simulate(latency::GET_ALL).await;
        Ok(self.store.assignments().clone())
    }

    async fn get_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>> {
        self.store.simulate(latency::GET_BY_ID).await;
        Ok(self
            .store
            .assignments()
            .iter()
            .find(|a| a.id == assignment_id)
            .cloned())
    }

    async fn get_by_subject(&self, subject_id: &str) -> Result<Vec<Assignment>> {
        self.store.simulate(latency::GET_BY_RELATION).await;
        Ok(self
            .store
            .assignments()
            .iter()
            .filter(|a| a.subject_id == subject_id)
            .cloned()
            .collect())
    }

    async fn create(&self, mut assignment: Assignment) -> Result<Assignment> {
        self.store.simulate(latency::CREATE).await;
        assignment.id = MemoryStore::generate_id();
        debug!("Storing assignment {} ({})", assignment.id, assignment.title);
        let mut assignments = self.store.assignments();
        assignments.push(assignment.clone());
        Ok(assignment)
    }

    async fn update(&self, assignment: Assignment) -> Result<Assignment> {
        self.store.simulate(latency::UPDATE).await;
        let mut assignments = self.store.assignments();
        let slot = assignments
            .iter_mut()
            .find(|a| a.id == assignment.id)
            .ok_or_else(|| StoreError::not_found("assignment", &assignment.id))?;
        *slot = assignment.clone();
        Ok(assignment)
    }

    async fn delete(&self, assignment_id: &str) -> Result<Assignment> {
        self.store.simulate(latency::DELETE).await;
        let mut assignments = self.store.assignments();
        let index = assignments
            .iter()
            .position(|a| a.id == assignment_id)
            .ok_or_else(|| StoreError::not_found("assignment", assignment_id))?;
        Ok(assignments.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> AssignmentRepository {
        AssignmentRepository::new(Arc::new(MemoryStore::without_latency()))
    }

    #[tokio::test]
    async fn reads_hand_out_independent_clones() {
        let repo = repository();
        let mut first = repo.get_all().await.unwrap();
        first[0].title = "mutated locally".to_string();

        let second = repo.get_all().await.unwrap();
        assert_ne!(second[0].title, "mutated locally");
    }

    #[tokio::test]
    async fn get_by_subject_filters_on_foreign_key() {
        let repo = repository();
        let math = repo.get_by_subject("1").await.unwrap();
        assert!(!math.is_empty());
        assert!(math.iter().all(|a| a.subject_id == "1"));
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_and_stores() {
        let repo = repository();
        let before = repo.get_all().await.unwrap().len();

        let mut template = repo.get_by_id("1").await.unwrap().unwrap();
        template.title = "Extra Credit".to_string();
        let created = repo.create(template).await.unwrap();

        assert_ne!(created.id, "1");
        assert_eq!(repo.get_all().await.unwrap().len(), before + 1);
        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "Extra Credit");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = repository();
        let mut assignment = repo.get_by_id("1").await.unwrap().unwrap();
        assignment.id = "does-not-exist".to_string();

        let err = repo.update(assignment).await.unwrap_err();
        let store_err = err.downcast::<StoreError>().unwrap();
        assert_eq!(store_err, StoreError::not_found("assignment", "does-not-exist"));
    }

    #[tokio::test]
    async fn delete_removes_and_returns_record() {
        let repo = repository();
        let deleted = repo.delete("1").await.unwrap();
        assert_eq!(deleted.id, "1");
        assert!(repo.get_by_id("1").await.unwrap().is_none());
        assert!(repo.delete("1").await.is_err());
    }
}
