//! In-memory student repository. Students are read-only in every user flow,
//! so only the lookup operations are exposed.

use anyhow::Result;
use async_trait::async_trait;
use shared::Student;
use std::sync::Arc;

use super::{latency, MemoryStore};
use crate::storage::traits::StudentStorage;

#[derive(Clone)]
pub struct StudentRepository {
    store: Arc<MemoryStore>,
}

impl StudentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StudentStorage for StudentRepository {
    async fn get_all(&self) -> Result<Vec<Student>> {
        self.store.simulate(latency::GET_ALL).await;
        Ok(self.store.students().clone())
    }

    async fn get_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        self.store.simulate(latency::GET_BY_ID).await;
        Ok(self
            .store
            .students()
            .iter()
            .find(|s| s.id == student_id)
            .cloned())
    }
}
