//! In-memory subject repository. Subjects are read-only in every user flow,
//! so only the lookup operations are exposed.

use anyhow::Result;
use async_trait::async_trait;
use shared::Subject;
use std::sync::Arc;

use super::{latency, MemoryStore};
use crate::storage::traits::SubjectStorage;

#[derive(Clone)]
pub struct SubjectRepository {
    store: Arc<MemoryStore>,
}

impl SubjectRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubjectStorage for SubjectRepository {
    async fn get_all(&self) -> Result<Vec<Subject>> {
        self.store.simulate(latency::GET_ALL).await;
        Ok(self.store.subjects().clone())
    }

    async fn get_by_id(&self, subject_id: &str) -> Result<Option<Subject>> {
        self.store.simulate(latency::GET_BY_ID).await;
        Ok(self
            .store
            .subjects()
            .iter()
            .find(|s| s.id == subject_id)
            .cloned())
    }
}
