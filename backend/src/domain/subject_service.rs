use anyhow::Result;
use log::{info, warn};
use shared::Subject;
use std::sync::Arc;

use crate::storage::traits::SubjectStorage;

/// Label shown when an assignment references a subject id that is not in
/// the collection. The foreign key is not enforced, so the view degrades
/// instead of failing.
pub const UNKNOWN_SUBJECT: &str = "Unknown Subject";

/// Service for reading subject records
#[derive(Clone)]
pub struct SubjectService {
    repository: Arc<dyn SubjectStorage>,
}

impl SubjectService {
    pub fn new(repository: Arc<dyn SubjectStorage>) -> Self {
        Self { repository }
    }

    /// List all subjects
    pub async fn get_subjects(&self) -> Result<Vec<Subject>> {
        let subjects = self.repository.get_all().await?;
        info!("Loaded {} subjects", subjects.len());
        Ok(subjects)
    }

    /// Get a subject by ID
    pub async fn get_subject(&self, subject_id: &str) -> Result<Option<Subject>> {
        let subject = self.repository.get_by_id(subject_id).await?;
        if subject.is_none() {
            warn!("Subject not found: {}", subject_id);
        }
        Ok(subject)
    }

    /// Resolve a subject id to its display name against an already-loaded
    /// collection, degrading to [`UNKNOWN_SUBJECT`]
    pub fn subject_name(subjects: &[Subject], subject_id: &str) -> String {
        subjects
            .iter()
            .find(|s| s.id == subject_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::SubjectRepository;
    use crate::storage::MemoryStore;

    fn service() -> SubjectService {
        let store = Arc::new(MemoryStore::without_latency());
        SubjectService::new(Arc::new(SubjectRepository::new(store)))
    }

    #[tokio::test]
    async fn resolves_known_subject_name() {
        let service = service();
        let subjects = service.get_subjects().await.unwrap();
        let name = SubjectService::subject_name(&subjects, &subjects[0].id);
        assert_eq!(name, subjects[0].name);
    }

    #[tokio::test]
    async fn unresolved_foreign_key_degrades_to_placeholder() {
        let service = service();
        let subjects = service.get_subjects().await.unwrap();
        assert_eq!(
            SubjectService::subject_name(&subjects, "999"),
            UNKNOWN_SUBJECT
        );
    }
}
