use anyhow::Result;
use log::{info, warn};
use shared::Student;
use std::sync::Arc;

use crate::storage::traits::StudentStorage;

/// Service for reading student records. The dashboard shows one student at
/// a time; with a single seeded student the first record is the selected one.
#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentStorage>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentStorage>) -> Self {
        Self { repository }
    }

    /// List all students
    pub async fn get_students(&self) -> Result<Vec<Student>> {
        let students = self.repository.get_all().await?;
        info!("Loaded {} students", students.len());
        Ok(students)
    }

    /// Get a student by ID
    pub async fn get_student(&self, student_id: &str) -> Result<Option<Student>> {
        let student = self.repository.get_by_id(student_id).await?;
        if student.is_none() {
            warn!("Student not found: {}", student_id);
        }
        Ok(student)
    }

    /// The student the dashboard is currently about (first record)
    pub async fn get_selected_student(&self) -> Result<Option<Student>> {
        Ok(self.repository.get_all().await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::StudentRepository;
    use crate::storage::MemoryStore;

    fn service() -> StudentService {
        let store = Arc::new(MemoryStore::without_latency());
        StudentService::new(Arc::new(StudentRepository::new(store)))
    }

    #[tokio::test]
    async fn selected_student_is_first_record() {
        let service = service();
        let all = service.get_students().await.unwrap();
        let selected = service.get_selected_student().await.unwrap().unwrap();
        assert_eq!(selected, all[0]);
    }

    #[tokio::test]
    async fn unknown_student_is_none() {
        let service = service();
        assert!(service.get_student("missing").await.unwrap().is_none());
    }
}
