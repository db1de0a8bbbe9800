//! # GradeLink Backend
//!
//! Domain services and record store for the parent dashboard. The frontend
//! constructs one [`Backend`] and reaches every service through it; the
//! record collections are seeded in memory at startup and only the
//! notification-preferences record touches disk.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod error;
pub mod storage;

pub use error::StoreError;

use domain::{
    AssignmentService, NotificationService, PreferencesService, StudentService, SubjectService,
};
use storage::memory::{
    AssignmentRepository, NotificationRepository, StudentRepository, SubjectRepository,
};
use storage::{MemoryStore, PreferencesRepository};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub student_service: StudentService,
    pub subject_service: SubjectService,
    pub assignment_service: AssignmentService,
    pub notification_service: NotificationService,
    pub preferences_service: PreferencesService,
}

impl Backend {
    /// Create a backend using the platform data directory for persisted
    /// settings
    pub fn new() -> Result<Self> {
        let data_dir = ProjectDirs::from("", "", "GradeLink")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("could not determine a platform data directory")?;
        Self::with_data_dir(data_dir)
    }

    /// Create a backend that keeps persisted settings under the given
    /// directory (tests point this at a temp dir)
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {:?}", data_dir))?;
        info!("Backend data directory: {:?}", data_dir);
        Ok(Self::build(Arc::new(MemoryStore::new()), data_dir))
    }

    fn build(store: Arc<MemoryStore>, data_dir: PathBuf) -> Self {
        Self {
            student_service: StudentService::new(Arc::new(StudentRepository::new(store.clone()))),
            subject_service: SubjectService::new(Arc::new(SubjectRepository::new(store.clone()))),
            assignment_service: AssignmentService::new(Arc::new(AssignmentRepository::new(
                store.clone(),
            ))),
            notification_service: NotificationService::new(Arc::new(NotificationRepository::new(
                store,
            ))),
            preferences_service: PreferencesService::new(Arc::new(PreferencesRepository::new(
                data_dir,
            ))),
        }
    }

    /// Backend over a latency-free store, for tests that drive services
    /// end to end
    pub fn for_tests(data_dir: PathBuf) -> Self {
        Self::build(Arc::new(MemoryStore::without_latency()), data_dir)
    }
}
