//! # Domain Module
//!
//! Services over the record store, plus the pure derivation layer every
//! view renders from. Services orchestrate and validate; `derivation` holds
//! the logic worth testing on its own.

pub mod assignment_service;
pub mod commands;
pub mod derivation;
pub mod notification_service;
pub mod preferences_service;
pub mod student_service;
pub mod subject_service;

pub use assignment_service::AssignmentService;
pub use notification_service::NotificationService;
pub use preferences_service::PreferencesService;
pub use student_service::StudentService;
pub use subject_service::{SubjectService, UNKNOWN_SUBJECT};
