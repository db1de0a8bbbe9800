//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! record-store backends to be used interchangeably in the domain layer.
//!
//! All read operations return clones: a caller may mutate whatever
//! it receives without affecting the store. Mutations that name an absent id
//! fail with [`crate::error::StoreError::NotFound`] carried inside the
//! `anyhow::Error`.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Assignment, Notification, NotificationPreferences, Student, Subject};

/// Trait defining the interface for student record operations
#[async_trait]
pub trait StudentStorage: Send + Sync {
    /// List all students in seed order
    async fn get_all(&self) -> Result<Vec<Student>>;

    /// Retrieve a specific student by ID
    async fn get_by_id(&self, student_id: &str) -> Result<Option<Student>>;
}

/// Trait defining the interface for subject record operations
#[async_trait]
pub trait SubjectStorage: Send + Sync {
    /// List all subjects in seed order
    async fn get_all(&self) -> Result<Vec<Subject>>;

    /// Retrieve a specific subject by ID
    async fn get_by_id(&self, subject_id: &str) -> Result<Option<Subject>>;
}

/// Trait defining the interface for assignment record operations
#[async_trait]
pub trait AssignmentStorage: Send + Sync {
    /// List all assignments in insertion order
    async fn get_all(&self) -> Result<Vec<Assignment>>;

    /// Retrieve a specific assignment by ID
    async fn get_by_id(&self, assignment_id: &str) -> Result<Option<Assignment>>;

    /// List assignments referencing the given subject, in insertion order
    async fn get_by_subject(&self, subject_id: &str) -> Result<Vec<Assignment>>;

    /// Store a new assignment; the store assigns a fresh id and returns the
    /// stored copy
    async fn create(&self, assignment: Assignment) -> Result<Assignment>;

    /// Replace the stored assignment with the same id
    async fn update(&self, assignment: Assignment) -> Result<Assignment>;

    /// Remove an assignment, returning the removed record
    async fn delete(&self, assignment_id: &str) -> Result<Assignment>;
}

/// Trait defining the interface for notification record operations
#[async_trait]
pub trait NotificationStorage: Send + Sync {
    /// List all notifications in insertion order (newest first, since new
    /// notifications are inserted at the front)
    async fn get_all(&self) -> Result<Vec<Notification>>;

    /// Retrieve a specific notification by ID
    async fn get_by_id(&self, notification_id: &str) -> Result<Option<Notification>>;

    /// Number of notifications still unread
    async fn unread_count(&self) -> Result<usize>;

    /// Flip a notification to read. One-way: a read notification stays read.
    async fn mark_as_read(&self, notification_id: &str) -> Result<Notification>;

    /// Flip every notification to read and return the updated collection.
    /// Idempotent.
    async fn mark_all_as_read(&self) -> Result<Vec<Notification>>;

    /// Store a new notification at the front of the collection; the store
    /// assigns id and timestamp and clears the read flag
    async fn create(&self, notification: Notification) -> Result<Notification>;

    /// Remove a notification, returning the removed record
    async fn delete(&self, notification_id: &str) -> Result<Notification>;
}

/// Trait defining the interface for the persisted settings record
pub trait PreferencesStorage: Send + Sync {
    /// Load the persisted preferences, falling back to defaults when the
    /// record is absent or unreadable
    fn load(&self) -> Result<NotificationPreferences>;

    /// Overwrite the persisted record wholesale
    fn save(&self, preferences: &NotificationPreferences) -> Result<()>;
}
