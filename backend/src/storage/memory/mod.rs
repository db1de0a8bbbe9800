//! # In-Memory Storage Module
//!
//! This module provides the in-memory record store behind the dashboard.
//! Collections are seeded once from static data when the store is built and
//! live for the lifetime of the process; nothing is written to disk except
//! the preferences record, which has its own repository.
//!
//! ## Behavior
//!
//! - Every read hands out clones, so callers can never reach the shared
//!   collections through a returned value.
//! - Every operation sleeps for a fixed per-operation latency before touching
//!   the collection, mimicking a remote fetch. Tests build the store with
//!   [`MemoryStore::without_latency`] to skip the sleeps.
//! - Mutations that name an absent id fail with `StoreError::NotFound`.

pub mod assignment_repository;
pub mod notification_repository;
pub mod seed;
pub mod student_repository;
pub mod subject_repository;

pub use assignment_repository::AssignmentRepository;
pub use notification_repository::NotificationRepository;
pub use student_repository::StudentRepository;
pub use subject_repository::SubjectRepository;

use chrono::Utc;
use shared::{Assignment, Notification, Student, Subject};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

/// Per-operation simulated fetch latencies, matching the original mock
/// service layer.
pub(crate) mod latency {
    use std::time::Duration;

    pub const GET_ALL: Duration = Duration::from_millis(300);
    pub const GET_BY_ID: Duration = Duration::from_millis(200);
    pub const GET_BY_RELATION: Duration = Duration::from_millis(250);
    pub const CREATE: Duration = Duration::from_millis(400);
    pub const UPDATE: Duration = Duration::from_millis(300);
    pub const DELETE: Duration = Duration::from_millis(300);
    pub const UNREAD_COUNT: Duration = Duration::from_millis(150);
    pub const MARK_AS_READ: Duration = Duration::from_millis(200);
    pub const MARK_ALL_AS_READ: Duration = Duration::from_millis(300);
}

/// Shared connection handle for the in-memory repositories.
///
/// Plays the role the CSV/SQL connection plays in a file/database-backed
/// store: repositories hold an `Arc<MemoryStore>` and go through it for
/// every operation.
pub struct MemoryStore {
    simulate_latency: bool,
    pub(crate) students: Mutex<Vec<Student>>,
    pub(crate) subjects: Mutex<Vec<Subject>>,
    pub(crate) assignments: Mutex<Vec<Assignment>>,
    pub(crate) notifications: Mutex<Vec<Notification>>,
}

impl MemoryStore {
    /// Build a store seeded with the static demo data, latency enabled
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Build a seeded store that skips the simulated latency (tests)
    pub fn without_latency() -> Self {
        Self::build(false)
    }

    fn build(simulate_latency: bool) -> Self {
        Self {
            simulate_latency,
            students: Mutex::new(seed::students()),
            subjects: Mutex::new(seed::subjects()),
            assignments: Mutex::new(seed::assignments()),
            notifications: Mutex::new(seed::notifications()),
        }
    }

    /// Sleep for the given simulated fetch latency, unless disabled
    pub(crate) async fn simulate(&self, duration: Duration) {
        if self.simulate_latency {
            sleep(duration).await;
        }
    }

    /// Generate a record id from the current epoch milliseconds
    pub(crate) fn generate_id() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    pub(crate) fn students(&self) -> MutexGuard<'_, Vec<Student>> {
        lock(&self.students)
    }

    pub(crate) fn subjects(&self) -> MutexGuard<'_, Vec<Subject>> {
        lock(&self.subjects)
    }

    pub(crate) fn assignments(&self) -> MutexGuard<'_, Vec<Assignment>> {
        lock(&self.assignments)
    }

    pub(crate) fn notifications(&self) -> MutexGuard<'_, Vec<Notification>> {
        lock(&self.notifications)
    }
}

/// Recover the guard even if a panicking thread poisoned the mutex; the
/// collections are plain Vecs and stay structurally valid.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
