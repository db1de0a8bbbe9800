//! # Storage Module
//!
//! Record-store layer: abstraction traits plus the in-memory implementation
//! that backs the dashboard (seeded from static data at startup, simulated
//! fetch latency, caller-owned clones on every read).

pub mod memory;
pub mod preferences_repository;
pub mod traits;

pub use memory::MemoryStore;
pub use preferences_repository::PreferencesRepository;
