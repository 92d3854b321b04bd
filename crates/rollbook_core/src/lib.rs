//! Core domain logic for Rollbook.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{RollNumber, Student, StudentValidationError};
pub use repo::snapshot::{JsonLinesBackend, MemoryBackend, SnapshotBackend};
pub use repo::student_store::StudentStore;
pub use repo::{RepoError, RepoResult};
pub use service::student_service::StudentService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
