//! Record store layer: snapshot persistence contracts and the in-memory
//! roster that sits on top of them.
//!
//! # Responsibility
//! - Define the whole-roster persistence contract (`SnapshotBackend`).
//! - Keep file-format details out of service/business orchestration.
//!
//! # Invariants
//! - Store write paths call `Student::validate()` before mutating.
//! - Every successful mutation persists the full roster snapshot; persist
//!   failures are logged, never surfaced, and never roll back memory.

use crate::model::student::{RollNumber, StudentValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod snapshot;
pub mod student_store;

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error for persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(StudentValidationError),
    Io(std::io::Error),
    InvalidData(String),
    NotFound(RollNumber),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
            Self::NotFound(roll_number) => write!(f, "no student with roll number {roll_number}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<StudentValidationError> for RepoError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
