//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record shared by store and presentation.
//! - Provide the validation applied on every store write path.
//!
//! # Invariants
//! - `name` and `grade` are non-empty (whitespace-only counts as empty) once
//!   `validate()` has passed.
//! - `roll_number` carries no uniqueness guarantee; first match wins for
//!   search, and removal by roll number deletes every match.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Roll number as entered on the form.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RollNumber = i32;

/// Field-level validation failure for a student record.
///
/// Surfaced to the user as a blocking dialog by the presentation layer;
/// the store is never mutated when validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentValidationError {
    EmptyName,
    EmptyGrade,
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::EmptyGrade => write!(f, "grade cannot be empty"),
        }
    }
}

impl Error for StudentValidationError {}

/// Canonical student record.
///
/// Fields are set once at construction; every roster change goes through
/// store add/remove rather than in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Display name as entered on the form.
    pub name: String,
    /// Form-entered integer key. Duplicates are permitted.
    pub roll_number: RollNumber,
    /// Free-form grade label ("A", "B+", ...).
    pub grade: String,
}

impl Student {
    /// Creates a record from form-level fields.
    ///
    /// Construction does not validate; write paths call `validate()` so a
    /// rejected record never reaches the roster.
    pub fn new(name: impl Into<String>, roll_number: RollNumber, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roll_number,
            grade: grade.into(),
        }
    }

    /// Checks the non-empty field contract.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace-only.
    /// - `EmptyGrade` when `grade` is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        if self.name.trim().is_empty() {
            return Err(StudentValidationError::EmptyName);
        }
        if self.grade.trim().is_empty() {
            return Err(StudentValidationError::EmptyGrade);
        }
        Ok(())
    }
}

impl Display for Student {
    /// Renders the record in the output-log shape used by the form UI.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name={}\nRoll Number={}\nGrade={}",
            self.name, self.roll_number, self.grade
        )
    }
}
