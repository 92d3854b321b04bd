//! In-memory roster with whole-snapshot persistence on every mutation.
//!
//! # Responsibility
//! - Hold the full record sequence in insertion order.
//! - Re-persist the entire roster after each successful add/remove.
//!
//! # Invariants
//! - `add` validates before mutating; a rejected record never lands.
//! - Lookups are linear scans; there is no index to keep consistent.
//! - Persist failures are logged and swallowed: the in-memory effect of a
//!   mutation always stands even when disk was not updated.

use crate::model::student::{RollNumber, Student};
use crate::repo::snapshot::SnapshotBackend;
use crate::repo::{RepoError, RepoResult};
use log::{error, warn};

/// The record store: an ordered roster plus its snapshot backend.
///
/// Constructed explicitly and owned by whichever layer drives it; there is
/// no process-wide instance in core.
pub struct StudentStore<B: SnapshotBackend> {
    backend: B,
    students: Vec<Student>,
}

impl<B: SnapshotBackend> StudentStore<B> {
    /// Opens the store, loading the full roster from the backend.
    ///
    /// A load failure (unreadable or corrupt snapshot) is swallowed: the
    /// error is logged and the store starts empty. A missing backing file is
    /// not a failure, just an empty roster.
    pub fn open(backend: B) -> Self {
        let students = match backend.load() {
            Ok(students) => students,
            Err(err) => {
                warn!(
                    "event=roster_load_failed module=store backend={} error={err}",
                    backend.describe()
                );
                Vec::new()
            }
        };

        Self { backend, students }
    }

    /// Appends a record, then persists the full roster.
    ///
    /// # Errors
    /// - `Validation` when the record fails the field contract; the roster
    ///   is untouched.
    ///
    /// A persist failure is NOT an error here: it is logged and the
    /// in-memory add stands.
    pub fn add(&mut self, student: Student) -> RepoResult<()> {
        student.validate()?;
        self.students.push(student);
        self.persist_logged("add");
        Ok(())
    }

    /// Removes every record with the given roll number, then persists.
    ///
    /// Duplicate roll numbers are all removed in one call, even when the
    /// caller only showed the user a single matched record. Returns the
    /// number of records removed.
    ///
    /// # Errors
    /// - `NotFound` when no record matches; the roster is untouched and
    ///   nothing is persisted.
    pub fn remove(&mut self, roll_number: RollNumber) -> RepoResult<usize> {
        let before = self.students.len();
        self.students
            .retain(|student| student.roll_number != roll_number);
        let removed = before - self.students.len();

        if removed == 0 {
            return Err(RepoError::NotFound(roll_number));
        }

        self.persist_logged("remove");
        Ok(removed)
    }

    /// First record with the given roll number, linear scan.
    pub fn search(&self, roll_number: RollNumber) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.roll_number == roll_number)
    }

    /// Full roster in insertion order.
    pub fn list(&self) -> &[Student] {
        &self.students
    }

    /// Serializes the full roster and overwrites the backing file.
    ///
    /// Mutation paths call this and downgrade failures to log lines; the
    /// public form lets callers and tests observe backend errors directly.
    /// No retry, no rollback.
    pub fn persist(&self) -> RepoResult<()> {
        self.backend.save(&self.students)
    }

    fn persist_logged(&self, operation: &str) {
        if let Err(err) = self.persist() {
            // Memory is now ahead of disk; accepted, not recovered.
            error!(
                "event=roster_persist_failed module=store operation={operation} backend={} error={err}",
                self.backend.describe()
            );
        }
    }
}
