//! Student use-case service.
//!
//! # Responsibility
//! - Provide the add/remove/search/list entry points the form UI needs.
//! - Delegate persistence to the store; never bypass its validation.
//!
//! # Invariants
//! - Service APIs are storage-agnostic over the snapshot backend.
//! - `remove_student` preserves the store's multi-delete of duplicate roll
//!   numbers while still reporting the single record the UI matched.

use crate::model::student::{RollNumber, Student};
use crate::repo::snapshot::SnapshotBackend;
use crate::repo::student_store::StudentStore;
use crate::repo::{RepoError, RepoResult};

/// Use-case wrapper around the record store.
pub struct StudentService<B: SnapshotBackend> {
    store: StudentStore<B>,
}

impl<B: SnapshotBackend> StudentService<B> {
    /// Creates a service owning the provided store.
    pub fn new(store: StudentStore<B>) -> Self {
        Self { store }
    }

    /// Opens a store on `backend` and wraps it.
    pub fn open(backend: B) -> Self {
        Self::new(StudentStore::open(backend))
    }

    /// Records a new student.
    ///
    /// Returns the constructed record so the caller can render it into the
    /// output log.
    ///
    /// # Errors
    /// - `Validation` for an empty name or grade; the roster is untouched.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        roll_number: RollNumber,
        grade: impl Into<String>,
    ) -> RepoResult<Student> {
        let student = Student::new(name, roll_number, grade);
        self.store.add(student.clone())?;
        Ok(student)
    }

    /// Removes all records with `roll_number`.
    ///
    /// Returns the first matched record (for the "removed" message) together
    /// with the count actually removed, which can exceed one when duplicates
    /// exist.
    ///
    /// # Errors
    /// - `NotFound` when no record matches; the roster is untouched.
    pub fn remove_student(&mut self, roll_number: RollNumber) -> RepoResult<(Student, usize)> {
        let matched = self
            .store
            .search(roll_number)
            .cloned()
            .ok_or(RepoError::NotFound(roll_number))?;
        let removed = self.store.remove(roll_number)?;
        Ok((matched, removed))
    }

    /// First record with `roll_number`, if any.
    pub fn search_student(&self, roll_number: RollNumber) -> Option<&Student> {
        self.store.search(roll_number)
    }

    /// Full roster in insertion order.
    pub fn list_students(&self) -> &[Student] {
        self.store.list()
    }
}
