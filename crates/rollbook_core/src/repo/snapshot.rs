//! Snapshot backends for whole-roster persistence.
//!
//! # Responsibility
//! - Load and save the full record sequence in one shot.
//! - Pin down the on-disk format so load and save always agree.
//!
//! # Invariants
//! - A missing backing file loads as an empty roster, not an error.
//! - Save overwrites the whole file; there are no partial or incremental
//!   writes, no locking, and no atomic rename.
//!
//! # On-disk format
//! JSON Lines: one serialized `Student` per `\n`-terminated line, UTF-8,
//! e.g. `{"name":"Alice","roll_number":1,"grade":"A"}`. The format is fixed
//! and is not meant to interoperate with files written by other
//! implementations.

use crate::model::student::Student;
use crate::repo::{RepoError, RepoResult};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Whole-roster persistence seam.
///
/// The store never talks to the filesystem directly; substituting a
/// different backend must not require touching store or presentation code.
pub trait SnapshotBackend {
    /// Loads the full roster in stored order.
    fn load(&self) -> RepoResult<Vec<Student>>;

    /// Overwrites the backing storage with the full roster.
    ///
    /// A failure may leave disk behind memory; recovering that gap is the
    /// caller's (non-)concern, not the backend's.
    fn save(&self, students: &[Student]) -> RepoResult<()>;

    /// Human-readable location for diagnostic log lines.
    fn describe(&self) -> String;
}

/// File-backed snapshot backend using the JSON Lines format above.
pub struct JsonLinesBackend {
    path: PathBuf,
}

impl JsonLinesBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonLinesBackend {
    fn load(&self) -> RepoResult<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut students = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            // One bad line fails the whole load; the store decides what an
            // unreadable snapshot means (it starts empty).
            let student: Student = serde_json::from_str(&line)
                .map_err(|err| RepoError::InvalidData(format!("line {}: {err}", index + 1)))?;
            students.push(student);
        }

        Ok(students)
    }

    fn save(&self, students: &[Student]) -> RepoResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for student in students {
            let line = serde_json::to_string(student)
                .map_err(|err| RepoError::InvalidData(err.to_string()))?;
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory backend mirroring load/save semantics without the filesystem.
///
/// Used by tests and embedders that want a scratch roster with real store
/// behavior.
#[derive(Default)]
pub struct MemoryBackend {
    slot: RefCell<Vec<Student>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the backend, as if a previous process had saved `students`.
    pub fn seeded(students: Vec<Student>) -> Self {
        Self {
            slot: RefCell::new(students),
        }
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> RepoResult<Vec<Student>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, students: &[Student]) -> RepoResult<()> {
        *self.slot.borrow_mut() = students.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
