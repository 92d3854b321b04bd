//! FFI use-case API for the student form UI.
//!
//! # Responsibility
//! - Expose the three form actions (add, remove, display) as stable sync
//!   functions for the embedding UI.
//! - Keep dialog errors and output-log text clearly separated in responses.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Validation failures never reach the store.
//! - The backing roster is loaded once per process, on first use.

use rollbook_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, JsonLinesBackend, RepoError, RollNumber, StudentService, StudentStore,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

const FORM_DB_FILE_NAME: &str = "students.jsonl";
static FORM_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static FORM_SERVICE: OnceLock<Mutex<StudentService<JsonLinesBackend>>> = OnceLock::new();

const DIALOG_EMPTY_NAME: &str = "Name cannot be empty.";
const DIALOG_INVALID_ROLL: &str = "Invalid roll number.";
const DIALOG_EMPTY_GRADE: &str = "Grade cannot be empty.";
const DIALOG_NOT_FOUND: &str = "Student not found.";

/// Minimal health-check API for smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   empty selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Response envelope for the add/remove form actions.
///
/// Exactly one of the two surfaces is populated: `dialog_error` maps to the
/// blocking error dialog, `log_text` to the scrolling output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormActionResponse {
    /// Whether the action went through.
    pub ok: bool,
    /// Blocking dialog message; `None` when the action succeeded.
    pub dialog_error: Option<String>,
    /// Text to append to the output log; empty on failure.
    pub log_text: String,
}

impl FormActionResponse {
    fn success(log_text: impl Into<String>) -> Self {
        Self {
            ok: true,
            dialog_error: None,
            log_text: log_text.into(),
        }
    }

    fn dialog(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            dialog_error: Some(message.into()),
            log_text: String::new(),
        }
    }
}

/// Handles the "Add Student" button.
///
/// Validation order and dialog texts follow the form contract: empty name,
/// then unparseable roll number, then empty grade. A validation failure
/// aborts before the store is touched.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn form_add_student(name: String, roll_number: String, grade: String) -> FormActionResponse {
    let name = name.trim();
    if name.is_empty() {
        return FormActionResponse::dialog(DIALOG_EMPTY_NAME);
    }

    let roll_number = match parse_roll_number(&roll_number) {
        Some(value) => value,
        None => return FormActionResponse::dialog(DIALOG_INVALID_ROLL),
    };

    let grade = grade.trim();
    if grade.is_empty() {
        return FormActionResponse::dialog(DIALOG_EMPTY_GRADE);
    }

    with_service(|service| match service.add_student(name, roll_number, grade) {
        Ok(student) => {
            log::info!("event=form_add module=ffi status=ok roll_number={roll_number}");
            FormActionResponse::success(format!("Student added successfully: {student}\n"))
        }
        Err(err) => dialog_for_error(err),
    })
}

/// Handles the "Remove Student" button.
///
/// Searches for a match first so the user sees which record was removed;
/// the removal itself deletes every record with the roll number, so
/// duplicates are multi-deleted behind a singular message.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn form_remove_student(roll_number: String) -> FormActionResponse {
    let roll_number = match parse_roll_number(&roll_number) {
        Some(value) => value,
        None => return FormActionResponse::dialog(DIALOG_INVALID_ROLL),
    };

    with_service(|service| match service.remove_student(roll_number) {
        Ok((student, removed)) => {
            log::info!(
                "event=form_remove module=ffi status=ok roll_number={roll_number} removed={removed}"
            );
            FormActionResponse::success(format!("Student removed successfully: {student}\n"))
        }
        Err(RepoError::NotFound(_)) => FormActionResponse::dialog(DIALOG_NOT_FOUND),
        Err(err) => dialog_for_error(err),
    })
}

/// Handles the "Display All Students" button.
///
/// Returns the full re-render of the output area: every record in
/// insertion order, or a placeholder when the roster is empty.
///
/// # FFI contract
/// - Sync call, never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn form_display_students() -> String {
    with_service(|service| {
        let students = service.list_students();
        if students.is_empty() {
            return "No students found.\n".to_string();
        }

        let mut rendered = String::from("All Students:\n");
        for student in students {
            rendered.push_str(&format!("{student}\n\n"));
        }
        rendered
    })
}

fn parse_roll_number(text: &str) -> Option<RollNumber> {
    text.trim().parse::<RollNumber>().ok()
}

fn dialog_for_error(err: RepoError) -> FormActionResponse {
    log::warn!("event=form_action module=ffi status=rejected error={err}");
    FormActionResponse::dialog(err.to_string())
}

fn resolve_form_db_path() -> PathBuf {
    FORM_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("ROLLBOOK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(FORM_DB_FILE_NAME)
        })
        .clone()
}

fn with_service<R>(f: impl FnOnce(&mut StudentService<JsonLinesBackend>) -> R) -> R {
    let service = FORM_SERVICE.get_or_init(|| {
        let backend = JsonLinesBackend::new(resolve_form_db_path());
        Mutex::new(StudentService::new(StudentStore::open(backend)))
    });

    // Handlers never panic, but a poisoned lock must not take the UI down.
    let mut guard: MutexGuard<'_, _> = match service.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, form_add_student, form_display_students, form_remove_student, init_logging,
        ping,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    // The form handlers share one process-wide roster, so every test works
    // with roll numbers and names nobody else uses.
    fn unique_roll() -> i32 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        (nanos % 1_000_000_000) as i32
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn add_rejects_empty_name_with_dialog() {
        let response = form_add_student(
            "  ".to_string(),
            unique_roll().to_string(),
            "A".to_string(),
        );
        assert!(!response.ok);
        assert_eq!(response.dialog_error.as_deref(), Some("Name cannot be empty."));
        assert!(response.log_text.is_empty());
    }

    #[test]
    fn add_rejects_unparseable_roll_number_with_dialog() {
        let response =
            form_add_student("Alice".to_string(), "not-a-number".to_string(), "A".to_string());
        assert!(!response.ok);
        assert_eq!(response.dialog_error.as_deref(), Some("Invalid roll number."));
    }

    #[test]
    fn add_rejects_empty_grade_with_dialog() {
        let response = form_add_student(
            "Alice".to_string(),
            unique_roll().to_string(),
            "".to_string(),
        );
        assert!(!response.ok);
        assert_eq!(response.dialog_error.as_deref(), Some("Grade cannot be empty."));
    }

    #[test]
    fn add_then_display_shows_the_new_record() {
        let roll = unique_roll();
        let name = format!("display-test-{roll}");

        let added = form_add_student(name.clone(), roll.to_string(), "B+".to_string());
        assert!(added.ok, "{:?}", added.dialog_error);
        assert!(added.log_text.contains("Student added successfully:"));
        assert!(added.log_text.contains(&format!("Name={name}")));

        let rendered = form_display_students();
        assert!(rendered.starts_with("All Students:"));
        assert!(rendered.contains(&format!("Roll Number={roll}")));
    }

    #[test]
    fn remove_known_roll_number_reports_the_removed_record() {
        let roll = unique_roll();
        let name = format!("remove-test-{roll}");
        let added = form_add_student(name.clone(), roll.to_string(), "C".to_string());
        assert!(added.ok, "{:?}", added.dialog_error);

        let removed = form_remove_student(roll.to_string());
        assert!(removed.ok, "{:?}", removed.dialog_error);
        assert!(removed.log_text.contains("Student removed successfully:"));
        assert!(removed.log_text.contains(&format!("Name={name}")));

        let rendered = form_display_students();
        assert!(!rendered.contains(&name));
    }

    #[test]
    fn remove_unknown_roll_number_shows_not_found_dialog() {
        // Negative roll numbers are never created by these tests.
        let response = form_remove_student((-unique_roll()).to_string());
        assert!(!response.ok);
        assert_eq!(response.dialog_error.as_deref(), Some("Student not found."));
    }

    #[test]
    fn remove_rejects_unparseable_roll_number_with_dialog() {
        let response = form_remove_student("twelve".to_string());
        assert!(!response.ok);
        assert_eq!(response.dialog_error.as_deref(), Some("Invalid roll number."));
    }
}
