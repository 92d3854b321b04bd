use rollbook_core::{
    MemoryBackend, RepoError, RepoResult, SnapshotBackend, Student, StudentService, StudentStore,
};

/// Backend whose saves always fail, for exercising the log-and-swallow
/// persist contract.
struct FailingBackend;

impl SnapshotBackend for FailingBackend {
    fn load(&self) -> RepoResult<Vec<Student>> {
        Ok(Vec::new())
    }

    fn save(&self, _students: &[Student]) -> RepoResult<()> {
        Err(RepoError::Io(std::io::Error::other("disk unplugged")))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[test]
fn add_increases_list_and_search_finds_record() {
    let mut store = StudentStore::open(MemoryBackend::new());
    assert!(store.list().is_empty());

    store.add(Student::new("Alice", 1, "A")).unwrap();

    assert_eq!(store.list().len(), 1);
    let found = store.search(1).expect("added record should be searchable");
    assert_eq!(found.name, "Alice");
    assert_eq!(found.grade, "A");
}

#[test]
fn add_rejects_invalid_record_without_mutating() {
    let mut store = StudentStore::open(MemoryBackend::new());

    let err = store.add(Student::new("", 1, "A")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(store.list().is_empty());
}

#[test]
fn remove_unknown_roll_number_is_not_found_and_store_unchanged() {
    let mut store = StudentStore::open(MemoryBackend::new());
    store.add(Student::new("Alice", 1, "A")).unwrap();

    let err = store.remove(99).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(99)));
    assert_eq!(store.list().len(), 1);
}

#[test]
fn remove_deletes_every_record_with_matching_roll_number() {
    let mut store = StudentStore::open(MemoryBackend::new());
    store.add(Student::new("Alice", 7, "A")).unwrap();
    store.add(Student::new("Bob", 2, "B")).unwrap();
    store.add(Student::new("Also Alice", 7, "C")).unwrap();

    let removed = store.remove(7).unwrap();

    assert_eq!(removed, 2);
    assert!(store.search(7).is_none());
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].name, "Bob");
}

#[test]
fn search_returns_first_match_among_duplicates() {
    let mut store = StudentStore::open(MemoryBackend::new());
    store.add(Student::new("First", 5, "A")).unwrap();
    store.add(Student::new("Second", 5, "B")).unwrap();

    let found = store.search(5).expect("duplicate key should still match");
    assert_eq!(found.name, "First");
}

#[test]
fn list_preserves_insertion_order() {
    let mut store = StudentStore::open(MemoryBackend::new());
    for (index, name) in ["w", "x", "y", "z"].iter().enumerate() {
        store
            .add(Student::new(*name, index as i32, "A"))
            .unwrap();
    }

    let names: Vec<&str> = store.list().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["w", "x", "y", "z"]);
}

#[test]
fn persist_failure_is_swallowed_and_memory_effect_stands() {
    let mut store = StudentStore::open(FailingBackend);

    store.add(Student::new("Alice", 1, "A")).unwrap();

    assert_eq!(store.list().len(), 1);
    let err = store.persist().unwrap_err();
    assert!(matches!(err, RepoError::Io(_)));
}

#[test]
fn open_starts_from_seeded_snapshot() {
    let seeded = MemoryBackend::seeded(vec![
        Student::new("Alice", 1, "A"),
        Student::new("Bob", 2, "B"),
    ]);

    let store = StudentStore::open(seeded);
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.search(2).unwrap().name, "Bob");
}

#[test]
fn service_scenario_add_remove_search() {
    let mut service = StudentService::open(MemoryBackend::new());

    service.add_student("Alice", 1, "A").unwrap();
    service.add_student("Bob", 2, "B").unwrap();

    let names: Vec<&str> = service
        .list_students()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "Bob"]);

    let (removed_student, removed_count) = service.remove_student(1).unwrap();
    assert_eq!(removed_student.name, "Alice");
    assert_eq!(removed_count, 1);

    let remaining: Vec<&str> = service
        .list_students()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(remaining, ["Bob"]);

    let bob = service.search_student(2).expect("Bob should remain");
    assert_eq!(bob.grade, "B");
    assert!(service.search_student(99).is_none());
}

#[test]
fn service_remove_reports_first_match_and_full_count() {
    let mut service = StudentService::open(MemoryBackend::new());
    service.add_student("Twin A", 4, "A").unwrap();
    service.add_student("Twin B", 4, "B").unwrap();

    let (matched, count) = service.remove_student(4).unwrap();
    assert_eq!(matched.name, "Twin A");
    assert_eq!(count, 2);
    assert!(service.list_students().is_empty());
}

#[test]
fn service_remove_unknown_is_not_found() {
    let mut service = StudentService::open(MemoryBackend::new());
    let err = service.remove_student(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}
