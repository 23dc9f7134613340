use std::fs;

use tempfile::TempDir;
use todo::{Error, Task, TaskStore, Todoer};

fn setup() -> (TempDir, Todoer) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("todo.json");
    TaskStore::new(&db).init().expect("init db");
    (dir, Todoer::new(db))
}

fn seeded(descriptions: &[&str]) -> (TempDir, Todoer) {
    let (dir, todoer) = setup();
    for (idx, desc) in descriptions.iter().enumerate() {
        todoer.add(&[*desc], idx as i64 + 1).expect("add");
    }
    (dir, todoer)
}

#[test]
fn add_normalizes_description() {
    let (_dir, todoer) = setup();

    let task = todoer.add(&["Clean", "the", "house"], 1).expect("add");

    assert_eq!(task.description, "Clean the house.");
    assert_eq!(task.priority, 1);
    assert!(!task.done);
    assert_eq!(todoer.list(), vec![task]);
}

#[test]
fn adds_keep_call_order() {
    let (_dir, todoer) = setup();

    todoer.add(&["first"], 2).expect("add first");
    todoer.add(&["second"], 3).expect("add second");

    let descriptions: Vec<String> = todoer.list().into_iter().map(|t| t.description).collect();
    assert_eq!(descriptions, vec!["first.", "second."]);
}

#[test]
fn add_without_database_is_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("missing.json");
    let todoer = Todoer::new(&db);

    let unsaved = todoer.add(&["Water", "plants"], 2).unwrap_err();

    assert_eq!(unsaved.attempted.description, "Water plants.");
    assert!(matches!(unsaved.error, Error::DbRead { .. }));
    assert!(!db.exists());
}

#[test]
fn add_on_corrupt_database_starts_over() {
    let (_dir, todoer) = setup();
    fs::write(todoer.store().path(), "not json at all").expect("corrupt");

    let task = todoer.add(&["Fresh", "start"], 1).expect("add");

    assert_eq!(todoer.list(), vec![task]);
}

#[test]
fn complete_marks_only_target() {
    let (_dir, todoer) = seeded(&["one", "two"]);

    let task = todoer.complete(1).expect("complete");

    assert!(task.done);
    assert_eq!(task.description, "one.");
    let tasks = todoer.list();
    assert!(tasks[0].done);
    assert!(!tasks[1].done);
}

#[test]
fn invalid_ids_leave_database_untouched() {
    let (_dir, todoer) = seeded(&["one", "two"]);
    let before = fs::read_to_string(todoer.store().path()).expect("read");

    assert!(matches!(todoer.complete(5), Err(Error::InvalidId(5))));
    assert!(matches!(todoer.remove(0), Err(Error::InvalidId(0))));

    let after = fs::read_to_string(todoer.store().path()).expect("read");
    assert_eq!(before, after);
}

#[test]
fn remove_renumbers_later_tasks() {
    let (_dir, todoer) = seeded(&["one", "two", "three"]);

    let removed = todoer.remove(1).expect("remove");

    assert_eq!(removed.description, "one.");
    let tasks = todoer.list();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "two.");
    assert_eq!(tasks[1].description, "three.");
}

#[test]
fn remove_all_empties_collection() {
    let (_dir, todoer) = seeded(&["one", "two", "three"]);

    todoer.remove_all().expect("remove all");

    assert!(todoer.list().is_empty());
    assert_eq!(
        fs::read_to_string(todoer.store().path()).expect("read"),
        "[]"
    );
}

#[test]
fn list_swallows_corrupt_and_missing_database() {
    let (dir, todoer) = seeded(&["one"]);
    fs::write(todoer.store().path(), "[{\"Description\": ").expect("corrupt");
    assert!(todoer.list().is_empty());

    let missing = Todoer::new(dir.path().join("nope.json"));
    assert!(missing.list().is_empty());
}

#[test]
fn complete_and_remove_propagate_read_errors() {
    let (_dir, todoer) = setup();
    fs::write(todoer.store().path(), "").expect("truncate");

    assert!(matches!(todoer.complete(1), Err(Error::Decode { .. })));
    assert!(matches!(todoer.remove(1), Err(Error::Decode { .. })));

    fs::remove_file(todoer.store().path()).expect("remove db");
    assert!(matches!(todoer.complete(1), Err(Error::DbRead { .. })));
}

#[test]
fn reads_existing_database_format() {
    let (_dir, todoer) = setup();
    fs::write(
        todoer.store().path(),
        r#"[{"Description": "Legacy task.", "Priority": 4, "Done": true}]"#,
    )
    .expect("write");

    assert_eq!(
        todoer.list(),
        vec![Task {
            description: "Legacy task.".to_string(),
            priority: 4,
            done: true,
        }]
    );
}

/// Make `dir` read-only; false when the current user bypasses directory
/// permissions (e.g. root), in which case write failures cannot be provoked.
#[cfg(unix)]
fn make_read_only(dir: &std::path::Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).expect("chmod");
    let marker = dir.join(".writable");
    if fs::write(&marker, b"").is_ok() {
        let _ = fs::remove_file(marker);
        restore_writable(dir);
        return false;
    }
    true
}

#[cfg(unix)]
fn restore_writable(dir: &std::path::Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).expect("chmod");
}

#[cfg(unix)]
#[test]
fn add_write_failure_returns_built_task() {
    let (dir, todoer) = seeded(&["one"]);
    if !make_read_only(dir.path()) {
        return;
    }

    let result = todoer.add(&["Never", "saved"], 2);
    restore_writable(dir.path());

    let unsaved = result.unwrap_err();
    assert_eq!(unsaved.attempted.description, "Never saved.");
    assert!(matches!(unsaved.error, Error::DbWrite { .. }));
    assert_eq!(todoer.list().len(), 1);
}

#[cfg(unix)]
#[test]
fn complete_and_remove_propagate_write_failures() {
    let (dir, todoer) = seeded(&["one", "two"]);
    if !make_read_only(dir.path()) {
        return;
    }

    let completed = todoer.complete(1);
    let removed = todoer.remove(2);
    let cleared = todoer.remove_all();
    restore_writable(dir.path());

    assert!(matches!(completed, Err(Error::DbWrite { .. })));
    assert!(matches!(removed, Err(Error::DbWrite { .. })));
    assert!(matches!(cleared, Err(Error::DbWrite { .. })));

    let tasks = todoer.list();
    assert_eq!(tasks.len(), 2);
    assert!(!tasks[0].done);
}

#[test]
fn add_with_id_reports_position() {
    let (_dir, todoer) = seeded(&["one", "two"]);

    let (id, task) = todoer.add_with_id(&["three"], 3).expect("add");

    assert_eq!(id, 3);
    assert_eq!(todoer.list()[id - 1], task);
}

#[cfg(unix)]
#[test]
fn add_through_symlinked_database() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().expect("tempdir");
    let real = dir.path().join("real.json");
    let link = dir.path().join("link.json");
    TaskStore::new(&real).init().expect("init db");
    symlink(&real, &link).expect("symlink");

    Todoer::new(&link).add(&["hello"], 1).expect("add");

    assert!(fs::symlink_metadata(&link)
        .expect("link metadata")
        .file_type()
        .is_symlink());
    assert_eq!(Todoer::new(&real).list().len(), 1);
}
