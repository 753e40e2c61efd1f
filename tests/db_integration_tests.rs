//! Integration tests for the database layer.
//!
//! These tests verify the task CRUD operations using an in-memory SQLite
//! database.

use task_rest::db::Database;

/// Helper to create a fresh in-memory database for testing.
fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

mod insert_tests {
    use super::*;

    #[test]
    fn insert_assigns_increasing_ids() {
        let db = setup_db();

        let first = db.insert_task("t1", "d1").expect("Failed to insert task");
        let second = db.insert_task("t2", "d2").expect("Failed to insert task");

        assert!(second > first);
    }

    #[test]
    fn insert_defaults_completed_to_false() {
        let db = setup_db();

        db.insert_task("t1", "d1").expect("Failed to insert task");

        let task = db
            .get_task_by_title("t1")
            .expect("Failed to look up task")
            .expect("Task should exist");
        assert!(!task.completed);
    }

    #[test]
    fn insert_allows_duplicate_titles() {
        let db = setup_db();

        db.insert_task("same", "first").expect("Failed to insert");
        db.insert_task("same", "second").expect("Failed to insert");

        assert_eq!(db.list_tasks().expect("Failed to list").len(), 2);
    }
}

mod lookup_tests {
    use super::*;

    #[test]
    fn get_by_title_returns_inserted_fields() {
        let db = setup_db();

        let id = db
            .insert_task("groceries", "milk and eggs")
            .expect("Failed to insert task");

        let task = db
            .get_task_by_title("groceries")
            .expect("Failed to look up task")
            .expect("Task should exist");

        assert_eq!(task.id, id);
        assert_eq!(task.title, "groceries");
        assert_eq!(task.description, "milk and eggs");
    }

    #[test]
    fn get_by_title_returns_none_for_missing() {
        let db = setup_db();

        let task = db
            .get_task_by_title("missing")
            .expect("Lookup should not fail");
        assert!(task.is_none());
    }

    #[test]
    fn get_by_title_prefers_lowest_id_on_duplicates() {
        let db = setup_db();

        let first = db.insert_task("same", "first").expect("Failed to insert");
        db.insert_task("same", "second").expect("Failed to insert");

        let task = db
            .get_task_by_title("same")
            .expect("Failed to look up task")
            .expect("Task should exist");
        assert_eq!(task.id, first);
        assert_eq!(task.description, "first");
    }

    #[test]
    fn list_returns_empty_vec_on_empty_store() {
        let db = setup_db();

        let tasks = db.list_tasks().expect("Failed to list tasks");
        assert!(tasks.is_empty());
    }

    #[test]
    fn list_orders_by_ascending_id() {
        let db = setup_db();

        db.insert_task("b", "").expect("Failed to insert");
        db.insert_task("a", "").expect("Failed to insert");
        db.insert_task("c", "").expect("Failed to insert");

        let tasks = db.list_tasks().expect("Failed to list tasks");
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(tasks.len(), 3);
    }
}

mod update_tests {
    use super::*;

    #[test]
    fn update_sets_description_and_completed() {
        let db = setup_db();

        let id = db.insert_task("t1", "d1").expect("Failed to insert");

        let updated = db
            .update_task_by_title("t1", "d2", true)
            .expect("Failed to update");
        assert_eq!(updated, Some(id));

        let task = db
            .get_task_by_title("t1")
            .expect("Failed to look up task")
            .expect("Task should exist");
        assert_eq!(task.description, "d2");
        assert!(task.completed);
    }

    #[test]
    fn update_returns_none_for_missing_title() {
        let db = setup_db();

        let updated = db
            .update_task_by_title("missing", "d", false)
            .expect("Update should not fail");
        assert!(updated.is_none());
    }

    #[test]
    fn update_leaves_other_rows_untouched() {
        let db = setup_db();

        db.insert_task("t1", "d1").expect("Failed to insert");
        db.insert_task("t2", "d2").expect("Failed to insert");

        db.update_task_by_title("t1", "changed", true)
            .expect("Failed to update");

        let other = db
            .get_task_by_title("t2")
            .expect("Failed to look up task")
            .expect("Task should exist");
        assert_eq!(other.description, "d2");
        assert!(!other.completed);
    }

    #[test]
    fn update_touches_only_first_duplicate() {
        let db = setup_db();

        let first = db.insert_task("same", "first").expect("Failed to insert");
        db.insert_task("same", "second").expect("Failed to insert");

        let updated = db
            .update_task_by_title("same", "changed", true)
            .expect("Failed to update");
        assert_eq!(updated, Some(first));

        let tasks = db.list_tasks().expect("Failed to list tasks");
        let second = tasks.iter().find(|t| t.id != first).expect("Second row");
        assert_eq!(second.description, "second");
        assert!(!second.completed);
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_removes_row_and_returns_id() {
        let db = setup_db();

        let id = db.insert_task("t1", "d1").expect("Failed to insert");

        let deleted = db.delete_task(id).expect("Failed to delete");
        assert_eq!(deleted, Some(id));
        assert!(db.list_tasks().expect("Failed to list").is_empty());
    }

    #[test]
    fn delete_returns_none_for_missing_id() {
        let db = setup_db();

        let deleted = db.delete_task(999).expect("Delete should not fail");
        assert!(deleted.is_none());
    }

    #[test]
    fn second_delete_of_same_id_returns_none() {
        let db = setup_db();

        let id = db.insert_task("t1", "d1").expect("Failed to insert");

        assert_eq!(db.delete_task(id).expect("Failed to delete"), Some(id));
        assert!(db.delete_task(id).expect("Delete should not fail").is_none());
    }
}

mod persistence_tests {
    use super::*;

    #[test]
    fn tasks_survive_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.db");

        {
            let db = Database::open(&path).expect("Failed to open database");
            db.insert_task("persisted", "still here")
                .expect("Failed to insert");
        }

        let db = Database::open(&path).expect("Failed to reopen database");
        let task = db
            .get_task_by_title("persisted")
            .expect("Failed to look up task")
            .expect("Task should survive reopen");
        assert_eq!(task.description, "still here");
    }
}
