//! Task CRUD operations.
//!
//! Each operation is a single parameterized statement. "No rows" is
//! reported as `None` via [`OptionalExtension`], distinguishable from any
//! other failure.
//!
//! Titles are not unique; operations keyed by title act on the first match
//! by ascending id.

use super::Database;
use crate::types::Task;
use anyhow::Result;
use rusqlite::{OptionalExtension, Row, params};

fn parse_task_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        completed: row.get("completed")?,
    })
}

impl Database {
    /// Insert a new task and return its assigned id. `completed` takes the
    /// store default (false).
    pub fn insert_task(&self, title: &str, description: &str) -> Result<i64> {
        self.with_conn(|conn| {
            let id = conn.query_row(
                "INSERT INTO tasks (title, description)
                 VALUES (?1, ?2)
                 RETURNING id",
                params![title, description],
                |row| row.get(0),
            )?;
            Ok(id)
        })
    }

    /// Look up a task by title. Returns `None` when no row matches.
    pub fn get_task_by_title(&self, title: &str) -> Result<Option<Task>> {
        self.with_conn(|conn| {
            let task = conn
                .query_row(
                    "SELECT id, title, description, completed
                     FROM tasks
                     WHERE title = ?1
                     ORDER BY id
                     LIMIT 1",
                    params![title],
                    parse_task_row,
                )
                .optional()?;
            Ok(task)
        })
    }

    /// List all tasks ordered by ascending id.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, completed
                 FROM tasks
                 ORDER BY id",
            )?;
            let tasks = stmt
                .query_map([], parse_task_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(tasks)
        })
    }

    /// Set `description` and `completed` on the task matching `title`,
    /// returning the affected row's id, or `None` when no row matches.
    ///
    /// The subselect pins the target to a single row so duplicate titles
    /// never cause a multi-row update.
    pub fn update_task_by_title(
        &self,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<Option<i64>> {
        self.with_conn(|conn| {
            let id = conn
                .query_row(
                    "UPDATE tasks
                     SET description = ?1, completed = ?2
                     WHERE id = (SELECT id FROM tasks WHERE title = ?3 ORDER BY id LIMIT 1)
                     RETURNING id",
                    params![description, completed, title],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(id)
        })
    }

    /// Delete the task with the given id, returning it, or `None` when no
    /// row matches.
    pub fn delete_task(&self, id: i64) -> Result<Option<i64>> {
        self.with_conn(|conn| {
            let deleted = conn
                .query_row(
                    "DELETE FROM tasks
                     WHERE id = ?1
                     RETURNING id",
                    params![id],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(deleted)
        })
    }
}
