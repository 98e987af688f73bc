//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Sequential task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion state in canonical storage form.
    pub state: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion state in canonical storage form.
    pub state: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when persisting task mutations.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    pub description: String,
    /// Replacement completion state in canonical storage form.
    pub state: String,
    /// Replacement update timestamp.
    pub updated_at: DateTime<Utc>,
}
