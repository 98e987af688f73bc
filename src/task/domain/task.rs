//! Task aggregate root and completion-state types.

use super::{ParseTaskStateError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task completion state.
///
/// Serialized as `"NEW"`/`"DONE"` on the wire; [`TaskState::as_str`] yields
/// the lowercase canonical storage representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// Task has been created and is still open.
    New,
    /// Task has been completed.
    Done,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    state: TaskState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unpersisted task data awaiting id assignment by a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Initial completion state.
    pub state: TaskState,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskDraft {
    /// Creates a draft in the [`TaskState::New`] state with both timestamps
    /// taken from the clock.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            title: title.into(),
            description: description.into(),
            state: TaskState::New,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted completion state.
    pub state: TaskState,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            state: data.state,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task completion state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces title and description, leaving the state untouched.
    pub fn update_details(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.touch(clock);
    }

    /// Sets the completion state unconditionally.
    ///
    /// Re-assigning the current state succeeds and still touches
    /// `updated_at`; there is no transition-guard logic.
    pub fn set_state(&mut self, state: TaskState, clock: &impl Clock) {
        self.state = state;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
