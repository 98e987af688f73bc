//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Sequential task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Completion state.
        #[max_length = 50]
        state -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
