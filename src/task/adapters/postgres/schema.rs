//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, each owned by a single user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Completion timestamp, set while the task is done.
        finished_at -> Nullable<Timestamptz>,
        /// Completion flag, true iff status is done.
        is_finished -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
