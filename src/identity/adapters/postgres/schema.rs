//! Diesel schema for credential persistence.

diesel::table! {
    /// Registered user credentials.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Unique, case-sensitive username.
        #[max_length = 100]
        username -> Varchar,
        /// Argon2id digest in PHC string format.
        password_hash -> Text,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
