//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Mailing-list subscribers, one row per address.
    emails (id) {
        /// Store-assigned primary key.
        id -> Int8,
        /// Subscriber address; unique.
        email -> Text,
        /// When the subscriber confirmed, if ever.
        confirmed_at -> Nullable<Timestamptz>,
        /// Whether the subscriber has opted out of mailings.
        opt_out -> Bool,
    }
}
