//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `migrations/` exactly.
//! `diesel print-schema` can regenerate them from a live database.

diesel::table! {
    /// User records.
    ///
    /// `id` is a `SERIAL` primary key, so insertion order and id order
    /// coincide and listing by id reproduces insertion order.
    users (id) {
        /// Primary key assigned by the database.
        id -> Int4,
        /// Family name, non-null.
        last_name -> Text,
        /// Given name, non-null.
        first_name -> Text,
    }
}
