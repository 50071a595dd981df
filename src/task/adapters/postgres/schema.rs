//! Diesel schema for task persistence.
//!
//! The table itself is an external precondition; this crate never creates
//! or migrates it.

diesel::table! {
    /// To-do rows.
    tasks (id) {
        /// Row identifier assigned by the serial column.
        id -> Int4,
        /// User-supplied description.
        task -> Text,
        /// Completion flag.
        done -> Bool,
    }
}
