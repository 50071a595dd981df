//! Form-level completion flag parsing.

/// Completion flag decoded from the `done` form field.
///
/// The parse is deliberately total and lenient: only `"yes"` and `"on"`
/// (case-insensitively, surrounding whitespace ignored) mark a task done,
/// and every other value, including an absent field, marks it not done.
/// Unrecognised values are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneFlag {
    /// The task is marked complete.
    Done,
    /// The task is not marked complete.
    NotDone,
}

impl DoneFlag {
    /// Parses an optional form value into a completion flag.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let normalized = value.unwrap_or_default().trim().to_ascii_lowercase();
        match normalized.as_str() {
            "yes" | "on" => Self::Done,
            _ => Self::NotDone,
        }
    }

    /// Returns the boolean persisted to storage.
    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Done)
    }
}
