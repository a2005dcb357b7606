use crate::errors::NoteParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date of a note batch, kept as the string the caller supplied.
///
/// The conversion to [`NaiveDate`] is fallible on purpose: a malformed date
/// does not abort parsing, it just makes every time-window comparison fail,
/// so the affected transactions drop out of windowed summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDate(String);

impl NoteDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for NoteDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&NoteDate> for NaiveDate {
    type Error = NoteParseError;

    fn try_from(date: &NoteDate) -> Result<Self, Self::Error> {
        NaiveDate::parse_from_str(date.0.trim(), "%Y-%m-%d")
            .map_err(|_| NoteParseError::BatchDateInvalidFormat)
    }
}
