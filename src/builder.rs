use crate::errors::{NoteParseError, NoteResult};
use crate::parsers::prelude::*;
use crate::types::Transaction;
use chrono::NaiveDate;

/// Fluent entry point over the note parser.
///
/// The underlying parse is total; the builder is where missing inputs and
/// opt-in date validation surface as errors.
///
/// ```
/// use transaction_notes_rs::NoteParserBuilder;
///
/// let transactions = NoteParserBuilder::new()
///     .text("Pizza -12\nSalary +5000")
///     .date("2024-01-15")
///     .parse()
///     .unwrap();
/// assert_eq!(transactions.len(), 2);
/// ```
#[derive(Default)]
pub struct NoteParserBuilder {
    text: Option<String>,
    date: Option<String>,
    strict_date: bool,
}

impl NoteParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw multi-line note text.
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// ISO calendar date (no time component) for the whole batch.
    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    /// Reject non-ISO batch dates up front instead of letting them ride
    /// along and fall out of time-windowed summaries later.
    pub fn strict_date(mut self) -> Self {
        self.strict_date = true;
        self
    }

    pub fn parse(self) -> NoteResult<Vec<Transaction>> {
        self.parse_with_report().map(|report| report.transactions)
    }

    pub fn parse_with_report(self) -> NoteResult<ParseReport> {
        let text = self.text.ok_or(NoteParseError::MissingText)?;
        let date = self.date.ok_or(NoteParseError::MissingDate)?;

        if self.strict_date {
            NaiveDate::try_from(&NoteDate::from(date.as_str()))?;
        }

        Ok(parse_with_report(&text, &date))
    }
}
