use thiserror::Error;

/// Errors surfaced by the builder facade.
///
/// The parsing and aggregation core itself is total: unparseable lines are
/// dropped, unknown keywords fall back to the default category, and malformed
/// dates fall out of time-windowed summaries. Only missing builder inputs and
/// opt-in strict date validation can fail.
#[derive(Error, Debug)]
pub enum NoteParseError {
    /// The builder was asked to parse without any note text
    #[error("Note text is required")]
    MissingText,

    /// The builder was asked to parse without a batch date
    #[error("Batch date is required")]
    MissingDate,

    /// Batch date is not an ISO calendar date (strict mode only)
    #[error("Invalid batch date format")]
    BatchDateInvalidFormat,
}

/// Convenient alias for Result with the crate error type
pub type NoteResult<T> = Result<T, NoteParseError>;
