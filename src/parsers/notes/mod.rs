mod dto;
pub mod parser;
pub mod types;

pub mod prelude {
    pub use super::dto::ParsedLine;
    pub use super::parser::{
        parse_batches, parse_transaction_text, parse_with_report, ParseReport, RawRecord,
        SkippedLine,
    };
    pub use super::types::NoteDate;
}
