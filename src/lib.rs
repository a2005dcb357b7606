//! Parse free-text transaction notes and aggregate them for dashboards.
//!
//! Notes are informal lines like `"Pizza -12"` or `"Salary +5000"`: the first
//! signed amount token determines amount and kind, the remaining text is
//! classified against a fixed keyword table, and the parsed transactions feed
//! period summaries and category breakdowns.
//!
//! ```rust
//! use transaction_notes_rs::{
//!     calculate_summary_at, category_breakdown, parse_transaction_text, Period,
//! };
//!
//! let transactions = parse_transaction_text("Salary +5000\nPizza -12", "2024-01-15");
//! assert_eq!(transactions.len(), 2);
//!
//! let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let summary = calculate_summary_at(&transactions, Period::Today, now);
//! assert_eq!(summary.transaction_count, 2);
//!
//! let breakdown = category_breakdown(&transactions);
//! assert_eq!(breakdown[0].category, "Salary");
//! ```

mod builder;
mod categories;
mod types;

pub mod aggregation;
pub mod errors;
pub mod parsers;

pub use aggregation::{
    calculate_summary, calculate_summary_at, category_breakdown, daily_trend, daily_trend_at,
    DailyTrendPoint, Period,
};
pub use builder::NoteParserBuilder;
pub use categories::{classify, CategoryRule, CATEGORY_RULES, DEFAULT_CATEGORY};
pub use parsers::prelude::*;
pub use types::{CategoryTotal, Transaction, TransactionKind, TransactionSummary};
