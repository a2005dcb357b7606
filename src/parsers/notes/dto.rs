use crate::types::TransactionKind;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A transaction-in-progress extracted from one note line: the amount
/// magnitude, the kind derived from the token's sign, and what remains of the
/// line as a description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub description: String,
}

impl ParsedLine {
    /// Extract the first signed amount token from a line.
    ///
    /// The token is an optional `+`/`-`, one or more digits, and an optional
    /// fraction of `.` followed by exactly two digits. A line with no such
    /// token yields `None`. The description is the line with the token
    /// removed and every literal `-` and `,` stripped, trimmed; the stripping
    /// also hits hyphens inside words ("Uber-eats" becomes "Ubereats"), which
    /// keeps classification stable for signed and unsigned spellings of the
    /// same note.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (start, end) = find_amount_token(line)?;

        let value = Decimal::from_str(&line[start..end]).ok()?;
        let kind = if value < Decimal::ZERO {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        };

        let mut remainder = String::with_capacity(line.len());
        remainder.push_str(&line[..start]);
        remainder.push_str(&line[end..]);
        let description: String = remainder
            .chars()
            .filter(|c| !matches!(c, '-' | ','))
            .collect();

        Some(ParsedLine {
            amount: value.abs(),
            kind,
            description: description.trim().to_string(),
        })
    }
}

/// Byte range of the first `[+-]?digits(.dd)?` token, if any.
///
/// Token boundaries are always ASCII, so the returned range is safe to slice.
fn find_amount_token(line: &str) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let mut j = i;

        if bytes[j] == b'+' || bytes[j] == b'-' {
            j += 1;
        }

        let digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }

        if j == digits_start {
            // No digits at this position; resume after the candidate sign.
            i = start + 1;
            continue;
        }

        let mut end = j;
        if j + 2 < bytes.len()
            && bytes[j] == b'.'
            && bytes[j + 1].is_ascii_digit()
            && bytes[j + 2].is_ascii_digit()
        {
            end = j + 3;
        }

        return Some((start, end));
    }

    None
}
