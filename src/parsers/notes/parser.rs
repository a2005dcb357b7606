use super::dto::ParsedLine;
use super::types::NoteDate;
use crate::categories::classify;
use crate::types::Transaction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fallback description for lines that are nothing but an amount.
const EMPTY_DESCRIPTION: &str = "Transaction";

/// One stored note batch as returned by the remote storage service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub raw_text: String,
    pub date: String,
}

/// A non-empty line that produced no transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// Index into the filtered (non-empty) line list, the same index space
    /// transaction ids are minted from.
    pub line_index: usize,
    pub text: String,
}

/// Parse result plus diagnostics for the lines that were dropped.
///
/// Lets callers tell "0 transactions because the input was empty" from
/// "0 transactions because nothing parsed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a multi-line note batch into transactions.
///
/// Best-effort extraction, not a validating parser: lines that are empty
/// after trimming are ignored, lines without an amount token are dropped, and
/// no input ever raises an error. Output order matches input order.
///
/// Ids are `"{date}-{index}"` where `index` counts the non-empty lines, so a
/// dropped line leaves a gap in the id sequence but never shifts later ids.
pub fn parse_transaction_text(raw_text: &str, date: &str) -> Vec<Transaction> {
    parse_with_report(raw_text, date).transactions
}

/// Same as [`parse_transaction_text`], keeping the dropped lines.
pub fn parse_with_report(raw_text: &str, date: &str) -> ParseReport {
    let mut transactions = Vec::new();
    let mut skipped = Vec::new();

    let lines = raw_text.lines().filter(|line| !line.trim().is_empty());

    for (index, line) in lines.enumerate() {
        let Some(parsed) = ParsedLine::from_line(line) else {
            skipped.push(SkippedLine {
                line_index: index,
                text: line.trim().to_string(),
            });
            continue;
        };

        let rule = classify(&parsed.description);
        let description = if parsed.description.is_empty() {
            EMPTY_DESCRIPTION.to_string()
        } else {
            parsed.description
        };

        transactions.push(Transaction {
            id: format!("{date}-{index}"),
            description,
            amount: parsed.amount,
            kind: parsed.kind,
            category: rule.category.to_string(),
            date: NoteDate::from(date),
            emoji: rule.emoji.to_string(),
        });
    }

    ParseReport {
        transactions,
        skipped,
    }
}

/// Parse every stored record and merge the results, newest batch first.
///
/// Records whose date is not an ISO calendar date sort last, in their
/// original relative order.
pub fn parse_batches(records: &[RawRecord]) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = records
        .iter()
        .flat_map(|record| parse_transaction_text(&record.raw_text, &record.date))
        .collect();

    transactions.sort_by_key(|t| std::cmp::Reverse(NaiveDate::try_from(&t.date).ok()));
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE_NOTES: &str =
        "Salary +5000\nPizza -12\nCoffee -4.50\nUber -25\nFreelance +800";

    #[test]
    fn test_parse_sample_batch() {
        let transactions = parse_transaction_text(SAMPLE_NOTES, "2024-01-15");
        assert_eq!(transactions.len(), 5);

        let expected = [
            ("Salary", TransactionKind::Income, "5000", "Salary"),
            ("Pizza", TransactionKind::Expense, "12", "Food"),
            ("Coffee", TransactionKind::Expense, "4.50", "Food"),
            ("Uber", TransactionKind::Expense, "25", "Transport"),
            ("Freelance", TransactionKind::Income, "800", "Freelance"),
        ];

        for (txn, (description, kind, amount, category)) in
            transactions.iter().zip(expected)
        {
            assert_eq!(txn.description, description);
            assert_eq!(txn.kind, kind);
            assert_eq!(txn.amount, Decimal::from_str(amount).unwrap());
            assert_eq!(txn.category, category);
            assert_eq!(txn.date, "2024-01-15".into());
        }
    }

    #[test]
    fn test_parse_no_numbers_yields_nothing() {
        let transactions = parse_transaction_text("Just some text no numbers", "2024-01-15");
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_ids_use_filtered_line_index() {
        let transactions = parse_transaction_text(SAMPLE_NOTES, "2024-01-15");
        let ids: Vec<&str> = transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "2024-01-15-0",
                "2024-01-15-1",
                "2024-01-15-2",
                "2024-01-15-3",
                "2024-01-15-4"
            ]
        );
    }

    #[test]
    fn test_dropped_line_leaves_id_gap() {
        let text = "Pizza -12\nno amount here\nUber -25";
        let transactions = parse_transaction_text(text, "2024-01-15");

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "2024-01-15-0");
        assert_eq!(transactions[1].id, "2024-01-15-2");
    }

    #[test]
    fn test_blank_lines_do_not_consume_indices() {
        let text = "\n\nPizza -12\n   \n\nUber -25\n";
        let transactions = parse_transaction_text(text, "2024-01-15");

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "2024-01-15-0");
        assert_eq!(transactions[1].id, "2024-01-15-1");
    }

    #[test]
    fn test_amount_only_line_gets_default_description() {
        let transactions = parse_transaction_text("+100", "2024-01-15");

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Transaction");
        assert_eq!(transactions[0].category, "Other");
        assert_eq!(transactions[0].emoji, "💸");
    }

    #[test]
    fn test_unknown_description_gets_default_category() {
        let transactions = parse_transaction_text("Xyz random thing -50", "2024-01-15");

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Xyz random thing");
        assert_eq!(transactions[0].category, "Other");
        assert_eq!(transactions[0].emoji, "💸");
        assert_eq!(transactions[0].kind, TransactionKind::Expense);
        assert_eq!(transactions[0].amount, Decimal::from_str("50").unwrap());
    }

    #[rstest]
    #[case("", 0)]
    #[case("\n\n\n", 0)]
    #[case("Pizza -12", 1)]
    #[case("Pizza -12\nnothing\nUber -25", 2)]
    fn test_parse_lengths(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(parse_transaction_text(text, "2024-01-15").len(), expected);
    }

    #[test]
    fn test_report_records_skipped_lines() {
        let text = "Pizza -12\nno amount here\n\nanother dud\nUber -25";
        let report = parse_with_report(text, "2024-01-15");

        assert_eq!(report.transactions.len(), 2);
        assert_eq!(
            report.skipped,
            [
                SkippedLine {
                    line_index: 1,
                    text: "no amount here".to_string()
                },
                SkippedLine {
                    line_index: 2,
                    text: "another dud".to_string()
                },
            ]
        );

        // Every non-empty line is accounted for exactly once.
        assert_eq!(report.transactions.len() + report.skipped.len(), 4);
    }

    #[test]
    fn test_report_distinguishes_empty_from_unparseable() {
        let empty = parse_with_report("", "2024-01-15");
        assert!(empty.transactions.is_empty());
        assert!(empty.skipped.is_empty());

        let unparseable = parse_with_report("hello world", "2024-01-15");
        assert!(unparseable.transactions.is_empty());
        assert_eq!(unparseable.skipped.len(), 1);
    }

    #[test]
    fn test_parse_batches_merges_newest_first() {
        let records = vec![
            RawRecord {
                raw_text: "Pizza -12".to_string(),
                date: "2024-01-10".to_string(),
            },
            RawRecord {
                raw_text: "Salary +5000\nCoffee -4.50".to_string(),
                date: "2024-01-15".to_string(),
            },
            RawRecord {
                raw_text: "Uber -25".to_string(),
                date: "2024-01-12".to_string(),
            },
        ];

        let transactions = parse_batches(&records);
        let dates: Vec<&str> = transactions.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(
            dates,
            ["2024-01-15", "2024-01-15", "2024-01-12", "2024-01-10"]
        );
    }

    #[test]
    fn test_parse_batches_unparseable_dates_sort_last() {
        let records = vec![
            RawRecord {
                raw_text: "Mystery -5".to_string(),
                date: "not-a-date".to_string(),
            },
            RawRecord {
                raw_text: "Pizza -12".to_string(),
                date: "2024-01-10".to_string(),
            },
        ];

        let transactions = parse_batches(&records);
        assert_eq!(transactions[0].date.as_str(), "2024-01-10");
        assert_eq!(transactions[1].date.as_str(), "not-a-date");
    }
}
