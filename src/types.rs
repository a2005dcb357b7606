use crate::parsers::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction moves money in or out.
///
/// Serialized as the dashboard's `"income"` / `"expense"` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(self) -> bool {
        matches!(self, TransactionKind::Income)
    }
}

/// One parsed, classified money movement.
///
/// `amount` is always a non-negative magnitude; the sign of the source token
/// lives in `kind`. `id` is `"{date}-{index}"` where `index` is the line's
/// position in the batch after empty lines were dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NoteDate,
    pub emoji: String,
}

/// Income/expense totals over one filtered period window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_amount: Decimal,
    pub transaction_count: usize,
}

/// Cumulative amount and count for one category.
///
/// `emoji` is the glyph of the first transaction seen in the category during
/// aggregation; later transactions do not override it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
    pub count: usize,
    pub emoji: String,
}
