//! Aggregation of parsed transactions for dashboard display: period
//! summaries, category breakdowns, and the 7-day trend series.
//!
//! Period filtering is relative to "now". The `*_at` variants take the
//! reference instant explicitly so tests stay deterministic; the plain
//! variants default to the system clock.

use crate::types::{CategoryTotal, Transaction, TransactionSummary};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Days covered by [`daily_trend`].
const TREND_DAYS: i64 = 7;

/// Time window for summary filtering.
///
/// `Today` is calendar-day equality; `Week` and `Month` are rolling 7×24h and
/// 30×24h windows, not calendar weeks/months. `All` applies no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    Month,
    All,
}

/// Period strings are the dashboard's `"today"` / `"week"` / `"month"`.
/// Anything else (including different capitalization) selects [`Period::All`],
/// keeping the consuming UI's permissive fallthrough for unknown values.
impl FromStr for Period {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "today" => Period::Today,
            "week" => Period::Week,
            "month" => Period::Month,
            _ => Period::All,
        })
    }
}

fn in_window(transaction: &Transaction, period: Period, now: NaiveDateTime) -> bool {
    let date = match NaiveDate::try_from(&transaction.date) {
        Ok(date) => date,
        // A date that never parses fails every window but still counts
        // toward the unfiltered total.
        Err(_) => return period == Period::All,
    };

    match period {
        Period::All => true,
        Period::Today => date == now.date(),
        Period::Week => date.and_time(NaiveTime::MIN) >= now - Duration::days(7),
        Period::Month => date.and_time(NaiveTime::MIN) >= now - Duration::days(30),
    }
}

/// Summarize the transactions falling in `period`, relative to the system
/// clock.
pub fn calculate_summary(transactions: &[Transaction], period: Period) -> TransactionSummary {
    calculate_summary_at(transactions, period, Local::now().naive_local())
}

/// Summarize the transactions falling in `period`, relative to `now`.
///
/// Window edges are inclusive. `net_amount` is always
/// `total_income - total_expenses`.
pub fn calculate_summary_at(
    transactions: &[Transaction],
    period: Period,
    now: NaiveDateTime,
) -> TransactionSummary {
    let filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| in_window(t, period, now))
        .collect();

    let total_income = filtered
        .iter()
        .filter(|t| t.kind.is_income())
        .fold(Decimal::zero(), |sum, t| sum + t.amount);
    let total_expenses = filtered
        .iter()
        .filter(|t| !t.kind.is_income())
        .fold(Decimal::zero(), |sum, t| sum + t.amount);

    TransactionSummary {
        total_income,
        total_expenses,
        net_amount: total_income - total_expenses,
        transaction_count: filtered.len(),
    }
}

/// Group transactions by category, summing amounts and counting entries.
///
/// Category names are trusted verbatim. Each entry keeps the emoji of the
/// first transaction seen for its category. The result is sorted by
/// cumulative amount, largest first; the sort is stable, so categories with
/// equal totals stay in encounter order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        match totals
            .iter_mut()
            .find(|total| total.category == transaction.category)
        {
            Some(total) => {
                total.amount += transaction.amount;
                total.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                amount: transaction.amount,
                count: 1,
                emoji: transaction.emoji.clone(),
            }),
        }
    }

    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// Income, expenses, and net for one calendar day of the trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
}

/// Per-day totals for the last 7 calendar days, relative to the system clock.
pub fn daily_trend(transactions: &[Transaction]) -> Vec<DailyTrendPoint> {
    daily_trend_at(transactions, Local::now().naive_local())
}

/// Per-day totals for the 7 calendar days ending on `now`'s date, oldest
/// first. Transactions whose date fails to parse match no day.
pub fn daily_trend_at(transactions: &[Transaction], now: NaiveDateTime) -> Vec<DailyTrendPoint> {
    (0..TREND_DAYS)
        .rev()
        .map(|offset| {
            let day = now.date() - Duration::days(offset);

            let mut income = Decimal::zero();
            let mut expenses = Decimal::zero();
            for transaction in transactions {
                if NaiveDate::try_from(&transaction.date).ok() != Some(day) {
                    continue;
                }
                if transaction.kind.is_income() {
                    income += transaction.amount;
                } else {
                    expenses += transaction.amount;
                }
            }

            DailyTrendPoint {
                date: day,
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}
