//! Ledger records as fetched and the display-ready views derived from them.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Applies the kind's sign to an amount regardless of the amount's own sign.
    pub fn signed(self, amount: Money) -> Money {
        let magnitude = amount.saturating_abs();
        match self {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// How ledger records are bucketed into groups. Shared by the grouping
/// service and the stored `ledger_grouping` preference.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GroupingKey {
    /// Day-of-month only. Items on the 5th of different months share a group.
    #[default]
    DayOfMonth,
    /// Full `YYYY-MM-DD` date.
    CalendarDate,
}

impl GroupingKey {
    /// Lenient parse; anything unrecognised keeps the day-of-month default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "calendar_date" | "date" => GroupingKey::CalendarDate,
            _ => GroupingKey::DayOfMonth,
        }
    }
}

impl fmt::Display for GroupingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupingKey::DayOfMonth => "day_of_month",
            GroupingKey::CalendarDate => "calendar_date",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for GroupingKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|v| GroupingKey::parse(&v)).unwrap_or_default())
    }
}

/// A transaction record from the ledger endpoint. `transaction_at` is kept raw
/// because the server does not guarantee a single timestamp format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl LedgerItem {
    pub fn new(id: i64, kind: TransactionKind, amount: Money, transaction_at: &str) -> Self {
        Self {
            id,
            kind,
            amount,
            transaction_at: Some(transaction_at.to_string()),
            category_name: None,
            memo: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_name = Some(category.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// A ledger page as served by the paginated transaction endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerPage {
    #[serde(default)]
    pub content: Vec<LedgerItem>,
    #[serde(default)]
    pub has_next: bool,
}

/// Display-ready transaction row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionItem {
    pub id: i64,
    pub kind: TransactionKind,
    pub signed_amount: Money,
    pub amount_text: String,
    pub title: String,
    pub sub: String,
    pub occurred_at: NaiveDateTime,
    pub group_key: String,
    pub date_label: String,
}

/// All transactions of one day with their totals.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionGroup {
    /// Human label of the day ("오늘", "어제", weekday name).
    pub date: String,
    pub day: u32,
    pub key: String,
    pub daily_total: Money,
    pub total_income: Money,
    pub total_expense: Money,
    pub items: Vec<TransactionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_key_parse_is_lenient() {
        assert_eq!(GroupingKey::parse("calendar-date"), GroupingKey::CalendarDate);
        assert_eq!(GroupingKey::parse(" DATE "), GroupingKey::CalendarDate);
        assert_eq!(GroupingKey::parse("weekly"), GroupingKey::DayOfMonth);
    }

    #[test]
    fn grouping_key_display_matches_serialized_name() {
        for key in [GroupingKey::DayOfMonth, GroupingKey::CalendarDate] {
            let json = serde_json::to_string(&key).expect("serialize");
            assert_eq!(json, format!("\"{key}\""));
            let back: GroupingKey = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, key);
        }
    }

    #[test]
    fn signed_amount_ignores_source_sign() {
        assert_eq!(TransactionKind::Income.signed(-500), 500);
        assert_eq!(TransactionKind::Expense.signed(500), -500);
        assert_eq!(TransactionKind::Expense.signed(-500), -500);
    }

    #[test]
    fn ledger_item_parses_api_shape() {
        let json = r#"{"id": 3, "type": "EXPENSE", "amount": 4500,
            "transactionAt": "2025-03-10T12:30:00", "categoryName": "Cafe"}"#;
        let item: LedgerItem = serde_json::from_str(json).expect("parse item");
        assert_eq!(item.kind, TransactionKind::Expense);
        assert_eq!(item.category_name.as_deref(), Some("Cafe"));
        assert!(item.memo.is_none());
    }
}
