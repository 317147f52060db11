//! Groups fetched ledger records into per-day display sections.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

pub use finbti_domain::GroupingKey;
use finbti_domain::{LedgerItem, Money, TransactionGroup, TransactionItem, TransactionKind};

use crate::{
    format::{currency_formatter, CurrencyFormatter},
    time::{day_label, parse_timestamp, LabelLocale},
};

const SUB_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingOptions {
    pub key: GroupingKey,
    pub locale: LabelLocale,
    pub currency: String,
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            key: GroupingKey::default(),
            locale: LabelLocale::default(),
            currency: "KRW".into(),
        }
    }
}

/// Grouping output plus the ids of records that were left out.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GroupingReport {
    pub groups: Vec<TransactionGroup>,
    pub skipped: Vec<i64>,
}

/// Overall sums across a set of groups.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct LedgerTotals {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct BucketKey {
    year: i32,
    month: u32,
    day: u32,
}

impl BucketKey {
    fn new(date: NaiveDate, key: GroupingKey) -> Self {
        match key {
            GroupingKey::DayOfMonth => Self {
                year: 0,
                month: 0,
                day: date.day(),
            },
            GroupingKey::CalendarDate => Self {
                year: date.year(),
                month: date.month(),
                day: date.day(),
            },
        }
    }

    fn label(&self, key: GroupingKey) -> String {
        match key {
            GroupingKey::DayOfMonth => format!("{:02}", self.day),
            GroupingKey::CalendarDate => {
                format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
            }
        }
    }
}

#[derive(Default)]
struct Bucket {
    latest: Option<NaiveDateTime>,
    daily_total: Money,
    total_income: Money,
    total_expense: Money,
    items: Vec<TransactionItem>,
}

pub struct LedgerService;

impl LedgerService {
    /// Groups by day of month with Korean labels, most recent day first.
    /// Records without a parseable timestamp are dropped.
    pub fn group_transactions_by_date(
        items: &[LedgerItem],
        today: NaiveDate,
    ) -> Vec<TransactionGroup> {
        Self::group_transactions(items, today, &GroupingOptions::default()).groups
    }

    pub fn group_transactions(
        items: &[LedgerItem],
        today: NaiveDate,
        options: &GroupingOptions,
    ) -> GroupingReport {
        let formatter = currency_formatter(&options.currency);
        let mut buckets: BTreeMap<BucketKey, Bucket> = BTreeMap::new();
        let mut skipped = Vec::new();

        for item in items {
            let Some(occurred_at) = item.transaction_at.as_deref().and_then(parse_timestamp) else {
                debug!(
                    id = item.id,
                    raw = ?item.transaction_at,
                    "skipping ledger item without a parseable timestamp"
                );
                skipped.push(item.id);
                continue;
            };
            let bucket_key = BucketKey::new(occurred_at.date(), options.key);
            let view = Self::to_transaction_item(
                item,
                occurred_at,
                today,
                bucket_key.label(options.key),
                options.locale,
                formatter.as_ref(),
            );
            let bucket = buckets.entry(bucket_key).or_default();
            bucket.daily_total = bucket.daily_total.saturating_add(view.signed_amount);
            match item.kind {
                TransactionKind::Income => {
                    bucket.total_income = bucket.total_income.saturating_add(view.signed_amount)
                }
                TransactionKind::Expense => {
                    bucket.total_expense = bucket.total_expense.saturating_sub(view.signed_amount)
                }
            }
            if bucket.latest.map_or(true, |latest| occurred_at > latest) {
                bucket.latest = Some(occurred_at);
            }
            bucket.items.push(view);
        }

        let groups = buckets
            .into_iter()
            .rev()
            .map(|(bucket_key, bucket)| {
                let date = bucket
                    .latest
                    .map(|latest| day_label(latest.date(), today, options.locale))
                    .unwrap_or_default();
                TransactionGroup {
                    date,
                    day: bucket_key.day,
                    key: bucket_key.label(options.key),
                    daily_total: bucket.daily_total,
                    total_income: bucket.total_income,
                    total_expense: bucket.total_expense,
                    items: bucket.items,
                }
            })
            .collect();

        GroupingReport { groups, skipped }
    }

    /// Builds the display row for one record.
    pub fn to_transaction_item(
        item: &LedgerItem,
        occurred_at: NaiveDateTime,
        today: NaiveDate,
        group_key: String,
        locale: LabelLocale,
        formatter: &dyn CurrencyFormatter,
    ) -> TransactionItem {
        let signed_amount = item.kind.signed(item.amount);
        let category = present(item.category_name.as_deref());
        let memo = present(item.memo.as_deref());
        TransactionItem {
            id: item.id,
            kind: item.kind,
            signed_amount,
            amount_text: formatter.format_signed(signed_amount),
            title: memo.or(category).unwrap_or(locale.other()).to_string(),
            sub: Self::sub_label(category, memo, locale),
            occurred_at,
            group_key,
            date_label: day_label(occurred_at.date(), today, locale),
        }
    }

    /// `"{category} | {memo}"`, whichever part exists, or the "other" fallback.
    pub fn sub_label(category: Option<&str>, memo: Option<&str>, locale: LabelLocale) -> String {
        match (present(category), present(memo)) {
            (Some(category), Some(memo)) => format!("{category}{SUB_SEPARATOR}{memo}"),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => locale.other().to_string(),
        }
    }

    pub fn totals(groups: &[TransactionGroup]) -> LedgerTotals {
        groups.iter().fold(LedgerTotals::default(), |acc, group| {
            let income = acc.income.saturating_add(group.total_income);
            let expense = acc.expense.saturating_add(group.total_expense);
            LedgerTotals {
                income,
                expense,
                net: income.saturating_sub(expense),
                count: acc.count + group.items.len(),
            }
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
