use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use finbti::finbti_core::{GroupingKey, GroupingOptions, LedgerService};
use finbti::finbti_domain::{LedgerItem, TransactionKind};

fn ledger(size: usize) -> Vec<LedgerItem> {
    (0..size)
        .map(|index| {
            let kind = if index % 3 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let month = 1 + (index / 28) % 12;
            let day = 1 + index % 28;
            let hour = index % 24;
            LedgerItem::new(
                index as i64,
                kind,
                1_000 + (index as i64 * 37) % 50_000,
                &format!("2025-{month:02}-{day:02}T{hour:02}:00:00"),
            )
            .with_category("Food")
            .with_memo("Lunch")
        })
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date");
    let mut group = c.benchmark_group("group_transactions");
    for size in [100usize, 1_000, 10_000] {
        let items = ledger(size);
        for key in [GroupingKey::DayOfMonth, GroupingKey::CalendarDate] {
            let options = GroupingOptions {
                key,
                ..GroupingOptions::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{key:?}"), size),
                &items,
                |b, items| {
                    b.iter(|| LedgerService::group_transactions(black_box(items), today, &options))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
