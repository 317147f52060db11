use serde::Serialize;

use finbti_core::{GroupingReport, LedgerService, LedgerTotals};
use finbti_domain::TransactionGroup;

use crate::cli::input::load_ledger_items;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::{OutputMode, ShellContext};

use super::{required_path, to_json};

const LEDGER_USAGE: &str = "ledger <ledger.json> [--today YYYY-MM-DD] [--json]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "ledger",
        "Group a saved ledger response by day",
        LEDGER_USAGE,
        cmd_ledger,
    )]
}

#[derive(Serialize)]
struct LedgerView<'a> {
    groups: &'a [TransactionGroup],
    skipped: &'a [i64],
    totals: LedgerTotals,
}

fn cmd_ledger(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = required_path(args, LEDGER_USAGE)?;
    let items = load_ledger_items(path)?;
    let options = context.grouping_options();
    let report = LedgerService::group_transactions(&items, context.today(), &options);
    let totals = LedgerService::totals(&report.groups);
    tracing::info!(
        records = items.len(),
        groups = report.groups.len(),
        skipped = report.skipped.len(),
        grouping = ?options.key,
        "ledger grouped"
    );

    match context.mode {
        OutputMode::Json => to_json(&LedgerView {
            groups: &report.groups,
            skipped: &report.skipped,
            totals,
        }),
        OutputMode::Text => Ok(render(context, &report, totals)),
    }
}

fn render(context: &ShellContext, report: &GroupingReport, totals: LedgerTotals) -> String {
    let formatter = context.formatter();
    let mut out = context.report();

    if report.groups.is_empty() {
        out.info("No transactions.");
    }

    for group in &report.groups {
        out.section(format!("{} ({})", group.date, group.key));
        out.info(format!(
            "income {}  expense {}  day total {}",
            formatter.format_amount(group.total_income),
            formatter.format_amount(group.total_expense),
            formatter.format_signed(group.daily_total)
        ));
        for item in &group.items {
            out.detail(format!("{:>14}  {}  [{}]", item.amount_text, item.title, item.sub));
        }
        out.blank_line();
    }

    if !report.groups.is_empty() {
        out.success(format!(
            "{} transactions, income {}, expense {}, net {}",
            totals.count,
            formatter.format_amount(totals.income),
            formatter.format_amount(totals.expense),
            formatter.format_signed(totals.net)
        ));
    }

    if !report.skipped.is_empty() {
        let ids: Vec<String> = report.skipped.iter().map(i64::to_string).collect();
        out.warning(format!(
            "{} record(s) without a readable date were left out (ids: {})",
            report.skipped.len(),
            ids.join(", ")
        ));
    }

    out.finish()
}
