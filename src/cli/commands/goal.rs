use finbti_core::{GoalDraft, GoalProgress, GoalService};
use finbti_domain::Goal;

use crate::cli::input::read_json;
use crate::cli::output::gauge;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::{OutputMode, ShellContext};
use crate::errors::CliError;

use super::{required_path, to_json};

const GOAL_USAGE: &str = "goal <goal.json> [--today YYYY-MM-DD] [--json]";
const REQUEST_USAGE: &str = "goal-request <title> <amount> <start YYYYMMDD> <end YYYYMMDD> [icon id]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "goal",
            "Summarize progress of a saved goal response",
            GOAL_USAGE,
            cmd_goal,
        ),
        CommandEntry::new(
            "goal-request",
            "Validate goal form input and print the creation request",
            REQUEST_USAGE,
            cmd_goal_request,
        ),
    ]
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = required_path(args, GOAL_USAGE)?;
    let goal: Goal = read_json(path)?;
    let progress = GoalService::progress(&goal, context.today());
    tracing::info!(goal_id = progress.goal_id, percent = progress.percent, "goal summarized");

    match context.mode {
        OutputMode::Json => to_json(&progress),
        OutputMode::Text => Ok(render(context, &progress)),
    }
}

fn render(context: &ShellContext, progress: &GoalProgress) -> String {
    let formatter = context.formatter();
    let mut out = context.report();

    out.section(&progress.title);
    out.info(gauge(progress.percent));
    out.detail(format!("Status    : {}", progress.status));
    out.detail(format!(
        "Collected : {} / {}",
        formatter.format_amount(progress.collected),
        formatter.format_amount(progress.target_amount)
    ));
    out.detail(format!("Remaining : {}", formatter.format_amount(progress.remaining)));
    if let Some(days) = progress.remaining_days {
        out.detail(format!("Days left : {days}"));
    }
    if let Some(bank) = &progress.bank_name {
        let account = progress.masked_account.as_deref().unwrap_or("");
        out.detail(format!("Account   : {bank} {account}").trim_end().to_string());
    }
    if let Some(icon) = progress.icon {
        out.detail(format!("Icon      : {}", icon.asset_name()));
    }
    if progress.achieved {
        out.success("Goal reached.");
    }

    out.finish()
}

fn cmd_goal_request(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [title, amount, start, end, rest @ ..] = args else {
        return Err(CliError::Usage(REQUEST_USAGE.to_string()));
    };
    let icon_id = match rest.first() {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| CliError::Usage(REQUEST_USAGE.to_string()))?,
        ),
        None => None,
    };
    let draft = GoalDraft {
        title: title.to_string(),
        target_amount: amount.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        color_code: None,
        icon_id,
    };
    let request = draft.validate()?;
    to_json(&request)
}
