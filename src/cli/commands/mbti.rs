use finbti_core::{MbtiReport, MbtiService};
use finbti_domain::{AnswerSheet, RawMbtiScores, TraitResult, QUESTIONNAIRE, TRAIT_AXES};

use crate::cli::input::read_json;
use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::{OutputMode, ShellContext};

use super::{required_path, to_json};

const SCORES_USAGE: &str = "mbti-scores <scores.json> [--json]";
const ANSWERS_USAGE: &str = "mbti-answers <answers.json> [--json]";
const BAR_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "mbti-scores",
            "Turn a saved server score object into trait splits",
            SCORES_USAGE,
            cmd_scores,
        ),
        CommandEntry::new(
            "mbti-answers",
            "Score a local answer sheet keyed by question index",
            ANSWERS_USAGE,
            cmd_answers,
        ),
        CommandEntry::new(
            "questions",
            "List the questionnaire with question indexes",
            "questions",
            cmd_questions,
        ),
    ]
}

fn cmd_scores(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = required_path(args, SCORES_USAGE)?;
    let scores: RawMbtiScores = read_json(path)?;
    let report = MbtiService::score_server_result(&scores);
    emit(context, &report)
}

fn cmd_answers(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = required_path(args, ANSWERS_USAGE)?;
    let sheet: AnswerSheet = read_json(path)?;
    MbtiService::validate_answers(&QUESTIONNAIRE, &sheet)?;
    let report = MbtiService::score_answers(&QUESTIONNAIRE, &sheet);
    tracing::info!(answered = sheet.len(), "answer sheet scored");
    emit(context, &report)
}

fn emit(context: &ShellContext, report: &MbtiReport) -> CommandResult {
    match context.mode {
        OutputMode::Json => to_json(report),
        OutputMode::Text => Ok(render(context, report)),
    }
}

fn render(context: &ShellContext, report: &MbtiReport) -> String {
    let mut out = context.report();

    match report.profile {
        Some(profile) => {
            out.section(format!("{} {}", profile.code, profile.nickname));
            out.info(profile.summary);
        }
        None => {
            out.section("Financial MBTI");
        }
    }
    out.blank_line();

    for result in &report.results {
        out.info(format!("{} {}", result.code, result.title));
        out.detail(split_line(result));
        out.detail(result.description);
    }

    out.finish()
}

fn split_line(result: &TraitResult) -> String {
    let left = usize::from(result.left_score) * BAR_WIDTH / 100;
    let marker = if result.is_left_dominant() { "<" } else { ">" };
    format!(
        "{} {:>3}% [{}{}] {:>3}% {}  {}",
        result.left_label,
        result.left_score,
        "=".repeat(left),
        " ".repeat(BAR_WIDTH - left),
        result.right_score(),
        result.right_label,
        marker
    )
}

fn cmd_questions(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let mut out = context.report();
    for axis in &TRAIT_AXES {
        out.section(format!("{} {}", axis.code, axis.title));
        for (index, question) in QUESTIONNAIRE.iter().enumerate() {
            if question.axis == axis.code {
                out.info(format!("{index:>2}. {}", question.title));
            }
        }
    }
    out.detail("Answer 1 (strongly disagree) to 5 (strongly agree).");
    Ok(out.finish())
}
