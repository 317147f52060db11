use chrono::NaiveDate;

use crate::{
    format::{format_amount_input, parse_amount_to_number},
    goal_service::GoalService,
    ledger_service::LedgerService,
    mbti_service::{left_percentage, MbtiService},
};
use finbti_domain::{
    AnswerSheet, Goal, GoalAccount, LedgerItem, Pole, RawMbtiScores, TraitAxisCode,
    TransactionKind, QUESTIONNAIRE, TRAIT_AXES,
};

#[test]
fn mbti_service_scores_server_payload() {
    let scores: RawMbtiScores = RawMbtiScores::default()
        .with(Pole::E, 3)
        .with(Pole::I, 1)
        .with(Pole::S, 2)
        .with(Pole::N, 2)
        .with(Pole::F, 7)
        .with(Pole::P, 5);
    let report = MbtiService::score_server_result(&scores);

    let left_scores: Vec<u8> = report.results.iter().map(|r| r.left_score).collect();
    assert_eq!(left_scores, vec![75, 50, 0, 0]);
    let profile = report.profile.expect("profile resolved");
    assert_eq!(profile.code, "ESFP");
}

#[test]
fn mbti_left_score_matches_formula_for_sampled_pairs() {
    for (left, right) in [(0u32, 1u32), (3, 7), (10, 10), (99, 1), (250, 750)] {
        let scores = RawMbtiScores::default()
            .with(Pole::J, left)
            .with(Pole::P, right);
        let results = MbtiService::compute_trait_results(&TRAIT_AXES, &scores);
        assert_eq!(results[3].left_score, left_percentage(left, right));
        assert!(results[3].left_score <= 100);
    }
}

#[test]
fn answer_sheet_accumulates_into_axis_sum() {
    let sheet: AnswerSheet = [(0usize, 5u8), (1, 4)]
        .into_iter()
        .collect::<std::collections::BTreeMap<_, _>>()
        .try_into()
        .expect("valid sheet");
    let totals = MbtiService::accumulate_answers(&QUESTIONNAIRE, &sheet);
    assert_eq!(totals.sum(TraitAxisCode::EI), 9);

    let report = MbtiService::score_answers(&QUESTIONNAIRE, &sheet);
    assert_eq!(report.results[0].dominant, Pole::E);
    assert_eq!(report.results[0].left_score, 88);
}

#[test]
fn ledger_service_builds_day_group() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let items = vec![
        LedgerItem::new(1, TransactionKind::Income, 1000, "2025-03-10T09:00:00")
            .with_category("Salary"),
        LedgerItem::new(2, TransactionKind::Expense, 400, "2025-03-10T13:00:00")
            .with_category("Food")
            .with_memo("Lunch"),
    ];
    let groups = LedgerService::group_transactions_by_date(&items, today);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].day, 10);
    assert_eq!(groups[0].total_income, 1000);
    assert_eq!(groups[0].total_expense, 400);
    assert_eq!(groups[0].daily_total, 600);
    assert_eq!(groups[0].items[1].sub, "Food | Lunch");
    assert_eq!(groups[0].items[1].title, "Lunch");
}

#[test]
fn goal_service_falls_back_to_saved_amount() {
    let mut goal = Goal::new(10, "House", 100_000);
    goal.saved_amount = Some(30_000);
    assert_eq!(GoalService::collected_amount(&goal), 30_000);
    assert_eq!(GoalService::remaining_goal_amount(&goal), 70_000);
    assert_eq!(GoalService::progress_percent(&goal), 30);
}

#[test]
fn goal_service_prefers_zero_current_balance() {
    let mut goal = Goal::new(11, "Watch", 100_000);
    goal.current_balance = Some(0);
    goal.account = Some(GoalAccount {
        current_balance: Some(90_000),
        ..GoalAccount::default()
    });
    assert_eq!(GoalService::collected_amount(&goal), 0);
}

#[test]
fn amount_formatting_round_trips() {
    for raw in ["1", "10", "12345", "9876543210"] {
        let formatted = format_amount_input(raw);
        assert_eq!(parse_amount_to_number(&formatted), raw.parse::<i64>().unwrap());
    }
}
