//! Goal achievement figures and validation of the goal creation form.

use chrono::NaiveDate;
use serde::Serialize;

use finbti_domain::{Goal, GoalIcon, GoalStatus, Money};

use crate::{
    format::{expand_two_digit_year, format_date_input, mask_account_number, parse_amount_to_number},
    CoreError,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Achievement figures for one goal, ready for gauges and detail screens.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GoalProgress {
    pub goal_id: i64,
    pub title: String,
    pub status: GoalStatus,
    pub target_amount: Money,
    pub collected: Money,
    pub remaining: Money,
    pub percent: u8,
    pub achieved: bool,
    pub remaining_days: Option<i64>,
    pub bank_name: Option<String>,
    pub masked_account: Option<String>,
    pub icon: Option<GoalIcon>,
}

pub struct GoalService;

impl GoalService {
    /// First present balance among the goal's own current balance, the linked
    /// account's current balance, the account's balance amount and the saved
    /// amount. A present zero wins over later sources.
    pub fn collected_amount(goal: &Goal) -> Money {
        let account = goal.account.as_ref();
        goal.current_balance
            .or_else(|| account.and_then(|account| account.current_balance))
            .or_else(|| account.and_then(|account| account.balance_amount))
            .or(goal.saved_amount)
            .unwrap_or(0)
    }

    /// Never negative.
    pub fn remaining_goal_amount(goal: &Goal) -> Money {
        goal.target_amount
            .saturating_sub(Self::collected_amount(goal))
            .max(0)
    }

    pub fn is_goal_achieved(goal: &Goal) -> bool {
        Self::collected_amount(goal) >= goal.target_amount
    }

    /// `clamp(round(collected / target * 100), 0, 100)`, or 0 for a non-positive target.
    pub fn progress_percent(goal: &Goal) -> u8 {
        let target = i128::from(goal.target_amount);
        if target <= 0 {
            return 0;
        }
        let collected = i128::from(Self::collected_amount(goal)).max(0);
        let rounded = (collected * 200 + target) / (2 * target);
        rounded.clamp(0, 100) as u8
    }

    /// Server-reported days left, else days from `today` until the end date
    /// (floored at zero). `None` when neither is known.
    pub fn remaining_days(goal: &Goal, today: NaiveDate) -> Option<i64> {
        goal.remaining_days.or_else(|| {
            goal.end_date
                .map(|end| (end - today).num_days().max(0))
        })
    }

    pub fn progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
        let account = goal.account.as_ref();
        GoalProgress {
            goal_id: goal.id,
            title: goal.title.clone(),
            status: goal.status,
            target_amount: goal.target_amount,
            collected: Self::collected_amount(goal),
            remaining: Self::remaining_goal_amount(goal),
            percent: Self::progress_percent(goal),
            achieved: Self::is_goal_achieved(goal),
            remaining_days: Self::remaining_days(goal, today),
            bank_name: account
                .map(|account| account.bank_name.clone())
                .filter(|name| !name.is_empty()),
            masked_account: account
                .map(|account| mask_account_number(&account.account_number))
                .filter(|masked| !masked.is_empty()),
            icon: goal.icon(),
        }
    }
}

/// Raw values collected by the multi-step goal creation form.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: String,
    pub target_amount: String,
    pub start_date: String,
    pub end_date: String,
    pub color_code: Option<String>,
    pub icon_id: Option<u32>,
}

/// Body sent to the goal creation endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalRequest {
    pub title: String,
    pub target_amount: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<u32>,
}

impl GoalDraft {
    pub fn validate(&self) -> Result<NewGoalRequest, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("goal title is required".into()));
        }
        let target_amount = parse_amount_to_number(&self.target_amount);
        if target_amount <= 0 {
            return Err(CoreError::Validation(
                "target amount must be greater than zero".into(),
            ));
        }
        let start_date = parse_form_date(&self.start_date, "start date")?;
        let end_date = parse_form_date(&self.end_date, "end date")?;
        if end_date < start_date {
            return Err(CoreError::Validation(format!(
                "end date {end_date} is before start date {start_date}"
            )));
        }
        if let Some(id) = self.icon_id {
            if GoalIcon::from_id(id).is_none() {
                return Err(CoreError::Validation(format!("unknown icon id {id}")));
            }
        }
        Ok(NewGoalRequest {
            title: title.to_string(),
            target_amount,
            start_date,
            end_date,
            color_code: self.color_code.clone().filter(|code| !code.trim().is_empty()),
            icon_id: self.icon_id,
        })
    }
}

/// Accepts `YYYY-MM-DD`, `YY-MM-DD` and bare `YYYYMMDD` input.
fn parse_form_date(raw: &str, field: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    let normalized = if raw.chars().all(|ch| ch.is_ascii_digit()) {
        format_date_input(raw)
    } else {
        expand_two_digit_year(raw)
    };
    NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
        .map_err(|_| CoreError::Validation(format!("{field} `{raw}` is not a valid date")))
}
