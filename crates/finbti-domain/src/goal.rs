//! Savings goals as returned by the goal detail and list endpoints.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A savings goal. The server owns identity and lifecycle; several endpoints
/// populate different subsets of the balance fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(alias = "goalId", default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub target_amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<u32>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<GoalAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_rate: Option<f64>,
}

impl Goal {
    pub fn new(id: i64, title: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id,
            title: title.into(),
            target_amount,
            ..Self::default()
        }
    }

    pub fn icon(&self) -> Option<GoalIcon> {
        self.icon_id.and_then(GoalIcon::from_id)
    }
}

/// Linked account details embedded in a goal response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoalAccount {
    #[serde(default)]
    pub bank_name: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_amount: Option<Money>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    Active,
    Complete,
    Failed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::Active => "Active",
            GoalStatus::Complete => "Complete",
            GoalStatus::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// Icons a goal can be decorated with, keyed by the server's `iconId`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GoalIcon {
    Travel,
    Home,
    Car,
    Education,
    Wedding,
    Emergency,
    Gadget,
    Gift,
}

impl GoalIcon {
    pub const ALL: [GoalIcon; 8] = [
        GoalIcon::Travel,
        GoalIcon::Home,
        GoalIcon::Car,
        GoalIcon::Education,
        GoalIcon::Wedding,
        GoalIcon::Emergency,
        GoalIcon::Gadget,
        GoalIcon::Gift,
    ];

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.id() == id)
    }

    pub fn id(self) -> u32 {
        match self {
            GoalIcon::Travel => 1,
            GoalIcon::Home => 2,
            GoalIcon::Car => 3,
            GoalIcon::Education => 4,
            GoalIcon::Wedding => 5,
            GoalIcon::Emergency => 6,
            GoalIcon::Gadget => 7,
            GoalIcon::Gift => 8,
        }
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            GoalIcon::Travel => "goal_travel",
            GoalIcon::Home => "goal_home",
            GoalIcon::Car => "goal_car",
            GoalIcon::Education => "goal_education",
            GoalIcon::Wedding => "goal_wedding",
            GoalIcon::Emergency => "goal_emergency",
            GoalIcon::Gadget => "goal_gadget",
            GoalIcon::Gift => "goal_gift",
        }
    }
}
