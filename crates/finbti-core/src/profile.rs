//! The sixteen financial personality types.

use serde::Serialize;

use finbti_domain::{TraitAxisCode, TraitResult};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MbtiProfile {
    pub code: &'static str,
    pub nickname: &'static str,
    pub summary: &'static str,
}

pub const PROFILES: [MbtiProfile; 16] = [
    MbtiProfile {
        code: "ESTJ",
        nickname: "Budget Captain",
        summary: "Runs the household budget like a team and keeps everyone on plan.",
    },
    MbtiProfile {
        code: "ESTP",
        nickname: "Deal Hunter",
        summary: "Moves fast on a good price and enjoys the chase as much as the buy.",
    },
    MbtiProfile {
        code: "ESFJ",
        nickname: "Generous Host",
        summary: "Keeps a budget so there is always room to treat friends and family.",
    },
    MbtiProfile {
        code: "ESFP",
        nickname: "Experience Collector",
        summary: "Spends on moments shared with others and rarely regrets it.",
    },
    MbtiProfile {
        code: "ENTJ",
        nickname: "Wealth Strategist",
        summary: "Sets ambitious targets and builds a system to reach them.",
    },
    MbtiProfile {
        code: "ENTP",
        nickname: "Venture Tinkerer",
        summary: "Tries new products and ideas with money, sometimes before the numbers are in.",
    },
    MbtiProfile {
        code: "ENFJ",
        nickname: "Community Investor",
        summary: "Plans spending around people and causes that matter.",
    },
    MbtiProfile {
        code: "ENFP",
        nickname: "Spontaneous Dreamer",
        summary: "Chases inspiring plans and new experiences, with savings catching up later.",
    },
    MbtiProfile {
        code: "ISTJ",
        nickname: "Steady Saver",
        summary: "Saves a fixed share every month and trusts the routine.",
    },
    MbtiProfile {
        code: "ISTP",
        nickname: "Practical Minimalist",
        summary: "Buys what works, keeps it long and ignores the rest.",
    },
    MbtiProfile {
        code: "ISFJ",
        nickname: "Careful Guardian",
        summary: "Protects the safety net first and spends for others second.",
    },
    MbtiProfile {
        code: "ISFP",
        nickname: "Quiet Treat-Giver",
        summary: "Lives modestly and spends on small comforts that feel right.",
    },
    MbtiProfile {
        code: "INTJ",
        nickname: "Long-Game Planner",
        summary: "Thinks in years, compounds patiently and rarely deviates.",
    },
    MbtiProfile {
        code: "INTP",
        nickname: "Curious Analyst",
        summary: "Researches every option thoroughly and sometimes forgets to act.",
    },
    MbtiProfile {
        code: "INFJ",
        nickname: "Values-Led Saver",
        summary: "Saves with purpose and spends only where it fits personal values.",
    },
    MbtiProfile {
        code: "INFP",
        nickname: "Heartfelt Spender",
        summary: "Lets feelings guide purchases and benefits from gentle automation.",
    },
];

impl MbtiProfile {
    pub fn by_code(code: &str) -> Option<&'static MbtiProfile> {
        PROFILES
            .iter()
            .find(|profile| profile.code.eq_ignore_ascii_case(code))
    }

    /// Builds the four-letter code from the dominant pole of each axis, in
    /// `EI SN TF JP` order. Returns `None` when an axis is missing.
    pub fn code_for(results: &[TraitResult]) -> Option<String> {
        TraitAxisCode::ALL
            .iter()
            .map(|code| {
                results
                    .iter()
                    .find(|result| result.code == *code)
                    .map(|result| result.dominant.letter())
            })
            .collect()
    }

    pub fn resolve(results: &[TraitResult]) -> Option<&'static MbtiProfile> {
        Self::code_for(results).and_then(|code| Self::by_code(&code))
    }
}
