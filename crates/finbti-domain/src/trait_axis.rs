//! Financial MBTI trait axes and their poles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One side of a bipolar trait axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Pole {
    pub const ALL: [Pole; 8] = [
        Pole::E,
        Pole::I,
        Pole::S,
        Pole::N,
        Pole::T,
        Pole::F,
        Pole::J,
        Pole::P,
    ];

    /// Name of the raw score field carrying this pole in server responses.
    pub fn score_key(self) -> &'static str {
        match self {
            Pole::E => "eScore",
            Pole::I => "iScore",
            Pole::S => "sScore",
            Pole::N => "nScore",
            Pole::T => "tScore",
            Pole::F => "fScore",
            Pole::J => "jScore",
            Pole::P => "pScore",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Pole::E => 'E',
            Pole::I => 'I',
            Pole::S => 'S',
            Pole::N => 'N',
            Pole::T => 'T',
            Pole::F => 'F',
            Pole::J => 'J',
            Pole::P => 'P',
        }
    }

    pub fn axis(self) -> TraitAxisCode {
        match self {
            Pole::E | Pole::I => TraitAxisCode::EI,
            Pole::S | Pole::N => TraitAxisCode::SN,
            Pole::T | Pole::F => TraitAxisCode::TF,
            Pole::J | Pole::P => TraitAxisCode::JP,
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Two-letter code naming an axis; questions declare which axis they feed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitAxisCode {
    EI,
    SN,
    TF,
    JP,
}

impl TraitAxisCode {
    pub const ALL: [TraitAxisCode; 4] = [
        TraitAxisCode::EI,
        TraitAxisCode::SN,
        TraitAxisCode::TF,
        TraitAxisCode::JP,
    ];

    pub fn poles(self) -> (Pole, Pole) {
        match self {
            TraitAxisCode::EI => (Pole::E, Pole::I),
            TraitAxisCode::SN => (Pole::S, Pole::N),
            TraitAxisCode::TF => (Pole::T, Pole::F),
            TraitAxisCode::JP => (Pole::J, Pole::P),
        }
    }

    pub fn left(self) -> Pole {
        self.poles().0
    }

    pub fn right(self) -> Pole {
        self.poles().1
    }
}

impl fmt::Display for TraitAxisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TraitAxisCode::EI => "EI",
            TraitAxisCode::SN => "SN",
            TraitAxisCode::TF => "TF",
            TraitAxisCode::JP => "JP",
        };
        f.write_str(label)
    }
}

/// Static description of a bipolar personality dimension.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TraitAxis {
    pub code: TraitAxisCode,
    pub title: &'static str,
    pub left: Pole,
    pub right: Pole,
    pub left_label: &'static str,
    pub right_label: &'static str,
    pub left_description: &'static str,
    pub right_description: &'static str,
}

impl TraitAxis {
    pub fn description_for(&self, pole: Pole) -> &'static str {
        if pole == self.left {
            self.left_description
        } else {
            self.right_description
        }
    }
}

/// The four axes scored by the questionnaire, in profile-code order.
pub const TRAIT_AXES: [TraitAxis; 4] = [
    TraitAxis {
        code: TraitAxisCode::EI,
        title: "Spending energy",
        left: Pole::E,
        right: Pole::I,
        left_label: "Social spender",
        right_label: "Solo saver",
        left_description: "You spend where people are. Dinners, gifts and shared \
            experiences take a visible share of your budget, and money feels best \
            when it connects you with others.",
        right_description: "You spend quietly and mostly on yourself. Group outings \
            are occasional, and your wallet stays closed unless something clearly \
            matters to you.",
    },
    TraitAxis {
        code: TraitAxisCode::SN,
        title: "Information style",
        left: Pole::S,
        right: Pole::N,
        left_label: "Fact checker",
        right_label: "Trend seeker",
        left_description: "You compare prices, read the fine print and trust your \
            receipts. Concrete numbers decide your purchases.",
        right_description: "You follow what is new and promising. Ideas and future \
            potential weigh more than today's exact figures.",
    },
    TraitAxis {
        code: TraitAxisCode::TF,
        title: "Decision basis",
        left: Pole::T,
        right: Pole::F,
        left_label: "Calculated",
        right_label: "Emotional",
        left_description: "You decide with a spreadsheet mindset. Cost, return and \
            opportunity cost settle most questions before feelings do.",
        right_description: "You decide with your heart. Mood, relationships and how a \
            purchase makes you feel shape where the money goes.",
    },
    TraitAxis {
        code: TraitAxisCode::JP,
        title: "Planning style",
        left: Pole::J,
        right: Pole::P,
        left_label: "Planner",
        right_label: "Improviser",
        left_description: "You budget ahead and stick to it. Savings are automatic \
            and surprises are rare.",
        right_description: "You adapt as you go. Plans stay loose and spending follows \
            the moment, so balances can swing from week to week.",
    },
];

/// Derived, read-only view of one axis after scoring.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TraitResult {
    pub code: TraitAxisCode,
    pub title: &'static str,
    pub left_label: &'static str,
    pub right_label: &'static str,
    /// Share of the left pole within the pair total, `0..=100`.
    pub left_score: u8,
    pub dominant: Pole,
    pub description: &'static str,
}

impl TraitResult {
    pub fn right_score(&self) -> u8 {
        100 - self.left_score
    }

    pub fn is_left_dominant(&self) -> bool {
        self.dominant == self.code.left()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_pair_opposing_poles_in_code_order() {
        for (axis, code) in TRAIT_AXES.iter().zip(TraitAxisCode::ALL) {
            assert_eq!(axis.code, code);
            assert_eq!((axis.left, axis.right), code.poles());
            assert_ne!(axis.left, axis.right);
        }
    }

    #[test]
    fn every_pole_belongs_to_exactly_one_axis() {
        for pole in Pole::ALL {
            let (left, right) = pole.axis().poles();
            assert!(pole == left || pole == right);
        }
    }

    #[test]
    fn description_follows_pole() {
        let axis = &TRAIT_AXES[2];
        assert_eq!(axis.description_for(Pole::T), axis.left_description);
        assert_eq!(axis.description_for(Pole::F), axis.right_description);
    }
}
