//! Questionnaire items and the answers collected against them.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::trait_axis::TraitAxisCode;

pub const CHOICE_MIN: u8 = 1;
pub const CHOICE_MAX: u8 = 5;

/// A single Likert item. Agreement (5) leans toward the axis' left pole.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub title: &'static str,
    pub axis: TraitAxisCode,
}

/// The questionnaire in presentation order. Each item feeds exactly one axis.
pub const QUESTIONNAIRE: [Question; 12] = [
    Question {
        id: 1,
        title: "I often pick up the bill when I'm out with friends.",
        axis: TraitAxisCode::EI,
    },
    Question {
        id: 2,
        title: "Shopping is more fun when someone comes along.",
        axis: TraitAxisCode::EI,
    },
    Question {
        id: 3,
        title: "I'd rather spend on a group trip than on something just for me.",
        axis: TraitAxisCode::EI,
    },
    Question {
        id: 4,
        title: "I compare prices across several stores before buying.",
        axis: TraitAxisCode::SN,
    },
    Question {
        id: 5,
        title: "I check my card statement line by line.",
        axis: TraitAxisCode::SN,
    },
    Question {
        id: 6,
        title: "Past returns matter more to me than a promising story.",
        axis: TraitAxisCode::SN,
    },
    Question {
        id: 7,
        title: "I work out the cost per use before a big purchase.",
        axis: TraitAxisCode::TF,
    },
    Question {
        id: 8,
        title: "I can skip a gift if it doesn't fit the budget.",
        axis: TraitAxisCode::TF,
    },
    Question {
        id: 9,
        title: "A bad mood rarely changes what I buy.",
        axis: TraitAxisCode::TF,
    },
    Question {
        id: 10,
        title: "I set a monthly budget and track it.",
        axis: TraitAxisCode::JP,
    },
    Question {
        id: 11,
        title: "My savings transfer happens automatically on payday.",
        axis: TraitAxisCode::JP,
    },
    Question {
        id: 12,
        title: "I rarely make purchases I didn't plan for.",
        axis: TraitAxisCode::JP,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors raised when recording questionnaire answers.
pub enum AnswerError {
    ChoiceOutOfRange { question_index: usize, value: u8 },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::ChoiceOutOfRange {
                question_index,
                value,
            } => write!(
                f,
                "choice {value} for question #{question_index} is outside {CHOICE_MIN}..={CHOICE_MAX}"
            ),
        }
    }
}

impl std::error::Error for AnswerError {}

/// A submitted answer to one questionnaire item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub choice_value: u8,
}

/// Answers keyed by question index, built up as the user moves through the
/// questionnaire. Every stored choice is within `CHOICE_MIN..=CHOICE_MAX`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "BTreeMap<usize, u8>", into = "BTreeMap<usize, u8>")]
pub struct AnswerSheet {
    choices: BTreeMap<usize, u8>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the choice for the question at `index`.
    pub fn record(&mut self, index: usize, value: u8) -> Result<(), AnswerError> {
        if !(CHOICE_MIN..=CHOICE_MAX).contains(&value) {
            return Err(AnswerError::ChoiceOutOfRange {
                question_index: index,
                value,
            });
        }
        self.choices.insert(index, value);
        Ok(())
    }

    pub fn choice(&self, index: usize) -> Option<u8> {
        self.choices.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.choices.iter().map(|(index, value)| (*index, *value))
    }

    /// Converts the sheet into submission records for the given question list.
    /// Indexes without a matching question are left out.
    pub fn to_answers(&self, questions: &[Question]) -> Vec<Answer> {
        self.iter()
            .filter_map(|(index, value)| {
                questions.get(index).map(|question| Answer {
                    question_id: question.id,
                    choice_value: value,
                })
            })
            .collect()
    }
}

impl TryFrom<BTreeMap<usize, u8>> for AnswerSheet {
    type Error = AnswerError;

    fn try_from(choices: BTreeMap<usize, u8>) -> Result<Self, Self::Error> {
        let mut sheet = AnswerSheet::new();
        for (index, value) in choices {
            sheet.record(index, value)?;
        }
        Ok(sheet)
    }
}

impl From<AnswerSheet> for BTreeMap<usize, u8> {
    fn from(sheet: AnswerSheet) -> Self {
        sheet.choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questionnaire_covers_each_axis_equally() {
        for code in TraitAxisCode::ALL {
            let count = QUESTIONNAIRE.iter().filter(|q| q.axis == code).count();
            assert_eq!(count, 3, "axis {code}");
        }
    }

    #[test]
    fn record_rejects_out_of_range_choice() {
        let mut sheet = AnswerSheet::new();
        assert!(sheet.record(0, 0).is_err());
        assert!(sheet.record(0, 6).is_err());
        sheet.record(0, 5).expect("valid choice");
        assert_eq!(sheet.choice(0), Some(5));
    }

    #[test]
    fn sheet_deserializes_from_string_keyed_object() {
        let sheet: AnswerSheet = serde_json::from_str(r#"{"0": 5, "1": 4}"#).expect("parse sheet");
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.choice(1), Some(4));

        let bad = serde_json::from_str::<AnswerSheet>(r#"{"0": 9}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn to_answers_maps_indexes_to_question_ids() {
        let mut sheet = AnswerSheet::new();
        sheet.record(0, 3).unwrap();
        sheet.record(99, 3).unwrap();
        let answers = sheet.to_answers(&QUESTIONNAIRE);
        assert_eq!(
            answers,
            vec![Answer {
                question_id: 1,
                choice_value: 3
            }]
        );
    }
}
