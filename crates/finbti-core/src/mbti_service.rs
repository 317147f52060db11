//! Scores questionnaire answers into trait axis splits and a profile type.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use finbti_domain::{
    AnswerSheet, Question, RawMbtiScores, TraitAxis, TraitAxisCode, TraitResult, CHOICE_MAX,
    CHOICE_MIN, TRAIT_AXES,
};

use crate::{profile::MbtiProfile, CoreError};

/// Left score reported when an axis has no data on either side.
pub const NEUTRAL_LEFT_SCORE: u8 = 50;
/// A left score at or above this value makes the left pole dominant, so ties go left.
pub const LEFT_DOMINANCE_THRESHOLD: u8 = 50;

/// Percentage of `left` within `left + right`, rounded half up.
pub fn left_percentage(left: u32, right: u32) -> u8 {
    let total = u64::from(left) + u64::from(right);
    if total == 0 {
        return NEUTRAL_LEFT_SCORE;
    }
    // round(left * 100 / total) without going through floats
    let scaled = (u64::from(left) * 200 + total) / (2 * total);
    scaled.min(100) as u8
}

/// Sum of choices and number of answered items for one axis.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct AxisTally {
    pub sum: u32,
    pub answered: u32,
}

/// Per-axis Likert sums accumulated from an [`AnswerSheet`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AxisTotals {
    tallies: BTreeMap<TraitAxisCode, AxisTally>,
}

impl AxisTotals {
    pub fn tally(&self, code: TraitAxisCode) -> AxisTally {
        self.tallies.get(&code).copied().unwrap_or_default()
    }

    pub fn sum(&self, code: TraitAxisCode) -> u32 {
        self.tally(code).sum
    }

    pub fn answered(&self, code: TraitAxisCode) -> u32 {
        self.tally(code).answered
    }

    fn add(&mut self, code: TraitAxisCode, choice: u8) {
        let tally = self.tallies.entry(code).or_default();
        tally.sum += u32::from(choice);
        tally.answered += 1;
    }

    /// Splits each axis' Likert sum into pole points: a choice `c` gives
    /// `c - CHOICE_MIN` to the left pole and `CHOICE_MAX - c` to the right.
    pub fn to_raw_scores(&self) -> RawMbtiScores {
        let mut scores = RawMbtiScores::default();
        for (code, tally) in &self.tallies {
            let (left, right) = code.poles();
            let floor = u32::from(CHOICE_MIN) * tally.answered;
            let ceiling = u32::from(CHOICE_MAX) * tally.answered;
            scores.add(left, tally.sum.saturating_sub(floor));
            scores.add(right, ceiling.saturating_sub(tally.sum));
        }
        scores
    }
}

/// Trait results together with the profile they resolve to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MbtiReport {
    pub results: Vec<TraitResult>,
    pub profile: Option<&'static MbtiProfile>,
}

pub struct MbtiService;

impl MbtiService {
    /// Computes one [`TraitResult`] per axis. Total over its domain.
    pub fn compute_trait_results(axes: &[TraitAxis], scores: &RawMbtiScores) -> Vec<TraitResult> {
        axes.iter()
            .map(|axis| {
                let left_score = left_percentage(scores.score(axis.left), scores.score(axis.right));
                let dominant = if left_score >= LEFT_DOMINANCE_THRESHOLD {
                    axis.left
                } else {
                    axis.right
                };
                TraitResult {
                    code: axis.code,
                    title: axis.title,
                    left_label: axis.left_label,
                    right_label: axis.right_label,
                    left_score,
                    dominant,
                    description: axis.description_for(dominant),
                }
            })
            .collect()
    }

    /// Folds the answered items of `questions` into per-axis sums. Unanswered
    /// items are skipped; answers without a matching question are ignored.
    pub fn accumulate_answers(questions: &[Question], answers: &AnswerSheet) -> AxisTotals {
        let mut totals = AxisTotals::default();
        for (index, question) in questions.iter().enumerate() {
            if let Some(choice) = answers.choice(index) {
                totals.add(question.axis, choice);
            }
        }
        let stray = answers.iter().filter(|(index, _)| *index >= questions.len()).count();
        if stray > 0 {
            debug!(stray, "ignoring answers without a matching question");
        }
        totals
    }

    /// Rejects sheets holding answers for questions that do not exist.
    pub fn validate_answers(questions: &[Question], answers: &AnswerSheet) -> Result<(), CoreError> {
        match answers.iter().find(|(index, _)| *index >= questions.len()) {
            Some((index, _)) => Err(CoreError::UnknownQuestion(index)),
            None => Ok(()),
        }
    }

    /// Scores a server-computed score object against the standard axes.
    pub fn score_server_result(scores: &RawMbtiScores) -> MbtiReport {
        let results = Self::compute_trait_results(&TRAIT_AXES, scores);
        let profile = MbtiProfile::resolve(&results);
        MbtiReport { results, profile }
    }

    /// Scores a locally collected answer sheet end to end.
    pub fn score_answers(questions: &[Question], answers: &AnswerSheet) -> MbtiReport {
        let scores = Self::accumulate_answers(questions, answers).to_raw_scores();
        Self::score_server_result(&scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finbti_domain::{Pole, QUESTIONNAIRE};

    #[test]
    fn left_percentage_rounds_half_up() {
        assert_eq!(left_percentage(1, 1), 50);
        assert_eq!(left_percentage(1, 2), 33);
        assert_eq!(left_percentage(2, 1), 67);
        assert_eq!(left_percentage(1, 7), 13); // 12.5
        assert_eq!(left_percentage(5, 0), 100);
        assert_eq!(left_percentage(0, 5), 0);
    }

    #[test]
    fn left_percentage_stays_in_bounds_on_exact_halves() {
        assert_eq!(left_percentage(1, 39), 3); // 2.5
        assert_eq!(left_percentage(39, 1), 98); // 97.5
        assert_eq!(left_percentage(u32::MAX, u32::MAX), 50);
        assert_eq!(left_percentage(u32::MAX, 0), 100);
    }

    #[test]
    fn empty_pair_is_neutral_and_left_dominant() {
        let results = MbtiService::compute_trait_results(&TRAIT_AXES, &RawMbtiScores::default());
        assert_eq!(results.len(), 4);
        for (result, axis) in results.iter().zip(TRAIT_AXES.iter()) {
            assert_eq!(result.left_score, NEUTRAL_LEFT_SCORE);
            assert_eq!(result.dominant, axis.left);
            assert_eq!(result.description, axis.left_description);
        }
    }

    #[test]
    fn right_pole_dominates_below_threshold() {
        let scores = RawMbtiScores::default().with(Pole::T, 2).with(Pole::F, 3);
        let results = MbtiService::compute_trait_results(&TRAIT_AXES, &scores);
        let tf = &results[2];
        assert_eq!(tf.left_score, 40);
        assert_eq!(tf.dominant, Pole::F);
        assert_eq!(tf.description, TRAIT_AXES[2].right_description);
        assert!(!tf.is_left_dominant());
        assert_eq!(tf.right_score(), 60);
    }

    #[test]
    fn accumulation_sums_per_axis() {
        let mut sheet = AnswerSheet::new();
        sheet.record(0, 5).unwrap();
        sheet.record(1, 4).unwrap();
        let totals = MbtiService::accumulate_answers(&QUESTIONNAIRE, &sheet);
        assert_eq!(totals.sum(TraitAxisCode::EI), 9);
        assert_eq!(totals.answered(TraitAxisCode::EI), 2);
        assert_eq!(totals.sum(TraitAxisCode::JP), 0);
    }

    #[test]
    fn accumulation_is_idempotent() {
        let mut sheet = AnswerSheet::new();
        for (index, value) in [(0, 1), (4, 5), (9, 3), (11, 2)] {
            sheet.record(index, value).unwrap();
        }
        let first = MbtiService::accumulate_answers(&QUESTIONNAIRE, &sheet);
        let second = MbtiService::accumulate_answers(&QUESTIONNAIRE, &sheet);
        assert_eq!(first, second);
    }

    #[test]
    fn likert_sums_split_into_pole_points() {
        let mut sheet = AnswerSheet::new();
        sheet.record(0, 5).unwrap();
        sheet.record(1, 4).unwrap();
        let scores = MbtiService::accumulate_answers(&QUESTIONNAIRE, &sheet).to_raw_scores();
        assert_eq!(scores.score(Pole::E), 7);
        assert_eq!(scores.score(Pole::I), 1);
        assert_eq!(scores.score(Pole::S), 0);
        assert_eq!(scores.score(Pole::N), 0);
    }

    #[test]
    fn validate_flags_unknown_question_index() {
        let mut sheet = AnswerSheet::new();
        sheet.record(12, 3).unwrap();
        let err = MbtiService::validate_answers(&QUESTIONNAIRE, &sheet).expect_err("unknown index");
        assert!(matches!(err, CoreError::UnknownQuestion(12)));
    }
}
