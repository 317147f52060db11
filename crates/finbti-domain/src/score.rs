//! Raw per-pole scores as accumulated locally or returned by the server.

use serde::{Deserialize, Serialize};

use crate::trait_axis::Pole;

/// Eight non-negative pole scores. Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMbtiScores {
    pub e_score: u32,
    pub i_score: u32,
    pub s_score: u32,
    pub n_score: u32,
    pub t_score: u32,
    pub f_score: u32,
    pub j_score: u32,
    pub p_score: u32,
}

impl RawMbtiScores {
    pub fn score(&self, pole: Pole) -> u32 {
        match pole {
            Pole::E => self.e_score,
            Pole::I => self.i_score,
            Pole::S => self.s_score,
            Pole::N => self.n_score,
            Pole::T => self.t_score,
            Pole::F => self.f_score,
            Pole::J => self.j_score,
            Pole::P => self.p_score,
        }
    }

    fn slot_mut(&mut self, pole: Pole) -> &mut u32 {
        match pole {
            Pole::E => &mut self.e_score,
            Pole::I => &mut self.i_score,
            Pole::S => &mut self.s_score,
            Pole::N => &mut self.n_score,
            Pole::T => &mut self.t_score,
            Pole::F => &mut self.f_score,
            Pole::J => &mut self.j_score,
            Pole::P => &mut self.p_score,
        }
    }

    pub fn add(&mut self, pole: Pole, points: u32) {
        let slot = self.slot_mut(pole);
        *slot = slot.saturating_add(points);
    }

    pub fn with(mut self, pole: Pole, points: u32) -> Self {
        *self.slot_mut(pole) = points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_server_payload_defaults_missing_fields() {
        let scores: RawMbtiScores =
            serde_json::from_str(r#"{"eScore": 12, "iScore": 3}"#).expect("parse scores");
        assert_eq!(scores.score(Pole::E), 12);
        assert_eq!(scores.score(Pole::I), 3);
        assert_eq!(scores.score(Pole::J), 0);
    }

    #[test]
    fn field_names_match_pole_keys() {
        let value = serde_json::to_value(RawMbtiScores::default()).expect("serialize");
        for pole in Pole::ALL {
            assert!(value.get(pole.score_key()).is_some(), "{pole} missing");
        }
    }
}
