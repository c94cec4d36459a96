use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    pub fn from_scores(home_score: u8, away_score: u8) -> Self {
        match home_score.cmp(&away_score) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

/// Outcome of a match from one participant's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamOutcome {
    Win,
    Draw,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedScore {
    pub home_score: u8,
    pub away_score: u8,
    pub outcome: MatchOutcome,
}

impl SimulatedScore {
    pub fn new(home_score: u8, away_score: u8) -> Self {
        SimulatedScore {
            home_score,
            away_score,
            outcome: MatchOutcome::from_scores(home_score, away_score),
        }
    }
}
