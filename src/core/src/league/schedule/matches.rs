use crate::TeamRef;
use crate::r#match::{MatchOutcome, TeamOutcome};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueMatch {
    pub id: u32,
    pub week: u32,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub is_played: bool,
    pub result: Option<MatchOutcome>,
}

impl LeagueMatch {
    pub fn new(id: u32, week: u32, home_team: TeamRef, away_team: TeamRef) -> Self {
        LeagueMatch {
            id,
            week,
            home_team,
            away_team,
            home_score: None,
            away_score: None,
            is_played: false,
            result: None,
        }
    }

    /// Same pairing with sides swapped, unplayed.
    pub fn mirrored(&self, id: u32, week: u32) -> Self {
        LeagueMatch::new(id, week, self.away_team.clone(), self.home_team.clone())
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team.id == team_id || self.away_team.id == team_id
    }

    pub fn score(&self) -> Option<(u8, u8)> {
        match (self.is_played, self.home_score, self.away_score) {
            (true, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn total_goals(&self) -> Option<u32> {
        self.score().map(|(home, away)| home as u32 + away as u32)
    }

    /// Stores a final score; the result is always derived from it.
    pub fn set_score(&mut self, home_score: u8, away_score: u8) {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.is_played = true;
        self.result = Some(MatchOutcome::from_scores(home_score, away_score));
    }

    pub fn score_line(&self) -> String {
        match self.score() {
            Some((home, away)) => format!("{}:{}", home, away),
            None => String::from("-:-"),
        }
    }

    pub fn outcome_for(&self, team_id: u32) -> Option<TeamOutcome> {
        let (home, away) = self.score()?;

        let (own, other) = if self.home_team.id == team_id {
            (home, away)
        } else if self.away_team.id == team_id {
            (away, home)
        } else {
            return None;
        };

        Some(match own.cmp(&other) {
            Ordering::Greater => TeamOutcome::Win,
            Ordering::Equal => TeamOutcome::Draw,
            Ordering::Less => TeamOutcome::Loss,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekMatches {
    pub week: u32,
    pub matches: Vec<LeagueMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> LeagueMatch {
        LeagueMatch::new(1, 1, TeamRef::new(1, "A"), TeamRef::new(2, "B"))
    }

    #[test]
    fn test_new_match_is_unplayed() {
        let m = fixture();

        assert!(!m.is_played);
        assert_eq!(m.score(), None);
        assert_eq!(m.result, None);
        assert_eq!(m.score_line(), "-:-");
        assert_eq!(m.outcome_for(1), None);
    }

    #[test]
    fn test_set_score() {
        let mut m = fixture();
        m.set_score(2, 1);

        assert!(m.is_played);
        assert_eq!(m.score(), Some((2, 1)));
        assert_eq!(m.result, Some(MatchOutcome::HomeWin));
        assert_eq!(m.score_line(), "2:1");
        assert_eq!(m.total_goals(), Some(3));
        assert_eq!(m.outcome_for(1), Some(TeamOutcome::Win));
        assert_eq!(m.outcome_for(2), Some(TeamOutcome::Loss));
        assert_eq!(m.outcome_for(3), None);
    }

    #[test]
    fn test_mirrored_swaps_sides() {
        let mirrored = fixture().mirrored(7, 4);

        assert_eq!(mirrored.id, 7);
        assert_eq!(mirrored.week, 4);
        assert_eq!(mirrored.home_team.id, 2);
        assert_eq!(mirrored.away_team.id, 1);
        assert!(!mirrored.is_played);
    }
}
