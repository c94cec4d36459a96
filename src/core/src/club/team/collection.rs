use crate::league::{LeagueError, LeagueResult, StrengthBounds};
use crate::{Team, TeamRef};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn by_id(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn by_id_mut(&mut self, id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn strength_of(&self, id: u32) -> Option<u8> {
        self.by_id(id).map(|t| t.strength)
    }

    pub fn refs(&self) -> Vec<TeamRef> {
        self.teams.iter().map(Team::reference).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    pub fn reset_statistics(&mut self) {
        self.teams.iter_mut().for_each(Team::reset_statistics);
    }

    /// Checks the roster can host a double round-robin season.
    pub fn validate(&self, strength: &StrengthBounds) -> LeagueResult<()> {
        validate_team_count(self.teams.len())?;

        if let Some(team) = self.teams.iter().find(|t| t.name.trim().is_empty()) {
            return Err(LeagueError::configuration(format!(
                "team {} has an empty name",
                team.id
            )));
        }

        if let Some(id) = self.teams.iter().map(|t| t.id).duplicates().next() {
            return Err(LeagueError::configuration(format!("duplicate team id {}", id)));
        }

        if let Some(name) = self.teams.iter().map(|t| t.name.as_str()).duplicates().next() {
            return Err(LeagueError::configuration(format!("duplicate team name {}", name)));
        }

        if let Some(team) = self.teams.iter().find(|t| !strength.contains(t.strength)) {
            return Err(LeagueError::configuration(format!(
                "strength {} of {} is outside {}..={}",
                team.strength, team.name, strength.min, strength.max
            )));
        }

        Ok(())
    }
}

pub fn validate_team_count(count: usize) -> LeagueResult<()> {
    if count < 2 {
        return Err(LeagueError::configuration(format!(
            "at least 2 teams are required, got {}",
            count
        )));
    }

    if count % 2 != 0 {
        return Err(LeagueError::configuration(format!(
            "team count must be even, got {}",
            count
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(names: &[&str]) -> TeamCollection {
        TeamCollection::new(
            names
                .iter()
                .enumerate()
                .map(|(idx, name)| Team::new(idx as u32 + 1, *name, 3))
                .collect(),
        )
    }

    #[test]
    fn test_lookup() {
        let teams = collection(&["A", "B", "C", "D"]);

        assert_eq!(teams.by_id(3).map(|t| t.name.as_str()), Some("C"));
        assert_eq!(teams.strength_of(2), Some(3));
        assert!(teams.by_id(9).is_none());
        assert_eq!(teams.refs()[0], TeamRef::new(1, "A"));
    }

    #[test]
    fn test_validate_accepts_even_roster() {
        let teams = collection(&["A", "B", "C", "D"]);

        assert!(teams.validate(&StrengthBounds::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_odd_or_tiny_roster() {
        let bounds = StrengthBounds::default();

        assert!(collection(&["A", "B", "C"]).validate(&bounds).is_err());
        assert!(collection(&["A"]).validate(&bounds).is_err());
        assert!(collection(&[]).validate(&bounds).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_and_empty_names() {
        let bounds = StrengthBounds::default();

        assert!(collection(&["A", "A"]).validate(&bounds).is_err());
        assert!(collection(&["A", "  "]).validate(&bounds).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_strength() {
        let mut teams = collection(&["A", "B"]);
        teams.teams[1].strength = 9;

        assert!(matches!(
            teams.validate(&StrengthBounds::default()),
            Err(LeagueError::Configuration(_))
        ));
    }
}
