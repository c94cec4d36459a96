use crate::league::{ChampionshipAnalyzer, LeagueError, LeagueMatch, LeagueResult, PointsSettings};
use crate::{Team, TeamCollection};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: Team,
    pub position: u32,
    pub is_championship_possible: bool,
}

/// Ranked standings, always rebuilt from the full match list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<TeamStats>,
}

impl LeagueTable {
    pub fn calculate(
        teams: &TeamCollection,
        matches: &[LeagueMatch],
        points: &PointsSettings,
    ) -> LeagueResult<LeagueTable> {
        let teams = Self::recalculate_teams(teams, matches, points)?;

        Ok(Self::rank(&teams, matches, points))
    }

    /// Copies `teams` with statistics rebuilt from every played match.
    pub fn recalculate_teams(
        teams: &TeamCollection,
        matches: &[LeagueMatch],
        points: &PointsSettings,
    ) -> LeagueResult<TeamCollection> {
        let mut teams = teams.clone();
        teams.reset_statistics();

        for played in matches.iter().filter(|m| m.is_played) {
            let (home_score, away_score) = played.score().ok_or_else(|| {
                LeagueError::invalid_transition(format!(
                    "match {} is marked played without a score",
                    played.id
                ))
            })?;

            Self::team_mut(&mut teams, played.home_team.id, played.id)?
                .record_match(home_score, away_score, points);
            Self::team_mut(&mut teams, played.away_team.id, played.id)?
                .record_match(away_score, home_score, points);
        }

        teams.teams.iter_mut().for_each(Team::refresh_goal_difference);

        Ok(teams)
    }

    /// Sorts already recalculated teams and attaches positions.
    pub fn rank(teams: &TeamCollection, matches: &[LeagueMatch], points: &PointsSettings) -> LeagueTable {
        let mut sorted: Vec<&Team> = teams.iter().collect();
        sorted.sort_by(|a, b| Self::compare(a, b));

        let leader_points = sorted.first().map(|t| t.points).unwrap_or(0);

        let rows = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, team)| TeamStats {
                team: team.clone(),
                position: idx as u32 + 1,
                is_championship_possible: ChampionshipAnalyzer::is_championship_possible(
                    team,
                    leader_points,
                    matches,
                    points,
                ),
            })
            .collect();

        LeagueTable { rows }
    }

    /// Points, goal difference and goals scored descending, then name ascending.
    pub fn compare(a: &Team, b: &Team) -> Ordering {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    }

    pub fn leader(&self) -> Option<&TeamStats> {
        self.rows.first()
    }

    pub fn position_of(&self, team_id: u32) -> Option<u32> {
        self.rows
            .iter()
            .find(|row| row.team.id == team_id)
            .map(|row| row.position)
    }

    pub fn into_rows(self) -> Vec<TeamStats> {
        self.rows
    }

    fn team_mut(teams: &mut TeamCollection, team_id: u32, match_id: u32) -> LeagueResult<&mut Team> {
        teams.by_id_mut(team_id).ok_or_else(|| {
            LeagueError::invalid_transition(format!(
                "match {} references unknown team {}",
                match_id, team_id
            ))
        })
    }
}
