use crate::club::team::collection::validate_team_count;
use crate::league::{
    LeagueError, LeagueMatch, LeagueResult, LeagueSettings, LeagueStatistics, LeagueTable,
    ScheduleGenerator, TeamStats, WeekMatches, WeekStatistics,
};
use crate::r#match::{MatchSimulator, RandomSource};
use crate::utils::Logging;
use crate::{Team, TeamCollection};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Complete season state.
///
/// Every operation leaves `self` untouched and returns the next state, so a
/// failed operation never has anything to roll back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    pub teams: TeamCollection,
    pub matches: Vec<LeagueMatch>,
    pub current_week: u32,
    pub total_weeks: u32,
    pub standings: Vec<TeamStats>,
    pub is_season_finished: bool,
    pub champion: Option<Team>,
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeagueProgress {
    pub current: u32,
    pub total: u32,
    pub percentage: f64,
}

impl Default for LeagueState {
    fn default() -> Self {
        LeagueState {
            teams: TeamCollection::default(),
            matches: Vec::new(),
            current_week: 1,
            total_weeks: 0,
            standings: Vec::new(),
            is_season_finished: false,
            champion: None,
            settings: LeagueSettings::default(),
        }
    }
}

impl LeagueState {
    /// Registers `names` as teams with random strengths and builds the fixture.
    pub fn initialize<R: RandomSource + ?Sized>(
        names: &[String],
        settings: LeagueSettings,
        rng: &mut R,
    ) -> LeagueResult<Self> {
        settings.validate()?;
        validate_team_count(names.len())?;

        let teams = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                Team::new(
                    idx as u32 + 1,
                    name.clone(),
                    settings.strength.random(rng),
                )
            })
            .collect();

        Self::from_teams(teams, settings)
    }

    pub fn from_teams(teams: Vec<Team>, settings: LeagueSettings) -> LeagueResult<Self> {
        settings.validate()?;

        let mut teams = TeamCollection::new(teams);
        teams.validate(&settings.strength)?;
        teams.reset_statistics();

        let matches = ScheduleGenerator::generate(&teams.refs())?;
        let total_weeks = LeagueSettings::total_weeks(teams.len());

        info!(
            "season initialized: {} teams, {} matches, {} weeks",
            teams.len(),
            matches.len(),
            total_weeks
        );

        let state = LeagueState {
            teams,
            matches,
            current_week: 1,
            total_weeks,
            standings: Vec::new(),
            is_season_finished: false,
            champion: None,
            settings,
        };

        state.recalculated()
    }

    // ========== SEASON PROGRESSION ==========

    pub fn play_next_week<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LeagueResult<Self> {
        self.ensure_not_finished("play next week")?;

        let week = self.current_week;
        let mut next = self.clone();

        let played = Logging::estimate_result(
            || next.simulate_week(week, rng),
            &format!("play week {}", week),
        )?;

        debug!("week {}: {} matches played", week, played);

        next.current_week = week + 1;
        next.recalculated()
    }

    pub fn play_all_remaining<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LeagueResult<Self> {
        self.ensure_not_finished("play all remaining weeks")?;

        let mut next = self.clone();

        Logging::estimate_result(
            || -> LeagueResult<()> {
                for week in self.current_week..=self.total_weeks {
                    next.simulate_week(week, rng)?;
                }
                Ok(())
            },
            &format!("play weeks {}..={}", self.current_week, self.total_weeks),
        )?;

        next.current_week = self.total_weeks + 1;
        next.recalculated()
    }

    /// Overwrites the score of an already played match.
    pub fn edit_match(&self, match_id: u32, home_score: i32, away_score: i32) -> LeagueResult<Self> {
        let home_score = Self::validate_score(home_score)?;
        let away_score = Self::validate_score(away_score)?;

        let mut next = self.clone();

        let edited = next
            .matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or(LeagueError::NotFound { match_id })?;

        if !edited.is_played {
            return Err(LeagueError::invalid_transition(format!(
                "match {} has not been played yet",
                match_id
            )));
        }

        edited.set_score(home_score, away_score);

        debug!(
            "match {} edited: {} {} - {} {}",
            match_id, edited.home_team.name, home_score, away_score, edited.away_team.name
        );

        next.recalculated()
    }

    /// Discards every result and starts a new season with fresh strengths.
    pub fn reset<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LeagueResult<Self> {
        info!("resetting league");

        Self::initialize(&self.teams.names(), self.settings, rng)
    }

    fn ensure_not_finished(&self, operation: &str) -> LeagueResult<()> {
        if self.is_season_finished {
            warn!("{} rejected: season already finished", operation);

            return Err(LeagueError::invalid_transition(format!(
                "cannot {}: season already finished",
                operation
            )));
        }

        Ok(())
    }

    fn validate_score(score: i32) -> LeagueResult<u8> {
        u8::try_from(score).map_err(|_| {
            LeagueError::validation(format!("score {} is outside 0..={}", score, u8::MAX))
        })
    }

    /// Simulates the unplayed matches of `week` in place.
    fn simulate_week<R: RandomSource + ?Sized>(&mut self, week: u32, rng: &mut R) -> LeagueResult<usize> {
        let simulator = MatchSimulator::new(self.settings.simulation);

        Self::simulate_matches(&mut self.matches, &self.teams, &simulator, week, rng)
    }

    pub(crate) fn simulate_matches<R: RandomSource + ?Sized>(
        matches: &mut [LeagueMatch],
        teams: &TeamCollection,
        simulator: &MatchSimulator,
        week: u32,
        rng: &mut R,
    ) -> LeagueResult<usize> {
        if !matches.iter().any(|m| m.week == week) {
            return Err(LeagueError::invalid_transition(format!(
                "no matches found for week {}",
                week
            )));
        }

        let mut played = 0;

        for pending in matches.iter_mut().filter(|m| m.week == week && !m.is_played) {
            let home_strength = Self::strength(teams, pending.home_team.id)?;
            let away_strength = Self::strength(teams, pending.away_team.id)?;

            let score = simulator.simulate(home_strength, away_strength, rng);
            pending.set_score(score.home_score, score.away_score);

            played += 1;
        }

        Ok(played)
    }

    fn strength(teams: &TeamCollection, team_id: u32) -> LeagueResult<f64> {
        teams
            .strength_of(team_id)
            .map(|strength| strength as f64)
            .ok_or_else(|| {
                LeagueError::invalid_transition(format!("unknown team {} in fixture", team_id))
            })
    }

    /// Rebuilds teams, standings and the finished/champion flags from the matches.
    fn recalculated(mut self) -> LeagueResult<Self> {
        let points = self.settings.points;

        self.teams = LeagueTable::recalculate_teams(&self.teams, &self.matches, &points)?;
        self.standings = LeagueTable::rank(&self.teams, &self.matches, &points).into_rows();

        self.is_season_finished = !self.matches.is_empty()
            && self.current_week > self.total_weeks
            && self.matches.iter().all(|m| m.is_played);

        self.champion = if self.is_season_finished {
            self.standings.first().map(|row| row.team.clone())
        } else {
            None
        };

        if let Some(champion) = &self.champion {
            info!("season finished, champion: {} ({} points)", champion.name, champion.points);
        }

        Ok(self)
    }

    // ========== QUERIES ==========

    pub fn standings(&self) -> &[TeamStats] {
        &self.standings
    }

    pub fn is_season_finished(&self) -> bool {
        self.is_season_finished
    }

    pub fn champion(&self) -> Option<&Team> {
        self.champion.as_ref()
    }

    pub fn find_match(&self, match_id: u32) -> Option<&LeagueMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    pub fn matches_by_week(&self, week: u32) -> Vec<&LeagueMatch> {
        self.matches.iter().filter(|m| m.week == week).collect()
    }

    pub fn current_week_matches(&self) -> Vec<&LeagueMatch> {
        self.matches_by_week(self.current_week)
    }

    pub fn weekly_matches(&self) -> Vec<WeekMatches> {
        let weeks = self
            .matches
            .iter()
            .sorted_by_key(|m| (m.week, m.id))
            .chunk_by(|m| m.week);

        weeks
            .into_iter()
            .map(|(week, matches)| WeekMatches {
                week,
                matches: matches.cloned().collect(),
            })
            .collect()
    }

    pub fn played_matches(&self) -> Vec<&LeagueMatch> {
        self.matches.iter().filter(|m| m.is_played).collect()
    }

    pub fn upcoming_matches(&self) -> Vec<&LeagueMatch> {
        self.matches.iter().filter(|m| !m.is_played).collect()
    }

    pub fn team_matches(&self, team_id: u32) -> Vec<&LeagueMatch> {
        self.matches.iter().filter(|m| m.involves(team_id)).collect()
    }

    pub fn team_played_matches(&self, team_id: u32) -> Vec<&LeagueMatch> {
        self.matches
            .iter()
            .filter(|m| m.involves(team_id) && m.is_played)
            .collect()
    }

    pub fn team_upcoming_matches(&self, team_id: u32) -> Vec<&LeagueMatch> {
        self.matches
            .iter()
            .filter(|m| m.involves(team_id) && !m.is_played)
            .collect()
    }

    pub fn can_play_next_week(&self) -> bool {
        !self.is_season_finished && self.current_week <= self.total_weeks
    }

    pub fn progress(&self) -> LeagueProgress {
        let current = self.current_week.saturating_sub(1).min(self.total_weeks);

        let percentage = match self.total_weeks {
            0 => 0.0,
            total => current as f64 / total as f64 * 100.0,
        };

        LeagueProgress {
            current,
            total: self.total_weeks,
            percentage,
        }
    }

    pub fn can_show_championship_chances(&self) -> bool {
        self.current_week >= self.settings.championship.forecast_from_week
    }

    /// Ids of teams that can no longer reach the leader, once forecasts are shown.
    pub fn teams_without_championship_chance(&self) -> Vec<u32> {
        if !self.can_show_championship_chances() {
            return Vec::new();
        }

        self.standings
            .iter()
            .filter(|row| !row.is_championship_possible)
            .map(|row| row.team.id)
            .collect()
    }

    pub fn week_statistics(&self, week: u32) -> WeekStatistics {
        WeekStatistics::calculate(&self.matches, week)
    }

    pub fn statistics(&self) -> LeagueStatistics {
        LeagueStatistics::calculate(&self.matches)
    }
}
