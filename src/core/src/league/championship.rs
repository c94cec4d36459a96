use crate::league::{
    LeagueMatch, LeagueResult, LeagueSettings, LeagueState, LeagueTable, PointsSettings,
};
use crate::r#match::{MatchSimulator, RngSource};
use crate::utils::Logging;
use crate::{Team, TeamRef};
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipChance {
    pub team: TeamRef,
    pub probability: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ChampionshipAnalyzer {
    settings: LeagueSettings,
}

impl ChampionshipAnalyzer {
    pub fn new(settings: LeagueSettings) -> Self {
        ChampionshipAnalyzer { settings }
    }

    /// Optimistic bound: the team wins every remaining match while the leader
    /// is assumed to gain nothing more.
    pub fn is_championship_possible(
        team: &Team,
        leader_points: u32,
        matches: &[LeagueMatch],
        points: &PointsSettings,
    ) -> bool {
        let remaining = Self::remaining_matches(team.id, matches);

        team.points.saturating_add(points.win.saturating_mul(remaining)) >= leader_points
    }

    pub fn remaining_matches(team_id: u32, matches: &[LeagueMatch]) -> u32 {
        matches
            .iter()
            .filter(|m| !m.is_played && m.involves(team_id))
            .count() as u32
    }

    /// Monte-Carlo estimate of each team's chance to finish first.
    pub fn chances(&self, state: &LeagueState, seed: u64) -> LeagueResult<Vec<ChampionshipChance>> {
        let never = AtomicBool::new(false);

        Ok(self
            .chances_cancellable(state, seed, &never)?
            .unwrap_or_default())
    }

    /// Same as [`chances`](Self::chances), returning `None` once `cancelled` is raised.
    pub fn chances_cancellable(
        &self,
        state: &LeagueState,
        seed: u64,
        cancelled: &AtomicBool,
    ) -> LeagueResult<Option<Vec<ChampionshipChance>>> {
        self.settings.validate()?;

        if state.teams.is_empty() {
            return Ok(Some(Vec::new()));
        }

        if let Some(champion) = state.champion() {
            return Ok(Some(Self::certain(state, champion.id)));
        }

        let simulations = self.settings.championship.simulations;

        let winners: Vec<Option<u32>> = Logging::estimate_result(
            || {
                (0..simulations)
                    .into_par_iter()
                    .map(|trial| {
                        if cancelled.load(Ordering::Relaxed) {
                            return Ok(None);
                        }

                        self.simulate_season(state, seed.wrapping_add(trial as u64))
                            .map(Some)
                    })
                    .collect::<LeagueResult<Vec<Option<u32>>>>()
            },
            &format!("championship forecast, {} simulations", simulations),
        )?;

        if winners.iter().any(Option::is_none) {
            info!("championship forecast cancelled");
            return Ok(None);
        }

        let mut chances: Vec<ChampionshipChance> = state
            .teams
            .iter()
            .map(|team| {
                let titles = winners.iter().filter(|w| **w == Some(team.id)).count();

                ChampionshipChance {
                    team: team.reference(),
                    probability: titles as f64 / simulations as f64,
                }
            })
            .collect();

        Self::sort(&mut chances);

        debug!(
            "championship forecast from week {}: {:?}",
            state.current_week,
            chances
                .iter()
                .map(|c| format!("{} {:.3}", c.team.name, c.probability))
                .collect::<Vec<_>>()
        );

        Ok(Some(chances))
    }

    /// Plays out one copy of the remaining season and returns the winner's id.
    fn simulate_season(&self, state: &LeagueState, seed: u64) -> LeagueResult<u32> {
        let simulator = MatchSimulator::new(self.settings.simulation);
        let mut rng = RngSource::from_seed(seed);
        let mut matches = state.matches.clone();

        for week in state.current_week..=state.total_weeks {
            LeagueState::simulate_matches(&mut matches, &state.teams, &simulator, week, &mut rng)?;
        }

        let points = self.settings.points;
        let teams = LeagueTable::recalculate_teams(&state.teams, &matches, &points)?;

        let winner = teams
            .iter()
            .min_by(|a, b| LeagueTable::compare(a, b))
            .map(|team| team.id)
            .unwrap_or_default();

        Ok(winner)
    }

    fn certain(state: &LeagueState, champion_id: u32) -> Vec<ChampionshipChance> {
        let mut chances: Vec<ChampionshipChance> = state
            .teams
            .iter()
            .map(|team| ChampionshipChance {
                team: team.reference(),
                probability: if team.id == champion_id { 1.0 } else { 0.0 },
            })
            .collect();

        Self::sort(&mut chances);

        chances
    }

    fn sort(chances: &mut [ChampionshipChance]) {
        chances.sort_by(|a, b| {
            b.probability
                .total_cmp(&a.probability)
                .then_with(|| a.team.name.cmp(&b.team.name))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::ChampionshipSettings;
    use crate::r#match::SequenceRandom;

    fn settings(simulations: u32) -> LeagueSettings {
        LeagueSettings {
            championship: ChampionshipSettings {
                simulations,
                ..ChampionshipSettings::default()
            },
            ..LeagueSettings::default()
        }
    }

    fn season(settings: LeagueSettings) -> LeagueState {
        let teams = vec![
            Team::new(1, "A", 5),
            Team::new(2, "B", 3),
            Team::new(3, "C", 2),
            Team::new(4, "D", 1),
        ];

        LeagueState::from_teams(teams, settings).unwrap()
    }

    fn team_with_points(id: u32, points: u32) -> Team {
        let mut team = Team::new(id, format!("T{}", id), 3);
        team.points = points;
        team
    }

    fn unplayed(id: u32, home: u32, away: u32) -> LeagueMatch {
        LeagueMatch::new(
            id,
            1,
            TeamRef::new(home, format!("T{}", home)),
            TeamRef::new(away, format!("T{}", away)),
        )
    }

    #[test]
    fn test_possible_when_remaining_wins_reach_leader() {
        let team = team_with_points(2, 10);
        let matches = vec![unplayed(1, 2, 3), unplayed(2, 4, 2)];

        assert!(ChampionshipAnalyzer::is_championship_possible(
            &team,
            15,
            &matches,
            &PointsSettings::default()
        ));
        assert!(!ChampionshipAnalyzer::is_championship_possible(
            &team,
            17,
            &matches,
            &PointsSettings::default()
        ));
    }

    #[test]
    fn test_played_matches_are_not_remaining() {
        let mut played = unplayed(1, 2, 3);
        played.set_score(1, 0);
        let matches = vec![played, unplayed(2, 4, 2), unplayed(3, 4, 3)];

        assert_eq!(ChampionshipAnalyzer::remaining_matches(2, &matches), 1);
        assert_eq!(ChampionshipAnalyzer::remaining_matches(5, &matches), 0);
    }

    #[test]
    fn test_huge_win_points_do_not_overflow() {
        let team = team_with_points(2, 10);
        let matches = vec![unplayed(1, 2, 3), unplayed(2, 4, 2)];
        let points = PointsSettings {
            win: u32::MAX,
            draw: 1,
            loss: 0,
        };

        assert!(ChampionshipAnalyzer::is_championship_possible(&team, u32::MAX, &matches, &points));
    }

    #[test]
    fn test_leader_is_always_possible() {
        let leader = team_with_points(1, 12);

        assert!(ChampionshipAnalyzer::is_championship_possible(
            &leader,
            12,
            &[],
            &PointsSettings::default()
        ));
    }

    #[test]
    fn test_chances_sum_to_one() {
        let settings = settings(200);
        let state = season(settings)
            .play_next_week(&mut SequenceRandom::constant(0.4))
            .unwrap();

        let chances = ChampionshipAnalyzer::new(settings).chances(&state, 42).unwrap();

        assert_eq!(chances.len(), 4);
        let total: f64 = chances.iter().map(|c| c.probability).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(chances.windows(2).all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn test_chances_are_reproducible() {
        let settings = settings(100);
        let state = season(settings);
        let analyzer = ChampionshipAnalyzer::new(settings);

        assert_eq!(analyzer.chances(&state, 9).unwrap(), analyzer.chances(&state, 9).unwrap());
    }

    #[test]
    fn test_strongest_team_is_favourite() {
        let settings = settings(500);
        let state = season(settings);

        let chances = ChampionshipAnalyzer::new(settings).chances(&state, 1).unwrap();

        assert_eq!(chances[0].team.id, 1);
    }

    #[test]
    fn test_eliminated_team_has_zero_chance() {
        let settings = settings(200);
        let mut state = season(settings);

        // A wins every match, D loses every match
        for week in 1..=4 {
            state = state.play_next_week(&mut SequenceRandom::constant(0.5)).unwrap();

            let edits: Vec<(u32, bool)> = state
                .matches_by_week(week)
                .iter()
                .filter(|m| m.involves(1) || m.involves(4))
                .map(|m| (m.id, m.home_team.id == 1 || m.away_team.id == 4))
                .collect();

            for (id, home_wins) in edits {
                let (home, away) = if home_wins { (3, 0) } else { (0, 3) };
                state = state.edit_match(id, home, away).unwrap();
            }
        }

        let eliminated = state.standings.iter().find(|r| r.team.id == 4).unwrap();
        assert!(!eliminated.is_championship_possible);

        let chances = ChampionshipAnalyzer::new(settings).chances(&state, 3).unwrap();
        let d = chances.iter().find(|c| c.team.id == 4).unwrap();

        assert_eq!(d.probability, 0.0);
        assert_eq!(chances.last().map(|c| c.team.id), Some(4));
    }

    #[test]
    fn test_finished_season_gives_certain_champion() {
        let settings = settings(50);
        let state = season(settings)
            .play_all_remaining(&mut RngSource::from_seed(6))
            .unwrap();

        let chances = ChampionshipAnalyzer::new(settings).chances(&state, 0).unwrap();

        assert_eq!(Some(chances[0].team.id), state.champion().map(|c| c.id));
        assert_eq!(chances[0].probability, 1.0);
        assert!(chances[1..].iter().all(|c| c.probability == 0.0));
    }

    #[test]
    fn test_cancelled_forecast_returns_none() {
        let settings = settings(100);
        let state = season(settings);
        let cancelled = AtomicBool::new(true);

        let result = ChampionshipAnalyzer::new(settings)
            .chances_cancellable(&state, 1, &cancelled)
            .unwrap();

        assert!(result.is_none());
    }
}
