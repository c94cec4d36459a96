use crate::league::LeagueMatch;
use crate::r#match::MatchOutcome;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeekStatistics {
    pub total_matches: u32,
    pub played_matches: u32,
    pub total_goals: u32,
    pub average_goals: f64,
    pub home_wins: u32,
    pub away_wins: u32,
    pub draws: u32,
}

impl WeekStatistics {
    pub fn calculate(matches: &[LeagueMatch], week: u32) -> Self {
        let week_matches: Vec<&LeagueMatch> = matches.iter().filter(|m| m.week == week).collect();
        let totals = OutcomeTotals::collect(week_matches.iter().copied());

        WeekStatistics {
            total_matches: week_matches.len() as u32,
            played_matches: totals.played,
            total_goals: totals.goals,
            average_goals: totals.average_goals(),
            home_wins: totals.home_wins,
            away_wins: totals.away_wins,
            draws: totals.draws,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostGoalsWeek {
    pub week: u32,
    pub goals: u32,
}

impl Default for MostGoalsWeek {
    fn default() -> Self {
        MostGoalsWeek { week: 1, goals: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LeagueStatistics {
    pub total_matches: u32,
    pub played_matches: u32,
    pub remaining_matches: u32,
    pub total_goals: u32,
    pub average_goals_per_match: f64,
    pub home_win_percentage: f64,
    pub away_win_percentage: f64,
    pub draw_percentage: f64,
    pub highest_scoring_match_id: Option<u32>,
    pub most_goals_in_week: MostGoalsWeek,
}

impl LeagueStatistics {
    pub fn calculate(matches: &[LeagueMatch]) -> Self {
        let totals = OutcomeTotals::collect(matches.iter());

        // first match wins ties
        let highest_scoring_match_id = matches
            .iter()
            .filter_map(|m| m.total_goals().map(|goals| (m.id, goals)))
            .fold(None, |best: Option<(u32, u32)>, (id, goals)| match best {
                Some((_, max)) if max >= goals => best,
                _ => Some((id, goals)),
            })
            .map(|(id, _)| id);

        let most_goals_in_week = matches
            .iter()
            .filter_map(|m| m.total_goals().map(|goals| (m.week, goals)))
            .into_group_map()
            .into_iter()
            .map(|(week, goals)| MostGoalsWeek {
                week,
                goals: goals.into_iter().sum(),
            })
            .sorted_by_key(|w| w.week)
            .fold(MostGoalsWeek::default(), |max, week| {
                if week.goals > max.goals { week } else { max }
            });

        LeagueStatistics {
            total_matches: matches.len() as u32,
            played_matches: totals.played,
            remaining_matches: matches.len() as u32 - totals.played,
            total_goals: totals.goals,
            average_goals_per_match: totals.average_goals(),
            home_win_percentage: totals.percentage(totals.home_wins),
            away_win_percentage: totals.percentage(totals.away_wins),
            draw_percentage: totals.percentage(totals.draws),
            highest_scoring_match_id,
            most_goals_in_week,
        }
    }
}

#[derive(Default)]
struct OutcomeTotals {
    played: u32,
    goals: u32,
    home_wins: u32,
    away_wins: u32,
    draws: u32,
}

impl OutcomeTotals {
    fn collect<'a>(matches: impl Iterator<Item = &'a LeagueMatch>) -> Self {
        let mut totals = OutcomeTotals::default();

        for played in matches.filter(|m| m.is_played) {
            totals.played += 1;
            totals.goals += played.total_goals().unwrap_or(0);

            match played.result {
                Some(MatchOutcome::HomeWin) => totals.home_wins += 1,
                Some(MatchOutcome::AwayWin) => totals.away_wins += 1,
                Some(MatchOutcome::Draw) => totals.draws += 1,
                None => {}
            }
        }

        totals
    }

    fn average_goals(&self) -> f64 {
        match self.played {
            0 => 0.0,
            played => self.goals as f64 / played as f64,
        }
    }

    fn percentage(&self, count: u32) -> f64 {
        match self.played {
            0 => 0.0,
            played => count as f64 / played as f64 * 100.0,
        }
    }
}
