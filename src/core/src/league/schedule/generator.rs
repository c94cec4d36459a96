use crate::TeamRef;
use crate::club::team::collection::validate_team_count;
use crate::league::{LeagueError, LeagueMatch, LeagueResult};
use itertools::Itertools;
use log::debug;

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Builds a double round-robin with the circle method.
    ///
    /// The first team stays fixed while the others rotate one slot per week.
    /// Week `w` of the second leg replays week `w - (N - 1)` with sides
    /// swapped. Match ids run from 1 over the first leg, then the second.
    pub fn generate(teams: &[TeamRef]) -> LeagueResult<Vec<LeagueMatch>> {
        validate_team_count(teams.len())?;

        if let Some(id) = teams.iter().map(|t| t.id).duplicates().next() {
            return Err(LeagueError::configuration(format!("duplicate team id {}", id)));
        }

        let team_count = teams.len();
        let weeks_per_leg = (team_count - 1) as u32;

        let mut matches = Vec::with_capacity(team_count * (team_count - 1));
        let mut match_id = 1;

        for week in 1..=weeks_per_leg {
            for (home, away) in Self::week_pairings(teams, week) {
                matches.push(LeagueMatch::new(match_id, week, home.clone(), away.clone()));
                match_id += 1;
            }
        }

        let first_leg_len = matches.len();

        for idx in 0..first_leg_len {
            let mirrored = matches[idx].mirrored(match_id, matches[idx].week + weeks_per_leg);
            matches.push(mirrored);
            match_id += 1;
        }

        debug!(
            "generated {} matches over {} weeks for {} teams",
            matches.len(),
            weeks_per_leg * 2,
            team_count
        );

        Ok(matches)
    }

    fn week_pairings(teams: &[TeamRef], week: u32) -> Vec<(&TeamRef, &TeamRef)> {
        let team_count = teams.len();

        let mut ring: Vec<&TeamRef> = teams[1..].iter().collect();
        let ring_len = ring.len();
        ring.rotate_right((week as usize - 1) % ring_len);

        let arrangement: Vec<&TeamRef> = std::iter::once(&teams[0]).chain(ring).collect();

        (0..team_count / 2)
            .map(|i| (arrangement[i], arrangement[team_count - 1 - i]))
            .collect()
    }
}
