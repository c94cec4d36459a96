use crate::{DatabaseEntity, DatabaseResult, TeamEntity};
use league_core::league::StrengthBounds;
use league_core::{LeagueError, LeagueState, RandomSource, Team};
use log::debug;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the opening state of a season from the loaded data.
    pub fn generate<R: RandomSource + ?Sized>(
        data: &DatabaseEntity,
        rng: &mut R,
    ) -> DatabaseResult<LeagueState> {
        let settings = data.league.settings;

        let teams = data
            .league
            .teams
            .iter()
            .map(|team| DatabaseGenerator::generate_team(team, &settings.strength, rng))
            .collect::<DatabaseResult<Vec<Team>>>()?;

        let state = LeagueState::from_teams(teams, settings)?;

        debug!(
            "{}: generated {} teams, {} weeks",
            data.league.name,
            state.teams.len(),
            state.total_weeks
        );

        Ok(state)
    }

    fn generate_team<R: RandomSource + ?Sized>(
        entity: &TeamEntity,
        bounds: &StrengthBounds,
        rng: &mut R,
    ) -> DatabaseResult<Team> {
        let strength = entity.strength.unwrap_or_else(|| bounds.random(rng));

        let team = Team::builder()
            .id(entity.id)
            .name(entity.name.clone())
            .strength(strength)
            .build()
            .map_err(LeagueError::configuration)?;

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatabaseError, DatabaseLoader, LeagueEntity};
    use league_core::{LeagueSettings, SequenceRandom};

    fn entity(teams: Vec<TeamEntity>) -> DatabaseEntity {
        DatabaseEntity {
            league: LeagueEntity {
                name: String::from("Test"),
                teams,
                settings: LeagueSettings::default(),
            },
        }
    }

    fn team(id: u32, name: &str, strength: Option<u8>) -> TeamEntity {
        TeamEntity {
            id,
            name: name.to_string(),
            strength,
        }
    }

    #[test]
    fn test_generate_default_season() {
        let data = DatabaseLoader::load().unwrap();

        let state = DatabaseGenerator::generate(&data, &mut SequenceRandom::constant(0.5)).unwrap();

        assert_eq!(state.teams.len(), 4);
        assert_eq!(state.matches.len(), 12);
        assert_eq!(state.total_weeks, 6);
        assert_eq!(state.current_week, 1);
        assert!(state.teams.iter().all(|t| t.strength == 3));
    }

    #[test]
    fn test_explicit_strength_is_kept() {
        let data = entity(vec![team(1, "A", Some(5)), team(2, "B", None)]);

        let state = DatabaseGenerator::generate(&data, &mut SequenceRandom::constant(0.0)).unwrap();

        assert_eq!(state.teams.strength_of(1), Some(5));
        assert_eq!(state.teams.strength_of(2), Some(1));
    }

    #[test]
    fn test_invalid_roster_is_rejected() {
        let data = entity(vec![team(1, "A", Some(3)), team(2, "A", Some(3))]);

        let result = DatabaseGenerator::generate(&data, &mut SequenceRandom::constant(0.0));

        assert!(matches!(
            result,
            Err(DatabaseError::League(LeagueError::Configuration(_)))
        ));
    }
}
