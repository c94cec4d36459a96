use crate::league::{LeagueError, LeagueResult};
use crate::r#match::RandomSource;
use serde::{Deserialize, Serialize};

/// Upper bound for any configured point value
pub const MAX_POINTS: u32 = 100;

/// Points awarded per match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsSettings {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsSettings {
    fn default() -> Self {
        PointsSettings {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Inclusive range of team strength ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthBounds {
    pub min: u8,
    pub max: u8,
}

impl StrengthBounds {
    pub fn contains(&self, strength: u8) -> bool {
        strength >= self.min && strength <= self.max
    }

    /// Number of distinct ratings in the range
    pub fn span(&self) -> u32 {
        self.max.saturating_sub(self.min) as u32 + 1
    }

    /// Uniform rating in the range from a single draw.
    pub fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u8 {
        let offset = (rng.next_unit() * self.span() as f64) as u32;

        (self.min as u32 + offset).min(self.max as u32) as u8
    }
}

impl Default for StrengthBounds {
    fn default() -> Self {
        StrengthBounds { min: 1, max: 5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Added to the home side's strength before sampling
    pub home_advantage: f64,
    /// Expected goals of a side facing an equally rated opponent
    pub base_goal_rate: f64,
    pub max_goals: u8,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            home_advantage: 0.3,
            base_goal_rate: 1.4,
            max_goals: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionshipSettings {
    pub forecast_from_week: u32,
    pub simulations: u32,
}

impl Default for ChampionshipSettings {
    fn default() -> Self {
        ChampionshipSettings {
            forecast_from_week: 4,
            simulations: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    pub points: PointsSettings,
    pub strength: StrengthBounds,
    pub simulation: SimulationSettings,
    pub championship: ChampionshipSettings,
}

impl LeagueSettings {
    pub fn validate(&self) -> LeagueResult<()> {
        if self.strength.min == 0 {
            return Err(LeagueError::configuration("minimum strength must be at least 1"));
        }

        if self.strength.min > self.strength.max {
            return Err(LeagueError::configuration(format!(
                "strength range {}..={} is empty",
                self.strength.min, self.strength.max
            )));
        }

        if self.points.win <= self.points.draw || self.points.draw < self.points.loss {
            return Err(LeagueError::configuration(format!(
                "points must satisfy win > draw >= loss, got {}/{}/{}",
                self.points.win, self.points.draw, self.points.loss
            )));
        }

        if self.points.win > MAX_POINTS {
            return Err(LeagueError::configuration(format!(
                "win points must not exceed {}, got {}",
                MAX_POINTS, self.points.win
            )));
        }

        let simulation = &self.simulation;

        if !simulation.home_advantage.is_finite() || simulation.home_advantage < 0.0 {
            return Err(LeagueError::configuration("home advantage must be a non-negative number"));
        }

        if !simulation.base_goal_rate.is_finite() || simulation.base_goal_rate <= 0.0 {
            return Err(LeagueError::configuration("base goal rate must be positive"));
        }

        if simulation.max_goals == 0 {
            return Err(LeagueError::configuration("max goals must be at least 1"));
        }

        if self.championship.simulations == 0 {
            return Err(LeagueError::configuration("championship simulations must be at least 1"));
        }

        Ok(())
    }

    /// Weeks in a double round-robin for `team_count` teams
    pub fn total_weeks(team_count: usize) -> u32 {
        (2 * team_count.saturating_sub(1)) as u32
    }
}
