use crate::league::SimulationSettings;
use crate::r#match::{RandomSource, SimulatedScore};
use log::debug;

const MIN_STRENGTH: f64 = 0.1;

/// Produces final scores for unplayed matches.
///
/// The simulator only sees the two strengths and the random source it is
/// handed, never any season state. Each side's goals follow a Poisson law
/// truncated at `max_goals`, with a rate that grows with the ratio between
/// the side's attack strength and the opponent's strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSimulator {
    settings: SimulationSettings,
}

impl MatchSimulator {
    pub fn new(settings: SimulationSettings) -> Self {
        MatchSimulator { settings }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn simulate<R: RandomSource + ?Sized>(
        &self,
        home_strength: f64,
        away_strength: f64,
        rng: &mut R,
    ) -> SimulatedScore {
        let home_strength = home_strength + self.settings.home_advantage;

        let home_goals = self.goal_distribution(home_strength, away_strength);
        let away_goals = self.goal_distribution(away_strength, home_strength);

        let home_score = home_goals.sample(rng.next_unit());
        let away_score = away_goals.sample(rng.next_unit());

        debug!(
            "simulated {}:{} (rates {:.2} vs {:.2})",
            home_score, away_score, home_goals.rate, away_goals.rate
        );

        SimulatedScore::new(home_score, away_score)
    }

    pub fn goal_distribution(&self, attack: f64, defence: f64) -> GoalDistribution {
        let ratio = attack.max(MIN_STRENGTH) / defence.max(MIN_STRENGTH);
        let rate = self.settings.base_goal_rate * ratio.sqrt();

        GoalDistribution::new(rate, self.settings.max_goals)
    }
}

impl Default for MatchSimulator {
    fn default() -> Self {
        MatchSimulator::new(SimulationSettings::default())
    }
}

/// Poisson distribution with every outcome above `max_goals` folded into `max_goals`.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDistribution {
    pub rate: f64,
    max_goals: u8,
    cumulative: Vec<f64>,
}

impl GoalDistribution {
    pub fn new(rate: f64, max_goals: u8) -> Self {
        let mut cumulative = Vec::with_capacity(max_goals as usize);

        let mut probability = (-rate).exp();
        let mut total = 0.0;

        for goals in 0..max_goals {
            total += probability;
            cumulative.push(total);
            probability *= rate / (goals as f64 + 1.0);
        }

        GoalDistribution {
            rate,
            max_goals,
            cumulative,
        }
    }

    /// Inverse-CDF lookup of a uniform draw.
    pub fn sample(&self, draw: f64) -> u8 {
        self.cumulative
            .iter()
            .position(|&threshold| draw < threshold)
            .map(|goals| goals as u8)
            .unwrap_or(self.max_goals)
    }

    pub fn probability(&self, goals: u8) -> f64 {
        if goals > self.max_goals {
            return 0.0;
        }

        let upper = self.cumulative.get(goals as usize).copied().unwrap_or(1.0);
        let lower = match goals {
            0 => 0.0,
            _ => self.cumulative[goals as usize - 1],
        };

        upper - lower
    }

    pub fn expected_goals(&self) -> f64 {
        (0..=self.max_goals)
            .map(|goals| goals as f64 * self.probability(goals))
            .sum()
    }
}
