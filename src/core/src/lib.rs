pub mod club;
pub mod league;
pub mod r#match;
pub mod utils;

// Re-export club items
pub use club::{Team, TeamBuilder, TeamCollection, TeamRef};

// Re-export league items
pub use league::{
    ChampionshipAnalyzer, ChampionshipChance, LeagueError, LeagueMatch, LeagueProgress,
    LeagueResult, LeagueSettings, LeagueState, LeagueStatistics, LeagueTable, TeamStats,
    WeekMatches, WeekStatistics,
};

// Re-export match items
pub use r#match::{MatchOutcome, MatchSimulator, RandomSource, RngSource, SequenceRandom};

pub use utils::{Logging, TimeEstimation};
