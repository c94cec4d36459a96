mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use league_core::LeagueError;
use thiserror::Error;

pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("malformed league data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    League(#[from] LeagueError),
}

pub struct DatabaseEntity {
    pub league: LeagueEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseResult<DatabaseEntity> {
        Ok(DatabaseEntity {
            league: LeagueLoader::load()?,
        })
    }
}
