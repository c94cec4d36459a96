use crate::DatabaseResult;
use league_core::LeagueSettings;
use serde::Deserialize;

const STATIC_LEAGUE_JSON: &str = include_str!("../data/league.json");

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntity {
    pub name: String,
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    /// Drawn at random when omitted
    pub strength: Option<u8>,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> DatabaseResult<LeagueEntity> {
        Self::from_json(STATIC_LEAGUE_JSON)
    }

    pub fn from_json(json: &str) -> DatabaseResult<LeagueEntity> {
        let entity: LeagueEntity = serde_json::from_str(json)?;

        entity.settings.validate()?;

        Ok(entity)
    }
}
