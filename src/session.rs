use color_eyre::Result;
use league_core::{
    ChampionshipAnalyzer, ChampionshipChance, LeagueResult, LeagueState, RandomSource,
};
use log::debug;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub type SessionRandom = Box<dyn RandomSource + Send>;

/// Shared season with serialized mutations.
///
/// Writers compute the next state on a blocking task from a snapshot and take
/// the write lock only to swap it in; readers take cheap `Arc` snapshots.
#[derive(Clone)]
pub struct LeagueSession {
    state: Arc<RwLock<Arc<LeagueState>>>,
    random: Arc<Mutex<SessionRandom>>,
}

impl LeagueSession {
    pub fn new(state: LeagueState, random: SessionRandom) -> Self {
        LeagueSession {
            state: Arc::new(RwLock::new(Arc::new(state))),
            random: Arc::new(Mutex::new(random)),
        }
    }

    pub async fn snapshot(&self) -> Arc<LeagueState> {
        Arc::clone(&*self.state.read().await)
    }

    pub async fn play_next_week(&self) -> Result<Arc<LeagueState>> {
        self.mutate("play next week", |state, random| state.play_next_week(random))
            .await
    }

    pub async fn play_all(&self) -> Result<Arc<LeagueState>> {
        self.mutate("play all", |state, random| state.play_all_remaining(random))
            .await
    }

    pub async fn edit_match(&self, match_id: u32, home_score: i32, away_score: i32) -> Result<Arc<LeagueState>> {
        self.mutate("edit match", move |state, _| {
            state.edit_match(match_id, home_score, away_score)
        })
        .await
    }

    pub async fn reset(&self) -> Result<Arc<LeagueState>> {
        self.mutate("reset", |state, random| state.reset(random)).await
    }

    pub async fn championship_chances(&self, seed: u64) -> Result<Vec<ChampionshipChance>> {
        let state = self.snapshot().await;

        let chances = tokio::task::spawn_blocking(move || {
            ChampionshipAnalyzer::new(state.settings).chances(&state, seed)
        })
        .await??;

        Ok(chances)
    }

    async fn mutate<F>(&self, operation: &'static str, action: F) -> Result<Arc<LeagueState>>
    where
        F: FnOnce(&LeagueState, &mut dyn RandomSource) -> LeagueResult<LeagueState> + Send + 'static,
    {
        // the random source guard serializes writers until the new state is in place
        let random_guard = Arc::clone(&self.random).lock_owned().await;
        let current = self.snapshot().await;

        let (_random_guard, next) = tokio::task::spawn_blocking(move || {
            let mut random_guard = random_guard;
            let next = action(&current, &mut **random_guard);

            (random_guard, next)
        })
        .await?;

        let state = Arc::new(next?);

        *self.state.write().await = Arc::clone(&state);

        debug!("{} applied, current week {}", operation, state.current_week);

        Ok(state)
    }
}
