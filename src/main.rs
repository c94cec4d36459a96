mod session;

use crate::session::LeagueSession;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{LeagueState, RngSource};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let is_one_shot_game = env::var("MODE") == Ok(String::from("ONESHOT"));

    let seed = match env::var("LEAGUE_SEED") {
        Ok(value) => value.parse::<u64>()?,
        Err(_) => rand::random::<u64>(),
    };

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let mut random = RngSource::from_seed(seed);
    let state = DatabaseGenerator::generate(&database, &mut random)?;

    info!("{} generated, seed {}", database.league.name, seed);

    let seasons = match env::var("LEAGUE_SEASONS") {
        Ok(value) => value.parse::<u32>()?.max(1),
        Err(_) => 1,
    };

    let edits = match env::var("LEAGUE_EDITS") {
        Ok(value) => parse_edits(&value)?,
        Err(_) => Vec::new(),
    };

    let session = LeagueSession::new(state, Box::new(random));

    for season in 1..=seasons {
        if season > 1 {
            session.reset().await?;
            info!("season {} started", season);
        }

        play_season(&session, is_one_shot_game, seed).await?;

        for &(match_id, home_score, away_score) in &edits {
            let state = session.edit_match(match_id, home_score, away_score).await?;

            if let Some(edited) = state.find_match(match_id) {
                info!(
                    "corrected: {} {} {}",
                    edited.home_team.name,
                    edited.score_line(),
                    edited.away_team.name
                );
            }
        }

        if !edits.is_empty() {
            print_table(&*session.snapshot().await);
        }

        let state = session.snapshot().await;

        if let Some(champion) = state.champion() {
            info!("champion: {} with {} points", champion.name, champion.points);
        }
    }

    Ok(())
}

async fn play_season(session: &LeagueSession, is_one_shot_game: bool, seed: u64) -> Result<()> {
    if is_one_shot_game {
        info!("one shot game started");

        let state = session.play_all().await?;
        print_table(&state);

        return Ok(());
    }

    while session.snapshot().await.can_play_next_week() {
        let state = session.play_next_week().await?;

        print_week(&state, state.current_week - 1);
        print_table(&state);

        if state.can_show_championship_chances() && !state.is_season_finished() {
            let chances = session
                .championship_chances(seed.wrapping_add(state.current_week as u64))
                .await?;

            for chance in chances {
                info!("{:<14} {:>5.1}%", chance.team.name, chance.probability * 100.0);
            }
        }
    }

    Ok(())
}

/// Parses score corrections written as `id=home:away`, separated by commas.
fn parse_edits(value: &str) -> Result<Vec<(u32, i32, i32)>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|edit| !edit.is_empty())
        .map(|edit| -> Result<(u32, i32, i32)> {
            let (match_id, score) = edit
                .split_once('=')
                .ok_or_else(|| eyre!("score correction '{}' must look like id=home:away", edit))?;
            let (home, away) = score
                .split_once(':')
                .ok_or_else(|| eyre!("score '{}' must look like home:away", score))?;

            Ok((match_id.trim().parse()?, home.trim().parse()?, away.trim().parse()?))
        })
        .collect()
}

fn print_week(state: &LeagueState, week: u32) {
    info!("week {}", week);

    for m in state.matches_by_week(week) {
        info!("{:>14} {} {}", m.home_team.name, m.score_line(), m.away_team.name);
    }
}

fn print_table(state: &LeagueState) {
    for row in state.standings() {
        let team = &row.team;

        info!(
            "{:>2}. {:<14} P{:>2} W{:>2} D{:>2} L{:>2} GF{:>3} GA{:>3} GD{:>+4} {:>3} pts",
            row.position,
            team.name,
            team.played,
            team.won,
            team.drawn,
            team.lost,
            team.goals_for,
            team.goals_against,
            team.goal_difference,
            team.points
        );
    }
}
