//! Plays the same league many times over and tallies how often each team finishes in each
//! position. Configured through the environment (a `.env` file works too):
//!
//! - `NTEAMS`: league size, must be even (default 10)
//! - `SEASONS`: how many seasons to play (default 1000)
//! - `DOUBLE_LEG`: `true` for home and away fixtures (default false)
//! - `SEED`: fixes the random stream so runs can be reproduced
//! - `RUST_LOG`: log filter, e.g. `round_robin_league=debug`
extern crate round_robin_league;

use std::collections::HashMap;
use std::env::var;
use std::io::{self, Write};
use std::time::Instant;

use anyhow::{anyhow, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use round_robin_league::{play_season, Competitor, LeagueConfig, Legs, Strength, Team};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Ok(s) => s.parse::<T>().with_context(|| format!("bad value for {}: {:?}", key, s)),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let nteams: u32 = env_or("NTEAMS", 10)?;
    let seasons: u32 = env_or("SEASONS", 1000)?;
    let double_leg: bool = env_or("DOUBLE_LEG", false)?;
    let mut rng = match var("SEED") {
        Ok(s) => StdRng::seed_from_u64(s.parse().context("SEED must be a u64")?),
        Err(_) => StdRng::from_entropy(),
    };
    if nteams % 2 != 0 {
        return Err(anyhow!("Even number of teams required, got {}", nteams));
    }

    // strengths cycle weakest to strongest so every rating is represented
    let teams = (0..nteams)
        .map(|i| -> anyhow::Result<Team> {
            let name = char::from_u32(i + 65).map(String::from).unwrap_or_else(|| i.to_string());
            Ok(Team::with_strength(name, Strength::new((i % 5) as u8)?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = LeagueConfig {
        legs: if double_leg { Legs::Double } else { Legs::Single },
        ..Default::default()
    };

    let mut titles = HashMap::<String, u32>::new();
    let mut positions_by_team: HashMap<String, HashMap<usize, u32>> = HashMap::new();

    let start = Instant::now();
    for i in 1..=seasons {
        if i % 100 == 0 {
            print!(".");
            io::stdout().flush()?;
            if i % 1000 == 0 {
                println!();
            }
        }
        let season = play_season(&teams, &config, &mut rng)?;
        if let Some(champion) = season.champion() {
            *titles.entry(champion.id()).or_insert(0) += 1;
        }
        for standing in season.standings() {
            let positions = positions_by_team
                .entry(standing.competitor.id())
                .or_default();
            *positions.entry(standing.position).or_insert(0) += 1;
        }
    }
    println!();

    println!("Titles:");
    for t in &teams {
        println!(
            "  {} (strength {}): {}",
            t.id(),
            t.strength().value(),
            titles.get(&t.id()).copied().unwrap_or(0)
        );
    }
    println!("Finishing positions:");
    for t in &teams {
        let mut positions = positions_by_team
            .remove(&t.id())
            .unwrap_or_default()
            .into_iter()
            .collect::<Vec<_>>();
        positions.sort();
        println!("  {}: {:?}", t.id(), positions);
    }
    info!(
        seasons,
        teams = nteams,
        elapsed = ?(Instant::now() - start),
        "finished"
    );
    Ok(())
}
