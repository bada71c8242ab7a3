//! A fixed eight-team league with hand-picked strengths. Prints the fixture list with results and
//! the final table.
extern crate round_robin_league;

use rand::thread_rng;
use round_robin_league::{
    format_schedule, format_standings, play_season, LeagueConfig, Strength, Team,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn team(name: &str, strength: u8) -> anyhow::Result<Team> {
    Ok(Team::with_strength(name, Strength::new(strength)?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let teams = vec![
        team("Harbour City", 4)?,
        team("Northgate", 3)?,
        team("Millbrook", 3)?,
        team("Riverside", 2)?,
        team("Old Quarry", 2)?,
        team("Fenwick", 1)?,
        team("Ashby Town", 1)?,
        team("Lowfield", 0)?,
    ];

    let season = play_season(&teams, &LeagueConfig::double_leg(), &mut thread_rng())?;

    println!("{}", format_schedule(&season.schedule));
    println!("{}", format_standings(&season.standings()));

    Ok(())
}
