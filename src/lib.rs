use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;
use tracing::info;

pub use random::{FixedSequence, RandomSource};
pub use report::{format_round, format_schedule, format_standings};
pub use schedule::{round_robin, Fixture, MatchResult, Round, Schedule, Score};
pub use scoring::{
    cumulative_distribution, goals_for_seed, sample_goals, BASE_CUMULATIVE, MAX_GOALS,
    STRENGTH_COEFFICIENTS,
};
pub use simulation::{simulate, LeagueTable};
pub use standings::{rank, Standing};

mod random;
mod report;
mod schedule;
mod scoring;
mod simulation;
mod standings;

/// Anything that can take part in a league. Generic code in this crate is written against this
/// trait so callers can bring their own team type.
pub trait Competitor: Eq + Hash + Debug {
    /// must return an ID that is unique within the competitor set
    fn id(&self) -> String;

    fn strength(&self) -> Strength {
        Strength::default()
    }
}

/// Ordinal skill rating, 0 (weakest) to 4 (strongest). Out-of-range values are rejected when the
/// rating is built, so the scoring tables can be indexed without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Strength(u8);

impl Strength {
    pub const WEAKEST: Strength = Strength(0);
    pub const AVERAGE: Strength = Strength(2);
    pub const STRONGEST: Strength = Strength(4);

    pub fn new(value: u8) -> Result<Self, LeagueError> {
        if value > Self::STRONGEST.0 {
            return Err(LeagueError::InvalidStrength { value });
        }
        Ok(Strength(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::AVERAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Team {
    pub name: String,
    pub strength: Strength,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strength(name, Strength::default())
    }

    pub fn with_strength(name: impl Into<String>, strength: Strength) -> Self {
        Team {
            name: name.into(),
            strength,
        }
    }
}

impl Competitor for Team {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn strength(&self) -> Strength {
        self.strength
    }
}

/// Accumulated results for one competitor. Only the simulator writes these; everything else reads
/// copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Record {
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    pub fn goal_diff(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// folds one finished match into the record, seen from this competitor's side
    pub(crate) fn add_match(&mut self, scored: u32, conceded: u32) {
        self.goals_for += scored;
        self.goals_against += conceded;
        if scored > conceded {
            self.wins += 1;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LeagueError {
    /// you cannot schedule zero competitors
    #[error("No competitors given?")]
    NoCompetitors,
    /// every round is a perfect matching, and there are no byes
    #[error("Round robin needs an even number of competitors, got {count}")]
    OddCompetitorCount { count: usize },
    #[error("Duplicate competitor with id {id}")]
    DuplicateCompetitor { id: String },
    /// a fixture names a competitor the league table doesn't know about
    #[error("Invalid match: {home} vs {away} references a competitor missing from the table")]
    InvalidMatch { home: String, away: String },
    #[error("Fixture {home} vs {away} already has a result")]
    FixtureAlreadyPlayed { home: String, away: String },
    #[error("Strength must be between 0 and 4, got {value}")]
    InvalidStrength { value: u8 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Legs {
    #[default]
    Single,
    /// every pairing is played twice, once with each side at home
    Double,
}

/// How the return-leg block is ordered. The block is always the first leg with home and away
/// swapped; this only decides the order its rounds are played in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnLegOrder {
    #[default]
    Shuffled,
    Mirrored,
}

#[derive(Debug, Clone, Default)]
pub struct LeagueConfig {
    pub legs: Legs,
    pub return_leg_order: ReturnLegOrder,
}

impl LeagueConfig {
    pub fn double_leg() -> Self {
        LeagueConfig {
            legs: Legs::Double,
            ..Default::default()
        }
    }
}

/// A finished season: the played schedule and the table it produced.
#[derive(Debug)]
pub struct Season<'a, C: Competitor> {
    pub schedule: Schedule<'a, C>,
    pub table: LeagueTable<'a, C>,
}

impl<'a, C: Competitor> Season<'a, C> {
    pub fn standings(&self) -> Vec<Standing<'a, C>> {
        rank(&self.table)
    }

    pub fn champion(&self) -> Option<&'a C> {
        self.standings().first().map(|s| s.competitor)
    }
}

/// schedule, play and tabulate a full league in one go
pub fn play_season<'a, C: Competitor, R: RandomSource>(
    competitors: &'a [C],
    config: &LeagueConfig,
    rng: &mut R,
) -> Result<Season<'a, C>, LeagueError> {
    let mut schedule = round_robin(competitors, config, rng)?;
    let mut table = LeagueTable::new(competitors)?;
    simulate(&mut schedule, &mut table, rng)?;

    let season = Season { schedule, table };
    if let Some(champion) = season.champion() {
        info!(
            champion = %champion.id(),
            rounds = season.schedule.len(),
            "season complete"
        );
    }
    Ok(season)
}
