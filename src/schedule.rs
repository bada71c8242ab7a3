use std::collections::HashSet;

use tracing::{debug, info};

use crate::random::RandomSource;
use crate::{Competitor, LeagueConfig, LeagueError, Legs, ReturnLegOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Result of a played fixture, seen from the home side's perspective like the fixture itself.
#[derive(Debug, PartialEq)]
pub enum MatchResult<'a, C: Competitor> {
    HomeWin { home: &'a C, away: &'a C },
    AwayWin { home: &'a C, away: &'a C },
    Draw { home: &'a C, away: &'a C },
}

impl<'a, C: Competitor> MatchResult<'a, C> {
    /// `None` for a draw
    pub fn winner(&self) -> Option<&'a C> {
        match self {
            MatchResult::HomeWin { home, .. } => Some(*home),
            MatchResult::AwayWin { away, .. } => Some(*away),
            MatchResult::Draw { .. } => None,
        }
    }

    pub fn loser(&self) -> Option<&'a C> {
        match self {
            MatchResult::HomeWin { away, .. } => Some(*away),
            MatchResult::AwayWin { home, .. } => Some(*home),
            MatchResult::Draw { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fixture<'a, C: Competitor> {
    pub home: &'a C,
    pub away: &'a C,
    pub(crate) result: Option<Score>,
}

impl<'a, C: Competitor> Fixture<'a, C> {
    pub fn new(home: &'a C, away: &'a C) -> Self {
        Fixture {
            home,
            away,
            result: None,
        }
    }

    pub fn result(&self) -> Option<Score> {
        self.result
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn outcome(&self) -> Option<MatchResult<'a, C>> {
        let score = self.result?;
        let (home, away) = (self.home, self.away);
        Some(if score.home > score.away {
            MatchResult::HomeWin { home, away }
        } else if score.away > score.home {
            MatchResult::AwayWin { home, away }
        } else {
            MatchResult::Draw { home, away }
        })
    }

    fn reversed(&self) -> Self {
        Fixture::new(self.away, self.home)
    }
}

/// every competitor appears in exactly one fixture of a round
pub type Round<'a, C> = Vec<Fixture<'a, C>>;

#[derive(Debug, Clone)]
pub struct Schedule<'a, C: Competitor> {
    rounds: Vec<Round<'a, C>>,
    legs: Legs,
}

impl<'a, C: Competitor> Schedule<'a, C> {
    pub fn rounds(&self) -> &[Round<'a, C>] {
        &self.rounds
    }

    pub(crate) fn rounds_mut(&mut self) -> &mut [Round<'a, C>] {
        &mut self.rounds
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture<'a, C>> {
        self.rounds.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn legs(&self) -> Legs {
        self.legs
    }

    pub fn is_played(&self) -> bool {
        self.fixtures().all(Fixture::is_played)
    }
}

/// Builds a round robin with the circle method: the last competitor is held fixed as the pivot
/// while the others rotate around it, giving N-1 rounds in which every pair meets once.
///
/// For a double round robin the second leg is the first leg with home and away swapped, with its
/// rounds shuffled unless `ReturnLegOrder::Mirrored` is configured.
pub fn round_robin<'a, C: Competitor, R: RandomSource>(
    competitors: &'a [C],
    config: &LeagueConfig,
    rng: &mut R,
) -> Result<Schedule<'a, C>, LeagueError> {
    let (pivot, others) = competitors.split_last().ok_or(LeagueError::NoCompetitors)?;
    if competitors.len() % 2 != 0 {
        return Err(LeagueError::OddCompetitorCount {
            count: competitors.len(),
        });
    }
    let mut seen = HashSet::with_capacity(competitors.len());
    for c in competitors {
        if !seen.insert(c.id()) {
            return Err(LeagueError::DuplicateCompetitor { id: c.id() });
        }
    }

    let mut rest = others.iter().collect::<Vec<&C>>();
    let mut rounds = Vec::with_capacity(competitors.len() - 1);
    for round_num in 1..competitors.len() {
        let mut round = Vec::with_capacity(competitors.len() / 2);
        round.push(Fixture::new(pivot, rest[0]));
        for j in 1..(rest.len() + 1) / 2 {
            round.push(Fixture::new(rest[j], rest[rest.len() - j]));
        }
        debug!(round = round_num, fixtures = round.len(), "paired round");
        rounds.push(round);
        rest = half_rotation(&rest);
    }

    if config.legs == Legs::Double {
        let mut return_leg = rounds
            .iter()
            .map(|round| round.iter().map(Fixture::reversed).collect::<Round<C>>())
            .collect::<Vec<_>>();
        if config.return_leg_order == ReturnLegOrder::Shuffled {
            shuffle(&mut return_leg, rng);
        }
        rounds.extend(return_leg);
    }

    info!(
        competitors = competitors.len(),
        rounds = rounds.len(),
        legs = ?config.legs,
        "built round robin schedule"
    );
    Ok(Schedule {
        rounds,
        legs: config.legs,
    })
}

/// The last `half` entries move to the front, followed by the first `half - 1`. On the odd-length
/// ring of non-pivot competitors this is a rotation by a step coprime to the ring length, so every
/// pivot opponent comes up exactly once.
fn half_rotation<T: Copy>(rest: &[T]) -> Vec<T> {
    let half = (rest.len() + 1) / 2;
    let mut next = Vec::with_capacity(rest.len());
    next.extend_from_slice(&rest[half - 1..]);
    next.extend_from_slice(&rest[..half - 1]);
    next
}

/// fisher-yates, driven by the caller's random source so that tests can pin the order
fn shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
