use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::random::RandomSource;
use crate::schedule::{Schedule, Score};
use crate::scoring::sample_goals;
use crate::{Competitor, LeagueError, Record};

/// One record per competitor, in the order the competitors were given. This is the only state a
/// season mutates, and only `simulate` writes to it.
#[derive(Debug, Clone)]
pub struct LeagueTable<'a, C: Competitor> {
    entries: Vec<(&'a C, Record)>,
    index: HashMap<&'a C, usize>,
}

impl<'a, C: Competitor> LeagueTable<'a, C> {
    pub fn new(competitors: &'a [C]) -> Result<Self, LeagueError> {
        let mut index = HashMap::with_capacity(competitors.len());
        let mut entries = Vec::with_capacity(competitors.len());
        let mut seen = HashSet::with_capacity(competitors.len());
        for c in competitors {
            if !seen.insert(c.id()) || index.insert(c, entries.len()).is_some() {
                return Err(LeagueError::DuplicateCompetitor { id: c.id() });
            }
            entries.push((c, Record::default()));
        }
        Ok(LeagueTable { entries, index })
    }

    pub fn record(&self, competitor: &C) -> Option<Record> {
        self.index.get(competitor).map(|i| self.entries[*i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a C, Record)> + '_ {
        self.entries.iter().map(|(c, r)| (*c, *r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record_mut(&mut self, competitor: &C) -> Option<&mut Record> {
        let i = *self.index.get(competitor)?;
        Some(&mut self.entries[i].1)
    }
}

/// Plays every fixture of the schedule in order, round by round: home goals are sampled first,
/// then away goals with the strengths swapped. The score is written onto the fixture and folded
/// into both competitors' records.
///
/// Fails without playing anything if any fixture names a competitor the table doesn't know or has
/// already been played.
pub fn simulate<'a, C: Competitor, R: RandomSource>(
    schedule: &mut Schedule<'a, C>,
    table: &mut LeagueTable<'a, C>,
    rng: &mut R,
) -> Result<(), LeagueError> {
    // validate the whole schedule first so a failure leaves schedule and table untouched
    for fixture in schedule.fixtures() {
        let (home, away) = (fixture.home, fixture.away);
        if table.record(home).is_none() || table.record(away).is_none() {
            return Err(LeagueError::InvalidMatch {
                home: home.id(),
                away: away.id(),
            });
        }
        if fixture.is_played() {
            return Err(LeagueError::FixtureAlreadyPlayed {
                home: home.id(),
                away: away.id(),
            });
        }
    }

    for (round_num, round) in schedule.rounds_mut().iter_mut().enumerate() {
        for fixture in round.iter_mut() {
            let (home, away) = (fixture.home, fixture.away);
            let score = Score {
                home: sample_goals(home.strength(), away.strength(), rng),
                away: sample_goals(away.strength(), home.strength(), rng),
            };
            fixture.result = Some(score);
            trace!(
                home = %home.id(),
                away = %away.id(),
                home_goals = score.home,
                away_goals = score.away,
                "played fixture"
            );

            if let Some(r) = table.record_mut(home) {
                r.add_match(score.home, score.away);
            }
            if let Some(r) = table.record_mut(away) {
                r.add_match(score.away, score.home);
            }
        }
        debug!(round = round_num + 1, "round played");
    }
    Ok(())
}
