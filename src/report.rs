use itertools::Itertools;

use crate::schedule::{Fixture, Round, Schedule};
use crate::standings::Standing;
use crate::Competitor;

fn format_fixture<C: Competitor>(fixture: &Fixture<C>) -> String {
    match fixture.result() {
        Some(score) => format!(
            "{} {} - {} {}",
            fixture.home.id(),
            score.home,
            score.away,
            fixture.away.id()
        ),
        None => format!("{} - {}", fixture.home.id(), fixture.away.id()),
    }
}

pub fn format_round<C: Competitor>(round: &Round<C>) -> String {
    round.iter().map(format_fixture).join("\n")
}

/// fixture list, one block per round
pub fn format_schedule<C: Competitor>(schedule: &Schedule<C>) -> String {
    let mut rounds_out = vec![];
    for (rn, round) in schedule.rounds().iter().enumerate() {
        rounds_out.push(format!("Round {}:", rn + 1));
        rounds_out.push(format_round(round));
        rounds_out.push("".to_string());
    }
    rounds_out.join("\n")
}

pub fn format_standings<C: Competitor>(standings: &[Standing<C>]) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.competitor.id().chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut lines = Vec::with_capacity(standings.len() + 1);
    lines.push(format!(
        "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    ));
    for s in standings {
        let r = &s.record;
        lines.push(format!(
            "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}",
            s.position,
            s.competitor.id(),
            r.played(),
            r.wins,
            r.draws,
            r.losses,
            r.goals_for,
            r.goals_against,
            r.goal_diff(),
            r.points()
        ));
    }
    lines.join("\n")
}
