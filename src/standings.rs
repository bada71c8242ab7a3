use std::cmp::Reverse;

use crate::simulation::LeagueTable;
use crate::{Competitor, Record};

/// A competitor's place in the table, with a copy of its record at the time of ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing<'a, C: Competitor> {
    /// 1-based
    pub position: usize,
    pub competitor: &'a C,
    pub record: Record,
}

/// Ranks the table by points, then goal difference, then goals scored, all descending.
///
/// Competitors level on all three keys come out in an unspecified relative order; no further
/// tie-break is applied, so callers shouldn't read anything into it.
pub fn rank<'a, C: Competitor>(table: &LeagueTable<'a, C>) -> Vec<Standing<'a, C>> {
    let mut standings = table.iter().collect::<Vec<_>>();
    standings.sort_by_key(|(_, r)| Reverse((r.points(), r.goal_diff(), r.goals_for)));
    standings
        .into_iter()
        .enumerate()
        .map(|(i, (competitor, record))| Standing {
            position: i + 1,
            competitor,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::simulation::LeagueTable;
    use crate::standings::rank;
    use crate::{Competitor, Record, Team};

    fn record(wins: u32, draws: u32, losses: u32, goals_for: u32, goals_against: u32) -> Record {
        Record {
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
        }
    }

    fn ranked_ids(table: &LeagueTable<Team>) -> Vec<String> {
        rank(table).iter().map(|s| s.competitor.id()).collect()
    }

    #[test]
    fn test_goal_diff_breaks_points_tie() {
        let league = vec![Team::new("x"), Team::new("y"), Team::new("z")];
        let mut table = LeagueTable::new(&league).unwrap();
        // 9 points, +2
        *table.record_mut(&league[0]).unwrap() = record(3, 0, 1, 6, 4);
        // 9 points, +5
        *table.record_mut(&league[1]).unwrap() = record(3, 0, 1, 8, 3);
        // 6 points, +1
        *table.record_mut(&league[2]).unwrap() = record(2, 0, 2, 5, 4);

        let standings = rank(&table);
        assert_eq!(vec!["y", "x", "z"], ranked_ids(&table));
        assert_eq!(
            vec![1, 2, 3],
            standings.iter().map(|s| s.position).collect::<Vec<_>>()
        );
        assert_eq!(9, standings[0].record.points());
        assert_eq!(5, standings[0].record.goal_diff());
    }

    #[test]
    fn test_points_beat_goal_diff() {
        let league = vec![Team::new("big_wins"), Team::new("steady")];
        let mut table = LeagueTable::new(&league).unwrap();
        *table.record_mut(&league[0]).unwrap() = record(1, 0, 2, 9, 3);
        *table.record_mut(&league[1]).unwrap() = record(1, 1, 1, 2, 2);
        assert_eq!(vec!["steady", "big_wins"], ranked_ids(&table));
    }

    #[test]
    fn test_goals_for_breaks_goal_diff_tie() {
        let league = vec![Team::new("a"), Team::new("b"), Team::new("c")];
        let mut table = LeagueTable::new(&league).unwrap();
        *table.record_mut(&league[0]).unwrap() = record(1, 1, 0, 2, 1);
        *table.record_mut(&league[1]).unwrap() = record(1, 1, 0, 5, 4);
        *table.record_mut(&league[2]).unwrap() = record(1, 1, 0, 3, 2);
        assert_eq!(vec!["b", "c", "a"], ranked_ids(&table));
    }

    #[test]
    fn test_ranking_reads_only() {
        let league = vec![Team::new("a"), Team::new("b")];
        let mut table = LeagueTable::new(&league).unwrap();
        *table.record_mut(&league[1]).unwrap() = record(1, 0, 0, 1, 0);
        let before = table.iter().collect::<Vec<_>>();
        let _ = rank(&table);
        let _ = rank(&table);
        assert_eq!(before, table.iter().collect::<Vec<_>>());
    }
}
