//! Per-opponent aggregates.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use shared::{normalize_opponent, MatchRecord};

use super::{winrate, Tally};

/// Size of the opponent-frequency view.
pub const TOP_OPPONENTS: usize = 10;

/// Counts for one opponent name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpponentAggregate {
    pub name: String,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
}

impl OpponentAggregate {
    pub fn winrate(&self) -> Option<f64> {
        winrate(self.wins, self.losses)
    }

    /// Fraction won, with no data ranked below 0%.
    fn rank_key(&self) -> f64 {
        let decided = self.wins + self.losses;
        if decided == 0 {
            -1.0
        } else {
            f64::from(self.wins) / f64::from(decided)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OpponentSort {
    /// Most encountered first
    #[default]
    Total,
    /// Best winrate first, opponents without decided matches last
    Winrate,
}

/// One aggregate per opponent, in order of first encounter.
pub fn aggregate(matches: &[MatchRecord]) -> Vec<OpponentAggregate> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<(String, Tally)> = Vec::new();

    for m in matches {
        let name = normalize_opponent(&m.opponent);
        let slot = match index.get(&name) {
            Some(&slot) => slot,
            None => {
                index.insert(name.clone(), rows.len());
                rows.push((name, Tally::default()));
                rows.len() - 1
            }
        };
        rows[slot].1.record(m.result);
    }

    rows.into_iter()
        .map(|(name, tally)| OpponentAggregate {
            name,
            total: tally.total,
            wins: tally.wins,
            losses: tally.losses,
        })
        .collect()
}

/// Stable sort by the given key, descending.
pub fn sort(rows: &mut [OpponentAggregate], order: OpponentSort) {
    match order {
        OpponentSort::Total => rows.sort_by(|a, b| b.total.cmp(&a.total)),
        OpponentSort::Winrate => rows.sort_by(|a, b| {
            b.rank_key()
                .partial_cmp(&a.rank_key())
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// All opponents in the given order.
pub fn ranked(matches: &[MatchRecord], order: OpponentSort) -> Vec<OpponentAggregate> {
    let mut rows = aggregate(matches);
    sort(&mut rows, order);
    rows
}

/// First `n` opponents in the given order. Truncation happens after sorting.
pub fn top(matches: &[MatchRecord], order: OpponentSort, n: usize) -> Vec<OpponentAggregate> {
    let mut rows = ranked(matches, order);
    rows.truncate(n);
    rows
}

/// History against a single opponent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matchup {
    pub opponent: OpponentAggregate,
    /// Newest first
    pub history: Vec<MatchRecord>,
}

/// Matchup against `name`. An opponent never met yields an empty history.
pub fn matchup(matches: &[MatchRecord], name: &str) -> Matchup {
    let name = normalize_opponent(name);
    let mut history: Vec<MatchRecord> = matches
        .iter()
        .filter(|m| normalize_opponent(&m.opponent) == name)
        .cloned()
        .collect();
    let tally = Tally::of(&history);
    // equal timestamps: later records first
    history.reverse();
    history.sort_by(|a, b| b.captured_at.cmp(&a.captured_at));

    Matchup {
        opponent: OpponentAggregate {
            name,
            total: tally.total,
            wins: tally.wins,
            losses: tally.losses,
        },
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::against;
    use shared::MatchResult::*;

    fn names(rows: &[OpponentAggregate]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_blank_opponents_group_as_unknown() {
        let matches = vec![against(1, Win, ""), against(2, Loss, "  "), against(3, Win, "?")];
        let rows = aggregate(&matches);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "?");
        assert_eq!((rows[0].total, rows[0].wins, rows[0].losses), (3, 2, 1));
    }

    #[test]
    fn test_total_sort_is_stable() {
        let matches = vec![
            against(1, Win, "Alice"),
            against(2, Win, "Bob"),
            against(3, Loss, "Carol"),
            against(4, Loss, "Carol"),
        ];
        assert_eq!(names(&ranked(&matches, OpponentSort::Total)), vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_winrate_sort_puts_no_data_last() {
        let matches = vec![
            against(1, Draw, "Drawer"),
            against(2, Loss, "Loser"),
            against(3, Win, "Winner"),
            against(4, Win, "Even"),
            against(5, Loss, "Even"),
        ];
        assert_eq!(
            names(&ranked(&matches, OpponentSort::Winrate)),
            vec!["Winner", "Even", "Loser", "Drawer"]
        );
    }

    #[test]
    fn test_top_truncates_after_sorting() {
        let mut matches: Vec<MatchRecord> = (0..12)
            .map(|i| against(i, Win, &format!("Opp{}", i)))
            .collect();
        // The last opponent seen is the most frequent one
        matches.push(against(20, Loss, "Opp11"));
        matches.push(against(21, Loss, "Opp11"));

        let rows = top(&matches, OpponentSort::Total, TOP_OPPONENTS);
        assert_eq!(rows.len(), TOP_OPPONENTS);
        assert_eq!(rows[0].name, "Opp11");
        assert_eq!(rows[1].name, "Opp0");
    }

    #[test]
    fn test_matchup_history() {
        let matches = vec![
            against(1, Win, "Alice"),
            against(2, Loss, "Bob"),
            against(3, Loss, "Alice"),
        ];
        let view = matchup(&matches, " Alice ");
        assert_eq!(view.opponent.total, 2);
        assert_eq!(view.opponent.winrate(), Some(50.0));
        assert_eq!(view.history.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 1]);

        assert!(matchup(&matches, "Nobody").history.is_empty());
    }
}
