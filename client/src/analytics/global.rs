use serde::Serialize;
use shared::MatchRecord;

use super::Tally;

/// Totals over a match list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: Option<f64>,
}

pub fn global_stats(matches: &[MatchRecord]) -> GlobalStats {
    let tally = Tally::of(matches);
    GlobalStats {
        total_matches: tally.total,
        wins: tally.wins,
        losses: tally.losses,
        winrate: tally.winrate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::record;
    use shared::MatchResult::*;

    #[test]
    fn test_two_wins_one_loss() {
        let matches = vec![
            record(1, Win, Some(1)),
            record(2, Loss, Some(1)),
            record(3, Win, Some(2)),
        ];
        let stats = global_stats(&matches);
        assert_eq!(
            stats,
            GlobalStats {
                total_matches: 3,
                wins: 2,
                losses: 1,
                winrate: Some(66.7),
            }
        );
    }

    #[test]
    fn test_no_decided_matches_is_no_data() {
        assert_eq!(global_stats(&[]).winrate, None);
        let draws = vec![record(1, Draw, None)];
        let stats = global_stats(&draws);
        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.winrate, None);
    }
}
