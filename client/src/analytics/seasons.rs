//! Per-season breakdown.

use serde::Serialize;
use shared::MatchRecord;

use super::Tally;

/// Distinct groups needed before the breakdown is shown.
pub const MIN_SEASON_GROUPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRow {
    /// `None` is the bucket of matches recorded without a season
    pub season: Option<String>,
    pub total: u32,
    pub wins: u32,
    pub losses: u32,
    pub winrate: Option<f64>,
}

/// Every season group: named seasons newest label first, then the
/// no-season bucket.
pub fn groups(matches: &[MatchRecord]) -> Vec<SeasonRow> {
    let mut buckets: Vec<(Option<String>, Tally)> = Vec::new();
    for m in matches {
        let label = m.season_label().map(str::to_string);
        match buckets.iter_mut().find(|(season, _)| *season == label) {
            Some((_, tally)) => tally.record(m.result),
            None => {
                let mut tally = Tally::default();
                tally.record(m.result);
                buckets.push((label, tally));
            }
        }
    }

    buckets.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    buckets
        .into_iter()
        .map(|(season, tally)| SeasonRow {
            season,
            total: tally.total,
            wins: tally.wins,
            losses: tally.losses,
            winrate: tally.winrate(),
        })
        .collect()
}

/// Season breakdown, or `None` when fewer than [`MIN_SEASON_GROUPS`] groups exist.
pub fn breakdown(matches: &[MatchRecord]) -> Option<Vec<SeasonRow>> {
    let rows = groups(matches);
    (rows.len() >= MIN_SEASON_GROUPS).then_some(rows)
}
