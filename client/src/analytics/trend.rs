//! Cumulative winrate over time.

use chrono::NaiveDateTime;
use lib_utils::time::parse_captured_at;
use serde::Serialize;
use shared::{short_date, MatchRecord};

use super::round1;

/// Decided matches needed before a trend is shown.
pub const MIN_TREND_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub captured_at: String,
    pub wins: u32,
    pub total: u32,
    /// Winrate so far, one decimal
    pub winrate: f64,
}

impl TrendPoint {
    pub fn label(&self) -> &str {
        short_date(&self.captured_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Trend {
    /// Fewer than [`MIN_TREND_POINTS`] decided matches
    Insufficient { qualifying: usize },
    Series(Vec<TrendPoint>),
}

impl Trend {
    pub fn points(&self) -> &[TrendPoint] {
        match self {
            Trend::Insufficient { .. } => &[],
            Trend::Series(points) => points,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Trend::Insufficient { .. })
    }
}

/// Decided matches, oldest first.
///
/// Timestamps are compared as parsed date-times. Records with unparsable
/// timestamps sort before all others, by raw text.
pub(crate) fn chronological<'a>(
    matches: impl IntoIterator<Item = &'a MatchRecord>,
) -> Vec<&'a MatchRecord> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &MatchRecord)> = matches
        .into_iter()
        .filter(|m| m.result.is_decided())
        .map(|m| (parse_captured_at(&m.captured_at).ok(), m))
        .collect();

    keyed.sort_by(|(ka, a), (kb, b)| {
        ka.cmp(kb).then_with(|| match (ka, kb) {
            (None, None) => a.captured_at.cmp(&b.captured_at),
            _ => std::cmp::Ordering::Equal,
        })
    });
    keyed.into_iter().map(|(_, m)| m).collect()
}

/// Running winrate over the decided matches of `matches`.
pub fn cumulative<'a>(matches: impl IntoIterator<Item = &'a MatchRecord>) -> Trend {
    let ordered = chronological(matches);
    if ordered.len() < MIN_TREND_POINTS {
        return Trend::Insufficient {
            qualifying: ordered.len(),
        };
    }

    let mut wins = 0u32;
    let mut total = 0u32;
    let points = ordered
        .into_iter()
        .map(|m| {
            total += 1;
            if m.result == shared::MatchResult::Win {
                wins += 1;
            }
            TrendPoint {
                captured_at: m.captured_at.clone(),
                wins,
                total,
                winrate: round1(f64::from(wins) / f64::from(total) * 100.0),
            }
        })
        .collect();

    Trend::Series(points)
}

/// Running winrate of one deck.
pub fn deck_trend(matches: &[MatchRecord], deck_id: i64) -> Trend {
    cumulative(matches.iter().filter(|m| m.deck_id == Some(deck_id)))
}
