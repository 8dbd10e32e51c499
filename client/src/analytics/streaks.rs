//! Streaks and most played deck.

use std::collections::HashMap;

use serde::Serialize;
use shared::{deck_name, Deck, MatchRecord, MatchResult, Streak, StreakKind, TopDeck};

use super::trend::chronological;

/// Decided matches considered for the current streak.
pub const RECENT_WINDOW: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StreakSummary {
    pub current: Option<Streak>,
    pub best_win_streak: u32,
    pub top_deck: Option<TopDeck>,
}

fn kind_of(result: MatchResult) -> Option<StreakKind> {
    match result {
        MatchResult::Win => Some(StreakKind::Win),
        MatchResult::Loss => Some(StreakKind::Loss),
        MatchResult::Draw | MatchResult::Unknown => None,
    }
}

/// Run of identical results ending with the most recent decided match.
pub fn current_streak(matches: &[MatchRecord]) -> Option<Streak> {
    let ordered = chronological(matches);
    let mut recent = ordered.iter().rev().take(RECENT_WINDOW);
    let kind = kind_of(recent.next()?.result)?;
    let count = 1 + recent.take_while(|m| kind_of(m.result) == Some(kind)).count();

    Some(Streak {
        kind: Some(kind),
        count: u32::try_from(count).unwrap_or(u32::MAX),
    })
}

/// Longest run of wins, in chronological order.
pub fn best_win_streak(matches: &[MatchRecord]) -> u32 {
    let mut best = 0;
    let mut run = 0;
    for m in chronological(matches) {
        if m.result == MatchResult::Win {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// Deck with the most matches. Ties go to the deck encountered first.
pub fn top_deck(matches: &[MatchRecord], decks: &[Deck]) -> Option<TopDeck> {
    let mut order: Vec<i64> = Vec::new();
    let mut counts: HashMap<i64, u32> = HashMap::new();
    for id in matches.iter().filter_map(|m| m.deck_id) {
        let count = counts.entry(id).or_insert_with(|| {
            order.push(id);
            0
        });
        *count += 1;
    }

    let mut best: Option<(i64, u32)> = None;
    for id in order {
        let total = counts.get(&id).copied().unwrap_or(0);
        if best.map_or(true, |(_, top)| total > top) {
            best = Some((id, total));
        }
    }

    best.map(|(id, total)| TopDeck {
        name: deck_name(decks, id),
        total,
    })
}

pub fn summarize(matches: &[MatchRecord], decks: &[Deck]) -> StreakSummary {
    StreakSummary {
        current: current_streak(matches),
        best_win_streak: best_win_streak(matches),
        top_deck: top_deck(matches, decks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::record;
    use shared::MatchResult::*;

    #[test]
    fn test_current_streak_skips_undecided() {
        let matches = vec![
            record(1, Win, None),
            record(2, Loss, None),
            record(3, Loss, None),
            record(4, Draw, None),
        ];
        assert_eq!(
            current_streak(&matches),
            Some(Streak { kind: Some(StreakKind::Loss), count: 2 })
        );
        assert_eq!(current_streak(&[record(1, Draw, None)]), None);
    }

    #[test]
    fn test_best_win_streak() {
        let results = [Win, Win, Loss, Win, Win, Win, Draw, Loss];
        let matches: Vec<MatchRecord> = results
            .iter()
            .enumerate()
            .map(|(i, r)| record(i as i64, *r, None))
            .collect();
        assert_eq!(best_win_streak(&matches), 3);
    }

    #[test]
    fn test_top_deck_tie_keeps_first() {
        let decks = vec![Deck { id: 2, name: "Gardevoir".to_string(), created: None }];
        let matches = vec![
            record(1, Win, Some(2)),
            record(2, Loss, Some(5)),
            record(3, Loss, Some(5)),
            record(4, Win, Some(2)),
            record(5, Win, None),
        ];
        assert_eq!(
            top_deck(&matches, &decks),
            Some(TopDeck { name: "Gardevoir".to_string(), total: 2 })
        );
        assert_eq!(top_deck(&[], &decks), None);
    }
}
