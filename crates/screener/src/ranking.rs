// In crates/screener/src/ranking.rs

use crate::types::ScreenerEntry;
use core_types::Direction;
use serde::Serialize;
use std::cmp::Ordering;

pub const DEFAULT_TOP_N: usize = 5;

/// The highest-conviction instruments on each side of the market.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ranked {
    pub bullish: Vec<ScreenerEntry>,
    pub bearish: Vec<ScreenerEntry>,
}

/// Ranks entries into the top five bullish and top five bearish instruments.
pub fn rank(entries: &[ScreenerEntry]) -> Ranked {
    rank_top(entries, DEFAULT_TOP_N)
}

/// Ranks entries within their existing bullish/bearish classification.
///
/// Order is conviction descending, then confidence descending, then symbol
/// ascending. Each side keeps at most `n` entries. Neutral entries are not ranked.
pub fn rank_top(entries: &[ScreenerEntry], n: usize) -> Ranked {
    Ranked {
        bullish: top_of(entries, Direction::Bullish, n),
        bearish: top_of(entries, Direction::Bearish, n),
    }
}

fn top_of(entries: &[ScreenerEntry], direction: Direction, n: usize) -> Vec<ScreenerEntry> {
    let mut side: Vec<ScreenerEntry> = entries
        .iter()
        .filter(|e| e.prediction == direction)
        .cloned()
        .collect();
    side.sort_by(by_strength);
    side.truncate(n);
    side
}

fn by_strength(a: &ScreenerEntry, b: &ScreenerEntry) -> Ordering {
    b.conviction
        .value()
        .total_cmp(&a.conviction.value())
        .then_with(|| b.confidence.total_cmp(&a.confidence))
        .then_with(|| a.symbol.cmp(&b.symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{ConvictionScore, SentimentLabel};

    fn entry(symbol: &str, direction: Direction, conviction: f64, confidence: f64) -> ScreenerEntry {
        ScreenerEntry {
            symbol: symbol.to_string(),
            name: symbol.to_lowercase(),
            sector: "Banking".to_string(),
            prediction: direction,
            confidence,
            sentiment: SentimentLabel::Neutral,
            sentiment_score: 0.0,
            rsi: 50.0,
            conviction: ConvictionScore::new(conviction).unwrap(),
        }
    }

    fn symbols(entries: &[ScreenerEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.symbol.as_str()).collect()
    }

    #[test]
    fn empty_input_gives_two_empty_lists() {
        assert_eq!(rank(&[]), Ranked::default());
    }

    #[test]
    fn sorts_by_conviction_descending() {
        let entries = vec![
            entry("A", Direction::Bullish, 0.9, 0.8),
            entry("B", Direction::Bullish, 0.6, 0.8),
            entry("C", Direction::Bullish, 0.75, 0.8),
        ];

        let ranked = rank(&entries);

        let convictions: Vec<f64> = ranked.bullish.iter().map(|e| e.conviction.value()).collect();
        assert_eq!(convictions, vec![0.9, 0.75, 0.6]);
        assert!(ranked.bearish.is_empty());
    }

    #[test]
    fn ties_fall_back_to_confidence_then_symbol() {
        let entries = vec![
            entry("ZEE", Direction::Bearish, 0.7, 0.6),
            entry("AXIS", Direction::Bearish, 0.7, 0.6),
            entry("HDFC", Direction::Bearish, 0.7, 0.9),
        ];

        assert_eq!(symbols(&rank(&entries).bearish), vec!["HDFC", "AXIS", "ZEE"]);
    }

    #[test]
    fn truncates_each_side_and_never_pads() {
        let mut entries: Vec<ScreenerEntry> = (0..8)
            .map(|i| entry(&format!("B{i}"), Direction::Bullish, 0.1 * i as f64, 0.5))
            .collect();
        entries.push(entry("S0", Direction::Bearish, 0.4, 0.5));
        entries.push(entry("N0", Direction::Neutral, 0.99, 0.99));

        let ranked = rank(&entries);

        assert_eq!(symbols(&ranked.bullish), vec!["B7", "B6", "B5", "B4", "B3"]);
        assert_eq!(symbols(&ranked.bearish), vec!["S0"]);
        assert_eq!(rank_top(&entries, 2).bullish.len(), 2);
    }
}
