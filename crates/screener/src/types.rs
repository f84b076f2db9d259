// In crates/screener/src/types.rs

use core_types::{ConvictionScore, Direction, Result, SentimentLabel};
use serde::{Deserialize, Serialize};
use signals::{FusionWeights, fuse_with};

/// One instrument as delivered by the screener data provider.
///
/// The provider has already classified the instrument as a bullish or
/// bearish candidate; sentiment may still be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerCandidate {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub prediction: Direction,
    pub confidence: f64,
    #[serde(default)]
    pub sentiment: Option<SentimentLabel>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    pub rsi: f64,
}

/// A candidate with its conviction computed, ready to be ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerEntry {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub prediction: Direction,
    pub confidence: f64,
    pub sentiment: SentimentLabel,
    pub sentiment_score: f64,
    pub rsi: f64,
    pub conviction: ConvictionScore,
}

impl ScreenerEntry {
    /// Fuses the candidate's confidence and sentiment.
    ///
    /// Returns `Ok(None)` when the candidate has no sentiment reading; such
    /// instruments have no conviction and cannot be ranked.
    pub fn from_candidate(
        candidate: ScreenerCandidate,
        weights: &FusionWeights,
    ) -> Result<Option<Self>> {
        let (Some(sentiment), Some(sentiment_score)) =
            (candidate.sentiment, candidate.sentiment_score)
        else {
            return Ok(None);
        };

        let conviction = fuse_with(weights, candidate.confidence, sentiment_score)?;

        Ok(Some(Self {
            symbol: candidate.symbol,
            name: candidate.name,
            sector: candidate.sector,
            prediction: candidate.prediction,
            confidence: candidate.confidence,
            sentiment,
            sentiment_score,
            rsi: candidate.rsi,
            conviction,
        }))
    }
}

/// Converts a provider list into rankable entries, dropping candidates without sentiment.
///
/// The first out-of-domain confidence or score aborts the whole batch.
pub fn build_entries(
    candidates: Vec<ScreenerCandidate>,
    weights: &FusionWeights,
) -> Result<Vec<ScreenerEntry>> {
    let mut entries = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if let Some(entry) = ScreenerEntry::from_candidate(candidate, weights)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}
