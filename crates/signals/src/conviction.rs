// In crates/signals/src/conviction.rs

use crate::types::FusionWeights;
use core_types::{ConvictionScore, Error, PredictionSignal, Result, SentimentReading, Tone};
use serde::Serialize;

/// Fuses model confidence with news sentiment using the default 70/30 weighting.
pub fn fuse(confidence: f64, sentiment_score: f64) -> Result<ConvictionScore> {
    fuse_with(&FusionWeights::default(), confidence, sentiment_score)
}

/// Fuses model confidence with news sentiment.
///
/// Sentiment is first mapped from `[-1, 1]` onto `[0, 1]`, then the two are
/// combined as a weighted sum. Out-of-range inputs and invalid weights are
/// rejected, never clamped.
pub fn fuse_with(
    weights: &FusionWeights,
    confidence: f64,
    sentiment_score: f64,
) -> Result<ConvictionScore> {
    weights.validate()?;
    check_domain("confidence", confidence, 0.0, 1.0)?;
    check_domain("sentiment_score", sentiment_score, -1.0, 1.0)?;

    let normalized_sentiment = (sentiment_score + 1.0) / 2.0;
    let value = confidence * weights.confidence_weight
        + normalized_sentiment * weights.sentiment_weight;

    // Validated weights sum to 1 only within a tolerance, so the sum may
    // overshoot 1 by at most that much.
    ConvictionScore::new(value.clamp(0.0, 1.0))
}

fn check_domain(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::DomainError {
            field,
            value,
            min,
            max,
        })
    }
}

/// What a prediction card can show for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConvictionView {
    /// Both inputs were available and fused.
    Fused {
        confidence: f64,
        conviction: ConvictionScore,
        sentiment_tone: Tone,
    },
    /// No sentiment reading yet; the raw confidence is shown on its own.
    ConfidenceOnly { confidence: f64 },
}

impl ConvictionView {
    pub fn confidence(&self) -> f64 {
        match self {
            ConvictionView::Fused { confidence, .. } | ConvictionView::ConfidenceOnly { confidence } => {
                *confidence
            }
        }
    }

    pub fn conviction(&self) -> Option<ConvictionScore> {
        match self {
            ConvictionView::Fused { conviction, .. } => Some(*conviction),
            ConvictionView::ConfidenceOnly { .. } => None,
        }
    }
}

/// Builds the card view for a prediction and an optional sentiment reading.
///
/// A missing reading is never replaced by a neutral score.
pub fn assess(
    prediction: &PredictionSignal,
    sentiment: Option<&SentimentReading>,
    weights: &FusionWeights,
) -> Result<ConvictionView> {
    let confidence = prediction.confidence;
    match sentiment {
        Some(reading) => Ok(ConvictionView::Fused {
            confidence,
            conviction: fuse_with(weights, confidence, reading.score)?,
            sentiment_tone: reading.label.into(),
        }),
        None => {
            check_domain("confidence", confidence, 0.0, 1.0)?;
            Ok(ConvictionView::ConfidenceOnly { confidence })
        }
    }
}
