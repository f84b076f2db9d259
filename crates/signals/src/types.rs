// In crates/signals/src/types.rs

use core_types::{Error, Result};
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative weights of model confidence and normalized sentiment in a conviction score.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub confidence_weight: f64,
    pub sentiment_weight: f64,
}

impl FusionWeights {
    pub const DEFAULT_CONFIDENCE: f64 = 0.70;
    pub const DEFAULT_SENTIMENT: f64 = 0.30;

    /// Creates a weighting scheme, rejecting weights that would let the
    /// fused score leave `[0, 1]`.
    pub fn new(confidence_weight: f64, sentiment_weight: f64) -> Result<Self> {
        let weights = Self {
            confidence_weight,
            sentiment_weight,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Checks weights that arrived through deserialization rather than `new`.
    pub fn validate(&self) -> Result<()> {
        let (c, s) = (self.confidence_weight, self.sentiment_weight);
        if !c.is_finite() || !s.is_finite() || c < 0.0 || s < 0.0 {
            return Err(Error::InvalidWeights(format!(
                "weights must be finite and non-negative (confidence={c}, sentiment={s})"
            )));
        }
        if ((c + s) - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::InvalidWeights(format!(
                "weights must sum to 1 (confidence={c}, sentiment={s})"
            )));
        }
        Ok(())
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            confidence_weight: Self::DEFAULT_CONFIDENCE,
            sentiment_weight: Self::DEFAULT_SENTIMENT,
        }
    }
}

/// How a point with `ema20 == ema50` participates in crossover detection.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Both points must be strictly on opposite sides; equality never crosses.
    #[default]
    Strict,
    /// An equal previous point counts as "not above" / "not below".
    Inclusive,
}

/// Lookbacks used when averages are computed from raw closes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct EmaPeriods {
    pub fast: usize,
    pub slow: usize,
}

impl Default for EmaPeriods {
    fn default() -> Self {
        Self { fast: 20, slow: 50 }
    }
}
