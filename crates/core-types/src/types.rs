// In crates/core-types/src/types.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily sample of an instrument's price and moving averages.
///
/// A series of `PricePoint`s is expected to be sorted ascending by `date`.
/// The EMAs are optional because the upstream provider leaves them empty
/// until enough history has accumulated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub close: Decimal,
    #[serde(default)]
    pub ema20: Option<f64>,
    #[serde(default)]
    pub ema50: Option<f64>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal, ema20: f64, ema50: f64) -> Self {
        Self {
            date,
            close,
            ema20: Some(ema20),
            ema50: Some(ema50),
        }
    }

    /// Returns `ema20 - ema50` when both averages are present and finite.
    pub fn spread(&self) -> Option<f64> {
        match (self.ema20, self.ema50) {
            (Some(fast), Some(slow)) if fast.is_finite() && slow.is_finite() => Some(fast - slow),
            _ => None,
        }
    }
}

/// The direction of a moving-average crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossoverKind {
    /// EMA20 moved from below to above EMA50.
    Bullish,
    /// EMA20 moved from above to below EMA50.
    Bearish,
}

/// A detected crossover. Produced fresh by every scan and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    /// Position of the later point in the scanned series.
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: CrossoverKind,
    pub date: NaiveDate,
    /// Close of the later point.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// The model's call for an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Bullish,
    Bearish,
    Neutral,
}

/// Output of the prediction provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSignal {
    #[serde(rename = "prediction")]
    pub direction: Direction,
    /// Model certainty in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Output of the news-sentiment provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    #[serde(rename = "sentiment")]
    pub label: SentimentLabel,
    /// Sentiment polarity in `[-1, 1]`.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub articles_count: Option<u32>,
}

/// A fused confidence/sentiment score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConvictionScore(f64);

impl ConvictionScore {
    pub fn new(value: f64) -> crate::Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(crate::Error::DomainError {
                field: "conviction",
                value,
                min: 0.0,
                max: 1.0,
            })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole-percent rendering used on cards and progress bars.
    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl TryFrom<f64> for ConvictionScore {
    type Error = crate::Error;

    fn try_from(value: f64) -> crate::Result<Self> {
        Self::new(value)
    }
}

impl From<ConvictionScore> for f64 {
    fn from(score: ConvictionScore) -> Self {
        score.0
    }
}

/// Color family used to render a signal: green, red or gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Positive => "green",
            Tone::Negative => "red",
            Tone::Neutral => "gray",
        }
    }
}

impl From<Direction> for Tone {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Bullish => Tone::Positive,
            Direction::Bearish => Tone::Negative,
            Direction::Neutral => Tone::Neutral,
        }
    }
}

impl From<SentimentLabel> for Tone {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Tone::Positive,
            SentimentLabel::Negative => Tone::Negative,
            SentimentLabel::Neutral => Tone::Neutral,
        }
    }
}

impl From<CrossoverKind> for Tone {
    fn from(kind: CrossoverKind) -> Self {
        match kind {
            CrossoverKind::Bullish => Tone::Positive,
            CrossoverKind::Bearish => Tone::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn spread_requires_both_finite_averages() {
        assert_eq!(PricePoint::new(day(1), dec!(100), 21.0, 20.0).spread(), Some(1.0));

        let missing = PricePoint { ema50: None, ..PricePoint::new(day(1), dec!(100), 21.0, 20.0) };
        assert_eq!(missing.spread(), None);

        let nan = PricePoint::new(day(1), dec!(100), f64::NAN, 20.0);
        assert_eq!(nan.spread(), None);
    }

    #[test]
    fn price_point_reads_provider_payload() {
        let json = r#"{"date":"2024-01-02","close":101.5,"ema20":21.0,"ema50":null}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, day(2));
        assert_eq!(point.close, dec!(101.5));
        assert_eq!(point.ema20, Some(21.0));
        assert_eq!(point.ema50, None);
    }

    #[test]
    fn signals_use_provider_field_names() {
        let prediction: PredictionSignal =
            serde_json::from_str(r#"{"prediction":"Bearish","confidence":0.62}"#).unwrap();
        assert_eq!(prediction.direction, Direction::Bearish);

        let sentiment: SentimentReading =
            serde_json::from_str(r#"{"sentiment":"positive","score":0.4,"articles_count":12}"#).unwrap();
        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert_eq!(sentiment.articles_count, Some(12));
    }

    #[test]
    fn conviction_rejects_values_outside_unit_range() {
        assert!(ConvictionScore::new(0.785).is_ok());
        assert!(ConvictionScore::new(1.01).is_err());
        assert!(ConvictionScore::new(f64::NAN).is_err());
        assert_eq!(ConvictionScore::new(0.785).unwrap().percent(), 79);
        assert!(serde_json::from_str::<ConvictionScore>("-0.2").is_err());
    }

    #[test]
    fn tones_map_to_dashboard_colors() {
        assert_eq!(Tone::from(Direction::Bullish).color(), "green");
        assert_eq!(Tone::from(SentimentLabel::Negative).color(), "red");
        assert_eq!(Tone::from(Direction::Neutral).color(), "gray");
        assert_eq!(Tone::from(CrossoverKind::Bearish), Tone::Negative);
    }
}
