// In app/src/report.rs

use chrono::{DateTime, Utc};
use core_types::{CrossoverEvent, Direction, PredictionSignal, PricePoint, SentimentReading, Tone};
use screener::Ranked;
use serde::Serialize;
use signals::indicators::{DEFAULT_RSI_PERIOD, enrich, latest_rsi};
use signals::{
    ConvictionView, CrossoverDetector, EmaPeriods, EmaTrend, FusionWeights, assess, latest_trend,
    recent,
};

#[derive(Debug, Serialize)]
pub struct CrossoverReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub points: usize,
    pub trend: Option<EmaTrend>,
    pub rsi: Option<f64>,
    pub total_crossovers: usize,
    pub recent: Vec<CrossoverEvent>,
}

/// Scans a series and keeps the last `recent_n` events for display.
pub fn crossovers(
    symbol: Option<String>,
    mut points: Vec<PricePoint>,
    detector: &CrossoverDetector,
    recent_n: usize,
    compute_emas: bool,
) -> anyhow::Result<CrossoverReport> {
    if compute_emas {
        let closes: Vec<_> = points.iter().map(|p| (p.date, p.close)).collect();
        points = enrich(&closes, EmaPeriods::default())?;
    }

    let events = detector.scan(&points);
    let closes: Vec<_> = points.iter().map(|p| p.close).collect();

    Ok(CrossoverReport {
        symbol,
        points: points.len(),
        trend: latest_trend(&points),
        rsi: latest_rsi(&closes, DEFAULT_RSI_PERIOD)?,
        total_crossovers: events.len(),
        recent: recent(&events, recent_n).to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct ConvictionReport {
    pub prediction: Direction,
    pub color: &'static str,
    pub confidence_percent: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conviction_percent: Option<u32>,
    pub view: ConvictionView,
}

pub fn conviction(
    prediction: &PredictionSignal,
    sentiment: Option<&SentimentReading>,
    weights: &FusionWeights,
) -> anyhow::Result<ConvictionReport> {
    let view = assess(prediction, sentiment, weights)?;

    Ok(ConvictionReport {
        prediction: prediction.direction,
        color: Tone::from(prediction.direction).color(),
        confidence_percent: (view.confidence() * 100.0).round() as u32,
        conviction_percent: view.conviction().map(|c| c.percent()),
        view,
    })
}

/// Top-movers payload: the ranked lists stamped with the time they were produced.
#[derive(Debug, Serialize)]
pub struct TopMovers {
    #[serde(flatten)]
    pub ranked: Ranked,
    pub updated_at: DateTime<Utc>,
}
