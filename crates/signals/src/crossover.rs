// In crates/signals/src/crossover.rs

use crate::types::TieBreak;
use core_types::{CrossoverEvent, CrossoverKind, PricePoint};
use serde::{Deserialize, Serialize};

/// Where EMA20 sits relative to EMA50 on a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmaTrend {
    Above,
    Below,
    Equal,
}

impl EmaTrend {
    /// `None` when either average is missing or non-finite.
    pub fn of(point: &PricePoint) -> Option<Self> {
        let spread = point.spread()?;
        Some(if spread > 0.0 {
            EmaTrend::Above
        } else if spread < 0.0 {
            EmaTrend::Below
        } else {
            EmaTrend::Equal
        })
    }
}

/// Scans an ordered series for EMA20/EMA50 crossovers.
///
/// The detector holds only its tie-break policy, so one instance can be
/// shared across any number of independent series.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossoverDetector {
    tie_break: TieBreak,
}

impl CrossoverDetector {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Emits every crossover in `series`, in input order.
    ///
    /// The series must already be sorted ascending by date; it is not
    /// re-checked here. A pair where either point lacks a usable average is
    /// skipped and the scan carries on.
    pub fn scan(&self, series: &[PricePoint]) -> Vec<CrossoverEvent> {
        series
            .windows(2)
            .enumerate()
            .filter_map(|(offset, pair)| {
                let (prev, curr) = (&pair[0], &pair[1]);
                let kind = self.classify(EmaTrend::of(prev)?, EmaTrend::of(curr)?)?;
                Some(CrossoverEvent {
                    index: offset + 1,
                    kind,
                    date: curr.date,
                    price: curr.close,
                })
            })
            .collect()
    }

    fn classify(&self, prev: EmaTrend, curr: EmaTrend) -> Option<CrossoverKind> {
        use EmaTrend::*;

        match (self.tie_break, prev, curr) {
            (_, Below, Above) => Some(CrossoverKind::Bullish),
            (_, Above, Below) => Some(CrossoverKind::Bearish),
            (TieBreak::Inclusive, Equal, Above) => Some(CrossoverKind::Bullish),
            (TieBreak::Inclusive, Equal, Below) => Some(CrossoverKind::Bearish),
            _ => None,
        }
    }
}

/// Detects crossovers with the strict tie-break policy.
pub fn detect(series: &[PricePoint]) -> Vec<CrossoverEvent> {
    CrossoverDetector::default().scan(series)
}

/// The last `k` events of a completed scan.
pub fn recent(events: &[CrossoverEvent], k: usize) -> &[CrossoverEvent] {
    &events[events.len().saturating_sub(k)..]
}

/// EMA relationship on the most recent point, if it can be determined.
pub fn latest_trend(series: &[PricePoint]) -> Option<EmaTrend> {
    series.last().and_then(EmaTrend::of)
}
