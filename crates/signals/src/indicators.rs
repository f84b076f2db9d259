// In crates/signals/src/indicators.rs

//! Fills in moving averages for callers that only have daily closes.
//! Averages follow the usual recursive form seeded with the first close.

use crate::types::EmaPeriods;
use chrono::NaiveDate;
use core_types::{Error, PricePoint, Result};
use num_traits::cast::ToPrimitive;
use rust_decimal::Decimal;
use ta::indicators::ExponentialMovingAverage as Ema;
use ta::Next;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Builds a chart series from `(date, close)` pairs.
///
/// The fast average is stored in `ema20` and the slow one in `ema50`.
pub fn enrich(closes: &[(NaiveDate, Decimal)], periods: EmaPeriods) -> Result<Vec<PricePoint>> {
    let mut fast = Ema::new(periods.fast).map_err(|_| Error::InvalidPeriod { period: periods.fast })?;
    let mut slow = Ema::new(periods.slow).map_err(|_| Error::InvalidPeriod { period: periods.slow })?;

    Ok(closes
        .iter()
        .map(|(date, close)| {
            let price = close.to_f64().unwrap_or(0.0);
            PricePoint {
                date: *date,
                close: *close,
                ema20: Some(fast.next(price)),
                ema50: Some(slow.next(price)),
            }
        })
        .collect())
}

/// RSI of the last close with Wilder smoothing (`alpha = 1 / period`).
///
/// Average gain and loss start from a zero change on the first close, so a
/// value exists once `period` closes have been seen. A window without losses
/// reads 100.
pub fn latest_rsi(closes: &[Decimal], period: usize) -> Result<Option<f64>> {
    if period == 0 {
        return Err(Error::InvalidPeriod { period });
    }
    // An EMA over 2n - 1 bars has k = 1/n, i.e. Wilder's smoothing.
    let wilder = 2 * period - 1;
    let mut avg_gain = Ema::new(wilder).map_err(|_| Error::InvalidPeriod { period })?;
    let mut avg_loss = Ema::new(wilder).map_err(|_| Error::InvalidPeriod { period })?;
    if closes.len() < period {
        return Ok(None);
    }

    let (mut gain, mut loss) = (0.0, 0.0);
    let mut previous: Option<f64> = None;
    for close in closes {
        let price = close.to_f64().unwrap_or(0.0);
        let change = previous.map_or(0.0, |p| price - p);
        gain = avg_gain.next(change.max(0.0));
        loss = avg_loss.next((-change).max(0.0));
        previous = Some(price);
    }

    if loss == 0.0 {
        return Ok(Some(100.0));
    }
    Ok(Some(100.0 - 100.0 / (1.0 + gain / loss)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossover::detect;
    use chrono::Duration;
    use core_types::CrossoverKind;
    use rust_decimal_macros::dec;

    fn dated(prices: &[i64]) -> Vec<(NaiveDate, Decimal)> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| (start + Duration::days(i as i64), Decimal::from(*p)))
            .collect()
    }

    #[test]
    fn averages_start_at_the_first_close() {
        let series = enrich(&dated(&[100, 110]), EmaPeriods::default()).unwrap();
        assert_eq!(series[0].ema20, Some(100.0));
        assert_eq!(series[0].ema50, Some(100.0));
        assert!(series[1].ema20.unwrap() > series[1].ema50.unwrap());
    }

    #[test]
    fn decline_then_rally_yields_one_bullish_cross() {
        let mut prices: Vec<i64> = (0..60).map(|i| 200 - i).collect();
        prices.extend((0..60).map(|i| 141 + 2 * i));

        let events = detect(&enrich(&dated(&prices), EmaPeriods::default()).unwrap());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, CrossoverKind::Bullish);
        assert!(events[0].index > 60);
    }

    #[test]
    fn zero_period_is_rejected() {
        let periods = EmaPeriods { fast: 0, slow: 50 };
        assert_eq!(
            enrich(&dated(&[1]), periods),
            Err(Error::InvalidPeriod { period: 0 })
        );
        assert!(latest_rsi(&[Decimal::ONE], 0).is_err());
    }

    #[test]
    fn rsi_needs_a_full_window() {
        let rising: Vec<Decimal> = (1..=20).map(Decimal::from).collect();
        assert_eq!(latest_rsi(&rising[..13], DEFAULT_RSI_PERIOD).unwrap(), None);
        assert_eq!(latest_rsi(&rising[..14], DEFAULT_RSI_PERIOD).unwrap(), Some(100.0));

        let falling: Vec<Decimal> = rising.iter().rev().cloned().collect();
        assert!(latest_rsi(&falling, DEFAULT_RSI_PERIOD).unwrap().unwrap() < 30.0);
    }

    #[test]
    fn rsi_uses_wilder_smoothing() {
        let closes = [
            dec!(44.34), dec!(44.09), dec!(44.15), dec!(43.61), dec!(44.33),
            dec!(44.83), dec!(45.10), dec!(45.42), dec!(45.84), dec!(46.08),
            dec!(45.89), dec!(46.03), dec!(45.61), dec!(46.28), dec!(46.28),
            dec!(46.00), dec!(46.03), dec!(46.41), dec!(46.22), dec!(45.64),
        ];

        let first = latest_rsi(&closes[..14], DEFAULT_RSI_PERIOD).unwrap().unwrap();
        let last = latest_rsi(&closes, DEFAULT_RSI_PERIOD).unwrap().unwrap();

        assert!((first - 71.802_410_653_7).abs() < 1e-6);
        assert!((last - 54.179_295_420_5).abs() < 1e-6);
    }
}
