// In crates/signals/src/validation.rs

use crate::crossover::detect;
use core_types::{CrossoverEvent, Error, PricePoint, Result};

/// Ensures `series` is ascending by date. Repeated dates are allowed.
///
/// Returns `OrderingViolation` naming the first point dated before its predecessor.
pub fn validate_order(series: &[PricePoint]) -> Result<()> {
    match series.windows(2).position(|pair| pair[1].date < pair[0].date) {
        Some(offset) => Err(Error::OrderingViolation { index: offset + 1 }),
        None => Ok(()),
    }
}

/// Boundary variant of [`detect`] that refuses out-of-order input.
pub fn detect_checked(series: &[PricePoint]) -> Result<Vec<CrossoverEvent>> {
    validate_order(series)?;
    Ok(detect(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn on(day: u32, ema20: f64, ema50: f64) -> PricePoint {
        PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, day).unwrap(), dec!(50), ema20, ema50)
    }

    #[test]
    fn accepts_ascending_and_repeated_dates() {
        assert!(validate_order(&[]).is_ok());
        assert!(validate_order(&[on(1, 1.0, 2.0), on(1, 1.0, 2.0), on(2, 1.0, 2.0)]).is_ok());
    }

    #[test]
    fn reports_first_out_of_order_point() {
        let series = vec![on(1, 1.0, 2.0), on(3, 1.0, 2.0), on(2, 1.0, 2.0), on(1, 1.0, 2.0)];
        assert_eq!(
            validate_order(&series),
            Err(Error::OrderingViolation { index: 2 })
        );
    }

    #[test]
    fn checked_detection_matches_unchecked_on_valid_input() {
        let series = vec![on(1, 19.0, 21.0), on(2, 21.0, 20.0)];
        assert_eq!(detect_checked(&series).unwrap(), detect(&series));

        let reversed: Vec<_> = series.iter().rev().cloned().collect();
        assert!(detect_checked(&reversed).is_err());
    }
}
