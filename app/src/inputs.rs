// In app/src/inputs.rs

use anyhow::{Context, Result};
use core_types::PricePoint;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Price series as saved from the chart endpoint, or as a bare array.
#[derive(Deserialize, Debug)]
#[serde(untagged)] // Allows serde to try parsing as one variant, then the next
enum SeriesFile {
    Chart { symbol: String, data: Vec<PricePoint> },
    Bare(Vec<PricePoint>),
}

#[derive(Debug)]
pub struct SeriesInput {
    pub symbol: Option<String>,
    pub points: Vec<PricePoint>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn load_series(path: &Path) -> Result<SeriesInput> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_series(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_series(content: &str) -> Result<SeriesInput> {
    let input = match serde_json::from_str::<SeriesFile>(content)? {
        SeriesFile::Chart { symbol, data } => SeriesInput {
            symbol: Some(symbol),
            points: data,
        },
        SeriesFile::Bare(points) => SeriesInput {
            symbol: None,
            points,
        },
    };
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_chart_payload() {
        let json = r#"{"symbol":"INFY","data":[
            {"date":"2024-02-01","close":1650.4,"ema20":1620.1,"ema50":1631.7},
            {"date":"2024-02-02","close":1672.0,"ema20":1625.3,"ema50":1633.0}
        ]}"#;

        let input = parse_series(json).unwrap();

        assert_eq!(input.symbol.as_deref(), Some("INFY"));
        assert_eq!(input.points.len(), 2);
    }

    #[test]
    fn reads_bare_array_without_averages() {
        let json = r#"[{"date":"2024-02-01","close":10},{"date":"2024-02-02","close":11}]"#;

        let input = parse_series(json).unwrap();

        assert_eq!(input.symbol, None);
        assert!(input.points.iter().all(|p| p.ema20.is_none() && p.ema50.is_none()));
    }

    #[test]
    fn rejects_malformed_series() {
        assert!(parse_series(r#"{"data":"nope"}"#).is_err());
    }
}
