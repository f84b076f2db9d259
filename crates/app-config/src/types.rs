// In crates/app-config/src/types.rs

use serde::Deserialize;
use signals::{FusionWeights, TieBreak};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Weighting of confidence against sentiment in conviction scores.
    #[serde(default)]
    pub fusion: FusionWeights,
    #[serde(default)]
    pub screener: ScreenerSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

impl Settings {
    /// Rejects combinations the signal components cannot honour.
    pub fn validate(&self) -> core_types::Result<()> {
        self.fusion.validate()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScreenerSettings {
    /// How many instruments to keep on each side of the top-movers list.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for ScreenerSettings {
    fn default() -> Self {
        Self { top_n: default_top_n() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartSettings {
    /// Number of most recent crossovers listed under the chart.
    #[serde(default = "default_recent_crossovers")]
    pub recent_crossovers: usize,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            recent_crossovers: default_recent_crossovers(),
            tie_break: TieBreak::default(),
        }
    }
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".into() }
fn default_log_level() -> String { "info".into() }
fn default_top_n() -> usize { 5 }
fn default_recent_crossovers() -> usize { 5 }
