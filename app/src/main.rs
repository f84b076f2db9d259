// In app/src/main.rs

use anyhow::Result;
use app_config::Settings;
use chrono::Utc;
use clap::{Parser, Subcommand};
use core_types::{PredictionSignal, SentimentReading};
use screener::{ScreenerCandidate, build_entries, rank_top};
use serde::Serialize;
use signals::{CrossoverDetector, validate_order};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::prelude::*;

mod inputs;
mod report;

use crate::report::TopMovers;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "EMA crossover detection and conviction scoring for daily stock signals."
)]
struct Cli {
    /// Read settings from a single TOML file instead of the config/ directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists the EMA20/EMA50 crossovers in a daily price series.
    Crossovers {
        /// JSON file holding the chart payload or a bare array of price points.
        #[arg(short, long)]
        series: PathBuf,

        /// How many of the most recent crossovers to print.
        #[arg(short, long)]
        recent: Option<usize>,

        /// Fail if the series dates are not ascending.
        #[arg(long)]
        strict_order: bool,

        /// Recompute both averages from the closes before scanning.
        #[arg(long)]
        compute_emas: bool,
    },

    /// Fuses a prediction with an optional sentiment reading.
    Conviction {
        /// JSON file with `{prediction, confidence}`.
        #[arg(short, long)]
        prediction: PathBuf,

        /// JSON file with `{sentiment, score}`. Omit when no reading is available.
        #[arg(short, long)]
        sentiment: Option<PathBuf>,
    },

    /// Ranks pre-classified screener candidates into top bullish and bearish lists.
    Screen {
        /// JSON array of screener candidates.
        #[arg(short, long)]
        entries: PathBuf,

        /// Entries to keep on each side.
        #[arg(short, long)]
        top: Option<usize>,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => app_config::load_settings_file(path)?,
        None => app_config::load_settings()?,
    };
    init_tracing(&settings.app.log_level);

    tracing::info!(environment = %settings.app.environment, "Starting AlphaCross");

    match cli.command {
        Commands::Crossovers {
            series,
            recent,
            strict_order,
            compute_emas,
        } => handle_crossovers(&settings, &series, recent, strict_order, compute_emas)?,
        Commands::Conviction {
            prediction,
            sentiment,
        } => handle_conviction(&settings, &prediction, sentiment.as_deref())?,
        Commands::Screen { entries, top } => handle_screen(&settings, &entries, top)?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_tracing(log_level: &str) {
    let level = tracing::Level::from_str(log_level).unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// --- "Crossovers" Subcommand Logic ---

fn handle_crossovers(
    settings: &Settings,
    path: &Path,
    recent: Option<usize>,
    strict_order: bool,
    compute_emas: bool,
) -> Result<()> {
    let input = inputs::load_series(path)?;
    if strict_order {
        validate_order(&input.points)?;
    }

    let detector = CrossoverDetector::new(settings.chart.tie_break);
    let recent_n = recent.unwrap_or(settings.chart.recent_crossovers);
    let report = report::crossovers(input.symbol, input.points, &detector, recent_n, compute_emas)?;

    tracing::info!(
        symbol = report.symbol.as_deref().unwrap_or("-"),
        points = report.points,
        crossovers = report.total_crossovers,
        "Crossover scan complete"
    );

    print_json(&report)
}

// --- "Conviction" Subcommand Logic ---

fn handle_conviction(settings: &Settings, prediction: &Path, sentiment: Option<&Path>) -> Result<()> {
    let prediction: PredictionSignal = inputs::read_json(prediction)?;
    let sentiment: Option<SentimentReading> = sentiment.map(inputs::read_json).transpose()?;

    if sentiment.is_none() {
        tracing::warn!("No sentiment reading supplied; showing raw confidence only.");
    }

    let report = report::conviction(&prediction, sentiment.as_ref(), &settings.fusion)?;

    tracing::info!(
        confidence = report.confidence_percent,
        conviction = ?report.conviction_percent,
        "Conviction assessed"
    );

    print_json(&report)
}

// --- "Screen" Subcommand Logic ---

fn handle_screen(settings: &Settings, path: &Path, top: Option<usize>) -> Result<()> {
    let candidates: Vec<ScreenerCandidate> = inputs::read_json(path)?;
    let total = candidates.len();

    let entries = build_entries(candidates, &settings.fusion)?;
    let skipped = total - entries.len();
    if skipped > 0 {
        tracing::warn!(skipped, "Candidates without sentiment were left out of the ranking.");
    }

    let ranked = rank_top(&entries, top.unwrap_or(settings.screener.top_n));

    tracing::info!(
        candidates = total,
        bullish = ranked.bullish.len(),
        bearish = ranked.bearish.len(),
        "Screener ranking complete"
    );

    print_json(&TopMovers {
        ranked,
        updated_at: Utc::now(),
    })
}
