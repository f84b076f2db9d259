// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, ChartSettings, ScreenerSettings, Settings};

/// Loads the application settings from the `config/` directory.
///
/// The environment is taken from `APP_ENVIRONMENT`, defaulting to "development".
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Layered configuration loading:
/// 1. Reads the required `base.toml` from `config_dir`.
/// 2. Merges the environment-specific file (e.g., `development.toml`), if present.
/// 3. Merges environment variables such as `APP_FUSION__CONFIDENCE_WEIGHT=0.6`.
pub fn load_settings_from(config_dir: &Path, environment: &str) -> Result<Settings> {
    let base = config_dir.join("base");
    let overlay = config_dir.join(environment);

    let settings = Config::builder()
        .add_source(File::with_name(&base.to_string_lossy()).required(true))
        .add_source(File::with_name(&overlay.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

/// Loads settings from a single TOML file, bypassing the layered sources.
pub fn load_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;

    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}
