// In crates/signals/src/lib.rs

pub mod conviction;
pub mod crossover;
pub mod indicators;
pub mod types;
pub mod validation;

pub use conviction::{ConvictionView, assess, fuse, fuse_with};
pub use core_types::{Error, Result};
pub use crossover::{CrossoverDetector, EmaTrend, detect, latest_trend, recent};
pub use types::{EmaPeriods, FusionWeights, TieBreak};
pub use validation::{detect_checked, validate_order};
