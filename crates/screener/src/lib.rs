// In crates/screener/src/lib.rs

pub mod ranking;
pub mod types;

// Re-export the most important types for easy access.
pub use ranking::{DEFAULT_TOP_N, Ranked, rank, rank_top};
pub use types::{ScreenerCandidate, ScreenerEntry, build_entries};
