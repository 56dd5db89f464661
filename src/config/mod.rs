//! Configuration module for the band sniper application.

pub mod analysis;

mod debug; // Private: callers go through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;
pub mod yahoo;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use plot::PLOT_CONFIG;
pub use yahoo::YAHOO;
