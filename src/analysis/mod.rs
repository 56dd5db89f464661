// Band calculation, signal generation and the request pipeline
pub mod bands;
pub mod error;
pub mod pipeline;
pub mod signals;

// Re-export commonly used types
pub use bands::compute_bands;
pub use error::AnalysisError;
pub use pipeline::{AnalysisReport, analyze_series, run_analysis};
pub use signals::generate_signals;
