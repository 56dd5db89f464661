// Analysis data models
// Pure data with no UI or network dependencies

pub mod band_view;
pub mod banded;
pub mod price_series;
pub mod signaled;
pub mod table_preview;

// Re-export key types for convenience
pub use band_view::{BandChart, SignalMarker};
pub use banded::BandedSeries;
pub use price_series::PriceSeries;
pub use signaled::{BandSignal, SignalRow, SignaledSeries};
pub use table_preview::{TABLE_COLUMNS, TablePreview};
