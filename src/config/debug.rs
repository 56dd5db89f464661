//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. All of them are further gated by
//! `cfg(debug_assertions)`, so release builds stay quiet regardless.

pub struct DebugFlags {
    /// Emit UI interaction logs (input edits, Analyze clicks, layer toggles).
    pub print_ui_interactions: bool,
    /// Emit per-source fetch attempts and timings.
    pub print_fetch_details: bool,
    /// Emit a one-line summary (rows, buy/sell counts) after each analysis.
    pub print_analysis_summary: bool,
    /// Emit plot bounds whenever a new chart model is built.
    pub print_plot_bounds: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_fetch_details: false,
    print_analysis_summary: true,
    print_plot_bounds: false,
};
