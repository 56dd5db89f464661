/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub window_title: &'static str,

    // Inputs panel
    pub inputs_heading: &'static str,
    pub symbol_label: &'static str,
    pub symbol_hint: &'static str,
    pub start_date_label: &'static str,
    pub end_date_label: &'static str,
    pub date_hint: &'static str,
    pub bands_heading: &'static str,
    pub window_label: &'static str,
    pub multiplier_label: &'static str,
    pub analyze_button: &'static str,
    pub analyze_busy: &'static str,

    // View panel
    pub view_options_heading: &'static str,

    // Central panel
    pub stock_data_heading_prefix: &'static str,
    pub chart_title_prefix: &'static str,
    pub fetching_data: &'static str,
    pub error_heading: &'static str,
    pub error_hint: &'static str,
    pub empty_prompt: &'static str,

    // Plot
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub label_close_price: &'static str,
    pub label_upper_band: &'static str,
    pub label_lower_band: &'static str,
    pub label_band_fill: &'static str,
    pub label_buy_signal: &'static str,
    pub label_sell_signal: &'static str,

    // Help
    pub help_title: &'static str,
    pub help_toggle: &'static str,
    pub help_analyze: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Bollinger Bands Trading Dashboard",
    window_title: "Band Sniper - Bollinger Bands Trading Dashboard",

    inputs_heading: "Analysis",
    symbol_label: "Stock Symbol",
    symbol_hint: "e.g. AAPL, TSLA, MSFT",
    start_date_label: "Start Date",
    end_date_label: "End Date",
    date_hint: "YYYY-MM-DD",
    bands_heading: "Bands",
    window_label: "Window (days)",
    multiplier_label: "Std multiplier",
    analyze_button: "Analyze",
    analyze_busy: "Fetching Data...",

    view_options_heading: "View Options",

    stock_data_heading_prefix: "Stock Data for ",
    chart_title_prefix: "Bollinger Bands for ",
    fetching_data: "Fetching Data...",
    error_heading: "⚠ Unable to Analyze",
    error_hint: "Check the symbol and date range, then press Analyze again.",
    empty_prompt: "Enter a symbol and date range, then press Analyze.",

    plot_x_axis: "Date",
    plot_y_axis: "Price",
    label_close_price: "Close Price",
    label_upper_band: "Upper Band",
    label_lower_band: "Lower Band",
    label_band_fill: "Band Range",
    label_buy_signal: "Buy Signal",
    label_sell_signal: "Sell Signal",

    help_title: "⌨️ Keyboard Shortcuts",
    help_toggle: "Toggle this help panel",
    help_analyze: "Analyze (from any input field)",
};
