//! Chart visualization and interaction configuration

use eframe::egui::Color32;

pub struct ChartMargins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

pub struct PlotConfig {
    /// Fixed canvas height in points
    pub canvas_height: f32,
    /// Space reserved around the plotting rectangle for axis labels
    pub margins: ChartMargins,
    pub canvas_background: Color32,

    // --- GRID & AXES ---
    pub grid_color: Color32,
    pub grid_dash_length: f32,
    pub grid_gap_length: f32,
    /// Vertical grid divisions (time axis)
    pub grid_cols: usize,
    /// Horizontal grid divisions (price axis)
    pub grid_rows: usize,
    pub axis_label_color: Color32,
    /// Time axis label count (n+1 labels drawn)
    pub time_label_divisions: usize,

    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f32, // 0.0 to 1.0 (relative to time slot)
    pub candle_min_width: f32, // Pixels
    pub candle_wick_width: f32,

    // --- TRENDLINES ---
    /// Pointer must be within this many pixels of an endpoint to grab a handle
    pub handle_grab_radius: f32,
    /// Pointer must be within this many pixels of the segment to grab the body
    pub body_grab_radius: f32,
    /// Stroke width while a line is selected, hovered or dragged
    pub highlight_width: f32,
    pub default_trendline_width: f32,
    pub handle_radius: f32,
    pub handle_stroke_color: Color32,
    pub handle_stroke_width: f32,
    /// Default colors picked pseudo-randomly for new trendlines
    pub trendline_palette: &'static [Color32],
    /// Marker shown at the pending start point while drawing
    pub pending_point_color: Color32,

    // --- TOASTS ---
    /// Seconds before a coordinate notice disappears
    pub toast_lifetime_secs: f64,
    pub toast_background: Color32,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    canvas_height: 500.0,
    margins: ChartMargins {
        top: 20.0,
        right: 60.0,
        bottom: 40.0,
        left: 60.0,
    },
    canvas_background: Color32::from_rgb(15, 23, 42), // Slate-900

    grid_color: Color32::from_rgb(51, 65, 85), // Slate
    grid_dash_length: 2.0,
    grid_gap_length: 2.0,
    grid_cols: 10,
    grid_rows: 8,
    axis_label_color: Color32::from_rgb(156, 163, 175),
    time_label_divisions: 5,

    candle_bullish_color: Color32::from_rgb(16, 185, 129),
    candle_bearish_color: Color32::from_rgb(239, 68, 68),
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_min_width: 2.0,
    candle_wick_width: 1.0,

    handle_grab_radius: 10.0,
    body_grab_radius: 8.0,
    highlight_width: 3.0,
    default_trendline_width: 2.0,
    handle_radius: 6.0,
    handle_stroke_color: Color32::WHITE,
    handle_stroke_width: 2.0,
    trendline_palette: &[
        Color32::from_rgb(59, 130, 246), // Blue
        Color32::from_rgb(16, 185, 129), // Emerald
        Color32::from_rgb(245, 158, 11), // Amber
        Color32::from_rgb(239, 68, 68),  // Red
        Color32::from_rgb(139, 92, 246), // Violet
        Color32::from_rgb(6, 182, 212),  // Cyan
        Color32::from_rgb(132, 204, 22), // Lime
    ],
    pending_point_color: Color32::from_rgb(59, 130, 246),

    toast_lifetime_secs: 8.0,
    toast_background: Color32::from_rgb(30, 41, 59),

    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
};
