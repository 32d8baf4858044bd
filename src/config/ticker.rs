use eframe::egui::Color32;

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,

    pub text_color_neutral: Color32,
    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_message: Color32,

    /// Symbols shown with synthetic quotes in the scrolling strip.
    pub symbols: &'static [&'static str],
    pub custom_messages: &'static [&'static str],
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 18.0,
    speed_pixels_per_sec: 60.0, // Matches 60fps monitors nicely
    font_size: 10.0,
    item_spacing: 40.0,
    background_color: Color32::from_rgb(10, 10, 15),

    text_color_neutral: Color32::LIGHT_GRAY,
    text_color_up: Color32::GREEN,
    text_color_down: Color32::RED,
    text_color_message: Color32::GOLD,

    symbols: &["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA", "META", "NFLX"],
    custom_messages: &["CHARTMARK DEMO FEED", "SYNTHETIC QUOTES ONLY"],
};
