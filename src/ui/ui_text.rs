use std::sync::LazyLock;

pub const ICON_TREND_UP: &str = "▲";
pub const ICON_TREND_DOWN: &str = "▼";
pub const ICON_DELETE: &str = "✕";
pub const ICON_PENCIL: &str = "✏";

pub struct UiText {
    pub app_title: String,

    // --- Header / controls ---
    pub label_timeframe: String,
    pub drawing_on: String,
    pub drawing_off: String,
    pub drawing_hint: String,
    pub clear_all: String,

    // --- Portfolio panel ---
    pub portfolio_heading: String,
    pub portfolio_value: String,
    pub portfolio_day_change: String,
    pub portfolio_buying_power: String,

    // --- Market stats ---
    pub market_heading: String,

    // --- Order entry ---
    pub order_heading: String,
    pub order_symbol: String,
    pub order_quantity: String,
    pub order_buy: String,
    pub order_sell: String,
    pub order_disclaimer: String,

    // --- Holdings table ---
    pub holdings_heading: String,
    pub holdings_symbol: String,
    pub holdings_shares: String,
    pub holdings_avg_cost: String,
    pub holdings_price: String,
    pub holdings_pnl: String,

    // --- Trendline manager ---
    pub tm_heading: String,
    pub tm_empty: String,
    pub tm_bullish: String,
    pub tm_bearish: String,

    // --- Coordinate display ---
    pub cd_heading: String,
    pub cd_empty: String,
    pub cd_start: String,
    pub cd_end: String,
    pub cd_change: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "ChartMark".to_string(),

    label_timeframe: "Timeframe".to_string(),
    drawing_on: format!("{} Drawing ON", ICON_PENCIL),
    drawing_off: format!("{} Drawing OFF", ICON_PENCIL),
    drawing_hint: "Click two points on the chart to place a trendline".to_string(),
    clear_all: "Clear All".to_string(),

    portfolio_heading: "Portfolio Overview".to_string(),
    portfolio_value: "Total Value".to_string(),
    portfolio_day_change: "Day Change".to_string(),
    portfolio_buying_power: "Buying Power".to_string(),

    market_heading: "Market Stats".to_string(),

    order_heading: "Order Entry".to_string(),
    order_symbol: "Symbol".to_string(),
    order_quantity: "Quantity".to_string(),
    order_buy: "BUY".to_string(),
    order_sell: "SELL".to_string(),
    order_disclaimer: "Demo panel. Orders go nowhere.".to_string(),

    holdings_heading: "Holdings".to_string(),
    holdings_symbol: "Symbol".to_string(),
    holdings_shares: "Shares".to_string(),
    holdings_avg_cost: "Avg Cost".to_string(),
    holdings_price: "Price".to_string(),
    holdings_pnl: "P&L".to_string(),

    tm_heading: "Trendlines".to_string(),
    tm_empty: "No trendlines yet. Enable drawing and click twice on the chart.".to_string(),
    tm_bullish: format!("{} Bullish", ICON_TREND_UP),
    tm_bearish: format!("{} Bearish", ICON_TREND_DOWN),

    cd_heading: "Selected Trendline".to_string(),
    cd_empty: "Click a trendline to inspect its coordinates.".to_string(),
    cd_start: "Start".to_string(),
    cd_end: "End".to_string(),
    cd_change: "Change".to_string(),
});
