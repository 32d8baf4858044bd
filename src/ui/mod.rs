pub mod panels;
pub mod ticker;
pub mod ui_config;
pub mod ui_text;
pub mod utils;

pub use panels::{
    CoordinateDisplay, HoldingsTable, MarketStats, OrderEntryPanel, PanelAction,
    PortfolioOverview, TrendlineManager,
};
pub use ticker::TickerState;
