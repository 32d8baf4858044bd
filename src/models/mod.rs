mod ohlcv;
mod trendline;

pub use ohlcv::{OhlcBar, OhlcSeries};
pub use trendline::{ChartPoint, Trendline, TrendlineStyle, order_by_time};
