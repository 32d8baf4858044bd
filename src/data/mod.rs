pub mod mock;
pub mod store;

pub use mock::{Timeframe, generate_series};
pub use store::{JsonFileStore, TrendlineStore};
