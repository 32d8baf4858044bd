//! Configuration module for the chartmark application.

mod persistence;
mod ticker;

// Can't be private because we don't re-export its contents
pub mod plot;

pub use persistence::PERSISTENCE;
pub use ticker::TICKER;
