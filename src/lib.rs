// Core modules
pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::PERSISTENCE;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with an empty trendline collection, ignoring the saved file
    #[arg(long, default_value_t = false)]
    pub fresh: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
