//! File persistence configuration

/// Configuration for the trendline annotation store
pub struct TrendlinePersistenceConfig {
    /// File the trendline list is saved to on every mutation
    pub file_path: &'static str,
}

/// Configuration for application UI state persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (eframe storage)
    pub state_path: &'static str,
}

pub struct PersistenceConfig {
    pub trendlines: TrendlinePersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    trendlines: TrendlinePersistenceConfig {
        file_path: "chartmark_trendlines.json",
    },
    app: AppPersistenceConfig {
        state_path: ".chartmark_state.json",
    },
};
