//! Trendline persistence. The app talks to the trait; the JSON file
//! implementation is an infrastructure detail it never sees.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::models::Trendline;

pub trait TrendlineStore {
    fn load(&self) -> Result<Vec<Trendline>>;
    fn save(&self, trendlines: &[Trendline]) -> Result<()>;
}

/// Whole-collection JSON file, rewritten on every mutation. Small data,
/// no need for anything incremental.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TrendlineStore for JsonFileStore {
    /// Missing file means first run: empty collection. A file that does
    /// not parse is treated the same way (logged, not fatal) so a bad
    /// write can never brick startup.
    fn load(&self) -> Result<Vec<Trendline>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading trendline file {}", self.path.display()))?;
        match serde_json::from_str(&raw) {
            Ok(trendlines) => Ok(trendlines),
            Err(err) => {
                log::warn!(
                    "discarding unreadable trendline file {}: {err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, trendlines: &[Trendline]) -> Result<()> {
        let json = serde_json::to_string_pretty(trendlines)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing trendline file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartPoint;
    use eframe::egui::Color32;
    use uuid::Uuid;

    fn temp_store() -> JsonFileStore {
        let path = std::env::temp_dir().join(format!("chartmark-test-{}.json", Uuid::new_v4()));
        JsonFileStore::new(path)
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store();
        let lines = vec![
            Trendline::new(
                ChartPoint::new(100.0, 250.0),
                ChartPoint::new(200.0, 300.0),
                Color32::from_rgb(59, 130, 246),
            ),
            Trendline::new(
                ChartPoint::new(50.0, 210.0),
                ChartPoint::new(400.0, 390.0),
                Color32::from_rgb(239, 68, 68),
            ),
        ];

        store.save(&lines).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, lines);

        fs::remove_file(&store.path).ok();
    }

    #[test]
    fn corrupt_file_loads_empty_not_error() {
        let store = temp_store();
        fs::write(&store.path, "{ not json [").unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.is_empty());

        fs::remove_file(&store.path).ok();
    }
}
