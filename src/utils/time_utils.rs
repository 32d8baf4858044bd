use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const SECS_IN_MIN: i64 = 60;
    pub const SECS_IN_DAY: i64 = 60 * 60 * 24;
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

// Time helper functions. Chart times are f64 unix seconds (fractional
// seconds come from pointer-position inversion, not from the data).

pub fn epoch_secs_to_date(epoch_secs: f64) -> String {
    match DateTime::from_timestamp(epoch_secs as i64, 0) {
        Some(dt) => format!("{}", dt.format(TimeUtils::DATE_FORMAT)),
        None => "----".to_string(),
    }
}

pub fn epoch_secs_to_datetime(epoch_secs: f64) -> String {
    match DateTime::from_timestamp(epoch_secs as i64, 0) {
        Some(dt) => format!("{}", dt.format(TimeUtils::DATETIME_FORMAT)),
        None => "----".to_string(),
    }
}

pub fn now_epoch_secs() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_epoch() {
        // 2024-01-01 00:00:00 UTC
        assert_eq!(epoch_secs_to_date(1_704_067_200.0), "2024-01-01");
        assert_eq!(epoch_secs_to_datetime(1_704_067_200.0), "2024-01-01 00:00");
    }

    #[test]
    fn out_of_range_epoch_does_not_panic() {
        assert_eq!(epoch_secs_to_date(f64::MAX), "----");
    }
}
