//! Synthetic OHLC data. A clamped random walk per timeframe, regenerated
//! on every timeframe switch; no market feed behind it.

use {
    rand::Rng,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

use crate::models::{OhlcBar, OhlcSeries};
use crate::utils::{TimeUtils, now_epoch_secs};

/// The walk never leaves this band, so every generated series fits the
/// same vertical window.
pub const PRICE_FLOOR: f64 = 200.0;
pub const PRICE_CEIL: f64 = 400.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Timeframe {
    #[default]
    #[strum(serialize = "1D")]
    Day,
    #[strum(serialize = "1W")]
    Week,
    #[strum(serialize = "1M")]
    Month,
    #[strum(serialize = "3M")]
    Quarter,
    #[strum(serialize = "6M")]
    HalfYear,
    #[strum(serialize = "1Y")]
    Year,
}

impl Timeframe {
    /// 1D is an intraday session of one-minute bars; the rest are daily.
    pub fn bar_count(self) -> usize {
        match self {
            Timeframe::Day => 390,
            Timeframe::Week => 35,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
            Timeframe::HalfYear => 180,
            Timeframe::Year => 365,
        }
    }

    pub fn bar_interval_secs(self) -> f64 {
        match self {
            Timeframe::Day => TimeUtils::SECS_IN_MIN as f64,
            _ => TimeUtils::SECS_IN_DAY as f64,
        }
    }
}

/// Random walk: start in the 250..300 band, step at most +-2 per bar,
/// wick excursions up to the per-bar volatility, all clamped to the
/// price band. Bars end at the current time.
pub fn generate_series(timeframe: Timeframe) -> OhlcSeries {
    let mut rng = rand::thread_rng();
    let count = timeframe.bar_count();
    let interval = timeframe.bar_interval_secs();
    let first_time = now_epoch_secs() - (count as f64) * interval;

    let mut price: f64 = 250.0 + rng.gen_range(0.0..50.0);
    let mut bars = Vec::with_capacity(count);

    for i in 0..count {
        let open = price;
        let change = rng.gen_range(-2.0..2.0);
        let close = (open + change).clamp(PRICE_FLOOR, PRICE_CEIL);
        let volatility = rng.gen_range(1.0..4.0);
        let high = (open.max(close) + rng.gen_range(0.0..volatility)).min(PRICE_CEIL);
        let low = (open.min(close) - rng.gen_range(0.0..volatility)).max(PRICE_FLOOR);
        let volume = rng.gen_range(100_000.0..1_100_000.0);

        bars.push(OhlcBar {
            time: first_time + (i as f64) * interval,
            open,
            high,
            low,
            close,
            volume,
        });
        price = close;
    }

    OhlcSeries::new(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn bar_counts_per_timeframe() {
        assert_eq!(generate_series(Timeframe::Day).len(), 390);
        assert_eq!(generate_series(Timeframe::Week).len(), 35);
        assert_eq!(generate_series(Timeframe::Year).len(), 365);
    }

    #[test]
    fn bars_are_evenly_spaced_and_increasing() {
        for timeframe in Timeframe::iter() {
            let series = generate_series(timeframe);
            let interval = timeframe.bar_interval_secs();
            for pair in series.bars.windows(2) {
                assert_eq!(pair[1].time - pair[0].time, interval);
            }
        }
    }

    #[test]
    fn walk_stays_inside_the_price_band() {
        let series = generate_series(Timeframe::Year);
        for bar in &series.bars {
            assert!(bar.high <= PRICE_CEIL, "high escaped: {}", bar.high);
            assert!(bar.low >= PRICE_FLOOR, "low escaped: {}", bar.low);
        }
    }

    #[test]
    fn ohlc_shape_is_consistent() {
        let series = generate_series(Timeframe::Quarter);
        for bar in &series.bars {
            assert!(bar.high >= bar.open.max(bar.close));
            assert!(bar.low <= bar.open.min(bar.close));
            assert!(bar.volume >= 100_000.0);
        }
    }

    #[test]
    fn timeframe_labels() {
        let labels: Vec<String> = Timeframe::iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, ["1D", "1W", "1M", "3M", "6M", "1Y"]);
    }
}
