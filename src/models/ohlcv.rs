use serde::{Deserialize, Serialize};

/// A single candlestick. Time is unix seconds of the bar open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OhlcBar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Time-ordered price series for the visible window. Read-only to the
/// chart core; the data layer owns generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OhlcSeries {
    pub bars: Vec<OhlcBar>,
}

impl OhlcSeries {
    pub fn new(bars: Vec<OhlcBar>) -> Self {
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// (first, last) bar open times, None when empty.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }

    /// (lowest low, highest high) over the series, None when empty.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.bars.iter().fold(None, |acc, bar| match acc {
            None => Some((bar.low, bar.high)),
            Some((lo, hi)) => Some((lo.min(bar.low), hi.max(bar.high))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: f64, low: f64, high: f64) -> OhlcBar {
        OhlcBar {
            time,
            open: low,
            high,
            low,
            close: high,
            volume: 0.0,
        }
    }

    #[test]
    fn bounds_over_series() {
        let series = OhlcSeries::new(vec![bar(10.0, 5.0, 9.0), bar(20.0, 3.0, 7.0)]);
        assert_eq!(series.time_bounds(), Some((10.0, 20.0)));
        assert_eq!(series.price_bounds(), Some((3.0, 9.0)));
    }

    #[test]
    fn empty_series_has_no_bounds() {
        let series = OhlcSeries::default();
        assert!(series.time_bounds().is_none());
        assert!(series.price_bounds().is_none());
    }
}
