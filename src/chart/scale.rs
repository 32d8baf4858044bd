//! Affine domain<->pixel mappings for the chart.
//!
//! Scales are pure values derived from the visible series and the plot
//! rectangle. They are recomputed whenever either changes, never mutated.

use eframe::egui::{Pos2, Rect, pos2};

use crate::models::{ChartPoint, OhlcSeries};

/// Padding applied to the price extremes so they are not drawn on the
/// plot edge (1% band below the low and above the high).
const PRICE_PAD_LOW: f64 = 0.99;
const PRICE_PAD_HIGH: f64 = 1.01;

/// time -> x offset within the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    min: f64,
    max: f64,
    width: f64,
}

impl TimeScale {
    fn new(min: f64, max: f64, width: f64) -> Self {
        Self { min, max, width }
    }

    pub fn to_x(&self, time: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 || self.width <= 0.0 {
            return 0.0;
        }
        (time - self.min) / range * self.width
    }

    pub fn invert(&self, x: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 || self.width <= 0.0 {
            return self.min;
        }
        self.min + (x / self.width) * range
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// price -> y offset within the plot rectangle. Inverted: higher price
/// maps to a smaller y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    min: f64,
    max: f64,
    height: f64,
}

impl PriceScale {
    fn new(min: f64, max: f64, height: f64) -> Self {
        Self { min, max, height }
    }

    pub fn to_y(&self, price: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 || self.height <= 0.0 {
            return 0.0;
        }
        self.height - (price - self.min) / range * self.height
    }

    pub fn invert(&self, y: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 || self.height <= 0.0 {
            return self.min;
        }
        self.min + ((self.height - y) / self.height) * range
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Combined mapping between chart space (time, price) and screen space
/// (pixels) for one plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub rect: Rect,
    pub time: TimeScale,
    pub price: PriceScale,
}

impl ChartScale {
    /// Derive both scales from the visible series and the plotting
    /// rectangle (after margins). Empty or single-bar series degrade to
    /// a scale that maps everything to 0 rather than dividing by zero.
    pub fn new(series: &OhlcSeries, rect: Rect) -> Self {
        let (time_min, time_max) = series.time_bounds().unwrap_or((0.0, 0.0));
        let (price_min, price_max) = match series.price_bounds() {
            Some((lo, hi)) => (lo * PRICE_PAD_LOW, hi * PRICE_PAD_HIGH),
            None => (0.0, 0.0),
        };
        Self::from_bounds(time_min, time_max, price_min, price_max, rect)
    }

    /// Build from explicit bounds. The plotting code goes through
    /// [`ChartScale::new`]; this exists for call sites (and tests) that
    /// already know the domain window.
    pub fn from_bounds(
        time_min: f64,
        time_max: f64,
        price_min: f64,
        price_max: f64,
        rect: Rect,
    ) -> Self {
        Self {
            rect,
            time: TimeScale::new(time_min, time_max, rect.width() as f64),
            price: PriceScale::new(price_min, price_max, rect.height() as f64),
        }
    }

    /// Project a chart point into screen space. Total: points outside
    /// the visible window project outside the rectangle.
    pub fn chart_to_screen(&self, point: ChartPoint) -> Pos2 {
        pos2(
            self.rect.left() + self.time.to_x(point.time) as f32,
            self.rect.top() + self.price.to_y(point.price) as f32,
        )
    }

    /// Recover the chart point under a screen position, or None when the
    /// position is outside the plotting rectangle.
    pub fn screen_to_chart(&self, pos: Pos2) -> Option<ChartPoint> {
        if !self.rect.contains(pos) {
            return None;
        }
        let x = (pos.x - self.rect.left()) as f64;
        let y = (pos.y - self.rect.top()) as f64;
        Some(ChartPoint::new(self.time.invert(x), self.price.invert(y)))
    }
}
