use {
    crate::config::plot::PLOT_CONFIG,
    chrono::{DateTime, Utc},
    eframe::egui::Color32,
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// A coordinate in the data domain: unix seconds on the x axis, price on y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: f64,
    pub price: f64,
}

impl ChartPoint {
    pub fn new(time: f64, price: f64) -> Self {
        Self { time, price }
    }
}

/// Returns the pair ordered so the first point is the earlier one.
pub fn order_by_time(a: ChartPoint, b: ChartPoint) -> (ChartPoint, ChartPoint) {
    if a.time <= b.time { (a, b) } else { (b, a) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrendlineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// A two-endpoint annotation anchored in time/price space.
///
/// Invariant: `start_point.time <= end_point.time`. Constructors and
/// endpoint mutation reorder instead of rejecting out-of-order input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trendline {
    pub id: String,
    pub start_point: ChartPoint,
    pub end_point: ChartPoint,
    #[serde(with = "hex_color")]
    pub color: Color32,
    pub width: f32,
    #[serde(default)]
    pub style: TrendlineStyle,
    pub created_at: DateTime<Utc>,
}

impl Trendline {
    pub fn new(a: ChartPoint, b: ChartPoint, color: Color32) -> Self {
        let (start_point, end_point) = order_by_time(a, b);
        Self {
            id: format!("trendline-{}", Uuid::new_v4()),
            start_point,
            end_point,
            color,
            width: PLOT_CONFIG.default_trendline_width,
            style: TrendlineStyle::Solid,
            created_at: Utc::now(),
        }
    }

    /// Clone with replaced endpoints, reordered by time.
    pub fn with_endpoints(&self, a: ChartPoint, b: ChartPoint) -> Self {
        let (start_point, end_point) = order_by_time(a, b);
        Self {
            start_point,
            end_point,
            ..self.clone()
        }
    }

    /// Last four characters of the id, shown in labels like `#3f9a`.
    pub fn short_id(&self) -> &str {
        let n = self.id.len();
        &self.id[n.saturating_sub(4)..]
    }

    pub fn price_change(&self) -> f64 {
        self.end_point.price - self.start_point.price
    }

    pub fn is_bullish(&self) -> bool {
        self.price_change() > 0.0
    }
}

/// Serializes a Color32 as `#rrggbb` so the persisted JSON stays
/// readable and tool-agnostic.
mod hex_color {
    use eframe::egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(color: &Color32, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Color32, D::Error> {
        let s = String::deserialize(de)?;
        let hex = s.strip_prefix('#').unwrap_or(&s);
        if hex.len() != 6 {
            return Err(D::Error::custom(format!("invalid hex color: {s}")));
        }
        let parse = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| D::Error::custom(format!("invalid hex color: {s}")))
        };
        Ok(Color32::from_rgb(parse(0)?, parse(2)?, parse(4)?))
    }
}
