use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};
use rand::Rng;

use crate::config::TICKER;
use crate::ui::utils::format_price;

pub struct TickerItem {
    pub symbol: String,
    pub price: f64,
    pub change: f64, // Since the synthetic "previous close"
}

/// Horizontally scrolling quote strip. Quotes are synthetic, seeded once
/// at startup; the strip exists for the dashboard feel, not for data.
pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    items: Vec<TickerItem>,
    is_hovered: bool,
    is_dragging: bool,
}

impl Default for TickerState {
    fn default() -> Self {
        let mut rng = rand::thread_rng();
        let mut items: Vec<TickerItem> = TICKER
            .symbols
            .iter()
            .map(|symbol| {
                let price = rng.gen_range(40.0..900.0);
                let change = rng.gen_range(-0.03..0.03) * price;
                TickerItem {
                    symbol: symbol.to_string(),
                    price,
                    change,
                }
            })
            .collect();
        for message in TICKER.custom_messages {
            // price 0.0 marks a plain message
            items.push(TickerItem {
                symbol: message.to_string(),
                price: 0.0,
                change: 0.0,
            });
        }
        Self {
            offset: 0.0,
            items,
            is_hovered: false,
            is_dragging: false,
        }
    }
}

impl TickerState {
    fn format_item(item: &TickerItem) -> String {
        if item.price == 0.0 {
            return item.symbol.clone();
        }
        let old_price = item.price - item.change;
        let pct = if old_price.abs() > f64::EPSILON {
            item.change / old_price * 100.0
        } else {
            0.0
        };
        format!(
            "{} {} ({:+.2} / {:+.2}%)",
            item.symbol,
            format_price(item.price),
            item.change,
            pct
        )
    }

    fn item_color(item: &TickerItem) -> Color32 {
        if item.price == 0.0 {
            TICKER.text_color_message
        } else if item.change > f64::EPSILON {
            TICKER.text_color_up
        } else if item.change < -f64::EPSILON {
            TICKER.text_color_down
        } else {
            TICKER.text_color_neutral
        }
    }

    /// Returns the symbol under a click, if any.
    pub fn render(&mut self, ui: &mut Ui) -> Option<String> {
        let rect = ui.available_rect_before_wrap();
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), TICKER.height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            // Drag to scrub
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a lag spike slows the strip instead of teleporting it.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        // Pass 1: total strip width, needed for the wrap point.
        let mut total_width = 0.0;
        for item in &self.items {
            let galley =
                painter.layout_no_wrap(Self::format_item(item), font_id.clone(), Color32::WHITE);
            total_width += galley.size().x + TICKER.item_spacing;
        }
        if total_width < 1.0 {
            return None;
        }

        // Infinite scroll: keep the offset negative-flowing within one strip.
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;
        let mut clicked_symbol = None;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for item in &self.items {
                let color = Self::item_color(item);
                let galley = painter.layout_no_wrap(Self::format_item(item), font_id.clone(), color);
                let w = galley.size().x;
                let h = galley.size().y;

                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let y_snapped = (start_pos.y + (TICKER.height - h) / 2.0).round();
                    let pos = Pos2::new(x_snapped, y_snapped);
                    painter.galley(pos, galley, color);

                    if response.clicked() {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            let item_rect = Rect::from_min_size(pos, Vec2::new(w, TICKER.height));
                            if item_rect.contains(pointer) && item.price != 0.0 {
                                clicked_symbol = Some(item.symbol.clone());
                            }
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating while scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }

        clicked_symbol
    }
}
