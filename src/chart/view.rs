//! Chart renderer and event wiring.
//!
//! One widget: candlesticks, grid, axis labels and trendlines painted
//! onto an allocated canvas, with pointer events translated for the
//! interaction machine. Painting reads state only; every mutation goes
//! out through [`Output`] commands.

use eframe::egui::{
    Align2, Button, Color32, CursorIcon, FontId, Painter, Rect, Sense, Shape, Stroke, Ui, pos2,
    vec2,
};

use crate::config::plot::PLOT_CONFIG;
use crate::models::{OhlcSeries, Trendline, TrendlineStyle};
use crate::utils::epoch_secs_to_date;

use super::interaction::{ChartFrame, Interaction, Output, PointerEvent};
use super::scale::ChartScale;

pub struct ChartView {
    pub interaction: Interaction,
}

impl Default for ChartView {
    fn default() -> Self {
        Self {
            interaction: Interaction::default(),
        }
    }
}

impl ChartView {
    /// Renders one frame and returns the commands the pointer produced.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        series: &OhlcSeries,
        trendlines: &[Trendline],
        drawing_mode: bool,
    ) -> Output {
        let size = vec2(ui.available_width(), PLOT_CONFIG.canvas_height);
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let canvas = response.rect;
        painter.rect_filled(canvas, 4.0, PLOT_CONFIG.canvas_background);

        let m = &PLOT_CONFIG.margins;
        let plot = Rect::from_min_max(
            pos2(canvas.left() + m.left, canvas.top() + m.top),
            pos2(canvas.right() - m.right, canvas.bottom() - m.bottom),
        );
        if plot.width() <= 0.0 || plot.height() <= 0.0 {
            return Output::default();
        }

        let scale = ChartScale::new(series, plot);
        let mut out = Output::default();
        let frame = ChartFrame {
            trendlines,
            scale: &scale,
            drawing_mode,
        };

        let dragging = self.interaction.dragging_id().is_some();
        let pointer = ui.input(|i| i.pointer.interact_pos());
        if let Some(pos) = pointer {
            let (pressed, released) = ui.input(|i| {
                (i.pointer.primary_pressed(), i.pointer.primary_released())
            });
            if pressed && response.hovered() {
                self.interaction
                    .handle_event(PointerEvent::Pressed(pos), &frame, &mut out);
            }
            if canvas.contains(pos) || dragging {
                self.interaction
                    .handle_event(PointerEvent::Moved(pos), &frame, &mut out);
            }
            if released {
                self.interaction
                    .handle_event(PointerEvent::Released(pos), &frame, &mut out);
            }
            if response.double_clicked() {
                self.interaction
                    .handle_event(PointerEvent::DoubleClicked(pos), &frame, &mut out);
            } else if response.clicked() {
                self.interaction
                    .handle_event(PointerEvent::Clicked(pos), &frame, &mut out);
            }
        }

        self.draw_grid(&painter, &plot);
        self.draw_candles(&painter, series, &scale);
        self.draw_axis_labels(&painter, &plot, &scale);
        self.draw_trendlines(&painter, trendlines, &scale);
        self.draw_pending_point(&painter, &scale);
        self.delete_button(ui, trendlines, &scale, &frame, &mut out);

        if response.hovered() || self.interaction.dragging_id().is_some() {
            let cursor = if drawing_mode {
                CursorIcon::Crosshair
            } else {
                self.interaction.cursor()
            };
            ui.ctx().set_cursor_icon(cursor);
        }

        out
    }

    fn draw_grid(&self, painter: &Painter, plot: &Rect) {
        let stroke = Stroke::new(1.0, PLOT_CONFIG.grid_color);
        let dash = PLOT_CONFIG.grid_dash_length;
        let gap = PLOT_CONFIG.grid_gap_length;

        for i in 0..=PLOT_CONFIG.grid_cols {
            let x = plot.left() + plot.width() * i as f32 / PLOT_CONFIG.grid_cols as f32;
            painter.add(Shape::dashed_line(
                &[pos2(x, plot.top()), pos2(x, plot.bottom())],
                stroke,
                dash,
                gap,
            ));
        }
        for i in 0..=PLOT_CONFIG.grid_rows {
            let y = plot.top() + plot.height() * i as f32 / PLOT_CONFIG.grid_rows as f32;
            painter.add(Shape::dashed_line(
                &[pos2(plot.left(), y), pos2(plot.right(), y)],
                stroke,
                dash,
                gap,
            ));
        }
    }

    fn draw_candles(&self, painter: &Painter, series: &OhlcSeries, scale: &ChartScale) {
        if series.is_empty() {
            return;
        }
        let slot = scale.rect.width() / series.len() as f32;
        let body_width = (slot * PLOT_CONFIG.candle_width_pct).max(PLOT_CONFIG.candle_min_width);

        for bar in &series.bars {
            let bullish = bar.close > bar.open;
            let color = if bullish {
                PLOT_CONFIG.candle_bullish_color
            } else {
                PLOT_CONFIG.candle_bearish_color
            };

            let x = scale.rect.left() + scale.time.to_x(bar.time) as f32;
            let y_high = scale.rect.top() + scale.price.to_y(bar.high) as f32;
            let y_low = scale.rect.top() + scale.price.to_y(bar.low) as f32;
            let y_open = scale.rect.top() + scale.price.to_y(bar.open) as f32;
            let y_close = scale.rect.top() + scale.price.to_y(bar.close) as f32;

            painter.line_segment(
                [pos2(x, y_high), pos2(x, y_low)],
                Stroke::new(PLOT_CONFIG.candle_wick_width, color),
            );

            let top = y_open.min(y_close);
            // Doji bars still get a visible sliver of body.
            let height = (y_open - y_close).abs().max(1.0);
            let body = Rect::from_min_size(pos2(x - body_width / 2.0, top), vec2(body_width, height));
            painter.rect_filled(body, 0.0, color);
        }
    }

    fn draw_axis_labels(&self, painter: &Painter, plot: &Rect, scale: &ChartScale) {
        let font = FontId::proportional(11.0);
        let color = PLOT_CONFIG.axis_label_color;

        let (price_min, price_max) = scale.price.bounds();
        for i in 0..=PLOT_CONFIG.grid_rows {
            let frac = i as f64 / PLOT_CONFIG.grid_rows as f64;
            let price = price_min + frac * (price_max - price_min);
            let y = plot.top() + scale.price.to_y(price) as f32;
            painter.text(
                pos2(plot.right() + 6.0, y),
                Align2::LEFT_CENTER,
                format!("{price:.2}"),
                font.clone(),
                color,
            );
        }

        let (time_min, time_max) = scale.time.bounds();
        for i in 0..=PLOT_CONFIG.time_label_divisions {
            let frac = i as f64 / PLOT_CONFIG.time_label_divisions as f64;
            let time = time_min + frac * (time_max - time_min);
            let x = plot.left() + scale.time.to_x(time) as f32;
            painter.text(
                pos2(x, plot.bottom() + 6.0),
                Align2::CENTER_TOP,
                epoch_secs_to_date(time),
                font.clone(),
                color,
            );
        }
    }

    fn draw_trendlines(&self, painter: &Painter, trendlines: &[Trendline], scale: &ChartScale) {
        for line in trendlines {
            let p1 = scale.chart_to_screen(line.start_point);
            let p2 = scale.chart_to_screen(line.end_point);

            let id = line.id.as_str();
            let highlighted = self.interaction.selected_id() == Some(id)
                || self.interaction.hovered_id() == Some(id)
                || self.interaction.dragging_id() == Some(id);
            let width = if highlighted {
                PLOT_CONFIG.highlight_width
            } else {
                line.width
            };
            let stroke = Stroke::new(width, line.color);

            match line.style {
                TrendlineStyle::Solid => {
                    painter.line_segment([p1, p2], stroke);
                }
                TrendlineStyle::Dashed => {
                    painter.add(Shape::dashed_line(&[p1, p2], stroke, 8.0, 5.0));
                }
                TrendlineStyle::Dotted => {
                    painter.add(Shape::dashed_line(&[p1, p2], stroke, 2.0, 4.0));
                }
            }

            if highlighted {
                for p in [p1, p2] {
                    painter.circle(
                        p,
                        PLOT_CONFIG.handle_radius,
                        line.color,
                        Stroke::new(
                            PLOT_CONFIG.handle_stroke_width,
                            PLOT_CONFIG.handle_stroke_color,
                        ),
                    );
                }
            }

            let mid = pos2((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
            painter.text(
                mid + vec2(0.0, -8.0),
                Align2::CENTER_BOTTOM,
                format!("#{}", line.short_id()),
                FontId::proportional(11.0),
                line.color,
            );
        }
    }

    fn draw_pending_point(&self, painter: &Painter, scale: &ChartScale) {
        if let Some(point) = self.interaction.pending_start() {
            painter.circle(
                scale.chart_to_screen(point),
                4.0,
                PLOT_CONFIG.pending_point_color,
                Stroke::new(1.5, Color32::WHITE),
            );
        }
    }

    /// Small delete button floating above the hovered line's midpoint.
    /// Hidden while drawing or dragging so it cannot steal those clicks.
    fn delete_button(
        &mut self,
        ui: &mut Ui,
        trendlines: &[Trendline],
        scale: &ChartScale,
        frame: &ChartFrame<'_>,
        out: &mut Output,
    ) {
        if frame.drawing_mode || self.interaction.dragging_id().is_some() {
            return;
        }
        let Some(line) = self
            .interaction
            .hovered_id()
            .and_then(|id| trendlines.iter().find(|l| l.id == id))
        else {
            return;
        };

        let p1 = scale.chart_to_screen(line.start_point);
        let p2 = scale.chart_to_screen(line.end_point);
        let mid = pos2((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
        let rect = Rect::from_center_size(mid + vec2(0.0, -28.0), vec2(20.0, 20.0));

        if ui.put(rect, Button::new("✕").small()).clicked() {
            self.interaction.delete_hovered(frame, out);
        }
    }
}
