//! Dashboard panels around the chart. Presentation only: the holdings,
//! portfolio and market numbers are canned demo data, and every mutation
//! a panel wants is returned as a [`PanelAction`] for the app to apply.

use eframe::egui::{
    Button, Color32, DragValue, Grid, RichText, ScrollArea, Sense, TextEdit, Ui, vec2,
};

use crate::config::plot::PLOT_CONFIG;
use crate::models::Trendline;
use crate::ui::ui_text::{ICON_DELETE, UI_TEXT};
use crate::ui::utils::{format_change, format_price};
use crate::utils::epoch_secs_to_date;

#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    Select(Option<String>),
    Delete(String),
    ClearAll,
}

struct Holding {
    symbol: &'static str,
    shares: f64,
    avg_cost: f64,
    price: f64,
}

const HOLDINGS: &[Holding] = &[
    Holding { symbol: "AAPL", shares: 50.0, avg_cost: 180.25, price: 192.40 },
    Holding { symbol: "MSFT", shares: 20.0, avg_cost: 395.10, price: 410.22 },
    Holding { symbol: "NVDA", shares: 12.0, avg_cost: 720.00, price: 880.15 },
    Holding { symbol: "TSLA", shares: 30.0, avg_cost: 245.80, price: 232.10 },
];

const CASH_BALANCE: f64 = 45_231.10;

fn pnl_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_profit
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub struct PortfolioOverview;

impl PortfolioOverview {
    pub fn render(&self, ui: &mut Ui) {
        let positions: f64 = HOLDINGS.iter().map(|h| h.shares * h.price).sum();
        let cost: f64 = HOLDINGS.iter().map(|h| h.shares * h.avg_cost).sum();
        let total = positions + CASH_BALANCE;
        let day_change = positions - cost;

        ui.heading(&UI_TEXT.portfolio_heading);
        Grid::new("portfolio_grid").num_columns(2).show(ui, |ui| {
            ui.label(&UI_TEXT.portfolio_value);
            ui.label(RichText::new(format_price(total)).strong());
            ui.end_row();

            ui.label(&UI_TEXT.portfolio_day_change);
            ui.label(
                RichText::new(format_change(day_change, cost)).color(pnl_color(day_change)),
            );
            ui.end_row();

            ui.label(&UI_TEXT.portfolio_buying_power);
            ui.label(format_price(CASH_BALANCE));
            ui.end_row();
        });
    }
}

pub struct MarketStats;

impl MarketStats {
    pub fn render(&self, ui: &mut Ui) {
        const STATS: &[(&str, f64, f64)] = &[
            ("S&P 500", 5432.10, 0.42),
            ("NASDAQ", 17210.55, -0.18),
            ("DOW", 39118.86, 0.12),
            ("VIX", 13.22, -2.10),
        ];

        ui.heading(&UI_TEXT.market_heading);
        ui.horizontal_wrapped(|ui| {
            for (name, value, pct) in STATS {
                ui.label(format!("{name} {value:.2}"));
                ui.label(
                    RichText::new(format!("{pct:+.2}%")).color(pnl_color(*pct)),
                );
                ui.add_space(12.0);
            }
        });
    }
}

/// Order ticket. Inputs are live widgets, the buttons just log.
pub struct OrderEntryPanel {
    symbol: String,
    quantity: u32,
}

impl Default for OrderEntryPanel {
    fn default() -> Self {
        Self {
            symbol: "DEMO".to_string(),
            quantity: 10,
        }
    }
}

impl OrderEntryPanel {
    pub fn render(&mut self, ui: &mut Ui) {
        ui.heading(&UI_TEXT.order_heading);
        Grid::new("order_grid").num_columns(2).show(ui, |ui| {
            ui.label(&UI_TEXT.order_symbol);
            ui.add(TextEdit::singleline(&mut self.symbol).desired_width(80.0));
            ui.end_row();

            ui.label(&UI_TEXT.order_quantity);
            ui.add(DragValue::new(&mut self.quantity).range(1..=10_000));
            ui.end_row();
        });

        ui.horizontal(|ui| {
            let buy = Button::new(RichText::new(&UI_TEXT.order_buy).color(Color32::BLACK))
                .fill(PLOT_CONFIG.candle_bullish_color);
            let sell = Button::new(RichText::new(&UI_TEXT.order_sell).color(Color32::BLACK))
                .fill(PLOT_CONFIG.candle_bearish_color);
            if ui.add(buy).clicked() {
                log::info!("demo buy: {} x{}", self.symbol, self.quantity);
            }
            if ui.add(sell).clicked() {
                log::info!("demo sell: {} x{}", self.symbol, self.quantity);
            }
        });
        ui.small(&UI_TEXT.order_disclaimer);
    }
}

pub struct HoldingsTable;

impl HoldingsTable {
    pub fn render(&self, ui: &mut Ui) {
        ui.heading(&UI_TEXT.holdings_heading);
        Grid::new("holdings_grid")
            .striped(true)
            .num_columns(5)
            .show(ui, |ui| {
                ui.label(RichText::new(&UI_TEXT.holdings_symbol).strong());
                ui.label(RichText::new(&UI_TEXT.holdings_shares).strong());
                ui.label(RichText::new(&UI_TEXT.holdings_avg_cost).strong());
                ui.label(RichText::new(&UI_TEXT.holdings_price).strong());
                ui.label(RichText::new(&UI_TEXT.holdings_pnl).strong());
                ui.end_row();

                for holding in HOLDINGS {
                    let pnl = holding.shares * (holding.price - holding.avg_cost);
                    ui.label(holding.symbol);
                    ui.label(format!("{:.0}", holding.shares));
                    ui.label(format_price(holding.avg_cost));
                    ui.label(format_price(holding.price));
                    ui.label(RichText::new(format!("{pnl:+.2}")).color(pnl_color(pnl)));
                    ui.end_row();
                }
            });
    }
}

pub struct TrendlineManager;

impl TrendlineManager {
    pub fn render(
        &self,
        ui: &mut Ui,
        trendlines: &[Trendline],
        selected_id: Option<&str>,
    ) -> Option<PanelAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(&UI_TEXT.tm_heading);
            ui.label(RichText::new(format!("({})", trendlines.len())).weak());
            if !trendlines.is_empty() && ui.small_button(&UI_TEXT.clear_all).clicked() {
                action = Some(PanelAction::ClearAll);
            }
        });

        if trendlines.is_empty() {
            ui.label(RichText::new(&UI_TEXT.tm_empty).weak());
            return action;
        }

        ScrollArea::vertical()
            .id_salt("trendline_manager")
            .max_height(220.0)
            .show(ui, |ui| {
                for line in trendlines {
                    ui.horizontal(|ui| {
                        let (swatch, painter) = ui.allocate_painter(vec2(10.0, 10.0), Sense::hover());
                        painter.rect_filled(swatch.rect, 2.0, line.color);

                        let selected = selected_id == Some(line.id.as_str());
                        let label = format!(
                            "#{}  {} → {}",
                            line.short_id(),
                            epoch_secs_to_date(line.start_point.time),
                            epoch_secs_to_date(line.end_point.time),
                        );
                        if ui.selectable_label(selected, label).clicked() {
                            action = Some(PanelAction::Select(if selected {
                                None
                            } else {
                                Some(line.id.clone())
                            }));
                        }

                        let change = line.price_change();
                        ui.label(
                            RichText::new(format!("{change:+.2}")).color(pnl_color(change)),
                        );

                        if ui.small_button(ICON_DELETE).clicked() {
                            action = Some(PanelAction::Delete(line.id.clone()));
                        }
                    });
                }
            });

        action
    }
}

pub struct CoordinateDisplay;

impl CoordinateDisplay {
    pub fn render(&self, ui: &mut Ui, selected: Option<&Trendline>) {
        ui.heading(&UI_TEXT.cd_heading);
        let Some(line) = selected else {
            ui.label(RichText::new(&UI_TEXT.cd_empty).weak());
            return;
        };

        let direction = if line.is_bullish() {
            RichText::new(&UI_TEXT.tm_bullish).color(PLOT_CONFIG.color_profit)
        } else {
            RichText::new(&UI_TEXT.tm_bearish).color(PLOT_CONFIG.color_loss)
        };

        Grid::new("coordinate_grid").num_columns(2).show(ui, |ui| {
            ui.label(&UI_TEXT.cd_start);
            ui.label(format!(
                "{} @ {}",
                epoch_secs_to_date(line.start_point.time),
                format_price(line.start_point.price)
            ));
            ui.end_row();

            ui.label(&UI_TEXT.cd_end);
            ui.label(format!(
                "{} @ {}",
                epoch_secs_to_date(line.end_point.time),
                format_price(line.end_point.price)
            ));
            ui.end_row();

            ui.label(&UI_TEXT.cd_change);
            ui.label(
                RichText::new(format!("{:+.2}", line.price_change()))
                    .color(pnl_color(line.price_change())),
            );
            ui.end_row();
        });
        ui.label(direction);
    }
}
