use {
    eframe::{
        Frame as EframeFrame, Storage,
        egui::{
            Align2, Area, CentralPanel, Context, Frame, Id, Margin, RichText, ScrollArea,
            SidePanel, Stroke, TopBottomPanel, vec2,
        },
    },
    serde::{Deserialize, Serialize},
    strum::IntoEnumIterator,
};

use crate::{
    Cli,
    chart::{ChartCommand, ChartView, Output},
    config::{PERSISTENCE, plot::PLOT_CONFIG},
    data::{JsonFileStore, Timeframe, TrendlineStore, generate_series},
    models::{OhlcSeries, Trendline},
    ui::{
        CoordinateDisplay, HoldingsTable, MarketStats, OrderEntryPanel, PanelAction,
        PortfolioOverview, TickerState, TrendlineManager, ui_config::UI_CONFIG, ui_text::UI_TEXT,
        utils::setup_custom_visuals,
    },
};

struct Toast {
    text: String,
    expires_at: f64, // egui time, seconds
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    drawing_mode: bool,
    timeframe: Timeframe,

    #[serde(skip)]
    trendlines: Vec<Trendline>,
    #[serde(skip)]
    selected_id: Option<String>,
    #[serde(skip)]
    chart_view: ChartView,
    #[serde(skip)]
    series: OhlcSeries,
    #[serde(skip)]
    store: Box<dyn TrendlineStore>,
    #[serde(skip)]
    toasts: Vec<Toast>,
    #[serde(skip)]
    ticker_state: TickerState,
    #[serde(skip)]
    order_entry: OrderEntryPanel,
}

impl Default for App {
    fn default() -> Self {
        Self {
            drawing_mode: false,
            timeframe: Timeframe::default(),
            trendlines: Vec::new(),
            selected_id: None,
            chart_view: ChartView::default(),
            series: OhlcSeries::default(),
            store: Box::new(JsonFileStore::new(PERSISTENCE.trendlines.file_path)),
            toasts: Vec::new(),
            ticker_state: TickerState::default(),
            order_entry: OrderEntryPanel::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        setup_custom_visuals(&cc.egui_ctx);

        if args.fresh {
            log::info!("--fresh: starting with an empty trendline collection");
        } else {
            match app.store.load() {
                Ok(trendlines) => {
                    log::info!("loaded {} trendline(s)", trendlines.len());
                    app.trendlines = trendlines;
                }
                Err(err) => log::error!("trendline load failed: {err:#}"),
            }
        }

        app.chart_view.interaction.set_drawing_mode(app.drawing_mode);
        app.series = generate_series(app.timeframe);
        app
    }

    /// Applies core commands to the owned collection and turns notices
    /// into toasts. Any mutation rewrites the store.
    fn apply(&mut self, out: Output, ctx: &Context) {
        let mut dirty = false;

        for command in out.commands {
            match command {
                ChartCommand::Add(line) => {
                    self.trendlines.push(line);
                    dirty = true;
                }
                ChartCommand::Update(line) => {
                    if let Some(slot) = self.trendlines.iter_mut().find(|l| l.id == line.id) {
                        *slot = line;
                        dirty = true;
                    }
                }
                ChartCommand::Delete(id) => {
                    let before = self.trendlines.len();
                    self.trendlines.retain(|l| l.id != id);
                    dirty |= self.trendlines.len() != before;
                    if self.selected_id.as_deref() == Some(id.as_str()) {
                        self.selected_id = None;
                    }
                }
                ChartCommand::Select(id) => self.selected_id = id,
            }
        }

        let now = ctx.input(|i| i.time);
        for notice in out.notices {
            log::info!("{}", notice.text);
            self.toasts.push(Toast {
                text: notice.text,
                expires_at: now + PLOT_CONFIG.toast_lifetime_secs,
            });
        }

        if dirty {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.trendlines) {
            log::error!("trendline save failed: {err:#}");
        }
    }

    fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Select(id) => {
                self.selected_id = id.clone();
                self.chart_view.interaction.set_selected(id);
            }
            PanelAction::Delete(id) => {
                self.trendlines.retain(|l| l.id != id);
                self.chart_view.interaction.forget_line(&id);
                if self.selected_id.as_deref() == Some(id.as_str()) {
                    self.selected_id = None;
                }
                self.persist();
            }
            PanelAction::ClearAll => {
                log::info!("clearing {} trendline(s)", self.trendlines.len());
                self.trendlines.clear();
                self.selected_id = None;
                self.chart_view.interaction.reset();
                self.chart_view.interaction.set_drawing_mode(self.drawing_mode);
                self.persist();
            }
        }
    }

    fn render_controls(&mut self, ui: &mut eframe::egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
            ui.separator();

            ui.label(&UI_TEXT.label_timeframe);
            for timeframe in Timeframe::iter() {
                let active = self.timeframe == timeframe;
                if ui.selectable_label(active, timeframe.to_string()).clicked() && !active {
                    self.timeframe = timeframe;
                    self.series = generate_series(timeframe);
                }
            }
            ui.separator();

            let label = if self.drawing_mode {
                RichText::new(&UI_TEXT.drawing_on).color(PLOT_CONFIG.pending_point_color)
            } else {
                RichText::new(&UI_TEXT.drawing_off)
            };
            if ui.selectable_label(self.drawing_mode, label).clicked() {
                self.drawing_mode = !self.drawing_mode;
                self.chart_view.interaction.set_drawing_mode(self.drawing_mode);
            }
            if self.drawing_mode {
                ui.label(RichText::new(&UI_TEXT.drawing_hint).weak());
            }
        });
    }

    fn render_toasts(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.toasts.retain(|t| t.expires_at > now);
        if self.toasts.is_empty() {
            return;
        }

        Area::new(Id::new("notice_toasts"))
            .anchor(Align2::RIGHT_TOP, vec2(-12.0, 48.0))
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    Frame {
                        fill: PLOT_CONFIG.toast_background,
                        stroke: Stroke::new(1.0, PLOT_CONFIG.grid_color),
                        inner_margin: Margin::same(8),
                        ..Default::default()
                    }
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).color(UI_CONFIG.colors.heading));
                    });
                    ui.add_space(4.0);
                }
            });

        // Wake up to expire toasts even when the pointer is still.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut EframeFrame) {
        // No I-beam over labels; nothing here is selectable text.
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        TopBottomPanel::top("controls")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| self.render_controls(ui));

        TopBottomPanel::bottom("ticker_strip")
            .exact_height(crate::config::TICKER.height)
            .frame(Frame::default())
            .show(ctx, |ui| {
                if let Some(symbol) = self.ticker_state.render(ui) {
                    log::info!("ticker click: {symbol}");
                }
            });

        let mut panel_action = None;
        SidePanel::right("side_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(300.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.order_entry.render(ui);
                    ui.separator();

                    let selected = self
                        .selected_id
                        .as_deref()
                        .and_then(|id| self.trendlines.iter().find(|l| l.id == id));
                    CoordinateDisplay.render(ui, selected);
                    ui.separator();

                    panel_action = TrendlineManager.render(
                        ui,
                        &self.trendlines,
                        self.selected_id.as_deref(),
                    );
                });
            });
        if let Some(action) = panel_action {
            self.handle_panel_action(action);
        }

        let mut chart_out = Output::default();
        CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                PortfolioOverview.render(ui);
                ui.separator();
                MarketStats.render(ui);
            });
            ui.add_space(6.0);

            chart_out = self
                .chart_view
                .show(ui, &self.series, &self.trendlines, self.drawing_mode);

            ui.add_space(6.0);
            ScrollArea::vertical().id_salt("holdings_scroll").show(ui, |ui| {
                HoldingsTable.render(ui);
            });
        });
        self.apply(chart_out, ctx);

        self.render_toasts(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
