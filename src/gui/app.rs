//! Dashboard window implemented with egui/eframe

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{debug, info};

use super::components::{self, header, search_bar, settings_panel, stats_bar, tiles};
use super::constants::*;
use super::events::dispatch;
use super::theme;
use crate::config::{FileStorage, Section, Theme};
use crate::constants::timing::{CLOCK_TICK, MINUTES_TICK};
use crate::dashboard::Dashboard;
use crate::navigator::BrowserNavigator;
use crate::timers::Ticker;
use crate::view::DisplayState;

struct StartDeckApp {
    dashboard: Dashboard<FileStorage, DisplayState, BrowserNavigator>,
    query: String,
    clock_ticker: Ticker,
    minutes_ticker: Ticker,
    /// Theme and font last pushed to the egui context
    styled: Option<(Theme, String)>,
}

impl StartDeckApp {
    fn new(_cc: &CreationContext<'_>, storage: FileStorage) -> Self {
        info!("Initializing dashboard window");

        let started = Instant::now();
        let mut dashboard = Dashboard::new(storage, DisplayState::default(), BrowserNavigator, started);
        dashboard.tick_clock();

        Self {
            dashboard,
            query: String::new(),
            clock_ticker: Ticker::new(CLOCK_TICK, started),
            minutes_ticker: Ticker::new(MINUTES_TICK, started),
            styled: None,
        }
    }

    fn poll_timers(&mut self) {
        let now = Instant::now();
        if self.clock_ticker.due(now) {
            self.dashboard.tick_clock();
        }
        if self.minutes_ticker.due(now) {
            self.dashboard.tick_minutes(now);
        }
    }

    fn next_tick(&self) -> Duration {
        let now = Instant::now();
        self.clock_ticker
            .remaining(now)
            .min(self.minutes_ticker.remaining(now))
    }

    fn sync_style(&mut self, ctx: &egui::Context) {
        let view = self.dashboard.view();
        let wanted = (view.theme.unwrap_or_default(), view.font.clone());
        if self.styled.as_ref() != Some(&wanted) {
            debug!(theme = %wanted.0.name(), font = %wanted.1, "Restyling window");
            theme::apply_style(ctx, wanted.0, &wanted.1);
            self.styled = Some(wanted);
        }
    }
}

impl eframe::App for StartDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_timers();
        self.sync_style(ctx);

        let mut events = Vec::new();
        let state = self.dashboard.view();
        let query = &mut self.query;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);

                    header::ui(ui, state, state.is_visible(Section::Time), &mut events);
                    ui.add_space(SECTION_SPACING);

                    if state.is_visible(Section::Search) {
                        components::card(state).show(ui, |ui| {
                            search_bar::ui(ui, query, &mut events);
                        });
                        ui.add_space(SECTION_SPACING);
                    }

                    if state.is_visible(Section::Bookmarks) {
                        components::card(state).show(ui, |ui| {
                            tiles::bookmarks(ui, state, &mut events);
                        });
                        ui.add_space(SECTION_SPACING);
                    }

                    if state.is_visible(Section::News) {
                        components::card(state).show(ui, |ui| {
                            tiles::news(ui, state, &mut events);
                        });
                        ui.add_space(SECTION_SPACING);
                    }

                    if state.is_visible(Section::Stats) {
                        components::card(state).show(ui, |ui| {
                            stats_bar::ui(ui, state);
                        });
                    }
                });
            });
        });

        settings_panel::ui(ctx, state, &mut events);

        for event in events {
            dispatch(&mut self.dashboard, &self.query, event);
        }

        ctx.request_repaint_after(self.next_tick());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let stats = self.dashboard.stats();
        info!(clicks = stats.clicks(), searches = stats.searches(), "Dashboard exiting");
    }
}

pub fn run_gui(storage: FileStorage) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(StartDeckApp::new(cc, storage)))),
    )
    .map_err(|err| anyhow!("Failed to launch dashboard window: {err}"))
}
