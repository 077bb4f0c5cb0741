use eframe::egui::{self, ScrollArea};

use crate::callbacks::{CallbackRegistry, ChartId};
use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::model::DatasetStore;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashboardApp {
    store: DatasetStore,
    callbacks: CallbackRegistry,
    config: DashboardConfig,
    /// Booster category colours, fixed for the lifetime of the store.
    colors: ColorMap,
    pub state: AppState,
}

impl LaunchDashboardApp {
    pub fn new(store: DatasetStore, config: DashboardConfig) -> Self {
        let callbacks = CallbackRegistry::dashboard();
        let colors = ColorMap::new(store.booster_categories());
        let state = AppState::new(&store, &callbacks);
        Self {
            store,
            callbacks,
            config,
            colors,
            state,
        }
    }
}

impl eframe::App for LaunchDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu + dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.store, &self.config, &self.state);
        });

        // ---- Central panel: controls and charts, top to bottom ----
        // Figures are refreshed right after the control that feeds them, so
        // a change shows up in the same frame. The top bar was already drawn
        // from the old figures, so ask for one more pass when anything moved.
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::heading(ui, &self.config.window_title);

                    panels::site_dropdown(ui, &self.store, &mut self.state);
                    if self.state.apply_changes(&self.store, &self.callbacks) {
                        ui.ctx().request_repaint();
                    }
                    ui.add_space(8.0);

                    let pie = ChartId::SuccessPieChart;
                    plot::chart(ui, pie, self.state.figure(pie), &self.colors);
                    ui.add_space(8.0);

                    panels::payload_slider(ui, &self.config, &mut self.state);
                    if self.state.apply_changes(&self.store, &self.callbacks) {
                        ui.ctx().request_repaint();
                    }
                    ui.add_space(8.0);

                    let scatter = ChartId::SuccessPayloadScatterChart;
                    plot::chart(ui, scatter, self.state.figure(scatter), &self.colors);
                });
        });
    }
}
