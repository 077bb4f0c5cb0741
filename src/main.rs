mod app;
mod callbacks;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, anyhow};
use app::LaunchDashboardApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // No dashboard without data: a load failure ends the process here.
    let store = data::loader::load(&config.data_path)
        .inspect_err(|e| log::error!("Failed to load launch dataset: {e}"))
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_theme(egui::Theme::Light);
            Ok(Box::new(LaunchDashboardApp::new(store, config)))
        }),
    )
    .map_err(|e| anyhow!("running dashboard window: {e}"))
}
