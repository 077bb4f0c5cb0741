use eframe::egui::{self, Color32, RichText, TextEdit, Ui};

use crate::callbacks::{ChartId, ControlId};
use crate::chart::Figure;
use crate::config::DashboardConfig;
use crate::data::model::{DatasetStore, SiteOption};
use crate::state::AppState;
use crate::ui::range_slider::RangeSlider;

const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, store: &DatasetStore, config: &DashboardConfig, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches from {}, {} sites, payload {}–{} kg",
            store.record_count(),
            config.data_path.display(),
            store.sites().len() - 1,
            store.min_payload(),
            store.max_payload()
        ));

        ui.separator();

        if let Some(Figure::Scatter(scatter)) = state.figure(ChartId::SuccessPayloadScatterChart) {
            ui.label(format!("{} points shown", scatter.point_count()));
        }

        if store.max_payload() > config.slider.max {
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "Payloads above {} kg are outside the slider range",
                    config.slider.max
                ))
                .color(Color32::DARK_RED),
            );
        }
    });
}

/// Dashboard heading above the controls.
pub fn heading(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(title).size(40.0).color(TITLE_COLOR));
    });
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Searchable launch site selector (`site-dropdown`).
pub fn site_dropdown(ui: &mut Ui, store: &DatasetStore, state: &mut AppState) {
    let mut chosen: Option<SiteOption> = None;
    let current = state.selection.site.clone();
    let search = &mut state.site_search;

    egui::ComboBox::from_id_salt(ControlId::SiteDropdown.id())
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(TextEdit::singleline(search).hint_text("Select a Launch Site here"));
            let needle = search.to_lowercase();

            for option in store.sites() {
                if !needle.is_empty() && !option.label().to_lowercase().contains(&needle) {
                    continue;
                }
                if ui
                    .selectable_label(*option == current, option.label())
                    .clicked()
                {
                    chosen = Some(option.clone());
                }
            }
        });

    if let Some(site) = chosen {
        state.site_search.clear();
        state.select_site(site);
    }
}

/// Payload range selector (`payload-slider`).
pub fn payload_slider(ui: &mut Ui, config: &DashboardConfig, state: &mut AppState) {
    ui.label("Payload range (Kg):");

    let mut range = state.selection.payload;
    let response = ui.add(RangeSlider::new(&mut range, config.slider));
    if response.changed() {
        state.set_payload(range);
    }

    ui.label(
        RichText::new(format!("{} – {} kg", range.low(), range.high())).weak(),
    );
}
