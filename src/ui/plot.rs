use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Corner, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::callbacks::ChartId;
use crate::chart::{Figure, PieFigure, ScatterFigure, wedge_outline};
use crate::color::{ColorMap, generate_palette};

const PIE_HEIGHT: f32 = 340.0;
const SCATTER_HEIGHT: f32 = 380.0;
/// Distance of the percentage labels from the pie centre (unit radius).
const LABEL_RADIUS: f64 = 0.65;

// ---------------------------------------------------------------------------
// Chart placeholders (central panel)
// ---------------------------------------------------------------------------

/// Render whatever figure `chart` currently holds.
pub fn chart(ui: &mut Ui, chart: ChartId, figure: Option<&Figure>, colors: &ColorMap) {
    match figure {
        Some(Figure::Pie(pie)) => pie_chart(ui, chart, pie),
        Some(Figure::Scatter(scatter)) => scatter_chart(ui, chart, scatter, colors),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new("No figure").weak());
            });
        }
    }
}

fn title(ui: &mut Ui, text: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(text).strong().size(16.0));
    });
}

fn empty_hint(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("No launches match the current selection").italics().weak());
    });
}

/// Filled wedges with a legend entry and percentage label per slice.
fn pie_chart(ui: &mut Ui, chart: ChartId, pie: &PieFigure) {
    title(ui, &pie.title);
    if pie.is_empty() {
        empty_hint(ui);
    }

    let palette = generate_palette(pie.slices.len());

    Plot::new(chart.id())
        .height(PIE_HEIGHT)
        .data_aspect(1.0)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            for (slice, color) in pie.slices.iter().zip(palette) {
                let name = format!("{} ({})", slice.label, slice.value);

                // Every piece of a split wedge shares the name, so the legend
                // shows the slice once.
                for outline in wedge_outline(slice.start_angle, slice.end_angle, 1.0) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(outline))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::NONE),
                    );
                }

                if slice.fraction > 0.0 {
                    let a = slice.mid_angle();
                    let at = PlotPoint::new(LABEL_RADIUS * a.cos(), LABEL_RADIUS * a.sin());
                    plot_ui.text(
                        Text::new(at, format!("{:.1}%", slice.fraction * 100.0))
                            .color(Color32::WHITE),
                    );
                }
            }
        });
}

/// Payload mass against outcome class, one coloured series per booster
/// version category.
fn scatter_chart(ui: &mut Ui, chart: ChartId, scatter: &ScatterFigure, colors: &ColorMap) {
    title(ui, &scatter.title);
    if scatter.is_empty() {
        empty_hint(ui);
    }

    Plot::new(chart.id())
        .height(SCATTER_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.category)
                    .color(colors.color_for(&series.category))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(5.0);
                plot_ui.points(points);
            }
        });
}
