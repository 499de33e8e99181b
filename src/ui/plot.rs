use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{Label, Stroke, Ui};
use egui_plot::{Legend, Plot, Points, Polygon};

use crate::chart::{PieChartSpec, ScatterChartSpec};
use crate::color::{generate_palette, ColorMap};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart regions (central panel)
// ---------------------------------------------------------------------------

/// Render both chart regions stacked in the central panel.
pub fn chart_regions(ui: &mut Ui, state: &AppState) {
    // Split the panel between the two charts, leaving room for the titles.
    let chart_height = ((ui.available_height() - 60.0) / 2.0).max(120.0);

    success_pie(ui, &state.pie, chart_height);
    ui.separator();
    payload_scatter(ui, &state.scatter, &state.booster_colors, chart_height);
}

// ---------------------------------------------------------------------------
// Success pie (upper region)
// ---------------------------------------------------------------------------

/// One renderable slice: a filled unit-circle sector, or a legend-only entry
/// for a zero-value slice.
enum PieSector {
    Filled(Vec<[f64; 2]>),
    LegendOnly,
}

/// Render the success pie chart as polygon sectors on a unit circle.
pub fn success_pie(ui: &mut Ui, spec: &PieChartSpec, height: f32) {
    ui.strong(&spec.title);

    let total: f64 = spec.slices.iter().map(|slice| slice.value).sum();
    if spec.slices.is_empty() || total <= 0.0 {
        let message = if spec.slices.is_empty() {
            "No launches match the current selection."
        } else {
            "No successful launches to chart for this selection."
        };
        ui.add_sized([ui.available_width(), height], Label::new(message));
        return;
    }

    let colors = generate_palette(spec.slices.len());

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for ((name, sector), color) in layout_sectors(spec, total).into_iter().zip(colors) {
                match sector {
                    PieSector::Filled(points) => {
                        plot_ui.polygon(
                            Polygon::new(points)
                                .name(name)
                                .fill_color(color)
                                .stroke(Stroke::new(1.0, color)),
                        );
                    }
                    PieSector::LegendOnly => {
                        // An empty series draws nothing but still gets a
                        // legend entry.
                        let no_points: Vec<[f64; 2]> = Vec::new();
                        plot_ui.points(Points::new(no_points).name(name).color(color));
                    }
                }
            }
        });
}

/// Lay the slices out as sectors of the unit circle, starting at twelve
/// o'clock and sweeping clockwise.  Every slice keeps its place and its
/// legend label; zero-value slices get no sector geometry.
fn layout_sectors(spec: &PieChartSpec, total: f64) -> Vec<(String, PieSector)> {
    let mut sectors = Vec::with_capacity(spec.slices.len());
    let mut start = 0.0_f64;
    for slice in &spec.slices {
        let fraction = slice.value / total;
        let name = format!("{} ({})", slice.label, slice.value);
        let sector = if fraction > 0.0 {
            PieSector::Filled(sector_points(start, start + fraction))
        } else {
            PieSector::LegendOnly
        };
        sectors.push((name, sector));
        start += fraction;
    }
    sectors
}

/// Points of one pie sector on the unit circle.
fn sector_points(start_fraction: f64, end_fraction: f64) -> Vec<[f64; 2]> {
    let span = end_fraction - start_fraction;
    // Enough segments to keep even thin slices round.
    let segments = ((span * 96.0).ceil() as usize).max(2);

    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        points.push(rim_point(start_fraction + span * (i as f64 / segments as f64)));
    }
    points
}

/// The point on the unit circle at `fraction` of a full clockwise turn from
/// twelve o'clock.
fn rim_point(fraction: f64) -> [f64; 2] {
    let angle = TAU * (0.25 - fraction);
    [angle.cos(), angle.sin()]
}

// ---------------------------------------------------------------------------
// Payload scatter (lower region)
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter, one point series per booster category.
pub fn payload_scatter(ui: &mut Ui, spec: &ScatterChartSpec, colors: &ColorMap, height: f32) {
    ui.strong(&spec.title);

    if spec.points.is_empty() {
        ui.add_sized(
            [ui.available_width(), height],
            Label::new("No launches match the current selection."),
        );
        return;
    }

    // Group points by category so each booster version is one legend entry.
    let mut by_category: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &spec.points {
        by_category
            .entry(point.booster_category.as_str())
            .or_default()
            .push([point.payload_mass_kg, point.outcome.as_f64()]);
    }

    Plot::new("payload_scatter")
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch outcome")
        .include_y(-0.2)
        .include_y(1.2)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for (category, points) in by_category {
                let series = Points::new(points)
                    .name(category)
                    .color(colors.color_for(category))
                    .radius(4.0);
                plot_ui.points(series);
            }
        });
}
