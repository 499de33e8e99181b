use eframe::egui::{self, Slider, Ui};

use crate::data::model::{LaunchSite, PayloadRange, SiteSelection, PAYLOAD_MARK_STEP_KG};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – dashboard title and record counts
// ---------------------------------------------------------------------------

/// Render the dashboard header.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.weak(format!(
            "{} launches loaded, {} in the scatter view",
            state.dataset.len(),
            state.scatter.points.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – the two dashboard controls
// ---------------------------------------------------------------------------

/// Render the control panel: site selector and payload range.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    site_selector(ui, state);
    ui.add_space(12.0);
    payload_range_selector(ui, state);
}

/// Dropdown over the fixed option list: `All Sites` plus each known site.
fn site_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch site");

    let current = state.selection.site;
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(
                    current == SiteSelection::AllSites,
                    SiteSelection::AllSites.label(),
                )
                .clicked()
            {
                state.set_site(SiteSelection::AllSites);
            }
            for site in LaunchSite::ALL {
                let option = SiteSelection::Site(site);
                if ui.selectable_label(current == option, site.label()).clicked() {
                    state.set_site(option);
                }
            }
        });
}

/// Min/max slider pair over the dataset's payload bounds, stepping in the
/// same 1000 kg increments as the marks shown beneath.
fn payload_range_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Payload range (kg)");

    let bounds = state.dataset.payload_bounds;
    let (min, max) = (bounds.min_kg as f64, bounds.max_kg as f64);
    let step = PAYLOAD_MARK_STEP_KG as f64;

    let mut low = state.selection.payload_range.low;
    let mut high = state.selection.payload_range.high;

    let low_changed = ui
        .add(
            Slider::new(&mut low, min..=max)
                .step_by(step)
                .fixed_decimals(0)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            Slider::new(&mut high, min..=max)
                .step_by(step)
                .fixed_decimals(0)
                .text("max"),
        )
        .changed();

    if low_changed || high_changed {
        // Keep the interval ordered: the edited end drags the other along.
        if low > high {
            if low_changed {
                high = low;
            } else {
                low = high;
            }
        }
        state.set_payload_range(PayloadRange::new(low, high));
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in bounds.marks() {
            ui.weak(mark.to_string());
        }
    });
}
