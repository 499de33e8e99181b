use crate::chart::{derive_payload_scatter, derive_success_pie, PieChartSpec, ScatterChartSpec};
use crate::color::ColorMap;
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The two control values driving both chart derivations.  Owned by the UI
/// layer, passed by value into the derivations, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// Startup defaults: all sites, full payload range.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        SelectionState {
            site: SiteSelection::AllSites,
            payload_range: dataset.payload_bounds.full_range(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state: the immutable dataset, the current selection, and the
/// chart specs most recently derived from them.
///
/// A control change re-derives exactly the chart specs that depend on it
/// (site changes refresh both charts, payload-range changes refresh the
/// scatter only); each derivation runs in full, with no incremental state
/// carried between runs.
pub struct AppState {
    /// Loaded once at startup; never mutated afterwards.
    pub dataset: LaunchDataset,
    pub selection: SelectionState,
    pub pie: PieChartSpec,
    pub scatter: ScatterChartSpec,
    /// Stable booster-category colors for the scatter legend.
    pub booster_colors: ColorMap,
}

impl AppState {
    /// Derive the initial charts from the dataset and default selection.
    pub fn new(dataset: LaunchDataset) -> Self {
        let selection = SelectionState::initial(&dataset);
        let pie = derive_success_pie(&dataset, selection.site);
        let scatter = derive_payload_scatter(&dataset, selection.site, selection.payload_range);
        let booster_colors = ColorMap::new(&dataset.booster_categories);

        AppState {
            dataset,
            selection,
            pie,
            scatter,
            booster_colors,
        }
    }

    /// Site control changed: both charts depend on it.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.selection.site == site {
            return;
        }
        self.selection.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Range control changed: only the scatter depends on it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.selection.payload_range == range {
            return;
        }
        self.selection.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = derive_success_pie(&self.dataset, self.selection.site);
    }

    fn refresh_scatter(&mut self) {
        self.scatter = derive_payload_scatter(
            &self.dataset,
            self.selection.site,
            self.selection.payload_range,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, LaunchSite, Outcome};

    fn dataset() -> LaunchDataset {
        let rec = |site: &str, payload: f64, outcome: Outcome| LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version_category: "FT".to_string(),
        };
        LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 1000.0, Outcome::Success),
            rec("CCAFS LC-40", 2000.0, Outcome::Failure),
            rec("VAFB SLC-4E", 3000.0, Outcome::Success),
        ])
    }

    #[test]
    fn test_initial_state_selects_everything() {
        let state = AppState::new(dataset());

        assert_eq!(state.selection.site, SiteSelection::AllSites);
        assert_eq!(state.selection.payload_range, PayloadRange::new(1000.0, 3000.0));
        assert_eq!(state.pie.slices.len(), 2);
        assert_eq!(state.scatter.points.len(), 3);
    }

    #[test]
    fn test_site_change_refreshes_both_charts() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site(LaunchSite::CcafsLc40));

        assert_eq!(state.pie.title, "Total Success Launches for site CCAFS LC-40");
        assert_eq!(state.pie.slices.len(), 2);
        assert_eq!(
            state.scatter.title,
            "Success count on Payload mass for site CCAFS LC-40"
        );
        assert_eq!(state.scatter.points.len(), 2);
    }

    #[test]
    fn test_range_change_refreshes_only_the_scatter() {
        let mut state = AppState::new(dataset());
        let pie_before = state.pie.clone();

        state.set_payload_range(PayloadRange::new(2500.0, 3000.0));

        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.points.len(), 1);
        assert_eq!(state.scatter.points[0].payload_mass_kg, 3000.0);
    }

    #[test]
    fn test_charts_always_agree_with_the_selection() {
        let mut state = AppState::new(dataset());
        state.set_site(SiteSelection::Site(LaunchSite::VafbSlc4E));
        state.set_payload_range(PayloadRange::new(0.0, 500.0));
        state.set_site(SiteSelection::AllSites);

        assert_eq!(
            state.pie,
            derive_success_pie(&state.dataset, state.selection.site)
        );
        assert_eq!(
            state.scatter,
            derive_payload_scatter(
                &state.dataset,
                state.selection.site,
                state.selection.payload_range
            )
        );
        // The narrowed range survived the later site changes.
        assert!(state.scatter.points.is_empty());
    }
}
