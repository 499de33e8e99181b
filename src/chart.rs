use std::collections::BTreeMap;

use crate::data::filter::{filtered_indices, site_indices};
use crate::data::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Chart specifications – rendering-agnostic chart descriptions
// ---------------------------------------------------------------------------

/// One pie slice: a label and its non-negative value.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// Abstract pie chart.  Zero slices is a valid chart, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// One scatter point: payload on x, outcome on y, booster category as the
/// color-grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

/// Abstract scatter chart.  Zero points is a valid chart, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Pie derivation
// ---------------------------------------------------------------------------

/// Derive the success pie chart for the current site selection.
///
/// * All sites: one slice per site present in the data, ordered by site name,
///   sized by that site's success count.  Sites without a single success keep
///   a zero-sized slice so every site stays represented.
/// * Single site: one slice per outcome present among that site's launches,
///   sized by row count.
///
/// Purely derived from its inputs; the payload range plays no part here, and
/// an empty restriction yields a chart with zero slices.
pub fn derive_success_pie(dataset: &LaunchDataset, site: SiteSelection) -> PieChartSpec {
    match site {
        SiteSelection::AllSites => {
            let mut successes_by_site: BTreeMap<&str, f64> = BTreeMap::new();
            for rec in &dataset.records {
                let successes = successes_by_site.entry(rec.launch_site.as_str()).or_insert(0.0);
                if rec.outcome.is_success() {
                    *successes += 1.0;
                }
            }

            PieChartSpec {
                title: "Launch Success Counts".to_string(),
                slices: successes_by_site
                    .into_iter()
                    .map(|(site_name, value)| PieSlice {
                        label: site_name.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(selected) => {
            let mut counts = [0usize; 2]; // failures, successes
            for idx in site_indices(dataset, site) {
                match dataset.records[idx].outcome {
                    Outcome::Failure => counts[0] += 1,
                    Outcome::Success => counts[1] += 1,
                }
            }

            let slices = [Outcome::Failure, Outcome::Success]
                .into_iter()
                .zip(counts)
                .filter(|(_, count)| *count > 0)
                .map(|(outcome, count)| PieSlice {
                    label: outcome.to_string(),
                    value: count as f64,
                })
                .collect();

            PieChartSpec {
                title: format!("Total Success Launches for site {selected}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter derivation
// ---------------------------------------------------------------------------

/// Derive the payload/outcome scatter chart: payload-range filter first, then
/// the site filter, one point per surviving row.  An empty result yields a
/// chart with zero points.
pub fn derive_payload_scatter(
    dataset: &LaunchDataset,
    site: SiteSelection,
    range: PayloadRange,
) -> ScatterChartSpec {
    let points = filtered_indices(dataset, site, range)
        .into_iter()
        .map(|idx| {
            let rec = &dataset.records[idx];
            ScatterPoint {
                payload_mass_kg: rec.payload_mass_kg,
                outcome: rec.outcome,
                booster_category: rec.booster_version_category.clone(),
            }
        })
        .collect();

    let title = match site {
        SiteSelection::AllSites => "Success count on Payload mass for all sites".to_string(),
        SiteSelection::Site(selected) => {
            format!("Success count on Payload mass for site {selected}")
        }
    };

    ScatterChartSpec { title, points }
}
