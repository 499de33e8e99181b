use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the binary launch result
// ---------------------------------------------------------------------------

/// Launch outcome as recorded in the dataset's `class` column
/// (0 = failure, 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse a `class` value; anything outside {0, 1} is rejected.
    pub fn from_class(class: u8) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric value for the scatter y-axis.
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Slice label for the single-site pie chart.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Launch sites – the fixed selector option list
// ---------------------------------------------------------------------------

/// The fixed set of sites offered by the site selector.
///
/// This is the dashboard's option list, not an index of the dataset: rows
/// whose site string matches none of these labels are reachable only through
/// the all-sites view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchSite {
    CcafsLc40,
    VafbSlc4E,
    KscSc39A,
    CcafsSlc40,
}

impl LaunchSite {
    /// All selectable sites, in dropdown order.
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4E,
        LaunchSite::KscSc39A,
        LaunchSite::CcafsSlc40,
    ];

    /// The option label, compared verbatim against `LaunchRecord::launch_site`.
    pub fn label(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4E => "VAFB SLC-4E",
            LaunchSite::KscSc39A => "KSC SC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Site selector state: the all-sites sentinel or one fixed site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Whether a record launched from `site_name` passes this selection.
    pub fn matches(self, site_name: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(site) => site.label() == site_name,
        }
    }

    /// Selector label, also used in chart titles.
    pub fn label(self) -> &'static str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(site) => site.label(),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range – the closed interval selected by the range control
// ---------------------------------------------------------------------------

/// Closed payload interval `[low, high]` in kg.
///
/// An inverted interval (`low > high`) is not producible by a well-behaved
/// range control but is tolerated everywhere as the empty interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(self, payload_kg: f64) -> bool {
        payload_kg >= self.low && payload_kg <= self.high
    }

    /// True when the interval selects no payload at all.
    pub fn is_empty(self) -> bool {
        self.low > self.high
    }
}

// ---------------------------------------------------------------------------
// Payload bounds – global min/max bookkeeping for the range control
// ---------------------------------------------------------------------------

/// Kilogram step between the range control's marks and slider stops.
pub const PAYLOAD_MARK_STEP_KG: i64 = 1000;

/// Integer-truncated global payload bounds, computed once per dataset.
/// They bound the selectable range and seed its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadBounds {
    pub min_kg: i64,
    pub max_kg: i64,
}

impl PayloadBounds {
    fn from_records(records: &[LaunchRecord]) -> Self {
        if records.is_empty() {
            return PayloadBounds { min_kg: 0, max_kg: 0 };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for rec in records {
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);
        }
        PayloadBounds {
            min_kg: min as i64,
            max_kg: max as i64,
        }
    }

    /// Mark labels for the range control: every 1000 kg starting at the
    /// minimum, keeping each step that does not exceed the maximum.
    pub fn marks(self) -> Vec<i64> {
        (self.min_kg..=self.max_kg)
            .step_by(PAYLOAD_MARK_STEP_KG as usize)
            .collect()
    }

    /// The default selection covering the whole dataset.
    pub fn full_range(self) -> PayloadRange {
        PayloadRange::new(self.min_kg as f64, self.max_kg as f64)
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Site name exactly as loaded.
    pub launch_site: String,
    /// Non-negative finite payload mass.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Used only for scatter color grouping.
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, immutable after loading, with bookkeeping computed once.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct site names present in the data (these may differ from
    /// the fixed selector list).
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
    /// Global payload bounds for the range control.
    pub payload_bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Build the dataset and its derived bookkeeping from loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: BTreeSet<String> = BTreeSet::new();
        let mut booster_categories: BTreeSet<String> = BTreeSet::new();
        for rec in &records {
            sites.insert(rec.launch_site.clone());
            booster_categories.insert(rec.booster_version_category.clone());
        }
        let payload_bounds = PayloadBounds::from_records(&records);

        LaunchDataset {
            records,
            sites: sites.into_iter().collect(),
            booster_categories: booster_categories.into_iter().collect(),
            payload_bounds,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version_category: "FT".to_string(),
        }
    }

    #[test]
    fn test_bounds_are_integer_truncated() {
        let dataset = LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 362.9, Outcome::Success),
            rec("CCAFS LC-40", 9600.7, Outcome::Failure),
        ]);
        assert_eq!(dataset.payload_bounds.min_kg, 362);
        assert_eq!(dataset.payload_bounds.max_kg, 9600);
    }

    #[test]
    fn test_bounds_of_empty_dataset_collapse_to_zero() {
        let dataset = LaunchDataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(
            dataset.payload_bounds,
            PayloadBounds { min_kg: 0, max_kg: 0 }
        );
    }

    #[test]
    fn test_marks_step_in_fixed_increments_from_minimum() {
        let bounds = PayloadBounds {
            min_kg: 0,
            max_kg: 9600,
        };
        let marks = bounds.marks();
        assert_eq!(marks.len(), 10);
        assert_eq!(marks.first(), Some(&0));
        // 9600 is not aligned to the step, so the last mark stays at 9000.
        assert_eq!(marks.last(), Some(&9000));
    }

    #[test]
    fn test_marks_include_aligned_maximum() {
        let bounds = PayloadBounds {
            min_kg: 2500,
            max_kg: 5500,
        };
        assert_eq!(bounds.marks(), vec![2500, 3500, 4500, 5500]);
    }

    #[test]
    fn test_marks_of_degenerate_bounds() {
        let bounds = PayloadBounds {
            min_kg: 500,
            max_kg: 500,
        };
        assert_eq!(bounds.marks(), vec![500]);
    }

    #[test]
    fn test_full_range_spans_the_bounds() {
        let bounds = PayloadBounds {
            min_kg: 300,
            max_kg: 9600,
        };
        let range = bounds.full_range();
        assert_eq!(range, PayloadRange::new(300.0, 9600.0));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_payload_range_is_inclusive_on_both_ends() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_inverted_payload_range_contains_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_empty());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(5000.0));
        assert!(!range.contains(1000.0));
    }

    #[test]
    fn test_site_selection_matching() {
        assert!(SiteSelection::AllSites.matches("CCAFS LC-40"));
        assert!(SiteSelection::AllSites.matches("somewhere else entirely"));

        let selection = SiteSelection::Site(LaunchSite::VafbSlc4E);
        assert!(selection.matches("VAFB SLC-4E"));
        assert!(!selection.matches("CCAFS LC-40"));
        assert!(!selection.matches("vafb slc-4e"));
    }

    #[test]
    fn test_dataset_collects_sorted_distinct_sites_and_categories() {
        let mut records = vec![
            rec("VAFB SLC-4E", 500.0, Outcome::Success),
            rec("CCAFS LC-40", 600.0, Outcome::Failure),
            rec("CCAFS LC-40", 700.0, Outcome::Success),
        ];
        records[0].booster_version_category = "v1.0".to_string();
        let dataset = LaunchDataset::from_records(records);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(dataset.booster_categories, vec!["FT", "v1.0"]);
    }

    #[test]
    fn test_outcome_parsing_rejects_anything_but_zero_or_one() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(255), None);
    }
}
