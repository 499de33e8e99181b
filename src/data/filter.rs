use super::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Row selection predicates
// ---------------------------------------------------------------------------

/// Indices of records inside the payload interval that also match the site
/// selection.  This is the scatter chart's view of the dataset.
///
/// Selection is non-destructive: the dataset is never copied or reordered,
/// and an inverted interval simply selects no rows.
pub fn filtered_indices(
    dataset: &LaunchDataset,
    site: SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.payload_mass_kg) && site.matches(&rec.launch_site))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records matching the site selection alone.  This is the pie
/// chart's view: the payload range never affects it.
pub fn site_indices(dataset: &LaunchDataset, site: SiteSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| site.matches(&rec.launch_site))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, LaunchSite, Outcome};

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version_category: "FT".to_string(),
        }
    }

    fn sample_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("CCAFS LC-40", 500.0, Outcome::Failure),
            rec("CCAFS LC-40", 2500.0, Outcome::Success),
            rec("VAFB SLC-4E", 4000.0, Outcome::Success),
            rec("CCAFS SLC-40", 4000.0, Outcome::Failure),
            rec("KSC LC-39A", 9600.0, Outcome::Success),
        ])
    }

    #[test]
    fn test_filter_is_exact_over_both_predicates() {
        let dataset = sample_dataset();
        let site = SiteSelection::Site(LaunchSite::CcafsLc40);
        let range = PayloadRange::new(0.0, 3000.0);

        let indices = filtered_indices(&dataset, site, range);

        let expected: Vec<usize> = dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                r.launch_site == "CCAFS LC-40" && (0.0..=3000.0).contains(&r.payload_mass_kg)
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(indices, expected);
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_all_sites_with_full_range_keeps_every_row() {
        let dataset = sample_dataset();
        let range = dataset.payload_bounds.full_range();
        let indices = filtered_indices(&dataset, SiteSelection::AllSites, range);
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_range_endpoints_are_included() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(500.0, 4000.0);
        let indices = filtered_indices(&dataset, SiteSelection::AllSites, range);
        // 500 and both 4000s sit exactly on the interval ends.
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_inverted_range_selects_nothing() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(4000.0, 500.0);
        assert!(filtered_indices(&dataset, SiteSelection::AllSites, range).is_empty());
    }

    #[test]
    fn test_site_absent_from_data_selects_nothing() {
        // The dataset holds "KSC LC-39A"; the selector offers "KSC SC-39A".
        let dataset = sample_dataset();
        let site = SiteSelection::Site(LaunchSite::KscSc39A);
        assert!(site_indices(&dataset, site).is_empty());
        assert!(
            filtered_indices(&dataset, site, dataset.payload_bounds.full_range()).is_empty()
        );
    }

    #[test]
    fn test_site_indices_ignore_payload() {
        let dataset = sample_dataset();
        let site = SiteSelection::Site(LaunchSite::CcafsLc40);
        assert_eq!(site_indices(&dataset, site), vec![0, 1]);
    }
}
