use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while loading the launch dataset.  All are fatal at
/// startup: the dashboard never runs without a well-formed dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: u8 },

    #[error("row {row}: payload mass must be a non-negative finite number, got {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as serde sees it.  Extra columns (flight number, full booster
/// version, ...) are ignored; a missing required column fails the whole load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    outcome_class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Load the launch dataset from a CSV file.
///
/// Required columns: `Launch Site`, `Payload Mass (kg)`, `class`,
/// `Booster Version Category`.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, DatasetError> {
    let reader = csv::Reader::from_path(path)?;
    read_records(reader)
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<LaunchDataset, DatasetError> {
    let mut records = Vec::new();

    for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result?;

        let outcome = Outcome::from_class(raw.outcome_class).ok_or(DatasetError::InvalidOutcome {
            row,
            value: raw.outcome_class,
        })?;
        if !raw.payload_mass_kg.is_finite() || raw.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                row,
                value: raw.payload_mass_kg,
            });
        }

        records.push(LaunchRecord {
            launch_site: raw.launch_site,
            payload_mass_kg: raw.payload_mass_kg,
            outcome,
            booster_version_category: raw.booster_version_category,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}
