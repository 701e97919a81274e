use std::path::Path;

use serde::Deserialize;

use super::error::DataError;
use super::model::{parse_timestamp, Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Columns the rig export must carry, by exact header name.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Date_Time",
    "AQ Press [mbar]",
    "Oil Press [mbar]",
    "Droplet Dia From Area [um]",
];

/// Load a measurement CSV from disk.
pub fn load_path(path: &Path) -> Result<Dataset, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes)
}

/// Load a measurement CSV from raw bytes (dropped-file uploads arrive here
/// without ever touching disk).
///
/// The header is checked for the required columns before any row is parsed,
/// so a missing column reports as a schema problem rather than a row error.
/// A single unparseable row fails the whole load; there is no partial
/// success.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset, DataError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers().map_err(|e| DataError::Parse {
        row: 0,
        message: e.to_string(),
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::Schema { column });
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| DataError::Parse {
            row,
            message: e.to_string(),
        })?;
        let timestamp = parse_timestamp(&raw.date_time).map_err(|e| DataError::Parse {
            row,
            message: format!("invalid Date_Time '{}': {e}", raw.date_time),
        })?;
        records.push(Record {
            timestamp,
            aq_press: raw.aq_press,
            oil_press: raw.oil_press,
            droplet_dia: raw.droplet_dia,
        });
    }

    Ok(Dataset { records })
}

/// Names of the `.csv` files in `dir`, sorted, for the file selector.
pub fn list_csv_files(dir: &Path) -> Result<Vec<String>, DataError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

// ---------------------------------------------------------------------------
// CSV row shape
// ---------------------------------------------------------------------------

/// Raw CSV row as serde sees it. Extra columns in the file are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date_Time")]
    date_time: String,
    #[serde(rename = "AQ Press [mbar]")]
    aq_press: f64,
    #[serde(rename = "Oil Press [mbar]")]
    oil_press: f64,
    #[serde(rename = "Droplet Dia From Area [um]")]
    droplet_dia: f64,
}
