use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use thiserror::Error;
use zip::ZipArchive;

use super::model::Listing;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Failures specific to dataset ingestion.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("zip archive contains no .csv entry")]
    NoCsvEntry,
}

/// Load a listings dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` – plain delimited text with a header row
/// * `.gz`  – gzip-compressed CSV (e.g. `listings.csv.gz`)
/// * `.zip` – archive whose first `.csv` entry is read
///
/// Any ingestion failure is fatal to the run: there are no partial loads.
pub fn load_file(path: &Path) -> Result<Vec<Listing>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "gz" => load_gz(path),
        "zip" => load_zip(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV decoding (shared by all three encodings)
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; every cell is kept as raw text.
/// Numeric coercion happens later, per pipeline pass, in the model layer.
fn read_records<R: Read>(reader: R) -> Result<Vec<Listing>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut listings = Vec::new();

    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, cell)| (h.clone(), cell.to_string()))
            .collect();

        listings.push(Listing::new(fields));
    }

    Ok(listings)
}

fn load_csv(path: &Path) -> Result<Vec<Listing>> {
    let file = File::open(path).context("opening CSV file")?;
    read_records(file)
}

// ---------------------------------------------------------------------------
// Compressed encodings
// ---------------------------------------------------------------------------

fn load_gz(path: &Path) -> Result<Vec<Listing>> {
    let file = File::open(path).context("opening gzip file")?;
    read_records(GzDecoder::new(file)).context("decoding gzip stream")
}

/// Read the first `.csv` entry of a zip archive; other entries are ignored.
fn load_zip(path: &Path) -> Result<Vec<Listing>> {
    let file = File::open(path).context("opening zip archive")?;
    let mut archive = ZipArchive::new(file).context("reading zip archive")?;

    let csv_name = archive
        .file_names()
        .find(|name| name.to_ascii_lowercase().ends_with(".csv"))
        .map(str::to_string)
        .ok_or(LoadError::NoCsvEntry)?;

    let entry = archive
        .by_name(&csv_name)
        .with_context(|| format!("reading zip entry '{csv_name}'"))?;
    read_records(entry)
}
