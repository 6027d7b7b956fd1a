// Input file loading

use crate::error::{HarvestError, Result};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read the first column of every row of a headerless CSV file.
///
/// Rows keep their file order and duplicates are kept. Extra columns are
/// ignored and blank lines are skipped.
pub fn read_urls(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| HarvestError::InputMissing {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut urls = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| HarvestError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(url) = record.get(0) {
            urls.push(url.to_string());
        }
    }

    debug!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}
