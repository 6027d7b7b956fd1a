// Answer file writing

use crate::error::{HarvestError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_OUTPUT_FILE: &str = "wikipedia_answers.csv";
pub const HEADER: [&str; 2] = ["wikipedia_page", "website"];

/// One row of the answer file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub wikipedia_page: String,
    pub website: String,
}

/// Pair each page with the website found at the same position.
pub fn pair_records(urls: &[String], websites: &[String]) -> Result<Vec<OutputRecord>> {
    if urls.len() != websites.len() {
        return Err(HarvestError::LengthMismatch {
            urls: urls.len(),
            websites: websites.len(),
        });
    }

    Ok(urls
        .iter()
        .zip(websites)
        .map(|(page, website)| OutputRecord {
            wikipedia_page: page.clone(),
            website: website.clone(),
        })
        .collect())
}

/// Create (or truncate) `path` and write the header plus one row per record.
/// Every field is quoted.
pub fn write_answers(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let file = File::create(path).map_err(|source| create_error(path, source))?;

    let write_error = |source: csv::Error| HarvestError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer.write_record(HEADER).map_err(write_error)?;
    for record in records {
        writer.serialize(record).map_err(write_error)?;
    }
    writer.flush().map_err(|e| write_error(e.into()))?;

    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

fn create_error(path: &Path, source: io::Error) -> HarvestError {
    match source.kind() {
        ErrorKind::PermissionDenied => HarvestError::OutputPermission {
            path: path.to_path_buf(),
            source,
        },
        _ => HarvestError::OutputCreate {
            path: path.to_path_buf(),
            source,
        },
    }
}
