use std::path::PathBuf;
use thiserror::Error;
use wikisite_scraper::ScrapeError;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Cannot open input file '{}': {source}", .path.display())]
    InputMissing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input file '{}': {source}", .path.display())]
    InputRead { path: PathBuf, source: csv::Error },

    #[error("Permission error to file '{}'!", .path.display())]
    OutputPermission {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output file '{}': {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{}': {source}", .path.display())]
    OutputWrite { path: PathBuf, source: csv::Error },

    #[error("Cannot pair {urls} pages with {websites} websites")]
    LengthMismatch { urls: usize, websites: usize },

    #[error("Extractor setup failed: {0}")]
    Scraper(#[from] ScrapeError),
}

pub type Result<T> = std::result::Result<T, HarvestError>;
