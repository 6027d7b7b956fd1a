use crate::error::Result;
use crate::input::read_urls;
use crate::output::{DEFAULT_OUTPUT_FILE, pair_records, write_answers};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use wikisite_scraper::{ExtractionResult, Extractor};

/// Options for configuring a harvest run
pub struct HarvestOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Per-request timeout. `None` waits for each server indefinitely.
    pub timeout: Option<Duration>,
    pub show_progress_bars: bool,
}

impl HarvestOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timeout: None,
            show_progress_bars: false,
        }
    }
}

/// Counts for a finished run
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub output: PathBuf,
}

/// Callback for human-readable progress lines
pub type HarvestProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Short name for a page: the text after the last `/`.
pub fn display_label(url: &str) -> String {
    match url.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => url.to_string(),
    }
}

/// Progress line for the item at zero-based `index`.
pub fn item_status_line(index: usize, result: &ExtractionResult) -> String {
    let status = if result.is_found() {
        "OK".green().bold()
    } else {
        "ERROR".red().bold()
    };
    format!(
        "\tCompany {} - {}: {}",
        index + 1,
        display_label(&result.url),
        status
    )
}

/// Read the input file, resolve every page, and write the answer file.
///
/// A missing input file aborts before any request is made and nothing is
/// written. Individual page failures only blank that page's website.
pub async fn execute_harvest(
    options: HarvestOptions,
    progress_callback: Option<HarvestProgressCallback>,
) -> Result<HarvestSummary> {
    let HarvestOptions {
        input,
        output,
        timeout,
        show_progress_bars,
    } = options;

    let urls = read_urls(&input)?;
    info!("Loaded {} pages from {}", urls.len(), input.display());
    if let Some(ref callback) = progress_callback {
        callback("\tThe input file has been successfully read.".to_string());
    }

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} [{pos}/{len}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Resolving websites...");
        Some(pb)
    } else {
        None
    };

    let pb_clone = progress_bar.clone();
    let line_callback = progress_callback.clone();
    let internal_progress_callback: wikisite_scraper::ProgressCallback =
        Arc::new(move |index: usize, result: &ExtractionResult| {
            let line = item_status_line(index, result);
            match (&pb_clone, &line_callback) {
                (Some(pb), Some(callback)) => {
                    pb.suspend(|| callback(line));
                    pb.inc(1);
                }
                (Some(pb), None) => pb.inc(1),
                (None, Some(callback)) => callback(line),
                (None, None) => {}
            }
        });

    let extractor = Extractor::with_timeout(timeout)?
        .with_progress_callback(internal_progress_callback);
    let results = extractor.extract_all(&urls).await;

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    let websites: Vec<String> = results
        .iter()
        .map(|r| r.website_or_empty().to_string())
        .collect();
    let records = pair_records(&urls, &websites)?;
    write_answers(&output, &records)?;

    if let Some(ref callback) = progress_callback {
        callback("\tThe output file has been successfully created.".to_string());
    }

    let succeeded = results.iter().filter(|r| r.is_found()).count();
    info!(
        "Wrote {} rows ({} websites found) to {}",
        records.len(),
        succeeded,
        output.display()
    );

    Ok(HarvestSummary {
        total: records.len(),
        succeeded,
        failed: records.len() - succeeded,
        output,
    })
}
