use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wikisite_core::{DEFAULT_OUTPUT_FILE, HarvestOptions, HarvestProgressCallback, execute_harvest};

/// Filter directives for the stderr log. `verbose` only raises this workspace's crates.
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,wikisite=debug,wikisite_core=debug,wikisite_scraper=debug"
    } else {
        "warn"
    }
}

/// Install the stderr log subscriber.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(log_filter(verbose)))
        .try_init();
}

/// Expand a leading `~` in a path argument
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn harvest_options_from_matches(args: &ArgMatches) -> HarvestOptions {
    let input = args
        .get_one::<String>("INPUT")
        .map(|s| expand_path(s))
        .unwrap_or_default();
    let output = args
        .get_one::<String>("output")
        .map(|s| expand_path(s))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));
    let timeout = args
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs));

    HarvestOptions {
        input,
        output,
        timeout,
        show_progress_bars: !args.get_flag("quiet"),
    }
}

pub async fn handle_harvest(args: &ArgMatches) {
    let options = harvest_options_from_matches(args);

    println!("Reading {}", options.input.display().to_string().bright_white());
    if let Some(timeout) = options.timeout {
        println!("Request timeout: {}s", timeout.as_secs());
    }

    let progress_callback: HarvestProgressCallback = Arc::new(|msg: String| {
        println!("{}", msg);
    });

    match execute_harvest(options, Some(progress_callback)).await {
        Ok(summary) => {
            println!(
                "\n{} {}/{} websites found, written to {}",
                "✓".green().bold(),
                summary.succeeded,
                summary.total,
                summary.output.display().to_string().bright_white()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
