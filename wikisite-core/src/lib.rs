use colored::Colorize;

pub mod error;
pub mod harvest;
pub mod input;
pub mod output;

pub use error::{HarvestError, Result};
pub use harvest::{
    HarvestOptions, HarvestProgressCallback, HarvestSummary, display_label, execute_harvest,
    item_status_line,
};
pub use input::read_urls;
pub use output::{DEFAULT_OUTPUT_FILE, OutputRecord, pair_records, write_answers};

pub fn print_banner() {
    println!(
        "{} {}",
        "wikisite".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "company websites from Wikipedia infoboxes".bright_black());
    println!();
}
