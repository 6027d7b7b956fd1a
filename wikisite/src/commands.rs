use crate::CLAP_STYLING;
use clap::arg;
use wikisite_core::DEFAULT_OUTPUT_FILE;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("wikisite")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("wikisite")
        .about(
            "Reads Wikipedia page URLs from the first column of a CSV file and writes the \
            company website found in each page's infobox.",
        )
        .styles(CLAP_STYLING)
        .arg(
            arg!(<INPUT>)
                .required(true)
                .help("CSV file with one Wikipedia page URL per row (first column, no header)"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the answers")
                .default_value(DEFAULT_OUTPUT_FILE),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Per-request timeout in seconds, at least 1 (default: wait indefinitely)")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            arg!(-q --"quiet")
                .required(false)
                .help("Suppress banner and progress spinner")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-v --"verbose")
                .required(false)
                .help("Log every request to stderr")
                .action(clap::ArgAction::SetTrue),
        )
}
