use wikisite::{command_argument_builder, handle_harvest, init_logging};
use wikisite_core::print_banner;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let matches = command_argument_builder().get_matches();

    if !matches.get_flag("quiet") {
        print_banner();
    }
    init_logging(matches.get_flag("verbose"));

    handle_harvest(&matches).await;
}
