// Entry point: load config, set up logging, and run the menu on stdin/stdout.

use std::io;

use ghfetch::app::App;
use ghfetch::config::Config;
use ghfetch::github::BlockingGitHub;
use ghfetch::logging;
use ghfetch::lookup::LookupService;

fn main() -> ghfetch::Result<()> {
    let config = Config::load()?;
    logging::init(&config.log_filter);
    tracing::debug!(base_url = %config.base_url, "starting");

    let source = BlockingGitHub::new(&config)?;
    let lookup = LookupService::new(source);

    let stdin = io::stdin();
    let mut app = App::new(lookup, stdin.lock(), io::stdout());
    app.run()
}
