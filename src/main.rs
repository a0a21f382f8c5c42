use clap::Parser;
use tracing::{debug, error};

use pharmacy_ledger::application::Storefront;
use pharmacy_ledger::cli::output::{self, OutputConfig};
use pharmacy_ledger::cli::{self, Cli};
use pharmacy_ledger::config::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();
    output::configure(OutputConfig::new(args.json, args.quiet));

    let config = match Config::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };
    config.logging.init();
    debug!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let result =
        Storefront::from_config(&config).and_then(|shop| cli::execute(&shop, args.command));
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
