use bridgewait_scraper::{run, Options};
use clap::Parser;
use log::error;
use std::env;
use std::process;

#[derive(Parser, Debug)]
#[clap(about = "Scrape Niagara Falls bridge wait times into JSON")]
pub struct CliArgs {
    /// Logging verbosity level (valid values: off, error, warn, info, debug, trace)
    #[clap(short, long, value_name = "LEVEL", default_value = "info")]
    verbosity: log::LevelFilter,

    #[clap(flatten)]
    options: Options,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli_args = CliArgs::parse();
    if env::var(env_logger::DEFAULT_FILTER_ENV).is_ok() {
        env_logger::builder().target(env_logger::Target::Stdout).init();
    } else {
        env_logger::builder()
            .filter(Some(env!("CARGO_CRATE_NAME")), cli_args.verbosity)
            .format_timestamp(None)
            .format_target(false)
            .target(env_logger::Target::Stdout)
            .init();
    }
    if let Err(error) = run(&cli_args.options).await {
        error!("{:?}", error);
        process::exit(1);
    }
}
