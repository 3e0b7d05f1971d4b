use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use norma_cli::cli::{Cli, handle};

fn main() -> Result<()> {
    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    handle(cli)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
