//! ProfileKit CLI — portfolio data pipeline.
//!
//! Scrapes a fixed list of project sites into flat records and merges
//! them with a static personal/professional profile into the single
//! JSON document the portfolio front end consumes.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
