//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use profilekit_core::merge_to_file;
use profilekit_scraper::{ScrapeObserver, ScrapeResult, Scraper};
use profilekit_shared::{
    AppConfig, ScrapedRecord, init_config, load_config, load_config_from, validate_scrape_config,
    write_records,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ProfileKit — merge scraped project pages into a portfolio profile.
#[derive(Parser)]
#[command(
    name = "profilekit",
    version,
    about = "Scrape portfolio project sites and merge them into a profile document.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the config file (defaults to ~/.profilekit/profilekit.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch the configured project URLs and write the records file.
    Scrape {
        /// Records file to write (overrides the configured path).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Merge an existing records file with the profile into the final document.
    Merge {
        /// Records file to read (overrides the configured path).
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Output document to write (overrides the configured path).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Scrape then merge, through the records file handoff.
    Run {
        /// Records file for the handoff (overrides the configured path).
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Output document to write (overrides the configured path).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "profilekit=info",
        1 => "profilekit=debug",
        _ => "profilekit=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config;

    match cli.command {
        Command::Scrape { out } => cmd_scrape(config_path.as_deref(), out.as_deref()).await,
        Command::Merge { records, out } => {
            cmd_merge(config_path.as_deref(), records.as_deref(), out.as_deref())
        }
        Command::Run { records, out } => {
            cmd_run(config_path.as_deref(), records.as_deref(), out.as_deref()).await
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(config_path.as_deref()),
        },
    }
}

/// Load the app config, honoring a `--config` override.
fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

async fn cmd_scrape(config_path: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let config = load(config_path)?;
    let (result, records) = scrape_stage(&config).await?;

    let records_path = out.unwrap_or(&config.paths.records_file);
    write_records(records_path, &records)?;

    print_scrape_summary(&result, records_path);
    Ok(())
}

fn cmd_merge(
    config_path: Option<&Path>,
    records: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let config = load(config_path)?;

    let records_path = records.unwrap_or(&config.paths.records_file);
    let out_path = out.unwrap_or(&config.paths.output_file);

    info!(records = ?records_path, out = ?out_path, "merging profile document");

    let summary = merge_to_file(records_path, &config.profile, out_path)?;
    print_merge_summary(&summary, out_path);
    Ok(())
}

async fn cmd_run(
    config_path: Option<&Path>,
    records: Option<&Path>,
    out: Option<&Path>,
) -> Result<()> {
    let config = load(config_path)?;

    // Stage 1: scrape, persisted through the records file.
    let (result, scraped) = scrape_stage(&config).await?;
    let records_path = records.unwrap_or(&config.paths.records_file);
    write_records(records_path, &scraped)?;
    print_scrape_summary(&result, records_path);

    // Stage 2: merge, reading the file stage 1 just wrote.
    let out_path = out.unwrap_or(&config.paths.output_file);
    let summary = merge_to_file(records_path, &config.profile, out_path)?;
    print_merge_summary(&summary, out_path);
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = load(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Stage helpers
// ---------------------------------------------------------------------------

/// Run the fetch loop over the configured URL list.
async fn scrape_stage(config: &AppConfig) -> Result<(ScrapeResult, Vec<ScrapedRecord>)> {
    validate_scrape_config(config)?;

    let scraper = Scraper::new(Duration::from_secs(config.scrape.timeout_secs))?;
    let reporter = CliProgress::new();
    let (result, records) = scraper.scrape(&config.scrape.urls, &reporter).await;
    reporter.finish();

    Ok((result, records))
}

fn print_scrape_summary(result: &ScrapeResult, records_path: &Path) {
    println!();
    println!("  Scrape complete.");
    println!("  Fetched: {}", result.fetched);
    println!("  Skipped: {}", result.skipped);
    for (url, error) in &result.errors {
        println!("    - {url}: {error}");
    }
    println!("  Records: {}", records_path.display());
    println!("  Time:    {:.1}s", result.duration.as_secs_f64());
    println!();
}

fn print_merge_summary(summary: &profilekit_core::MergeSummary, out_path: &Path) {
    println!();
    println!("  Profile document written!");
    println!("  Records:  {}", summary.records);
    println!("  Projects: {}", summary.projects);
    if !summary.unmatched.is_empty() {
        println!("  Unmatched demo links:");
        for link in &summary.unmatched {
            println!("    - {link}");
        }
    }
    println!("  Output:   {}", out_path.display());
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ScrapeObserver for CliProgress {
    fn page_scraped(&self, url: &str, current: usize, total: usize) {
        self.spinner.set_message(format!(
            "Fetched [{current}/{total}] {url}"
        ));
    }

    fn page_skipped(&self, url: &str, error: &str) {
        self.spinner.set_message(format!(
            "Skipped {url}: {error}"
        ));
    }
}
