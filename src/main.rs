mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use aievents_core::EventKind;
use aievents_core::config::AppConfig;
use aievents_core::dashboard::Dashboard;
use aievents_core::favorites::FavoritesStore;
use aievents_core::filter::{FilterCriteria, parse_month_filter};
use aievents_core::storage::FileStorage;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "aievents")]
#[command(about = "Browse AI hackathons and conferences and keep track of your favorites")]
struct Cli {
    /// Config file (default: ~/.config/aievents/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hackathons CSV, as a path or URL (overrides config)
    #[arg(long, global = true)]
    hackathons: Option<String>,

    /// Conferences CSV, as a path or URL (overrides config)
    #[arg(long, global = true)]
    conferences: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hackathons matching the filters
    Hackathons(ListArgs),
    /// List conferences matching the filters
    Conferences(ListArgs),
    /// List favorited events (filters don't apply)
    Favorites {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an event to favorites, or remove it if already there
    Star {
        kind: KindArg,
        /// Event name, exactly as listed
        name: String,
    },
    /// Show the available domain, mode and month filter values
    Options,
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive text to look for in event names and domains
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only this domain ("all" for any)
    #[arg(short, long)]
    domain: Option<String>,

    /// Only this participation mode, e.g. Online ("all" for any)
    #[arg(short, long)]
    mode: Option<String>,

    /// Only this month: 1-12 or a month name ("all" for any)
    #[arg(long)]
    month: Option<String>,

    /// Print records as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn criteria(&self) -> Result<FilterCriteria> {
        let month = match &self.month {
            Some(value) => parse_month_filter(value).map_err(|e| anyhow::anyhow!(e))?,
            None => None,
        };

        Ok(FilterCriteria {
            search: self.search.clone(),
            domain: self.domain.clone(),
            mode: self.mode.clone(),
            month,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Hackathon,
    Conference,
}

impl From<KindArg> for EventKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Hackathon => EventKind::Hackathon,
            KindArg::Conference => EventKind::Conference,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Reject bad filters before fetching anything
    let criteria = list_criteria(&cli.command)?;

    let config = load_config(&cli)?;
    let storage_path = config.storage_path()?;
    log::debug!("Favorites stored at {}", storage_path.display());

    let favorites = FavoritesStore::load(FileStorage::open(storage_path));
    let mut dashboard = Dashboard::new(favorites);

    commands::load(&mut dashboard, &config).await;

    match cli.command {
        Commands::Hackathons(args) => {
            commands::list::run(&mut dashboard, EventKind::Hackathon, criteria, args.json)
        }
        Commands::Conferences(args) => {
            commands::list::run(&mut dashboard, EventKind::Conference, criteria, args.json)
        }
        Commands::Favorites { json } => commands::favorites::run(&dashboard, json),
        Commands::Star { kind, name } => commands::star::run(&mut dashboard, kind.into(), &name),
        Commands::Options => commands::options::run(&dashboard),
    }
}

/// Filter criteria for the list commands; other commands don't filter.
fn list_criteria(command: &Commands) -> Result<FilterCriteria> {
    match command {
        Commands::Hackathons(args) | Commands::Conferences(args) => args.criteria(),
        _ => Ok(FilterCriteria::default()),
    }
}

/// Load config from --config or the default location, then apply source overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load config")?,
    };

    if let Some(source) = &cli.hackathons {
        config.hackathons_source = source.clone();
    }
    if let Some(source) = &cli.conferences {
        config.conferences_source = source.clone();
    }

    Ok(config)
}
