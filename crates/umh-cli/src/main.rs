//! Universal Movies Hub admin console
//!
//! Usage:
//!   umh --seed 42 --offline
//!
//! Seeds both admin tables with mock data and opens the interactive console.

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use umh_admin::{generate_accounts, generate_content, AdminDashboard};
use umh_assistant::{AssistantContext, CatalogEntry, ChatProviderFactory};
use umh_cli::{logging, Console};
use umh_core::PublishStatus;
use umh_settings::{AssistantProvider, UmhSettings};

#[derive(Parser, Debug)]
#[command(name = "umh", version)]
#[command(about = "Universal Movies Hub admin console")]
struct Args {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, env = "UMH_SETTINGS")]
    settings: Option<PathBuf>,

    /// Seed for the mock catalog
    #[arg(long)]
    seed: Option<u64>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Use the offline concierge even when an API key is set
    #[arg(long)]
    offline: bool,

    /// Enable verbose debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = if args.verbose {
        logging::LoggingConfig::development()
    } else {
        logging::LoggingConfig::production()
    };
    let _log_guard = logging::init(config).context("Failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting UMH admin console");

    let settings = match &args.settings {
        Some(path) => UmhSettings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => UmhSettings::load().context("Failed to load settings")?,
    };

    let page_size = args.page_size.unwrap_or(settings.admin.page_size);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let content = generate_content(settings.admin.content_count, &mut rng);
    let accounts = generate_accounts(settings.admin.account_count, &mut rng);

    let catalog: Vec<CatalogEntry> = content
        .iter()
        .filter(|movie| movie.status == PublishStatus::Published)
        .map(CatalogEntry::from)
        .collect();

    let mut assistant_settings = settings.assistant.clone();
    if args.offline {
        assistant_settings.provider = AssistantProvider::Offline;
    }
    let provider = ChatProviderFactory::create_provider(&assistant_settings);

    let dashboard = AdminDashboard::new(content, accounts, page_size);
    let mut console = Console::new(dashboard, AssistantContext::new(provider, catalog))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console.run(&mut stdin.lock(), &mut stdout.lock())
}
