pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::convert::CurrencySelection;
use crate::core::config::AppConfig;
use crate::core::feed::FeedProvider;
use crate::core::sheet::{self, ExchangeSheet};
use anyhow::Result;
use tracing::{debug, info, warn};

/// Commands that need the daily feed.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Rates { json: bool },
    Currencies,
    Convert {
        amount: String,
        selection: CurrencySelection,
    },
}

/// Fetches and parses the feed once. A failed fetch is reported as no data.
pub async fn load_sheet(provider: &(dyn FeedProvider + Send + Sync)) -> Option<ExchangeSheet> {
    let spinner = cli::ui::new_spinner("Fetching exchange rates...");
    let result = provider.fetch_feed().await;
    spinner.finish_and_clear();

    match result {
        Ok(text) => sheet::parse(&text),
        Err(e) => {
            warn!(error = %e, "Failed to fetch exchange rates");
            None
        }
    }
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cnbx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider = providers::CnbFeedProvider::new(&config.providers.cnb.base_url);
    let sheet = load_sheet(&provider).await;

    match command {
        AppCommand::Rates { json } => cli::rates::run(sheet.as_ref(), json),
        AppCommand::Currencies => cli::convert::list(sheet.as_ref()),
        AppCommand::Convert { amount, selection } => {
            cli::convert::run(sheet.as_ref(), &amount, &selection)
        }
    }
}
