use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use cnbx::cli::convert::CurrencySelection;
use cnbx::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display today's exchange rates
    Rates {
        /// Print the parsed rates as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the currencies that can be converted to, with their index
    Currencies,
    /// Convert an amount of CZK
    Convert {
        /// Amount in CZK
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Target currency by index, as listed by `cnbx currencies`
        #[arg(short, long, default_value_t = 0, conflicts_with = "currency")]
        index: usize,

        /// Target currency by code, e.g. EUR
        #[arg(short = 'C', long)]
        currency: Option<String>,
    },
}

impl From<Commands> for cnbx::AppCommand {
    fn from(cmd: Commands) -> cnbx::AppCommand {
        match cmd {
            Commands::Rates { json } => cnbx::AppCommand::Rates { json },
            Commands::Currencies => cnbx::AppCommand::Currencies,
            Commands::Convert {
                amount,
                index,
                currency,
            } => cnbx::AppCommand::Convert {
                amount,
                selection: currency.map_or(CurrencySelection::Index(index), CurrencySelection::Code),
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cnbx::cli::setup::setup(),
        Some(cmd) => cnbx::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
