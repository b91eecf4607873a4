// Command-line front end for chainlens.
//
// Reads action logs or results documents, hands them to the selected chain,
// and writes chart series as JSON or report tables as text.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chainlens")]
#[command(about = "Blockchain action log charts and reports", long_about = None)]
#[command(version)]
struct Cli {
    /// Chain to use (see `list-chains`)
    #[arg(short, long, global = true)]
    blockchain: Option<String>,

    /// Number of actions kept as their own series by top-K chains
    #[arg(long, global = true, default_value_t = chainlens::DEFAULT_TOP_ACTIONS)]
    top_actions: usize,

    /// Category table JSON replacing the chain's embedded one
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn an actions-over-time document into chart series (JSON)
    PlotActionsOverTime(commands::PlotCmd),

    /// Render one of the chain's report tables from a results document
    GenerateTable(commands::TableCmd),

    /// List registered chains and their tables
    ListChains,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let lens = commands::build_lens(cli.top_actions, cli.categories.as_deref())?;

    match cli.command {
        Commands::PlotActionsOverTime(cmd) => {
            commands::plot(&lens, commands::chain_arg(cli.blockchain.as_deref())?, &cmd)
        }
        Commands::GenerateTable(cmd) => {
            commands::table(&lens, commands::chain_arg(cli.blockchain.as_deref())?, &cmd)
        }
        Commands::ListChains => commands::list_chains(&lens),
    }
}
