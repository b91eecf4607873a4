use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chainlens::{CategoryTable, ChainLens, ChainLensError, read_actions_over_time};
use clap::Args;
use serde_json::Value;
use tracing::{debug, info};

#[derive(Args)]
pub struct PlotCmd {
    /// Actions-over-time JSON document
    pub input: PathBuf,

    /// Write the chart series here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct TableCmd {
    /// Results JSON document
    pub input: PathBuf,

    /// Table to render (see `list-chains`)
    #[arg(short = 'n', long = "name")]
    pub table: String,
}

pub fn build_lens(top_actions: usize, categories: Option<&Path>) -> Result<ChainLens> {
    let mut builder = ChainLens::builder().with_default_chains()?.top_actions(top_actions);
    if let Some(path) = categories {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading category table {}", path.display()))?;
        builder = builder.categories(CategoryTable::from_json_str(&json)?);
        debug!(path = %path.display(), "loaded category table");
    }
    Ok(builder.build()?)
}

pub fn chain_arg(blockchain: Option<&str>) -> Result<&str> {
    blockchain.ok_or_else(|| {
        ChainLensError::InvalidArg("--blockchain is required for this command".into()).into()
    })
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

pub fn plot(lens: &ChainLens, chain: &str, cmd: &PlotCmd) -> Result<()> {
    let series = read_actions_over_time(open(&cmd.input)?)?;
    info!(chain, buckets = series.len(), "plotting actions over time");
    let chart = lens.plot_actions_over_time(chain, &series)?;

    match &cmd.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut out, &chart)?;
            out.flush()?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &chart)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn table(lens: &ChainLens, chain: &str, cmd: &TableCmd) -> Result<()> {
    let data: Value = serde_json::from_reader(open(&cmd.input)?)
        .map_err(ChainLensError::from)
        .with_context(|| format!("parsing {}", cmd.input.display()))?;
    let report = lens.generate_table(chain, &cmd.table, &data)?;
    println!("{report}");
    Ok(())
}

pub fn list_chains(lens: &ChainLens) -> Result<()> {
    for name in lens.available_chains() {
        let chain = lens.chain(name)?;
        println!("{name}: {}", chain.available_tables().join(", "));
    }
    Ok(())
}
