use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ori_cli::{dispatch, Command, InputLines, Settings};
use ori_core::Strand;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ori")]
#[command(about = "k-mer and motif finders for replication-origin hunting", long_about = None)]
#[command(version)]
struct Cli {
    /// Computation to run
    #[arg(value_enum)]
    command: Command,

    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Strand policy for frequent-words-with-mismatches
    #[arg(long, value_enum)]
    strand: Option<StrandArg>,

    /// Scan clump windows in parallel
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrandArg {
    Forward,
    Both,
}

impl From<StrandArg> for Strand {
    fn from(arg: StrandArg) -> Self {
        match arg {
            StrandArg::Forward => Strand::Forward,
            StrandArg::Both => Strand::Both,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(strand) = cli.strand {
        settings.strand = strand.into();
    }
    settings.parallel |= cli.parallel;
    debug!(?settings, "settings resolved");

    let input = match &cli.input {
        Some(path) => InputLines::from_path(path)?,
        None => InputLines::from_reader(io::stdin().lock()).context("failed to read stdin")?,
    };

    let output = dispatch(cli.command, &input, &settings)?;

    match &cli.output {
        Some(path) => output.write_to_path(path)?,
        None => output
            .write_to(BufWriter::new(io::stdout().lock()))
            .context("failed to write stdout")?,
    }

    Ok(())
}
