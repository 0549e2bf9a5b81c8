#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{CommandStrategy, InitStrategy, MergeInput, MergeStrategy};

#[derive(Parser)]
#[command(name = "i18nmerge")]
#[command(
    about = "Merge German and French translations with the item catalog",
    long_about = None
)]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// German localization document. A file literally named `init` must be
    /// written with a directory prefix, e.g. `./init`
    german: Option<PathBuf>,

    /// French localization document
    french: Option<PathBuf>,

    /// Item catalog (JSON array of items)
    items: Option<PathBuf>,

    /// Where to write the combined document
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => InitStrategy.execute(()),
        None => MergeStrategy.execute(MergeInput {
            german: cli.german,
            french: cli.french,
            items: cli.items,
            output: cli.output,
        }),
    }
}
