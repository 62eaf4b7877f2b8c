//! packlist - a terminal packing-list manager.
//!
//! Usage:
//!   packlist                 Launch the TUI with the starter list
//!   packlist --empty         Start with an empty list
//!   packlist --sort quantity Start sorted by quantity
//!   packlist --help          Show help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use packlist_core::{PackingList, SortOrder};

#[derive(Parser)]
#[command(
    name = "packlist",
    version,
    about = "A terminal packing-list manager",
    long_about = "packlist keeps track of what still needs to go in the suitcase.\n\n\
                  Add items with a description and quantity, mark them packed, \
                  delete them, and sort the visible list."
)]
struct Cli {
    /// Start with an empty list instead of the starter items
    #[arg(short, long)]
    empty: bool,

    /// Initial sort order for the list
    #[arg(short, long, default_value = "insertion")]
    sort: SortArg,

    /// Write tracing output to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SortArg {
    #[default]
    Insertion,
    Alphabetical,
    Quantity,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Insertion => SortOrder::Insertion,
            SortArg::Alphabetical => SortOrder::Alphabetical,
            SortArg::Quantity => SortOrder::Quantity,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Cannot open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
        tracing::info!("packlist starting");
    }

    let list = if cli.empty {
        PackingList::new()
    } else {
        PackingList::sample()
    };

    packlist_tui::run(list, cli.sort.into())?;

    Ok(())
}
