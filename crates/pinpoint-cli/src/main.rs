use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod render;
mod reports;
mod snapshot;

use render::current_output_style;
use reports::{format_describe_output, format_diff_lines};
use snapshot::load_snapshot;

#[derive(Parser, Debug)]
#[command(name = "pinpoint")]
#[command(about = "Inspect resolved dependency pins", long_about = None)]
struct Cli {
    /// Disable colored status output.
    #[arg(long, global = true)]
    plain: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the pin each package in a resolution snapshot resolved to.
    Describe {
        snapshot: PathBuf,
        /// Show full revisions and mark unknown ones.
        #[arg(long)]
        verbose: bool,
        #[arg(long, conflicts_with = "verbose")]
        json: bool,
    },
    /// Show which pins changed between two resolution snapshots.
    Diff {
        before: PathBuf,
        after: PathBuf,
        #[arg(long)]
        verbose: bool,
    },
    Version,
}

fn main() -> Result<()> {
    run_cli(Cli::parse())
}

fn run_cli(cli: Cli) -> Result<()> {
    let output_style = current_output_style(cli.plain);

    match cli.command {
        Commands::Describe {
            snapshot,
            verbose,
            json,
        } => {
            let resolution = load_snapshot(&snapshot)?;
            for line in format_describe_output(&resolution, verbose, json, output_style)? {
                println!("{line}");
            }
        }
        Commands::Diff {
            before,
            after,
            verbose,
        } => {
            let before = load_snapshot(&before)?;
            let after = load_snapshot(&after)?;
            for line in format_diff_lines(&before, &after, verbose, output_style) {
                println!("{line}");
            }
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
