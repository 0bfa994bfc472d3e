use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aoc15::{find_unique_gap, find_unique_gap_parallel, parse, tuning_frequency};

/// AoC problem for Dec 15 2022
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to parse
    file: PathBuf,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Count the positions on a row where a beacon cannot be
    Row {
        /// y line to test
        y: i64,
    },

    /// Find the only uncovered position in [0, boundary] x [0, boundary]
    Gap {
        /// max boundary for search space cutting
        boundary: i64,

        /// sweep rows on all cores
        #[arg(long)]
        parallel: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Args { file, query } = Args::parse();

    let index = parse::coverage_index(&fs::read_to_string(&file)?)?;

    info!(file = %file.display(), sensors = index.len(), "loaded report");

    match query {
        Query::Row { y } => {
            let cnt = index.count_non_beacon_on_row(y);

            println!("y={y} has {cnt} points covered by a sensor");
        }
        Query::Gap { boundary, parallel } => {
            let found = if parallel {
                find_unique_gap_parallel(&index, boundary)?
            } else {
                find_unique_gap(&index, boundary)?
            };

            println!("found at {found}, f = {}", tuning_frequency(found)?);
        }
    }

    Ok(())
}
