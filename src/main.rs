use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grid_scan::{count_crosses, count_words, Grid, MalformedInputError};
use tracing_subscriber::EnvFilter;

/// Count word-search matches in a block of text and print the total.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// File holding the grid of letters
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    #[command(subcommand)]
    scan: Scan,
}

#[derive(Debug, Subcommand)]
enum Scan {
    /// Count the word in all eight directions from every cell
    Rays {
        #[arg(short, long, default_value = "XMAS")]
        word: String,
    },
    /// Count cells where two diagonal copies of a three-letter word cross
    Crosses {
        #[arg(short, long, default_value = "MAS")]
        word: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to read \"{}\"", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed grid")]
    Grid(#[from] MalformedInputError),
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.input).map_err(|source| Error::Read {
        path: cli.input.clone(),
        source,
    })?;
    let grid = Grid::from_text(&text)?;

    let count = match &cli.scan {
        Scan::Rays { word } => count_words(&grid, word),
        Scan::Crosses { word } => count_crosses(&grid, word),
    };
    println!("{count}");

    Ok(())
}
