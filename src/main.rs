use anyhow::Context;
use clap::Parser;
use crossfill::{find_fill, render_grid, Grid, Puzzle, WordList};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Fill a crossword grid with words from a word list.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Grid structure: one row per line, `_` for fillable cells and `#` for blocks.
    structure: PathBuf,

    /// Word list, one word per line.
    words: PathBuf,

    /// Also write the filled grid to this file.
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let structure = fs::read_to_string(&args.structure)
        .with_context(|| format!("reading structure {}", args.structure.display()))?;
    let grid = Grid::parse(&structure)
        .with_context(|| format!("parsing structure {}", args.structure.display()))?;

    let words = fs::read_to_string(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;
    let words = WordList::parse(&words)
        .with_context(|| format!("parsing word list {}", args.words.display()))?;

    let puzzle = Puzzle::new(grid, words);

    match find_fill(&puzzle) {
        Ok(result) => {
            info!("{:?}", result.statistics);

            let display_grid = render_grid(&puzzle, &result.assignment);
            println!("{}", display_grid);

            if let Some(output) = &args.output {
                fs::write(output, display_grid + "\n")
                    .with_context(|| format!("writing {}", output.display()))?;
                info!("written file to {}", output.display());
            }
        }
        Err(failure) => {
            info!("{:?}", failure);
            println!("No solution.");
        }
    }

    Ok(())
}
