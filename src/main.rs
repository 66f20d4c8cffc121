use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use log::{debug, LevelFilter};

use petes_pike::load_game;

#[derive(Parser, Debug)]
#[command(version, about = "Pete's Pike Game Solver")]
struct Args {
    /// Path to game model
    #[arg(long, short = 'g')]
    game: PathBuf,

    /// Show first solution only (instead of all of them)
    #[arg(long, short = 'f')]
    first: bool,

    /// Output debug information
    #[arg(long, short = 'd')]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let mut game = load_game(&args.game)
        .with_context(|| format!("unable to load game \"{}\"", args.game.display()))?;

    debug!("Initial board:\n{}", game);

    game.run_search(args.first);
    let solutions = game.list_solutions();

    println!("{}", "*** SOLUTIONS ***".bold());
    if solutions.is_empty() {
        println!("{}", "No solution found.".yellow());
    }
    for (i, solution) in solutions.iter().enumerate() {
        println!("{}", format!("SOLUTION {}::", i + 1).green());
        println!("    {}", solution);
    }

    Ok(())
}
