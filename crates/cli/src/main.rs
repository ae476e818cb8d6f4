// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown puzzles CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::{fs::File, io::BufReader, path::PathBuf};

use showdown_eval::matchup;

pub mod puzzles;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Counts the matchup lines won by the first player.
    Poker {
        /// The matchup lines file.
        #[clap(long, short, default_value = "poker.txt")]
        input: PathBuf,
    },
    /// Finds the largest palindrome product of two 3-digit factors.
    PalindromeProduct,
    /// Prints the sum-square difference for the first 100 naturals.
    SumSquareDiff,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Poker { input } => {
            info!("Scanning {}", input.display());

            let file = File::open(&input)
                .with_context(|| format!("cannot open {}", input.display()))?;
            let wins = matchup::tally_wins(BufReader::new(file))?;
            println!("Total Wins: {wins}");
        }
        Command::PalindromeProduct => {
            println!("{}", puzzles::largest_palindrome_product(100, 1000));
        }
        Command::SumSquareDiff => {
            println!("{}", puzzles::sum_square_difference(100));
        }
    }

    Ok(())
}
