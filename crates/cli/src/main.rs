// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker command line evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

mod commands;

#[derive(Debug, Parser)]
#[clap(about = "Rank poker hands and pick winners, wild cards are ?B and ?R")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a five cards hand, i.e. `rank TD TC TH 7C 7D`.
    Rank {
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Select the best five cards out of five or more cards.
    Best {
        /// Reject hands with duplicate cards.
        #[clap(long)]
        strict: bool,
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Select the best five cards out of cards with wild cards.
    Wild {
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// The hand cards, `?B` is any black card and `?R` any red card.
        #[clap(required = true)]
        tokens: Vec<String>,
    },
    /// Pick the winners, each hand is a quoted list of five cards.
    Poker {
        /// Reject hands with duplicate cards.
        #[clap(long)]
        strict: bool,
        /// The hands, i.e. `"6C 7C 8C 9C TC" "9D 9H 9S 9C 7D"`.
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Deal random hands and pick the winners.
    Deal {
        /// Number of hands.
        #[clap(long, short = 'n', default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=10))]
        hands: u16,
        /// Number of cards per hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..=52))]
        cards: u16,
        /// Number of wild cards added to each hand.
        #[clap(long, short, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=2))]
        wild: u16,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn run(cli: Cli) -> Result<Vec<String>> {
    match cli.command {
        Command::Rank { cards } => commands::rank(&cards.join(" ")),
        Command::Best { strict, cards } => commands::best(&cards.join(" "), strict),
        Command::Wild { tasks, tokens } => commands::wild(&tokens.join(" "), tasks as usize),
        Command::Poker { strict, hands } => commands::poker(&hands, strict),
        Command::Deal {
            hands,
            cards,
            wild,
            seed,
        } => commands::deal(&commands::DealConfig {
            hands: hands as usize,
            cards: cards as usize,
            wild: wild as usize,
            seed,
        }),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(lines) => lines.iter().for_each(|l| println!("{l}")),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}
