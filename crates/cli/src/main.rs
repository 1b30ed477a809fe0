// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardroom CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use cardroom_table::TableConfig;

mod commands;

#[derive(Debug, Parser)]
#[command(version, about = "Deal and evaluate poker hands.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals a hand at a table and shows the winners.
    Deal {
        /// Number of players at the table.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Number of hole cards dealt to each player.
        #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=7))]
        hole_cards: u8,
        /// Number of board cards.
        #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=7))]
        board_cards: u8,
        /// Seed used to shuffle the deck.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Print the showdown as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Samples random hands and prints the frequency of each category.
    Stats {
        /// Total number of sampled hands.
        #[clap(long, short, default_value_t = 1_000_000)]
        samples: usize,
        /// Number of cards in each hand.
        #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Number of sampling tasks.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=64))]
        tasks: u8,
    },
    /// Evaluates the given hands and shows the best ones.
    Eval {
        /// Hands of 5 to 7 cards, for example "AS KS QS JS TS".
        #[clap(required = true)]
        hands: Vec<String>,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deal {
            players,
            hole_cards,
            board_cards,
            seed,
            json,
        } => {
            let config = TableConfig {
                max_players: players as usize,
                cards_per_player: hole_cards as usize,
                cards_per_table: board_cards as usize,
                ..TableConfig::default()
            };
            commands::deal(config, seed, json)
        }
        Command::Stats {
            samples,
            cards,
            tasks,
        } => commands::stats(samples, cards as usize, tasks as usize),
        Command::Eval { hands } => commands::eval(&hands),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
