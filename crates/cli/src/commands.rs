// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use cardroom_eval::{Deck, Evaluator, Hand, HandRank, HandValue};
use cardroom_table::{Player, Table, TableConfig};

/// Seats players at a table, deals a hand and prints the showdown.
pub fn deal(config: TableConfig, seed: Option<u64>, json: bool) -> Result<()> {
    let num_players = config.max_players;
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut table = Table::with_rng(config, rng)?;
    for idx in 1..=num_players {
        table.sit_player(Player::new(format!("player{idx}")))?;
    }

    table.start_game()?;
    table.deal_cards()?;
    let showdown = table.showdown()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&showdown)?);
        return Ok(());
    }

    println!("Board: {}", Hand::new(table.board()));
    for player in table.players() {
        let hand = showdown.hands.iter().find(|h| h.name == player.name());
        let value = hand.map(|h| h.value.to_string()).unwrap_or_default();
        println!(
            "{:<10} {:<8} {value}",
            player.name(),
            Hand::new(player.cards()).to_string()
        );
    }
    println!("Winners: {}", showdown.winners.join(", "));

    Ok(())
}

/// Samples random hands in parallel and prints the categories frequency.
pub fn stats(samples: usize, cards: usize, tasks: usize) -> Result<()> {
    if samples == 0 {
        bail!("The number of samples must be positive");
    }

    let samples_per_task = samples.div_ceil(tasks);
    info!("Sampling {samples_per_task} {cards}-cards hands on each of {tasks} tasks");

    // Per task counters to avoid contention.
    let counters = (0..tasks)
        .map(|_| {
            HandRank::ranks()
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();
    Deck::default().par_sample(tasks, samples_per_task, cards, |task_id, hand| {
        let rank = HandValue::eval(hand).rank();
        counters[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = (samples_per_task * tasks) as f64;
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total / elapsed);

    for rank in HandRank::ranks().rev() {
        let count = counters
            .iter()
            .map(|c| c[rank as usize].load(Ordering::Relaxed))
            .sum::<u64>();
        let label = format!("{rank}:");
        println!(
            "{label:<17}{count:>10} {:>8.4}%",
            count as f64 * 100.0 / total
        );
    }

    Ok(())
}

/// Evaluates hands and prints the best ones.
pub fn eval(hands: &[String]) -> Result<()> {
    let mut parsed = Vec::with_capacity(hands.len());
    for s in hands {
        let hand = s.parse::<Hand>()?;
        if !(5..=7).contains(&hand.len()) {
            bail!("Hand {hand} has {} cards, expected 5 to 7 cards", hand.len());
        }
        parsed.push(hand);
    }

    for hand in &parsed {
        println!("{:<22} {}", hand.to_string(), Evaluator::new(hand).hand_value());
    }

    let best = Evaluator::best_hand(&parsed)
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();
    println!("Best: {}", best.join(" | "));

    Ok(())
}
