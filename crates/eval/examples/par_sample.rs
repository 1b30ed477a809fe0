// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --features=parallel --example par_sample
// ```
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use cardroom_eval::*;

fn main() {
    const NUM_TASKS: usize = 4;
    const SAMPLES_PER_TASK: usize = 250_000;

    // Per task counters to avoid contention.
    let counts = (0..NUM_TASKS)
        .map(|_| (0..10).map(|_| AtomicU64::new(0)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let now = Instant::now();
    Deck::default().par_sample(NUM_TASKS, SAMPLES_PER_TASK, 7, |task_id, hand| {
        let rank = HandValue::eval(hand).rank();
        counts[task_id][rank as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = (NUM_TASKS * SAMPLES_PER_TASK) as f64;
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total / elapsed);

    for rank in HandRank::ranks() {
        let count = counts
            .iter()
            .map(|c| c[rank as usize].load(Ordering::Relaxed))
            .sum::<u64>();
        let label = format!("{rank}:");
        println!("{label:<17}{:.4}%", count as f64 * 100.0 / total);
    }
}
