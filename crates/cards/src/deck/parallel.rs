// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of k distinct cards from this deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);
        assert!(samples_per_task > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = Vec::with_capacity(k);
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        h.clear();
                        h.extend(self.cards.choose_multiple(&mut rng, k).copied());
                        f(task_id, &h);
                    }
                });
            }
        });
    }
}
