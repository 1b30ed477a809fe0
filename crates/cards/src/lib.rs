// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardroom cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use cardroom_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td.rank(), Rank::Ten);
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to count all 5 cards hands:
//!
//! ```no_run
//! # use cardroom_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use cardroom_cards::Deck;
//! // Sample 10 7-cards hands from each of 4 tasks.
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 10, 7, |task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
