// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardroom poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A [Hand] holds the cards
//! with their ranks sorted in descending order, an [Evaluator] classifies the
//! hand into one of the [HandRank] categories and returns a [HandValue] that
//! can be compared with other hands values:
//!
//! ```
//! # use cardroom_eval::*;
//! let straight: Hand = "9C 8D 7S 6H 5C".parse().unwrap();
//! let wheel: Hand = "AD 2S 3S 4S 5H".parse().unwrap();
//!
//! let v1 = Evaluator::new(&straight).hand_value();
//! let v2 = HandValue::eval(wheel.cards());
//! assert_eq!(v1.rank(), HandRank::Straight);
//! assert!(v1 > v2);
//!
//! let best = Evaluator::best_hand([&straight, &wheel]);
//! assert_eq!(best, vec![&straight]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluator, HandRank, HandValue, showdown};

pub mod hand;
pub use hand::Hand;

// Reexport cards types.
pub use cardroom_cards::{Card, Deck, ParseCardError, Rank, Suit};
