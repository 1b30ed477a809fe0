// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardroom poker table.
//!
//! Players with chips sit at a [Table] that deals cards from a shuffled deck
//! and finds the winners of a hand at showdown:
//!
//! ```
//! # use cardroom_table::*;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut table = Table::with_rng(TableConfig::default(), StdRng::seed_from_u64(1))?;
//! table.sit_player(Player::new("alice"))?;
//! table.sit_player(Player::new("bob"))?;
//!
//! table.start_game()?;
//! table.deal_cards()?;
//!
//! let showdown = table.showdown()?;
//! assert_eq!(showdown.hands.len(), 2);
//! assert!(!showdown.winners.is_empty());
//! # Ok::<(), TableError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod chips;
pub use chips::Chips;

mod error;
pub use error::{Result, TableError};

pub mod player;
pub use player::Player;

pub mod table;
pub use table::{PlayerHand, Showdown, Table, TableConfig};

// Reexport evaluator types.
pub use cardroom_eval::{Card, Deck, Hand, HandRank, HandValue};
