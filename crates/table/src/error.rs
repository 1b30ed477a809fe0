// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table errors.
use thiserror::Error;

use crate::Chips;

/// Errors returned by players and table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A chips amount is zero or overflows the stack.
    #[error("only positive chips amounts are allowed")]
    InvalidAmount,
    /// A bet is larger than the player chips.
    #[error("not enough chips, total chips = {chips}")]
    NotEnoughChips {
        /// The player chips.
        chips: Chips,
    },
    /// All the seats are taken.
    #[error("no more available seats, maximum number of {max_players} players reached")]
    TableFull {
        /// The number of seats.
        max_players: usize,
    },
    /// A player with the same name is already seated.
    #[error("player {0} is already seated")]
    PlayerAlreadySeated(String),
    /// The player is not seated at the table.
    #[error("player {0} is not seated")]
    PlayerNotFound(String),
    /// Not enough players to start a game.
    #[error("only {seated} players sit, minimum of {required} players required to start a game")]
    NotEnoughPlayers {
        /// Players at the table.
        seated: usize,
        /// Minimum number of players.
        required: usize,
    },
    /// The game has not started.
    #[error("the game has not started")]
    GameNotStarted,
    /// A player or the board already have all their cards.
    #[error("too many cards")]
    TooManyCards,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    DeckEmpty,
    /// The hand cards have not been dealt.
    #[error("the hand has not been dealt")]
    HandNotDealt,
    /// The table configuration is not valid.
    #[error("invalid table config: {0}")]
    InvalidConfig(String),
}

/// Table operations result.
pub type Result<T> = std::result::Result<T, TableError>;
