// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use log::info;
use serde::{Deserialize, Serialize};

use cardroom_eval::Card;

use crate::{Chips, Result};

/// A poker player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
    chips: Chips,
}

impl Player {
    /// Creates a new player with no chips.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::default(),
            chips: Chips::ZERO,
        }
    }

    /// This player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This player cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// This player chips.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// Adds chips to this player stack, returns the new stack.
    pub fn add_chips(&mut self, amount: Chips) -> Result<Chips> {
        let stack = self.chips.deposit(amount)?;
        info!("Player {} added {amount} chips", self.name);
        Ok(stack)
    }

    /// Bets the given amount, returns the amount taken from the stack.
    ///
    /// The amount must be positive and at most the stack, betting the whole
    /// stack goes all in.
    pub fn bet(&mut self, amount: Chips) -> Result<Chips> {
        self.chips.withdraw(amount)
    }

    /// Folds the hand returning the cards.
    pub fn fold(&mut self) -> Vec<Card> {
        info!("Player {} folds", self.name);
        self.return_cards()
    }

    /// Receives a dealt card.
    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all the cards.
    pub fn return_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableError;
    use cardroom_eval::{Rank, Suit};

    #[test]
    fn player_no_chips() {
        let player = Player::new("test_player");
        assert_eq!(player.name(), "test_player");
        assert_eq!(player.chips(), Chips::ZERO);
        assert!(player.cards().is_empty());
    }

    #[test]
    fn player_add_chips() {
        let mut player = Player::new("test_player");
        assert_eq!(player.add_chips(Chips::new(100)), Ok(Chips::new(100)));
        assert_eq!(player.add_chips(Chips::new(50)), Ok(Chips::new(150)));
        assert_eq!(
            player.add_chips(Chips::ZERO),
            Err(TableError::InvalidAmount)
        );
        assert_eq!(player.chips(), Chips::new(150));
    }

    #[test]
    fn player_bet() {
        let mut player = Player::new("test_player");
        player.add_chips(Chips::new(100)).unwrap();

        assert_eq!(player.bet(Chips::new(50)), Ok(Chips::new(50)));
        assert_eq!(player.chips(), Chips::new(50));

        assert_eq!(player.bet(Chips::ZERO), Err(TableError::InvalidAmount));
        assert_eq!(
            player.bet(Chips::new(51)),
            Err(TableError::NotEnoughChips {
                chips: Chips::new(50)
            })
        );
        assert_eq!(player.chips(), Chips::new(50));

        // All in.
        assert_eq!(player.bet(Chips::new(50)), Ok(Chips::new(50)));
        assert_eq!(player.chips(), Chips::ZERO);
    }

    #[test]
    fn player_cards_and_fold() {
        let mut player = Player::new("test_player");
        let jh = Card::new(Rank::Jack, Suit::Hearts);
        let ac = Card::new(Rank::Ace, Suit::Clubs);

        player.receive_card(jh);
        player.receive_card(ac);
        assert_eq!(player.cards(), &[jh, ac]);

        assert_eq!(player.fold(), vec![jh, ac]);
        assert!(player.cards().is_empty());
    }
}
