// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand type.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use cardroom_cards::{Card, ParseCardError, Suit};

/// Ranks of an ace-low straight with the ace valued 14.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// Ranks of an ace-low straight with the ace valued 1.
const WHEEL_LOW: [u8; 5] = [5, 4, 3, 2, 1];

/// A poker hand of 5, 6, or 7 cards.
///
/// The hand precomputes the rank values of its cards in descending order
/// and the suit of each card in input order. If the ranks are exactly an
/// ace-low straight (A, 5, 4, 3, 2) the ace is valued 1 so that the hand
/// ranks are `[5, 4, 3, 2, 1]`.
///
/// The number of cards is not checked, evaluating hands with less than 5 or
/// more than 7 cards, or with duplicate cards, gives undefined results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    ranks: Vec<u8>,
    suits: Vec<Suit>,
}

impl Hand {
    /// Creates a hand from the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut ranks = cards.iter().map(Card::value).collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        if ranks == WHEEL {
            ranks = WHEEL_LOW.to_vec();
        }

        Self {
            cards: cards.to_vec(),
            ranks,
            suits: cards.iter().map(Card::suit).collect(),
        }
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards rank values in descending order.
    pub fn ranks(&self) -> &[u8] {
        &self.ranks
    }

    /// The cards suits in input order.
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(&cards)
    }
}

/// Parses whitespace separated cards like `AS KS QS JS TS`.
impl FromStr for Hand {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Hand::new(&cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardroom_cards::{Deck, Rank};

    #[test]
    fn hand_ranks_and_suits() {
        let deck = Deck::default().into_iter().collect::<Vec<_>>();

        // 2S, 3S, 4S, 5S, 6S
        let hand = Hand::new(&deck[..5]);
        assert_eq!(hand.ranks(), &[6, 5, 4, 3, 2]);
        assert_eq!(hand.suits(), &[Suit::Spades; 5]);
        assert_eq!(hand.len(), 5);
        assert!(!hand.is_empty());

        let hand: Hand = "KD 2C KS 9H 2D 2S AC".parse().unwrap();
        assert_eq!(hand.ranks(), &[14, 13, 13, 9, 2, 2, 2]);
        assert_eq!(
            hand.suits(),
            &[
                Suit::Diamonds,
                Suit::Clubs,
                Suit::Spades,
                Suit::Hearts,
                Suit::Diamonds,
                Suit::Spades,
                Suit::Clubs
            ]
        );
        assert_eq!(hand.cards()[0], Card::new(Rank::King, Suit::Diamonds));
    }

    #[test]
    fn wheel_normalization() {
        let hand: Hand = "AD 2S 3S 4S 5S".parse().unwrap();
        assert_eq!(hand.ranks(), &[5, 4, 3, 2, 1]);
        assert_eq!(hand.suits().iter().filter(|s| **s == Suit::Spades).count(), 4);

        // Order of the cards doesn't matter.
        let hand: Hand = "5C 3D AH 4C 2S".parse().unwrap();
        assert_eq!(hand.ranks(), &[5, 4, 3, 2, 1]);

        // Only the exact wheel ranks are normalized.
        let hand: Hand = "AD 2S 3S 4S 5S 9C".parse().unwrap();
        assert_eq!(hand.ranks(), &[14, 9, 5, 4, 3, 2]);

        let hand: Hand = "AD 2S 3S 4S 4C".parse().unwrap();
        assert_eq!(hand.ranks(), &[14, 4, 4, 3, 2]);
    }

    #[test]
    fn hand_parse_and_display() {
        let hand: Hand = "as ks  qs\tjs 10s".parse().unwrap();
        assert_eq!(hand.to_string(), "AS KS QS JS TS");
        assert_eq!(hand, Hand::from(hand.cards().to_vec()));

        assert_eq!(
            "AS KX".parse::<Hand>(),
            Err(ParseCardError::InvalidSuit('X'))
        );
    }
}
