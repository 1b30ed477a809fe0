// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |rrrr00ss|
///   +--------+
///   r = rank value of card (deuce=2,trey=3,four=4,...,ace=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

/// A Poker card.
impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 4) | suit as u8)
    }

    /// This card unique id.
    pub fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match Rank::from_value(self.value()) {
            Some(rank) => rank,
            None => panic!("Invalid rank 0x{:x}", self.0),
        }
    }

    /// Returns the rank value with the ace valued 14.
    #[inline]
    pub fn value(&self) -> u8 {
        self.0 >> 4
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Error returned when parsing a card from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank followed by a suit.
    #[error("invalid card {0:?}, expected a rank followed by a suit like AS or 10H")]
    InvalidFormat(String),
    /// Unknown rank symbol.
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
    /// Unknown suit symbol.
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AS`, `td`, `7C` or `10H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::InvalidFormat(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::InvalidFormat(s.to_string()));
        }

        Ok(Card::new(rank.parse::<Rank>()?, Suit::try_from(suit)?))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for a value, an ace can be given as 1 or 14.
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1 | 14 => Some(Rank::Ace),
            2..=13 => Rank::ranks().nth(value as usize - 2),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts].into_iter()
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        // Indices of the current combination in lexicographic order.
        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move right.
            let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
                break;
            };

            idx[pos] += 1;
            for i in pos + 1..k {
                idx[i] = idx[i - 1] + 1;
            }

            for i in pos..k {
                hand[i] = self.cards[idx[i]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
