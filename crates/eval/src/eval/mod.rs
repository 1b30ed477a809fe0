// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The [Evaluator] classifies 5, 6, and 7 cards hands into a [HandRank]
//! category checking categories from the strongest to the weakest, the first
//! category that matches gives the hand value.
//!
//! A [HandValue] is made of the category, an optional kicker list with the
//! ranks that define the category (the pair rank, the trips and pair ranks
//! of a full house, ...) and an optional list with the ranks of the five
//! cards that make the hand. Values are compared by category first, then by
//! kicker list, and finally by the five cards ranks.
//!
//! Use [Evaluator::best_hand] or [showdown] to find the winning hands, all
//! hands that tie for the best value are returned.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use cardroom_cards::{Card, Rank};

mod evaluator;
pub use evaluator::{Evaluator, showdown};

use crate::Hand;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category score, from 0 for high card up to 900 for a royal flush.
    pub fn score(&self) -> u16 {
        *self as u16 * 100
    }

    /// Returns the category for a score.
    pub fn from_score(score: u16) -> Option<HandRank> {
        if score % 100 == 0 {
            Self::ranks().nth((score / 100) as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{s}")
    }
}

/// The value of a poker hand.
///
/// Values are totally ordered, two values are equal when they have the same
/// category and the same kickers and ranks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    kicker: Option<Vec<u8>>,
    ranks: Option<Vec<u8>>,
}

impl HandValue {
    /// Creates a hand value.
    pub fn new(rank: HandRank, kicker: Option<Vec<u8>>, ranks: Option<Vec<u8>>) -> Self {
        Self {
            rank,
            kicker,
            ranks,
        }
    }

    /// Evaluates a 5, 6, or 7 cards hand.
    pub fn eval(cards: &[Card]) -> Self {
        Evaluator::new(&Hand::new(cards)).hand_value()
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand category score.
    pub fn score(&self) -> u16 {
        self.rank.score()
    }

    /// The ranks that define the category, for example the higher and the
    /// lower pair for two pair.
    pub fn kicker(&self) -> Option<&[u8]> {
        self.kicker.as_deref()
    }

    /// The ranks of the five cards that make the hand in descending order.
    pub fn ranks(&self) -> Option<&[u8]> {
        self.ranks.as_deref()
    }
}

/// Compares two lists only if both are present.
fn cmp_present(a: &Option<Vec<u8>>, b: &Option<Vec<u8>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| cmp_present(&self.kicker, &other.kicker))
            .then_with(|| cmp_present(&self.ranks, &other.ranks))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;

        if let Some(ranks) = self.kicker.as_ref().or(self.ranks.as_ref()) {
            let ranks = ranks
                .iter()
                .filter_map(|&v| Rank::from_value(v))
                .map(|r| r.to_string())
                .collect::<Vec<_>>();
            write!(f, " [{}]", ranks.join(", "))?;
        }

        Ok(())
    }
}
