// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and showdown.
use ahash::AHashMap;
use std::{cmp::Ordering, iter};

use cardroom_cards::{Card, Suit};

use super::{HandRank, HandValue};
use crate::Hand;

/// Ace value used for the ace-low straight.
const ACE_LOW: u8 = 1;

/// Ace value.
const ACE: u8 = 14;

/// Number of cards that make a poker hand.
const HAND_SIZE: usize = 5;

/// Evaluates a hand.
#[derive(Debug)]
pub struct Evaluator<'a> {
    hand: &'a Hand,
    /// Rank values with their count, sorted by descending rank.
    rank_counts: Vec<(u8, usize)>,
    suit_counts: AHashMap<Suit, usize>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for the given hand.
    pub fn new(hand: &'a Hand) -> Self {
        let mut counts = AHashMap::<u8, usize>::with_capacity(hand.len());
        for &rank in hand.ranks() {
            *counts.entry(rank).or_default() += 1;
        }

        let mut rank_counts = counts.into_iter().collect::<Vec<_>>();
        rank_counts.sort_unstable_by(|a, b| b.0.cmp(&a.0));

        let mut suit_counts = AHashMap::with_capacity(4);
        for &suit in hand.suits() {
            *suit_counts.entry(suit).or_default() += 1;
        }

        Self {
            hand,
            rank_counts,
            suit_counts,
        }
    }

    /// The evaluated hand.
    pub fn hand(&self) -> &Hand {
        self.hand
    }

    /// Checks if at least 5 cards have the same suit.
    pub fn flush(&self) -> bool {
        self.flush_suit().is_some()
    }

    /// Checks if the hand contains 5 cards with consecutive ranks.
    pub fn straight(&self) -> bool {
        straight_run(self.hand.ranks()).is_some()
    }

    /// Checks if the hand contains 5 cards of the same suit with consecutive
    /// ranks.
    pub fn straight_flush(&self) -> bool {
        self.straight_flush_run().is_some()
    }

    /// Checks if the hand contains an ace high straight flush.
    pub fn royal_flush(&self) -> bool {
        self.straight_flush_run().is_some_and(|run| run[0] == ACE)
    }

    /// Returns the highest rank that appears exactly n times.
    pub fn kind(&self, n: usize) -> Option<u8> {
        self.rank_counts
            .iter()
            .find(|(_, count)| *count == n)
            .map(|(rank, _)| *rank)
    }

    /// Returns the higher and the lower pair ranks if there are at least two
    /// pairs, with three pairs the lowest pair is ignored.
    pub fn two_pair(&self) -> Option<(u8, u8)> {
        let mut pairs = self
            .rank_counts
            .iter()
            .filter(|(_, count)| *count == 2)
            .map(|(rank, _)| *rank);

        match (pairs.next(), pairs.next()) {
            (Some(high), Some(low)) => Some((high, low)),
            _ => None,
        }
    }

    /// Returns the trips rank and the pair rank of a full house.
    ///
    /// With two trips the lower trips counts as the pair.
    pub fn full_house(&self) -> Option<(u8, u8)> {
        let trips = self.kind(3)?;
        let pair = self
            .rank_counts
            .iter()
            .find(|&&(rank, count)| rank != trips && count >= 2)
            .map(|(rank, _)| *rank)?;
        Some((trips, pair))
    }

    /// Classifies the hand and returns its value.
    pub fn hand_value(&self) -> HandValue {
        if let Some(run) = self.straight_flush_run() {
            if run[0] == ACE {
                HandValue::new(HandRank::RoyalFlush, None, None)
            } else {
                HandValue::new(HandRank::StraightFlush, None, Some(run.to_vec()))
            }
        } else if let Some(quads) = self.kind(4) {
            HandValue::new(
                HandRank::FourOfAKind,
                Some(vec![quads]),
                Some(self.best_five(&[(quads, 4)])),
            )
        } else if let Some((trips, pair)) = self.full_house() {
            HandValue::new(HandRank::FullHouse, Some(vec![trips, pair]), None)
        } else if let Some(ranks) = self.flush_ranks() {
            HandValue::new(HandRank::Flush, None, Some(ranks))
        } else if let Some(run) = straight_run(self.hand.ranks()) {
            HandValue::new(HandRank::Straight, None, Some(run.to_vec()))
        } else if let Some(trips) = self.kind(3) {
            // Trips rank only, hands with the same trips tie.
            HandValue::new(HandRank::ThreeOfAKind, Some(vec![trips]), None)
        } else if let Some((high, low)) = self.two_pair() {
            HandValue::new(
                HandRank::TwoPair,
                Some(vec![high, low]),
                Some(self.best_five(&[(high, 2), (low, 2)])),
            )
        } else if let Some(pair) = self.kind(2) {
            HandValue::new(
                HandRank::OnePair,
                Some(vec![pair]),
                Some(self.best_five(&[(pair, 2)])),
            )
        } else {
            HandValue::new(HandRank::HighCard, None, Some(self.best_five(&[])))
        }
    }

    /// Compares two hands.
    pub fn compare(a: &Hand, b: &Hand) -> Ordering {
        Evaluator::new(a).hand_value().cmp(&Evaluator::new(b).hand_value())
    }

    /// Returns all the hands that tie for the best value in input order.
    pub fn best_hand<'h, I>(hands: I) -> Vec<&'h Hand>
    where
        I: IntoIterator<Item = &'h Hand>,
    {
        let values = hands
            .into_iter()
            .map(|hand| (hand, Evaluator::new(hand).hand_value()));
        showdown(values).into_iter().map(|(hand, _)| hand).collect()
    }

    /// The suit with at least 5 cards.
    fn flush_suit(&self) -> Option<Suit> {
        self.suit_counts
            .iter()
            .filter(|(_, count)| **count >= HAND_SIZE)
            .max_by_key(|(_, count)| **count)
            .map(|(suit, _)| *suit)
    }

    /// The cards of the flush suit as a new hand.
    fn flush_hand(&self) -> Option<Hand> {
        let suit = self.flush_suit()?;
        let cards = self
            .hand
            .cards()
            .iter()
            .filter(|c| c.suit() == suit)
            .copied()
            .collect::<Vec<Card>>();
        Some(Hand::new(&cards))
    }

    /// The five highest ranks of the flush suit.
    fn flush_ranks(&self) -> Option<Vec<u8>> {
        self.flush_hand()
            .map(|hand| hand.ranks().iter().take(HAND_SIZE).copied().collect())
    }

    fn straight_flush_run(&self) -> Option<[u8; HAND_SIZE]> {
        self.flush_hand().and_then(|hand| straight_run(hand.ranks()))
    }

    /// The ranks of the best five cards given the ranks that make the
    /// category, the remaining cards are filled with the highest kickers.
    fn best_five(&self, made: &[(u8, usize)]) -> Vec<u8> {
        let mut five = Vec::with_capacity(HAND_SIZE);
        for &(rank, count) in made {
            five.extend(iter::repeat_n(rank, count));
        }

        let kickers = self
            .hand
            .ranks()
            .iter()
            .filter(|r| made.iter().all(|(m, _)| m != *r))
            .take(HAND_SIZE.saturating_sub(five.len()));
        five.extend(kickers);

        five.sort_unstable_by(|a, b| b.cmp(a));
        five
    }
}

/// Returns the ranks of the highest straight in descending order.
///
/// The ranks don't need to be distinct or contiguous, any 5 consecutive
/// values make a straight, an ace counts both as 14 and as 1.
fn straight_run(ranks: &[u8]) -> Option<[u8; HAND_SIZE]> {
    let mut mask = 0u16;
    for &rank in ranks {
        mask |= 1 << rank;
        if rank == ACE {
            mask |= 1 << ACE_LOW;
        }
    }

    let window = (1u16 << HAND_SIZE) - 1;
    (HAND_SIZE as u8..=ACE)
        .rev()
        .find(|&high| (mask >> (high + 1 - HAND_SIZE as u8)) & window == window)
        .map(|high| [high, high - 1, high - 2, high - 3, high - 4])
}

/// Returns the entries that tie for the best value preserving their order.
///
/// A better value replaces the current best entries, an equal value is
/// appended, and a worse value is discarded.
pub fn showdown<T, I>(entries: I) -> Vec<(T, HandValue)>
where
    I: IntoIterator<Item = (T, HandValue)>,
{
    let mut best: Vec<(T, HandValue)> = Vec::new();

    for (item, value) in entries {
        match best.first().map(|(_, best_value)| value.cmp(best_value)) {
            None | Some(Ordering::Greater) => {
                best.clear();
                best.push((item, value));
            }
            Some(Ordering::Equal) => best.push((item, value)),
            Some(Ordering::Less) => {}
        }
    }

    best
}
