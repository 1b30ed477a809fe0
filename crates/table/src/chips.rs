// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chips stacks and bets.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, TableError};

/// An amount of chips, a player stack or a bet.
///
/// Stacks only change through [Chips::deposit] and [Chips::withdraw] that
/// reject zero amounts, overflows, and withdrawals larger than the stack.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Chips(u32);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Returns this amount if it is positive.
    pub fn positive(self) -> Result<Chips> {
        if self == Chips::ZERO {
            Err(TableError::InvalidAmount)
        } else {
            Ok(self)
        }
    }

    /// Adds a positive amount to this stack, returns the new stack.
    pub fn deposit(&mut self, amount: Chips) -> Result<Chips> {
        let amount = amount.positive()?;
        self.0 = self
            .0
            .checked_add(amount.0)
            .ok_or(TableError::InvalidAmount)?;
        Ok(*self)
    }

    /// Takes a positive amount from this stack, returns the amount taken.
    ///
    /// The whole stack can be taken leaving the stack empty.
    pub fn withdraw(&mut self, amount: Chips) -> Result<Chips> {
        let amount = amount.positive()?;
        if amount > *self {
            return Err(TableError::NotEnoughChips { chips: *self });
        }

        self.0 -= amount.0;
        Ok(amount)
    }
}

impl From<u32> for Chips {
    fn from(val: u32) -> Self {
        Chips(val)
    }
}

/// Formats the amount with thousands separators.
impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, c) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{grouped}")
    }
}
