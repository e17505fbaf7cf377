// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when parsing cards or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token is not a valid card or wild card.
    #[error("Invalid card token: {0}")]
    Format(String),
    /// The deck doesn't have enough cards left.
    #[error("Not enough cards in deck: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
    /// A card appears more than once.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
}
