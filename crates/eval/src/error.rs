// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the hand evaluation functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The evaluator was given a hand that doesn't have 5 cards.
    #[error("A hand must have 5 cards, got {0}")]
    Arity(usize),
    /// A best hand selection needs at least 5 cards.
    #[error("At least 5 cards are needed to select a hand, got {0}")]
    TooFewCards(usize),
    /// No hands to compare.
    #[error("No hands to compare")]
    EmptyInput,
    /// The number of substitutions doesn't fit in a usize.
    #[error("Too many wild cards: {0}")]
    TooManyWildCards(usize),
}
