// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker hand evaluator.
//!
//! Evaluates five cards poker hands and selects the best five cards out of
//! larger hands, including hands with wild cards that stand for any card of
//! a color.
//!
//! A hand value is totally ordered, use [HandValue] to compare two hands:
//!
//! ```
//! # use wildpoker_eval::*;
//! let fh = parse_cards("TD TC TH 7C 7D").unwrap();
//! let fk = parse_cards("9D 9H 9S 9C 7D").unwrap();
//! let v1 = HandValue::eval(&fh).unwrap();
//! let v2 = HandValue::eval(&fk).unwrap();
//! assert_eq!(v1.rank(), HandRank::FullHouse);
//! assert!(v2 > v1);
//! ```
//!
//! [best_hand] returns the best 5 cards hand out of 5 or more cards:
//!
//! ```
//! # use wildpoker_eval::*;
//! let cards = parse_cards("TD TC TH 7C 7D 8C 8S").unwrap();
//! let mut hand = best_hand(&cards).unwrap();
//! hand.sort();
//! assert_eq!(hand, parse_cards("8C 8S TC TD TH").unwrap().as_slice());
//! ```
//!
//! [best_wild_hand] does the same for hands with wild cards, trying all the
//! cards a wild card could be replaced with:
//!
//! ```
//! # use wildpoker_eval::*;
//! let tokens = parse_tokens("6C 7C 8C 9C TC 5C ?B").unwrap();
//! let hand = best_wild_hand(&tokens).unwrap();
//! assert_eq!(HandValue::eval(&hand).unwrap().rank(), HandRank::StraightFlush);
//! ```
//!
//! and [poker] returns all the winning hands:
//!
//! ```
//! # use wildpoker_eval::*;
//! let hands = [
//!     parse_cards("6C 7C 8C 9C TC").unwrap(),
//!     parse_cards("6D 7D 8D 9D TD").unwrap(),
//!     parse_cards("9D 9H 9S 9C 7D").unwrap(),
//! ];
//! assert_eq!(poker(&hands).unwrap().len(), 2);
//! ```
//!
//! The **`parallel`** feature enables `par_best_wild_hand` that splits the
//! wild cards substitutions across threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Hand, HandRank, HandValue};

mod error;
pub use error::{Error, Result};

mod select;
pub use select::{best_hand, best_hand_value};

mod wild;
pub use wild::best_wild_hand;
#[cfg(feature = "parallel")]
pub use wild::par_best_wild_hand;

mod winner;
pub use winner::poker;

// Reexport cards types.
pub use wildpoker_cards::{
    Card, Color, Deck, Rank, Suit, Token, check_distinct, parse_cards, parse_tokens,
};
