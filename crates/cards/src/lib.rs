// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use wildpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::new(Rank::Ten, Suit::Diamonds));
//! ```
//!
//! a [Token] type for hands that contain wild cards, a wild card `?B` stands
//! for any black card (spades and clubs) and a wild card `?R` for any red card
//! (hearts and diamonds):
//!
//! ```
//! # use wildpoker_cards::{parse_tokens, Color, Token};
//! let tokens = parse_tokens("6C 7C 8C 9C TC 5C ?B").unwrap();
//! assert_eq!(tokens[6], Token::Wild(Color::Black));
//! assert_eq!(tokens[6].replacements().len(), 26);
//! ```
//!
//! and a [Deck] type for shuffling and dealing hands:
//!
//! ```
//! # use wildpoker_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hands = deck.deal_hands(4, 5).unwrap();
//! assert_eq!(hands.len(), 4);
//! assert_eq!(deck.count(), Deck::SIZE - 20);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, check_distinct, parse_cards};

mod error;
pub use error::{Error, Result};

mod token;
pub use token::{Color, Token, parse_tokens};
