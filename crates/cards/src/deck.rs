// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashSet;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Color, Error, Result};

/// A Poker card.
///
/// A card is packed in a single byte with the following format:
///
/// ```text
///   +--------+
///   |xxrrrrss|
///   +--------+
///   r = rank value of card (deuce=2,trey=3,four=4,...,ace=14)
///   s = suit of card (clubs=0,diamonds=1,hearts=2,spades=3)
/// ```
///
/// The derived ordering sorts cards by rank first and then by suit, it is used
/// only to print hands in a canonical order, hands strength never depends on
/// suits order.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
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
        Rank::from_value(self.0 >> 2).unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit().color()
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

impl FromStr for Card {
    type Err = Error;

    /// Parses a two characters token like `TC` or `2H`.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::from_symbol(r)?;
                let suit = Suit::from_symbol(s)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(Error::Format(format!("expected 2 characters got {s:?}"))),
        }
    }
}

/// Parses a whitespace separated list of cards like `"6C 7C 8C 9C TC"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split_whitespace().map(str::parse).collect()
}

/// Checks that no card appears twice in `cards`.
///
/// Hand evaluation never calls this, callers that need to reject impossible
/// hands can run it before evaluating.
pub fn check_distinct(cards: &[Card]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(cards.len());
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(card) => Err(Error::DuplicateCard(*card)),
        None => Ok(()),
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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
    /// Rank symbols ordered from deuce to ace.
    pub const SYMBOLS: &'static str = "23456789TJQKA";

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric value of this rank, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given numeric value.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    fn from_symbol(symbol: char) -> Result<Rank> {
        Rank::SYMBOLS
            .chars()
            .zip(Rank::ranks())
            .find_map(|(c, r)| (c == symbol).then_some(r))
            .ok_or_else(|| Error::Format(format!("unknown rank {symbol:?}")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let idx = (self.value() - Rank::Deuce.value()) as usize;
        write!(f, "{}", &Rank::SYMBOLS[idx..idx + 1])
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Spades and clubs are black, hearts and diamonds are red.
    pub fn color(&self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    fn from_symbol(symbol: char) -> Result<Suit> {
        match symbol {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(Error::Format(format!("unknown suit {symbol:?}"))),
        }
    }
}

/// A cards Deck
///
/// A deck is always built on demand, each call to [Deck::default] returns a
/// new ordered deck with all 52 cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `num_hands` hands with `n` cards each.
    pub fn deal_hands(&mut self, num_hands: usize, n: usize) -> Result<Vec<Vec<Card>>> {
        let available = self.cards.len();
        match num_hands.checked_mul(n) {
            Some(requested) if requested <= available => {}
            requested => {
                return Err(Error::NotEnoughCards {
                    requested: requested.unwrap_or(usize::MAX),
                    available,
                });
            }
        }

        let hands = (0..num_hands)
            .map(|_| {
                let start = self.cards.len() - n;
                self.cards.split_off(start)
            })
            .collect();

        Ok(hands)
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
