// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wild cards and hand tokens.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Error, Rank, Result, Suit};

/// Card color, a wild card can be replaced by any card of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Spades and clubs.
    Black,
    /// Hearts and diamonds.
    Red,
}

impl Color {
    /// The suits with this color.
    pub fn suits(&self) -> [Suit; 2] {
        match self {
            Color::Black => [Suit::Spades, Suit::Clubs],
            Color::Red => [Suit::Diamonds, Suit::Hearts],
        }
    }

    /// All the cards with this color, ordered by rank.
    pub fn cards(&self) -> Vec<Card> {
        let suits = self.suits();
        Rank::ranks()
            .flat_map(|r| suits.into_iter().map(move |s| Card::new(r, s)))
            .collect()
    }
}

/// A token in a hand, either a concrete card or a wild card of some color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A wild card that stands for any card of the given color.
    Wild(Color),
}

impl Token {
    /// Checks if this is a wild card.
    pub fn is_wild(&self) -> bool {
        matches!(self, Token::Wild(_))
    }

    /// The cards this token can be replaced with.
    ///
    /// A concrete card is only replaced by itself.
    pub fn replacements(&self) -> Vec<Card> {
        match self {
            Token::Card(card) => vec![*card],
            Token::Wild(color) => color.cards(),
        }
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Wild(Color::Black) => write!(f, "?B"),
            Token::Wild(Color::Red) => write!(f, "?R"),
        }
    }
}

impl FromStr for Token {
    type Err = Error;

    /// Parses a card token or one of the `?B` and `?R` wild cards.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "?B" => Ok(Token::Wild(Color::Black)),
            "?R" => Ok(Token::Wild(Color::Red)),
            s if s.starts_with('?') => Err(Error::Format(format!("unknown wild card {s:?}"))),
            s => s.parse().map(Token::Card),
        }
    }
}

/// Parses a whitespace separated list of tokens like `"6C 7C 8C 9C TC 5C ?B"`.
pub fn parse_tokens(s: &str) -> Result<Vec<Token>> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn parse_wild_tokens() {
        assert_eq!("?B".parse::<Token>(), Ok(Token::Wild(Color::Black)));
        assert_eq!("?R".parse::<Token>(), Ok(Token::Wild(Color::Red)));
        assert_eq!(
            "QH".parse::<Token>(),
            Ok(Token::Card(Card::new(Rank::Queen, Suit::Hearts)))
        );

        for token in ["?G", "?", "?BB", "?b", "B?"] {
            assert!(
                matches!(token.parse::<Token>(), Err(Error::Format(_))),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn parse_token_list() {
        let tokens = parse_tokens("TD TC 5H 5C 7C ?R ?B").unwrap();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens.iter().filter(|t| t.is_wild()).count(), 2);
        assert_eq!(tokens[5], Token::Wild(Color::Red));

        let s = tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert_eq!(s.join(" "), "TD TC 5H 5C 7C ?R ?B");
    }

    #[test]
    fn color_replacements() {
        for color in [Color::Black, Color::Red] {
            let cards = Token::Wild(color).replacements();
            assert_eq!(cards.len(), 26);
            assert!(cards.iter().all(|c| c.color() == color));

            let unique = cards.iter().collect::<AHashSet<_>>();
            assert_eq!(unique.len(), 26);
        }

        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Token::from(card).replacements(), vec![card]);
    }
}
