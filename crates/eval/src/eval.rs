// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluator.
//!
//! A hand value is made of a [HandRank] category followed by a list of
//! tie-break ranks, two values compare by category first and then by the
//! tie-break ranks from left to right:
//!
//! | Category        | Tie-break ranks                          |
//! |-----------------|------------------------------------------|
//! | Straight Flush  | high card                                |
//! | Four of a Kind  | quads rank, kicker                       |
//! | Full House      | trips rank, pair rank                    |
//! | Flush           | all ranks                                |
//! | Straight        | high card                                |
//! | Three of a Kind | trips rank, all ranks                    |
//! | Two Pairs       | high pair rank, low pair rank, all ranks |
//! | One Pair        | pair rank, all ranks                     |
//! | High Card       | all ranks                                |
//!
//! Where "all ranks" is the list of the five ranks sorted from highest to
//! lowest. In a A-2-3-4-5 straight (the wheel) the ace counts as 1.
use serde::{Deserialize, Serialize};
use std::fmt;

use wildpoker_cards::Card;

use crate::{Error, Result};

/// A five cards hand.
pub type Hand = [Card; 5];

/// The rank value of an ace in the A-2-3-4-5 straight.
const LOW_ACE: u8 = 1;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
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
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A hand value, a higher value is a stronger hand.
///
/// The longest tie-break list is for two pairs (2 pair ranks + 5 ranks),
/// shorter lists are padded with zeros so that the derived ordering compares
/// the category first and then the tie-break ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreaks: [u8; 7],
    len: u8,
}

impl HandValue {
    /// Evaluates a five cards hand.
    ///
    /// Returns an error if the hand doesn't have exactly 5 cards, use
    /// [best_hand](crate::best_hand) for larger hands.
    pub fn eval(cards: &[Card]) -> Result<Self> {
        let hand: &Hand = cards.try_into().map_err(|_| Error::Arity(cards.len()))?;
        Ok(Self::eval_hand(hand))
    }

    /// Evaluates a five cards hand.
    pub fn eval_hand(hand: &Hand) -> Self {
        let ranks = card_ranks(hand);
        let straight = is_straight(&ranks);
        let flush = is_flush(hand);

        if straight && flush {
            Self::new(HandRank::StraightFlush, &[ranks[0]])
        } else if let Some(quads) = kind(4, &ranks) {
            let kicker = kind(1, &ranks).unwrap_or_default();
            Self::new(HandRank::FourOfAKind, &[quads, kicker])
        } else if let (Some(trips), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
            Self::new(HandRank::FullHouse, &[trips, pair])
        } else if flush {
            Self::new(HandRank::Flush, &ranks)
        } else if straight {
            Self::new(HandRank::Straight, &[ranks[0]])
        } else if let Some(trips) = kind(3, &ranks) {
            Self::with_ranks(HandRank::ThreeOfAKind, &[trips], &ranks)
        } else if let Some((high, low)) = two_pair(&ranks) {
            Self::with_ranks(HandRank::TwoPair, &[high, low], &ranks)
        } else if let Some(pair) = kind(2, &ranks) {
            Self::with_ranks(HandRank::OnePair, &[pair], &ranks)
        } else {
            Self::new(HandRank::HighCard, &ranks)
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks compared when two hands have the same category.
    pub fn tiebreaks(&self) -> &[u8] {
        &self.tiebreaks[..self.len as usize]
    }

    fn new(rank: HandRank, tiebreaks: &[u8]) -> Self {
        Self::with_ranks(rank, tiebreaks, &[])
    }

    fn with_ranks(rank: HandRank, head: &[u8], ranks: &[u8]) -> Self {
        let mut tiebreaks = [0; 7];
        let len = head.len() + ranks.len();
        tiebreaks[..head.len()].copy_from_slice(head);
        tiebreaks[head.len()..len].copy_from_slice(ranks);

        Self {
            rank,
            tiebreaks,
            len: len as u8,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreaks())
    }
}

/// Returns the hand ranks sorted from highest to lowest.
///
/// The ace of a A-2-3-4-5 straight is ranked as 1 so that the straight
/// ranks `[5, 4, 3, 2, 1]`.
pub fn card_ranks(hand: &Hand) -> [u8; 5] {
    let mut ranks = (*hand).map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    if ranks == [14, 5, 4, 3, 2] {
        [5, 4, 3, 2, LOW_ACE]
    } else {
        ranks
    }
}

/// Checks if the ranks are five distinct consecutive values.
pub fn is_straight(ranks: &[u8]) -> bool {
    let mut distinct = ranks.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    match distinct.as_slice() {
        [min, .., max] => distinct.len() == 5 && max - min == 4,
        _ => false,
    }
}

/// Checks if all the cards have the same suit.
pub fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Returns the first rank that appears exactly `n` times in `ranks`.
pub fn kind(n: usize, ranks: &[u8]) -> Option<u8> {
    ranks
        .iter()
        .copied()
        .find(|r| ranks.iter().filter(|x| *x == r).count() == n)
}

/// Returns the high and low pair ranks if `ranks` has two distinct pairs.
pub fn two_pair(ranks: &[u8]) -> Option<(u8, u8)> {
    let high = kind(2, ranks)?;
    let reversed = ranks.iter().rev().copied().collect::<Vec<_>>();
    let low = kind(2, &reversed)?;
    (low != high).then_some((high, low))
}
