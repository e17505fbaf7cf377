// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection for hands with wild cards.
//!
//! Each wild card is replaced by all the cards of its color, for each one of
//! the resulting hands the best 5 cards subset is selected and the best one
//! of these subsets is returned. The number of hands grows as 26^k with the
//! number k of wild cards.
use ahash::AHashSet;
use log::debug;
use std::ops::Range;

use wildpoker_cards::{Card, Token};

use crate::{Error, Hand, HandValue, Result, select::best_subset};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_best_wild_hand;

/// Returns the best five cards hand for cards that may contain wild cards.
///
/// The returned hand is sorted and never contains wild cards. A wild card is
/// never replaced by a card already in the hand, and substitutions where two
/// wild cards get the same card are used only if there is no other choice.
/// If more than one substitution gives the best value the first one is
/// returned, where substitutions are ordered like the digits of a counter with
/// the first token as the most significant digit.
pub fn best_wild_hand(tokens: &[Token]) -> Result<Hand> {
    let subs = Substitutions::new(tokens)?;
    debug!(
        "Evaluating {} substitutions for {} wild cards",
        subs.len(),
        subs.wilds.len()
    );

    subs.best_in_range(0..subs.len())
        .map(|best| best.hand)
        .ok_or(Error::TooFewCards(tokens.len()))
}

/// The best hand found in a range of substitutions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    /// The substitution index.
    pub(crate) nth: usize,
    /// The sorted best hand.
    pub(crate) hand: Hand,
    /// The hand value.
    pub(crate) value: HandValue,
    /// No wild card was replaced with a card used by another token.
    pub(crate) distinct: bool,
}

impl Candidate {
    /// Distinct substitutions first, then the hand value.
    pub(crate) fn key(&self) -> (bool, HandValue) {
        (self.distinct, self.value)
    }
}

/// All the ways of replacing wild cards with concrete cards.
///
/// The nth substitution is decoded as a mixed radix number where the digit
/// for each token is an index in its replacements set.
pub(crate) struct Substitutions {
    replacements: Vec<Vec<Card>>,
    wilds: Vec<usize>,
    len: usize,
}

impl Substitutions {
    pub(crate) fn new(tokens: &[Token]) -> Result<Self> {
        if tokens.len() < 5 {
            return Err(Error::TooFewCards(tokens.len()));
        }

        let concrete = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Card(card) => Some(*card),
                Token::Wild(_) => None,
            })
            .collect::<AHashSet<_>>();

        let replacements = tokens
            .iter()
            .map(|t| match t {
                Token::Card(card) => vec![*card],
                Token::Wild(_) => {
                    let cards = t.replacements();
                    let unused = cards
                        .iter()
                        .copied()
                        .filter(|c| !concrete.contains(c))
                        .collect::<Vec<_>>();

                    // All the cards of this color are in the hand.
                    if unused.is_empty() { cards } else { unused }
                }
            })
            .collect::<Vec<_>>();

        let wilds = (0..tokens.len()).filter(|&i| tokens[i].is_wild()).collect::<Vec<_>>();
        let len = replacements
            .iter()
            .try_fold(1usize, |acc, r| acc.checked_mul(r.len()))
            .ok_or(Error::TooManyWildCards(wilds.len()))?;

        Ok(Self {
            replacements,
            wilds,
            len,
        })
    }

    /// Number of substitutions.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Writes the nth substitution into `out`.
    fn fill(&self, mut nth: usize, out: &mut [Card]) {
        for (card, cards) in out.iter_mut().zip(&self.replacements).rev() {
            *card = cards[nth % cards.len()];
            nth /= cards.len();
        }
    }

    /// Checks that no wild card got a card used by another token.
    fn is_distinct(&self, cards: &[Card]) -> bool {
        self.wilds.iter().all(|&w| {
            cards
                .iter()
                .enumerate()
                .all(|(i, c)| i == w || *c != cards[w])
        })
    }

    /// Returns the first best hand in the given substitutions range.
    pub(crate) fn best_in_range(&self, range: Range<usize>) -> Option<Candidate> {
        let mut cards = self.replacements.iter().map(|r| r[0]).collect::<Vec<_>>();
        let mut best = None::<Candidate>;

        for nth in range {
            self.fill(nth, &mut cards);
            let (mut hand, value) = best_subset(&cards);
            hand.sort();

            let candidate = Candidate {
                nth,
                hand,
                value,
                distinct: self.is_distinct(&cards),
            };

            if best.is_none_or(|b| candidate.key() > b.key()) {
                best = Some(candidate);
            }
        }

        best
    }
}
