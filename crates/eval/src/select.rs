// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use wildpoker_cards::Card;

use crate::{Error, Hand, HandValue, Result};

/// Returns the best five cards hand out of `cards`.
///
/// All the 5 cards subsets are evaluated, if more than one subset has the best
/// value the first one in the cards order is returned.
pub fn best_hand(cards: &[Card]) -> Result<Hand> {
    best_hand_value(cards).map(|(hand, _)| hand)
}

/// Returns the best five cards hand out of `cards` with its value.
pub fn best_hand_value(cards: &[Card]) -> Result<(Hand, HandValue)> {
    if cards.len() < 5 {
        return Err(Error::TooFewCards(cards.len()));
    }

    Ok(best_subset(cards))
}

/// Evaluates all the 5 cards subsets, `cards` must have at least 5 cards.
pub(crate) fn best_subset(cards: &[Card]) -> (Hand, HandValue) {
    debug_assert!(cards.len() >= 5);

    let n = cards.len();
    let mut best = None::<(Hand, HandValue)>;

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                        let value = HandValue::eval_hand(&hand);
                        if best.is_none_or(|(_, v)| value > v) {
                            best = Some((hand, value));
                        }
                    }
                }
            }
        }
    }

    // There is at least one subset.
    best.unwrap_or_else(|| unreachable!("no 5 cards subset for {} cards", n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;
    use rand::{SeedableRng, rngs::StdRng};
    use wildpoker_cards::{Deck, parse_cards};

    fn sorted_best(s: &str) -> Vec<String> {
        let mut hand = best_hand(&parse_cards(s).unwrap()).unwrap();
        hand.sort();
        hand.iter().map(|c| c.to_string()).collect()
    }

    /// All the k-subsets of `cards`.
    fn subsets(cards: &[Card], k: usize) -> Vec<Vec<Card>> {
        if k == 0 {
            return vec![vec![]];
        }

        match cards.split_first() {
            Some((first, rest)) if rest.len() + 1 >= k => {
                let mut with_first = subsets(rest, k - 1);
                with_first.iter_mut().for_each(|s| s.insert(0, *first));
                with_first.extend(subsets(rest, k));
                with_first
            }
            _ => vec![],
        }
    }

    #[test]
    fn straight_flush_beats_straights() {
        assert_eq!(
            sorted_best("6C 7C 8C 9C TC 5C JS"),
            ["6C", "7C", "8C", "9C", "TC"]
        );
    }

    #[test]
    fn full_house_from_two_pairs() {
        assert_eq!(
            sorted_best("TD TC TH 7C 7D 8C 8S"),
            ["8C", "8S", "TC", "TD", "TH"]
        );
    }

    #[test]
    fn four_of_a_kind_with_kicker() {
        assert_eq!(
            sorted_best("JD TC TH 7C 7D 7S 7H"),
            ["7C", "7D", "7H", "7S", "JD"]
        );
    }

    #[test]
    fn plays_the_board() {
        let cards = parse_cards("2S 2H TC JD QH KS AC").unwrap();
        let (_, value) = best_hand_value(&cards).unwrap();
        assert_eq!(value.rank(), HandRank::Straight);
        assert_eq!(value.tiebreaks(), &[14]);
    }

    #[test]
    fn six_and_five_cards() {
        let cards = parse_cards("AS AH KS KH QS JS").unwrap();
        let (_, value) = best_hand_value(&cards).unwrap();
        assert_eq!(value.rank(), HandRank::TwoPair);
        assert_eq!(&value.tiebreaks()[..2], &[14, 13]);

        let cards = parse_cards("AS AH KS KH QS").unwrap();
        let hand = best_hand(&cards).unwrap();
        assert_eq!(hand.as_slice(), cards.as_slice());
    }

    #[test]
    fn first_best_subset_on_ties() {
        // Both 2C and 2D complete the same straight, the first one is returned.
        let cards = parse_cards("AS KH QD JC TS 2C 2D").unwrap();
        let hand = best_hand(&cards).unwrap();
        assert_eq!(hand.as_slice(), &cards[..5]);
    }

    #[test]
    fn too_few_cards() {
        let cards = parse_cards("AS AH KS KH").unwrap();
        assert_eq!(best_hand(&cards), Err(Error::TooFewCards(4)));
        assert_eq!(best_hand(&[]), Err(Error::TooFewCards(0)));
    }

    #[test]
    fn best_subset_is_maximal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = deck.deal_hands(1, 7).unwrap().remove(0);
            let (hand, value) = best_hand_value(&cards).unwrap();

            assert!(hand.iter().all(|c| cards.contains(c)));
            assert_eq!(HandValue::eval(&hand).unwrap(), value);

            let all = subsets(&cards, 5);
            assert_eq!(all.len(), 21);
            assert!(all.iter().all(|s| HandValue::eval(s).unwrap() <= value));
        }
    }
}
