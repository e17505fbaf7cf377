// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winning hands selection.
use std::cmp::Ordering;

use wildpoker_cards::Card;

use crate::{Error, HandValue, Result};

/// Returns all the hands with the highest value.
///
/// Each hand must have exactly 5 cards, winners keep their relative order.
pub fn poker<H: AsRef<[Card]>>(hands: &[H]) -> Result<Vec<&H>> {
    let (first, rest) = hands.split_first().ok_or(Error::EmptyInput)?;

    let mut best = HandValue::eval(first.as_ref())?;
    let mut winners = vec![first];

    for hand in rest {
        let value = HandValue::eval(hand.as_ref())?;
        match value.cmp(&best) {
            Ordering::Greater => {
                best = value;
                winners.clear();
                winners.push(hand);
            }
            Ordering::Equal => winners.push(hand),
            Ordering::Less => {}
        }
    }

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildpoker_cards::parse_cards;

    fn hands(hs: &[&str]) -> Vec<Vec<Card>> {
        hs.iter().map(|h| parse_cards(h).unwrap()).collect()
    }

    #[test]
    fn straight_flushes_tie() {
        let hs = hands(&[
            "6C 7C 8C 9C TC",
            "6D 7D 8D 9D TD",
            "9D 9H 9S 9C 7D",
            "TD TC TH 7C 7D",
        ]);

        let winners = poker(&hs).unwrap();
        assert_eq!(winners, vec![&hs[0], &hs[1]]);
    }

    #[test]
    fn single_winner() {
        let hs = hands(&["TD TC TH 7C 7D", "9D 9H 9S 9C 7D", "2S 3S 4S 5S 7H"]);
        assert_eq!(poker(&hs).unwrap(), vec![&hs[1]]);

        // A later stronger hand resets the winners.
        let hs = hands(&["2S 2H 4S 5S 7H", "2C 2D 4C 5C 7D", "AS AH 4D 5H 7C"]);
        assert_eq!(poker(&hs).unwrap(), vec![&hs[2]]);

        let hs = hands(&["6C 7C 8C 9C TC"]);
        assert_eq!(poker(&hs).unwrap(), vec![&hs[0]]);
    }

    #[test]
    fn arrays_and_slices() {
        let h1: [Card; 5] = parse_cards("AS AH 4D 5H 7C").unwrap().try_into().unwrap();
        let h2: [Card; 5] = parse_cards("KS KH 4C 5C 7D").unwrap().try_into().unwrap();
        assert_eq!(poker(&[h1, h2]).unwrap(), vec![&h1]);
    }

    #[test]
    fn poker_errors() {
        let empty: Vec<Vec<Card>> = vec![];
        assert_eq!(poker(&empty), Err(Error::EmptyInput));

        let hs = hands(&["6C 7C 8C 9C TC", "6D 7D 8D 9D"]);
        assert_eq!(poker(&hs), Err(Error::Arity(4)));
    }
}
