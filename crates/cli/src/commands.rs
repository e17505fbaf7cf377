// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line commands, each command returns the lines to print.
use anyhow::{Context, Result, bail};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use wildpoker_eval::{
    Card, Color, Deck, HandValue, Token, best_hand_value, best_wild_hand, check_distinct,
    par_best_wild_hand, parse_cards, parse_tokens,
};

/// Random deal parameters.
#[derive(Debug)]
pub struct DealConfig {
    /// Number of hands.
    pub hands: usize,
    /// Number of cards per hand.
    pub cards: usize,
    /// Number of wild cards added to each hand.
    pub wild: usize,
    /// Optional seed for the deck shuffle.
    pub seed: Option<u64>,
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
}

/// Evaluates a five cards hand.
pub fn rank(cards: &str) -> Result<Vec<String>> {
    let cards = parse_cards(cards)?;
    let value = HandValue::eval(&cards)?;
    Ok(vec![format!("{}: {value}", format_cards(&cards))])
}

/// Selects the best five cards.
pub fn best(cards: &str, strict: bool) -> Result<Vec<String>> {
    let cards = parse_cards(cards)?;
    if strict {
        check_distinct(&cards)?;
    }

    let (hand, value) = best_hand_value(&cards)?;
    Ok(vec![format!("{}: {value}", format_cards(&hand))])
}

/// Selects the best five cards out of cards with wild cards.
pub fn wild(tokens: &str, tasks: usize) -> Result<Vec<String>> {
    let tokens = parse_tokens(tokens)?;
    let hand = if tasks > 1 {
        par_best_wild_hand(&tokens, tasks)?
    } else {
        best_wild_hand(&tokens)?
    };

    let value = HandValue::eval_hand(&hand);
    Ok(vec![format!("{}: {value}", format_cards(&hand))])
}

/// Picks the winning hands.
pub fn poker(hands: &[String], strict: bool) -> Result<Vec<String>> {
    let hands = hands
        .iter()
        .map(|h| parse_cards(h).with_context(|| format!("Invalid hand {h:?}")))
        .collect::<Result<Vec<_>>>()?;

    if strict {
        check_distinct(&hands.concat())?;
    }

    let winners = wildpoker_eval::poker(&hands)?;
    winners
        .into_iter()
        .map(|h| -> Result<String> {
            Ok(format!("{}: {}", format_cards(h), HandValue::eval(h)?))
        })
        .collect()
}

/// Deals random hands, selects the best five cards for each and prints the
/// winners.
pub fn deal(config: &DealConfig) -> Result<Vec<String>> {
    if config.cards + config.wild < 5 {
        bail!(
            "A hand needs at least 5 cards, got {} cards and {} wild cards",
            config.cards,
            config.wild
        );
    }

    let mut deck = match config.seed {
        Some(seed) => Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::new_and_shuffled(&mut rand::rng()),
    };

    let dealt = deck.deal_hands(config.hands, config.cards)?;
    info!(
        "Dealt {} hands with {} cards and {} wild cards",
        config.hands, config.cards, config.wild
    );

    let mut lines = Vec::with_capacity(dealt.len() + 1);
    let mut best = Vec::with_capacity(dealt.len());
    for cards in dealt {
        let mut tokens = cards.into_iter().map(Token::from).collect::<Vec<_>>();
        tokens.extend(
            [Color::Black, Color::Red]
                .into_iter()
                .cycle()
                .take(config.wild)
                .map(Token::Wild),
        );

        let hand = best_wild_hand(&tokens)?;
        lines.push(format!(
            "{} => {}: {}",
            format_tokens(&tokens),
            format_cards(&hand),
            HandValue::eval_hand(&hand)
        ));
        best.push(hand);
    }

    let winners = wildpoker_eval::poker(&best)?;
    let winners = winners
        .iter()
        .map(|h| format_cards(h.as_slice()))
        .collect::<Vec<_>>();
    lines.push(format!("Winners: {}", winners.join(", ")));

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_hand() {
        let lines = rank("6C 7C 8C 9C TC").unwrap();
        assert_eq!(lines, ["6C 7C 8C 9C TC: Straight Flush [10]"]);

        assert!(rank("6C 7C 8C 9C").is_err());
        assert!(rank("6C 7C 8C 9C 1C").is_err());
    }

    #[test]
    fn best_hand() {
        let lines = best("6C 7C 8C 9C TC 5C JS", false).unwrap();
        assert_eq!(lines, ["6C 7C 8C 9C TC: Straight Flush [10]"]);

        assert!(best("6C 7C 8C 9C TC 6C", false).is_ok());
        assert!(best("6C 7C 8C 9C TC 6C", true).is_err());
    }

    #[test]
    fn wild_hand() {
        let seq = wild("TD TC 5H 5C 7C ?R ?B", 1).unwrap();
        let par = wild("TD TC 5H 5C 7C ?R ?B", 4).unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq, ["7C TC TD TH TS: Four of a Kind [10, 7]"]);

        assert!(wild("TD TC ?G 5C 7C", 1).is_err());
    }

    #[test]
    fn poker_winners() {
        let hands = [
            "6C 7C 8C 9C TC",
            "6D 7D 8D 9D TD",
            "9D 9H 9S 9C 7D",
            "TD TC TH 7C 7D",
        ]
        .map(String::from);

        let lines = poker(&hands, false).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("6C 7C 8C 9C TC"));
        assert!(lines[1].starts_with("6D 7D 8D 9D TD"));

        // 9D and 7D are in more than one hand.
        assert!(poker(&hands, true).is_err());
        assert!(poker(&[], false).is_err());
    }

    #[test]
    fn seeded_deal() {
        let config = DealConfig {
            hands: 3,
            cards: 7,
            wild: 1,
            seed: Some(5),
        };

        let lines = deal(&config).unwrap();
        assert_eq!(lines.len(), 4);
        assert!(lines[..3].iter().all(|l| l.contains("?B")));
        assert!(lines[3].starts_with("Winners: "));
        assert_eq!(lines, deal(&config).unwrap());

        let config = DealConfig {
            hands: 10,
            cards: 6,
            wild: 0,
            seed: None,
        };
        assert!(deal(&config).is_err());

        let config = DealConfig {
            hands: 2,
            cards: 3,
            wild: 1,
            seed: None,
        };
        assert!(deal(&config).is_err());
    }
}
