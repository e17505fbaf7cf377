// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel wild cards substitution.
use log::debug;
use std::thread;

use wildpoker_cards::Token;

use super::Substitutions;
use crate::{Error, Hand, Result};

/// Parallel version of [best_wild_hand](crate::best_wild_hand).
///
/// The substitutions are split in `num_tasks` ranges evaluated by scoped
/// threads, the result is the same hand returned by
/// [best_wild_hand](crate::best_wild_hand).
///
/// Panics if `num_tasks` is zero.
pub fn par_best_wild_hand(tokens: &[Token], num_tasks: usize) -> Result<Hand> {
    assert!(num_tasks > 0);

    let subs = Substitutions::new(tokens)?;
    let per_task = subs.len().div_ceil(num_tasks);
    debug!(
        "Evaluating {} substitutions with {num_tasks} tasks",
        subs.len()
    );

    let results = thread::scope(|s| {
        let handles = (0..num_tasks)
            .map(|task_id| {
                let start = (task_id * per_task).min(subs.len());
                let end = (start + per_task).min(subs.len());
                let subs = &subs;
                s.spawn(move || subs.best_in_range(start..end))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .filter_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect::<Vec<_>>()
    });

    // Ties go to the lowest substitution index like in the sequential scan.
    results
        .into_iter()
        .max_by(|c1, c2| c1.key().cmp(&c2.key()).then(c2.nth.cmp(&c1.nth)))
        .map(|best| best.hand)
        .ok_or(Error::TooFewCards(tokens.len()))
}
