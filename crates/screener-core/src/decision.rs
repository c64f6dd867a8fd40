//! Ordered decision tables for multi-way checks.
//!
//! Rows are evaluated top to bottom; the first matching predicate decides
//! the outcome. When no row matches the fallback applies.

use crate::types::Outcome;

/// A row predicate.
pub type Predicate<I> = fn(&I) -> bool;

/// A first-match-wins table of `(predicate, outcome)` rows.
pub struct DecisionTable<I: 'static> {
    rows: &'static [(Predicate<I>, Outcome)],
    fallback: Outcome,
}

impl<I: 'static> DecisionTable<I> {
    pub const fn new(rows: &'static [(Predicate<I>, Outcome)], fallback: Outcome) -> Self {
        Self { rows, fallback }
    }

    /// Decide the outcome for an input.
    pub fn decide(&self, input: &I) -> Outcome {
        self.rows
            .iter()
            .find(|(predicate, _)| predicate(input))
            .map(|(_, outcome)| *outcome)
            .unwrap_or(self.fallback)
    }
}
