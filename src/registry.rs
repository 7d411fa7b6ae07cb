//! Registry of pairs already scheduled.
//!
//! Owned by whoever is building rounds and passed by reference into the
//! matching search, so the search itself holds no hidden state.

use std::collections::HashSet;

use crate::models::{canonical, ParticipantId, Round};

/// Set of unordered pairs that have already met.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairRegistry {
    used: HashSet<(ParticipantId, ParticipantId)>,
}

impl PairRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from every pair in `rounds`.
    pub fn from_rounds(rounds: &[Round]) -> Self {
        let mut registry = Self::new();
        for round in rounds {
            registry.mark_round(round);
        }
        registry
    }

    /// Whether `a` and `b` have already met.
    #[inline]
    pub fn has_been_used(&self, a: ParticipantId, b: ParticipantId) -> bool {
        self.used.contains(&canonical(a, b))
    }

    /// Records that `a` and `b` have met.
    ///
    /// Returns `false` if the pair was already recorded.
    pub fn mark_used(&mut self, a: ParticipantId, b: ParticipantId) -> bool {
        self.used.insert(canonical(a, b))
    }

    /// Records every pair of a round.
    pub fn mark_round(&mut self, round: &Round) {
        for pair in &round.pairs {
            self.mark_used(pair.first, pair.second);
        }
    }

    /// Forgets every pair of a round (used when backtracking out of it).
    pub fn unmark_round(&mut self, round: &Round) {
        for pair in &round.pairs {
            self.used.remove(&pair.key());
        }
    }

    /// Number of distinct pairs recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
