//! Exact-cover search for one round's pairing.
//!
//! # Algorithm
//!
//! 1. Take the lowest remaining participant `p`.
//! 2. Try each other remaining participant `q` in ascending order,
//!    skipping pairs the registry has already seen.
//! 3. Recurse on what is left; the first full pairing wins.
//! 4. If no `q` leads to a full pairing, report infeasible upward.
//!
//! Each recursive call returns its own result, so a failed branch never
//! leaves partial pairs behind for its siblings.
//!
//! # Complexity
//! Exponential in the worst case (the number of perfect matchings of `m`
//! participants is `(m-1)!!`); recursion depth is at most `m/2`.
//!
//! # Reference
//! Knuth (2000), "Dancing Links", exact cover by backtracking

use tracing::trace;

use crate::models::{Pair, ParticipantId};
use crate::registry::PairRegistry;

/// Result of a pairing search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete pairing using only unused pairs.
    Found(Vec<Pair>),
    /// No complete pairing exists.
    Infeasible,
    /// The step limit ran out before the search finished.
    BudgetExhausted,
}

impl SearchOutcome {
    /// The pairing, if one was found.
    pub fn into_pairs(self) -> Option<Vec<Pair>> {
        match self {
            Self::Found(pairs) => Some(pairs),
            Self::Infeasible | Self::BudgetExhausted => None,
        }
    }
}

/// Finds a perfect matching of a participant set that avoids every pair
/// in a [`PairRegistry`].
///
/// # Example
///
/// ```
/// use round_robin_pairs::registry::PairRegistry;
/// use round_robin_pairs::scheduler::{MatchBacktracker, SearchOutcome};
/// use round_robin_pairs::models::Pair;
///
/// let mut used = PairRegistry::new();
/// used.mark_used(1, 2);
///
/// let outcome = MatchBacktracker::new(&used).find_pairing(&[1, 2, 3, 4]);
/// assert_eq!(outcome, SearchOutcome::Found(vec![Pair::new(1, 3), Pair::new(2, 4)]));
/// ```
#[derive(Debug)]
pub struct MatchBacktracker<'a> {
    registry: &'a PairRegistry,
    step_limit: Option<u64>,
    steps: u64,
}

impl<'a> MatchBacktracker<'a> {
    /// Creates a backtracker reading from `registry`, with no step limit.
    pub fn new(registry: &'a PairRegistry) -> Self {
        Self {
            registry,
            step_limit: None,
            steps: 0,
        }
    }

    /// Caps the number of search nodes visited. `None` means unbounded.
    pub fn with_step_limit(mut self, limit: Option<u64>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Search nodes visited so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Pairs up every participant in `participants`.
    ///
    /// The input is sorted and de-duplicated first, so the result depends
    /// only on the set, not on the order it was given in. An empty set is
    /// trivially paired; an odd-sized set never is.
    pub fn find_pairing(&mut self, participants: &[ParticipantId]) -> SearchOutcome {
        let mut remaining = participants.to_vec();
        remaining.sort_unstable();
        remaining.dedup();

        if remaining.len() % 2 == 1 {
            trace!(size = remaining.len(), "odd participant set cannot be paired");
            return SearchOutcome::Infeasible;
        }
        self.search(&remaining)
    }

    fn search(&mut self, remaining: &[ParticipantId]) -> SearchOutcome {
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {
                return SearchOutcome::BudgetExhausted;
            }
        }
        self.steps += 1;

        let Some((&p, rest)) = remaining.split_first() else {
            return SearchOutcome::Found(Vec::new());
        };
        if rest.is_empty() {
            return SearchOutcome::Infeasible;
        }

        for (idx, &q) in rest.iter().enumerate() {
            if self.registry.has_been_used(p, q) {
                continue;
            }
            let next: Vec<ParticipantId> = rest
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != idx)
                .map(|(_, &id)| id)
                .collect();

            match self.search(&next) {
                SearchOutcome::Found(mut pairs) => {
                    pairs.insert(0, Pair::new(p, q));
                    return SearchOutcome::Found(pairs);
                }
                SearchOutcome::Infeasible => continue,
                SearchOutcome::BudgetExhausted => return SearchOutcome::BudgetExhausted,
            }
        }

        SearchOutcome::Infeasible
    }
}

/// Convenience wrapper: unbounded search, `None` when infeasible.
pub fn find_pairing(participants: &[ParticipantId], registry: &PairRegistry) -> Option<Vec<Pair>> {
    MatchBacktracker::new(registry)
        .find_pairing(participants)
        .into_pairs()
}
