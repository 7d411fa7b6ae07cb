//! Schedule (solution) model.
//!
//! A schedule is the full ordered list of rounds for one participant
//! count. Round order matters only for bye bookkeeping; any permutation of
//! the rounds is still a valid pairing.
//!
//! # Reference
//! Harary (1969), "Graph Theory", Ch. 9 (factorization of complete graphs)

use serde::{Deserialize, Serialize};

use super::{Pair, ParticipantId, Round};

/// Algorithm used to build a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Circle method for even counts, bye rotation for odd counts.
    #[default]
    Auto,
    /// Rotate a seating arrangement and pair opposite seats.
    CircleMethod,
    /// Fair bye selection plus backtracking pairing (odd counts only).
    ByeRotation,
}

impl Strategy {
    /// Concrete algorithm for `participants`; `Auto` dispatches on parity.
    pub fn resolve(self, participants: u32) -> Self {
        match self {
            Self::Auto if participants % 2 == 0 => Self::CircleMethod,
            Self::Auto => Self::ByeRotation,
            other => other,
        }
    }
}

/// A complete round-robin schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of participants (ids `1..=participant_count`).
    pub participant_count: u32,
    /// Algorithm that produced the rounds.
    pub strategy: Strategy,
    /// Rounds in play order.
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// Creates a schedule from already-built rounds.
    pub fn new(participant_count: u32, strategy: Strategy, rounds: Vec<Round>) -> Self {
        Self {
            participant_count,
            strategy,
            rounds,
        }
    }

    /// Number of rounds.
    #[inline]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Participant ids `1..=N`.
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> {
        1..=self.participant_count
    }

    /// Every pair in the schedule, in round order.
    pub fn pairs(&self) -> impl Iterator<Item = &Pair> + '_ {
        self.rounds.iter().flat_map(|r| r.pairs.iter())
    }

    /// Total number of pairs across all rounds (duplicates included).
    pub fn pair_count(&self) -> usize {
        self.rounds.iter().map(Round::pair_count).sum()
    }

    /// Index of the round (0-based) in which two participants meet.
    pub fn round_of_pair(&self, a: ParticipantId, b: ParticipantId) -> Option<usize> {
        let target = Pair::new(a, b);
        self.rounds
            .iter()
            .position(|r| r.pairs.iter().any(|p| *p == target))
    }

    /// Indices of the rounds where `id` sits out.
    pub fn bye_rounds(&self, id: ParticipantId) -> Vec<usize> {
        self.rounds
            .iter()
            .enumerate()
            .filter(|(_, r)| r.bye == Some(id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Opponents of `id`, in round order.
    pub fn opponents_of(&self, id: ParticipantId) -> Vec<ParticipantId> {
        self.rounds.iter().filter_map(|r| r.opponent_of(id)).collect()
    }

    /// Number of distinct pairs a complete schedule must contain.
    #[inline]
    pub fn expected_pairs(participant_count: u32) -> usize {
        let n = participant_count as usize;
        n * n.saturating_sub(1) / 2
    }

    /// Number of rounds a complete schedule must contain.
    #[inline]
    pub fn expected_rounds(participant_count: u32) -> usize {
        match participant_count {
            0 | 1 => 0,
            n if n % 2 == 0 => n as usize - 1,
            n => n as usize,
        }
    }

    /// Rewrites every id through `mapping`, where `mapping[i - 1]` is the
    /// new label of participant `i`. `mapping` must be a permutation of
    /// `1..=N`.
    pub(crate) fn relabeled(&self, mapping: &[ParticipantId]) -> Self {
        let label = |id: ParticipantId| mapping[id as usize - 1];
        Self {
            participant_count: self.participant_count,
            strategy: self.strategy,
            rounds: self.rounds.iter().map(|r| r.map(label)).collect(),
        }
    }
}
