//! Errors returned by schedule generation.
//!
//! Generation either yields a fully valid [`Schedule`](crate::models::Schedule)
//! or one of these errors. There is no partial-success result.

use thiserror::Error;

use crate::models::ParticipantId;

/// Errors returned by the schedule generators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The participant count is outside what the requested algorithm supports.
    #[error("invalid participant count {participants} (minimum {minimum}): {reason}")]
    InvalidInput {
        /// Requested participant count.
        participants: u32,
        /// Smallest count the algorithm accepts.
        minimum: u32,
        /// Why the count was rejected.
        reason: &'static str,
    },

    /// No round could be completed without repeating a pair.
    ///
    /// `round` is 1-based. `bye` is the participant that was sitting out
    /// when the deepest failing round was attempted.
    #[error("cannot pair round {round} (bye: {bye:?}) without repeating a pair")]
    PairingInfeasible {
        /// Round number (1-based) that could not be completed.
        round: usize,
        /// Participant sitting out in the failed attempt.
        bye: Option<ParticipantId>,
    },

    /// The configured search step budget ran out.
    #[error("pairing search exceeded its budget after {steps} steps")]
    SearchBudgetExhausted {
        /// Search nodes visited before giving up.
        steps: u64,
    },
}

impl ScheduleError {
    pub(crate) fn invalid_input(participants: u32, minimum: u32, reason: &'static str) -> Self {
        Self::InvalidInput {
            participants,
            minimum,
            reason,
        }
    }
}
