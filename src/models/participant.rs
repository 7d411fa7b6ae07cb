//! Participant identifiers and seats.
//!
//! Participants are plain 1-based indices. Names and any other display
//! data live with the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier in `1..=N`.
pub type ParticipantId = u32;

/// A seat in a rotation: either a participant or the BYE placeholder.
///
/// The circle method pads an odd field with [`Seat::Bye`] so every seat has
/// an opposite. Whoever faces the BYE seat sits the round out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// A real participant.
    Participant(ParticipantId),
    /// No opponent this round.
    Bye,
}

impl Seat {
    /// The participant in this seat, if any.
    #[inline]
    pub fn participant(self) -> Option<ParticipantId> {
        match self {
            Self::Participant(id) => Some(id),
            Self::Bye => None,
        }
    }

    /// Whether this is the BYE placeholder.
    #[inline]
    pub fn is_bye(self) -> bool {
        matches!(self, Self::Bye)
    }
}

impl From<ParticipantId> for Seat {
    fn from(id: ParticipantId) -> Self {
        Self::Participant(id)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Participant(id) => write!(f, "{id}"),
            Self::Bye => f.write_str("BYE"),
        }
    }
}
