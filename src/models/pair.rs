//! Unordered participant pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::ParticipantId;

/// Two participants meeting in a round.
///
/// The planner's order is kept for display (`first` vs `second`), but
/// equality and hashing use the sorted key, so `(4, 2) == (2, 4)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pair {
    /// Participant listed first.
    pub first: ParticipantId,
    /// Participant listed second.
    pub second: ParticipantId,
}

impl Pair {
    /// Creates a pair in the given display order.
    pub fn new(first: ParticipantId, second: ParticipantId) -> Self {
        Self { first, second }
    }

    /// Order-independent key: `(min, max)`.
    #[inline]
    pub fn key(&self) -> (ParticipantId, ParticipantId) {
        canonical(self.first, self.second)
    }

    /// Whether the participant is one of the two.
    #[inline]
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.first == id || self.second == id
    }

    /// The other participant, if `id` is part of this pair.
    pub fn partner_of(&self, id: ParticipantId) -> Option<ParticipantId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Whether both sides name the same participant (never valid).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Applies a relabeling to both sides.
    pub(crate) fn map(&self, f: impl Fn(ParticipantId) -> ParticipantId) -> Self {
        Self::new(f(self.first), f(self.second))
    }
}

/// Sorts two ids into an unordered-pair key.
#[inline]
pub(crate) fn canonical(a: ParticipantId, b: ParticipantId) -> (ParticipantId, ParticipantId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pair {}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(ParticipantId, ParticipantId)> for Pair {
    fn from((first, second): (ParticipantId, ParticipantId)) -> Self {
        Self::new(first, second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
