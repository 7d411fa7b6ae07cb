//! Round model.

use serde::{Deserialize, Serialize};

use super::{Pair, ParticipantId};

/// One time slot: a set of disjoint pairs, plus the participant sitting
/// out when the field is odd.
///
/// Pairs against the BYE placeholder are never stored; the participant
/// who drew it is recorded in `bye` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Pairs in planner order.
    pub pairs: Vec<Pair>,
    /// Participant sitting out this round.
    pub bye: Option<ParticipantId>,
}

impl Round {
    /// Creates a round where everyone plays.
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs, bye: None }
    }

    /// Creates a round with a participant sitting out.
    pub fn with_bye(pairs: Vec<Pair>, bye: ParticipantId) -> Self {
        Self {
            pairs,
            bye: Some(bye),
        }
    }

    /// Number of pairs.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Participants playing this round, in pair order.
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.pairs.iter().flat_map(|p| [p.first, p.second])
    }

    /// Whether the participant plays this round (a bye does not count).
    pub fn plays(&self, id: ParticipantId) -> bool {
        self.pairs.iter().any(|p| p.contains(id))
    }

    /// Opponent of `id` this round.
    pub fn opponent_of(&self, id: ParticipantId) -> Option<ParticipantId> {
        self.pairs.iter().find_map(|p| p.partner_of(id))
    }

    pub(crate) fn map(&self, f: impl Fn(ParticipantId) -> ParticipantId) -> Self {
        Self {
            pairs: self.pairs.iter().map(|p| p.map(&f)).collect(),
            bye: self.bye.map(&f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_round() -> Round {
        Round::with_bye(vec![Pair::new(2, 5), Pair::new(3, 4)], 1)
    }

    #[test]
    fn test_round_participants() {
        let r = sample_round();
        let ids: Vec<_> = r.participants().collect();
        assert_eq!(ids, vec![2, 5, 3, 4]);
        assert_eq!(r.pair_count(), 2);
    }

    #[test]
    fn test_round_plays_and_bye() {
        let r = sample_round();
        assert!(r.plays(5));
        assert!(!r.plays(1));
        assert_eq!(r.bye, Some(1));
        assert_eq!(r.opponent_of(4), Some(3));
        assert_eq!(r.opponent_of(1), None);
    }

    #[test]
    fn test_round_without_bye() {
        let r = Round::new(vec![Pair::new(1, 2)]);
        assert_eq!(r.bye, None);
        assert!(r.plays(1) && r.plays(2));
    }
}
