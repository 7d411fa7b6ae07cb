//! Round-robin domain models.
//!
//! Participants are plain indices; everything else is built from them.
//!
//! # Domain Mappings
//!
//! | round-robin-pairs | Tournament | Duty roster | Peer review |
//! |-------------------|------------|-------------|-------------|
//! | Participant | Team/Player | Worker | Reviewer |
//! | Pair | Match | Shared shift | Review pairing |
//! | Round | Matchday | Shift slot | Review cycle |
//! | Bye | Rest day | Day off | Sits out |

mod pair;
mod participant;
mod round;
mod schedule;

pub use pair::Pair;
pub(crate) use pair::canonical;
pub use participant::{ParticipantId, Seat};
pub use round::Round;
pub use schedule::{Schedule, Strategy};
