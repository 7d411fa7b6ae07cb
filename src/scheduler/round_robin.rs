//! Strategy dispatch and label shuffling.
//!
//! # Algorithm
//!
//! 1. Reject counts below two.
//! 2. Resolve the strategy (`Auto` picks by parity).
//! 3. Run the circle method or the bye rotation.
//! 4. If `Auto` picked the bye rotation and its search fails, rerun with
//!    the circle method. An explicit `ByeRotation` reports the failure.
//! 5. Optionally relabel participants with a seeded permutation.
//!
//! Relabeling is a bijection on `1..=N`, so it preserves every pairing and
//! bye property of the canonical schedule.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use super::{ByeRotationPlanner, CircleRotationPlanner, ScheduleOptions};
use crate::error::ScheduleError;
use crate::models::{ParticipantId, Schedule, Strategy};

/// Smallest participant count any strategy accepts.
pub const MIN_PARTICIPANTS: u32 = 2;

/// Round-robin schedule generator.
///
/// # Example
///
/// ```
/// use round_robin_pairs::scheduler::{RoundRobinScheduler, ScheduleOptions};
///
/// let scheduler = RoundRobinScheduler::new(ScheduleOptions::default());
/// let schedule = scheduler.schedule(6).unwrap();
/// assert_eq!(schedule.round_count(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundRobinScheduler {
    options: ScheduleOptions,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given options.
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    /// Builds a schedule for participants `1..=participants`.
    ///
    /// Under `Strategy::Auto` an odd count whose bye search ends in
    /// `PairingInfeasible` or `SearchBudgetExhausted` is rebuilt with the
    /// circle method, so `Auto` only fails on invalid input.
    pub fn schedule(&self, participants: u32) -> Result<Schedule, ScheduleError> {
        if participants < MIN_PARTICIPANTS {
            return Err(ScheduleError::invalid_input(
                participants,
                MIN_PARTICIPANTS,
                "a round robin needs at least two participants",
            ));
        }

        let strategy = self.options.strategy.resolve(participants);
        debug!(participants, ?strategy, "generating round-robin schedule");

        let schedule = match strategy {
            Strategy::ByeRotation => {
                let planned = ByeRotationPlanner::new(participants)
                    .with_retry_byes(self.options.retry_byes)
                    .with_max_search_steps(self.options.max_search_steps)
                    .plan();
                match planned {
                    Ok(schedule) => schedule,
                    Err(
                        error @ (ScheduleError::PairingInfeasible { .. }
                        | ScheduleError::SearchBudgetExhausted { .. }),
                    ) if self.options.strategy == Strategy::Auto => {
                        warn!(
                            participants,
                            %error,
                            "bye rotation failed, falling back to circle method"
                        );
                        CircleRotationPlanner::new(participants).plan()
                    }
                    Err(error) => return Err(error),
                }
            }
            Strategy::CircleMethod | Strategy::Auto => {
                CircleRotationPlanner::new(participants).plan()
            }
        };

        Ok(match self.options.seed {
            Some(seed) => schedule.relabeled(&shuffled_labels(participants, seed)),
            None => schedule,
        })
    }
}

/// Seeded permutation of `1..=participants`; entry `i` is the new label of
/// participant `i + 1`.
fn shuffled_labels(participants: u32, seed: u64) -> Vec<ParticipantId> {
    let mut labels: Vec<ParticipantId> = (1..=participants).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    labels.shuffle(&mut rng);
    labels
}
