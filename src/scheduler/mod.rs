//! Round-robin planners and schedule statistics.
//!
//! # Algorithms
//!
//! - `CircleRotationPlanner`: the circle method. Structural, no search,
//!   `N-1` rounds for even `N`.
//! - `ByeRotationPlanner`: odd `N`. Fair bye scan plus `MatchBacktracker`
//!   exact-cover pairing, with round-level backtracking.
//! - `RoundRobinScheduler`: picks a planner from `ScheduleOptions`.
//!
//! # Statistics
//!
//! `ScheduleStatistics` recomputes unique pairs, shift counts and fairness
//! from any schedule.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

mod backtrack;
mod bye_rotation;
mod circle;
mod options;
mod round_robin;
mod stats;

pub use backtrack::{find_pairing, MatchBacktracker, SearchOutcome};
pub use bye_rotation::ByeRotationPlanner;
pub use circle::CircleRotationPlanner;
pub use options::{ScheduleOptions, DEFAULT_MAX_SEARCH_STEPS};
pub use round_robin::{RoundRobinScheduler, MIN_PARTICIPANTS};
pub use stats::ScheduleStatistics;
