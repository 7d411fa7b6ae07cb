//! Round-robin pairing schedules.
//!
//! Given `N` participants, builds an ordered list of rounds in which every
//! unordered pair meets exactly once, each round is a set of disjoint
//! pairs, and (for odd `N`) exactly one participant sits out per round,
//! with every participant sitting out exactly once.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Pair`, `Round`, `Schedule`, `Seat`, `Strategy`
//! - **`registry`**: `PairRegistry`, the set of pairs already scheduled
//! - **`scheduler`**: Planners (circle method, bye rotation), the
//!   `MatchBacktracker` search, options, and `ScheduleStatistics`
//! - **`validation`**: Invariant checks on a finished schedule
//!
//! # Example
//!
//! ```
//! use round_robin_pairs::{compute_statistics, generate_schedule};
//!
//! let schedule = generate_schedule(5).unwrap();
//! assert_eq!(schedule.round_count(), 5);
//!
//! let stats = compute_statistics(&schedule);
//! assert!(stats.is_complete);
//! assert_eq!(stats.total_unique_pairs, 10);
//! ```
//!
//! Rendering, names and any other presentation concerns belong to the
//! caller; the crate only works with participant indices.
//!
//! # References
//!
//! - Kirkman (1847), "On a problem in combinations"
//! - de Werra (1981), "Scheduling in Sports"

pub mod error;
pub mod models;
pub mod registry;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
pub use models::{Pair, ParticipantId, Round, Schedule, Seat, Strategy};
pub use scheduler::{ScheduleOptions, ScheduleStatistics};
pub use validation::{validate_schedule, ValidationError, ValidationErrorKind, ValidationResult};

use scheduler::RoundRobinScheduler;

/// Builds a schedule with the default strategy: circle method for even
/// counts, fair bye rotation for odd counts.
///
/// If the bye rotation dead-ends or runs out of search steps, the odd count
/// is rebuilt with the circle method (BYE seat padding) and a warning is
/// logged. The returned `Schedule::strategy` records which one ran. Either
/// way every pair meets once and everyone sits out exactly once.
///
/// # Errors
/// `InvalidInput` if `participants < 2`.
pub fn generate_schedule(participants: u32) -> Result<Schedule, ScheduleError> {
    generate_schedule_with(participants, &ScheduleOptions::default())
}

/// Builds a schedule with the circle method, whatever the parity.
///
/// Odd counts are padded with a BYE seat; the bye order then follows the
/// seating rather than the fair scan.
pub fn generate_schedule_circle_method(participants: u32) -> Result<Schedule, ScheduleError> {
    generate_schedule_with(
        participants,
        &ScheduleOptions::new().with_strategy(Strategy::CircleMethod),
    )
}

/// Builds an odd-count schedule with the fair bye rotation.
///
/// # Errors
/// `InvalidInput` if `participants < 3` or even.
pub fn generate_schedule_bye_rotation(participants: u32) -> Result<Schedule, ScheduleError> {
    generate_schedule_with(
        participants,
        &ScheduleOptions::new().with_strategy(Strategy::ByeRotation),
    )
}

/// Builds a schedule with explicit options.
///
/// # Errors
/// - `InvalidInput` for counts the chosen strategy cannot handle.
/// - `PairingInfeasible` if an explicit `Strategy::ByeRotation` finds no
///   repeat-free pairing.
/// - `SearchBudgetExhausted` if `max_search_steps` runs out under an
///   explicit `Strategy::ByeRotation`.
///
/// `Strategy::Auto` falls back to the circle method instead of returning
/// the last two.
pub fn generate_schedule_with(
    participants: u32,
    options: &ScheduleOptions,
) -> Result<Schedule, ScheduleError> {
    RoundRobinScheduler::new(options.clone()).schedule(participants)
}

/// Computes statistics for a schedule. Read-only.
pub fn compute_statistics(schedule: &Schedule) -> ScheduleStatistics {
    ScheduleStatistics::calculate(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rounds as ordered `(first, second)` tuples plus the bye, since
    /// `Pair` equality ignores order.
    fn layout(s: &Schedule) -> Vec<(Vec<(u32, u32)>, Option<u32>)> {
        s.rounds
            .iter()
            .map(|r| (r.pairs.iter().map(|p| (p.first, p.second)).collect(), r.bye))
            .collect()
    }

    #[test]
    fn test_rejects_zero_and_one() {
        for n in [0, 1] {
            assert!(matches!(
                generate_schedule(n),
                Err(ScheduleError::InvalidInput { .. })
            ));
            assert!(matches!(
                generate_schedule_circle_method(n),
                Err(ScheduleError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn test_two_participants() {
        let s = generate_schedule(2).unwrap();
        assert_eq!(s.round_count(), 1);
        assert_eq!(s.rounds[0].pairs, vec![Pair::new(1, 2)]);
        assert_eq!(s.rounds[0].bye, None);
    }

    #[test]
    fn test_four_participants_scenario() {
        let s = generate_schedule(4).unwrap();
        let rounds: Vec<Vec<(u32, u32)>> = s
            .rounds
            .iter()
            .map(|r| r.pairs.iter().map(|p| (p.first, p.second)).collect())
            .collect();
        assert_eq!(
            rounds,
            vec![
                vec![(1, 4), (2, 3)],
                vec![(1, 3), (4, 2)],
                vec![(1, 2), (3, 4)],
            ]
        );

        let stats = compute_statistics(&s);
        assert_eq!(stats.total_unique_pairs, 6);
        assert!(stats.shifts_by_participant.values().all(|&c| c == 3));
    }

    #[test]
    fn test_five_participants_scenario() {
        let s = generate_schedule(5).unwrap();
        assert_eq!(s.round_count(), 5);
        for id in 1..=5 {
            assert_eq!(s.bye_rounds(id).len(), 1, "participant {id}");
        }

        let stats = compute_statistics(&s);
        assert_eq!(stats.total_unique_pairs, 10);
        assert!(stats.shifts_by_participant.values().all(|&c| c == 4));
    }

    #[test]
    fn test_bye_rotation_entry_point() {
        assert!(generate_schedule_bye_rotation(7).is_ok());
        assert!(matches!(
            generate_schedule_bye_rotation(2),
            Err(ScheduleError::InvalidInput { minimum: 3, .. })
        ));
        assert!(matches!(
            generate_schedule_bye_rotation(8),
            Err(ScheduleError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_every_count_is_valid_complete_and_fair() {
        for n in 2..=19 {
            let s = generate_schedule(n).unwrap();
            assert_eq!(validate_schedule(&s), Ok(()), "n={n}");

            let stats = compute_statistics(&s);
            assert!(stats.is_complete, "n={n}");
            assert_eq!(stats.expected_pairs, Schedule::expected_pairs(n));
            assert_eq!(stats.shift_spread(), 0, "n={n}");
            assert_eq!(stats.min_shifts(), n as usize - 1, "n={n}");
            assert!(stats.byes_are_fair(), "n={n}");
            assert!(!stats.has_duplicates(), "n={n}");
        }
    }

    #[test]
    fn test_circle_method_every_count_is_valid() {
        for n in 2..=20 {
            let s = generate_schedule_circle_method(n).unwrap();
            assert_eq!(validate_schedule(&s), Ok(()), "n={n}");
            assert!(compute_statistics(&s).is_complete);
        }
    }

    #[test]
    fn test_deterministic() {
        for n in [4, 7, 10, 13] {
            let a = generate_schedule(n).unwrap();
            let b = generate_schedule(n).unwrap();
            assert_eq!(layout(&a), layout(&b), "n={n}");
        }
    }

    #[test]
    fn test_seeded_relabeling_preserves_invariants() {
        for n in [6, 9] {
            let options = ScheduleOptions::new().with_seed(2024);
            let shuffled = generate_schedule_with(n, &options).unwrap();
            assert_eq!(validate_schedule(&shuffled), Ok(()));
            let again = generate_schedule_with(n, &options).unwrap();
            assert_eq!(layout(&shuffled), layout(&again));
        }
    }

    #[test]
    fn test_greedy_only_option() {
        let options = ScheduleOptions::new().with_retry_byes(false);
        let s = generate_schedule_with(9, &options).unwrap();
        assert_eq!(layout(&s), layout(&generate_schedule(9).unwrap()));
    }

    #[test]
    fn test_tiny_budget_fails_explicitly() {
        let options = ScheduleOptions::new()
            .with_strategy(Strategy::ByeRotation)
            .with_max_search_steps(2);
        assert!(matches!(
            generate_schedule_with(9, &options),
            Err(ScheduleError::SearchBudgetExhausted { .. })
        ));

        // The circle method never searches, so the budget does not apply.
        let auto = ScheduleOptions::new().with_max_search_steps(2);
        assert!(generate_schedule_with(10, &auto).is_ok());
        let fallback = generate_schedule_with(9, &auto).unwrap();
        assert_eq!(fallback.strategy, Strategy::CircleMethod);
        assert_eq!(validate_schedule(&fallback), Ok(()));
    }

    #[test]
    fn test_odd_counts_past_the_greedy_range_are_valid() {
        // Greedy bye rotation dead-ends at round 24 for 25 participants.
        let s = generate_schedule(25).unwrap();
        assert_eq!(validate_schedule(&s), Ok(()));
        assert_eq!(s.round_count(), 25);

        let stats = compute_statistics(&s);
        assert!(stats.is_complete);
        assert!(stats.byes_are_fair());
    }

    #[test]
    fn test_schedule_serializes_for_presentation() {
        let s = generate_schedule(3).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["participant_count"], 3);
        assert_eq!(json["strategy"], "ByeRotation");
        assert_eq!(json["rounds"][0]["bye"], 1);
        assert_eq!(json["rounds"][0]["pairs"][0]["first"], 2);
        assert_eq!(json["rounds"][0]["pairs"][0]["second"], 3);

        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }
}
