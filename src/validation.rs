//! Schedule validation.
//!
//! Checks a finished schedule against the round-robin invariants and
//! reports every violation found, not just the first. Detects:
//! - Participants outside `1..=N` and self pairs
//! - A participant appearing twice in one round (including a bye who also plays)
//! - Pairs repeated across the schedule, and pairs never scheduled
//! - Wrong round count or round size for the parity of `N`
//! - Unfair byes or uneven shift counts
//!
//! Back-to-back play is deliberately not checked: for even `N` everyone
//! plays every round, and the odd-`N` construction does not promise rest
//! between rounds. See `ScheduleStatistics::max_consecutive_shifts`.

use std::collections::HashSet;

use crate::models::{ParticipantId, Schedule};
use crate::scheduler::ScheduleStatistics;

/// Missing pairs or bye offenders named individually before the rest are
/// folded into one summary entry.
pub const MAX_LISTED_PER_CHECK: usize = 32;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A pair names an id outside `1..=N`.
    UnknownParticipant,
    /// A pair names the same participant twice.
    SelfPair,
    /// A participant appears more than once in a round.
    ParticipantRepeated,
    /// The same unordered pair is scheduled more than once.
    DuplicatePair,
    /// A required pair never occurs.
    MissingPair,
    /// The number of rounds does not match `N`.
    WrongRoundCount,
    /// A round has the wrong number of pairs.
    WrongRoundSize,
    /// Byes are not one-per-participant (odd `N`) or occur at all (even `N`).
    UnfairByes,
    /// Shift counts differ by more than one.
    UnevenShifts,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule.
///
/// Checks:
/// 1. Every id is in `1..=N`, no self pairs
/// 2. Nobody appears twice in a round; a bye does not also play
/// 3. No pair is scheduled twice
/// 4. Every pair is scheduled
/// 5. Round count and round size match the parity of `N`
/// 6. Byes: exactly one each for odd `N`, none for even `N`
/// 7. Shift counts differ by at most one
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    let mut errors = Vec::new();
    let n = schedule.participant_count;
    let in_range = |id: ParticipantId| (1..=n).contains(&id);

    // Per-round structure
    for (index, round) in schedule.rounds.iter().enumerate() {
        let number = index + 1;
        let mut present: HashSet<ParticipantId> = HashSet::new();

        for pair in &round.pairs {
            if pair.is_degenerate() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPair,
                    format!("Round {number}: participant {} paired with itself", pair.first),
                ));
            }
            for id in [pair.first, pair.second] {
                if !in_range(id) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownParticipant,
                        format!("Round {number}: participant {id} is outside 1..={n}"),
                    ));
                }
            }
            for id in [pair.first, pair.second] {
                if !present.insert(id) && !pair.is_degenerate() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ParticipantRepeated,
                        format!("Round {number}: participant {id} appears more than once"),
                    ));
                }
            }
        }

        if let Some(bye) = round.bye {
            if !in_range(bye) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownParticipant,
                    format!("Round {number}: bye participant {bye} is outside 1..={n}"),
                ));
            }
            if present.contains(&bye) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ParticipantRepeated,
                    format!("Round {number}: participant {bye} has a bye but also plays"),
                ));
            }
        }

        let expected_size = (n / 2) as usize;
        if round.pair_count() != expected_size {
            errors.push(ValidationError::new(
                ValidationErrorKind::WrongRoundSize,
                format!(
                    "Round {number} has {} pairs, expected {expected_size}",
                    round.pair_count()
                ),
            ));
        }
    }

    let expected_rounds = Schedule::expected_rounds(n);
    if schedule.round_count() != expected_rounds {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongRoundCount,
            format!(
                "Schedule has {} rounds, expected {expected_rounds}",
                schedule.round_count()
            ),
        ));
    }

    let stats = ScheduleStatistics::calculate(schedule);

    for (&(a, b), &count) in &stats.duplicate_pairs {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicatePair,
            format!("Pair ({a}, {b}) is scheduled {count} times"),
        ));
    }

    // Missing pairs: list the first few, summarize the rest.
    let missing = stats.expected_pairs.saturating_sub(stats.total_unique_pairs);
    if missing > 0 {
        let realized: HashSet<(ParticipantId, ParticipantId)> =
            schedule.pairs().map(|p| p.key()).collect();
        let listed: Vec<(ParticipantId, ParticipantId)> = (1..=n)
            .flat_map(|a| ((a + 1)..=n).map(move |b| (a, b)))
            .filter(|key| !realized.contains(key))
            .take(MAX_LISTED_PER_CHECK)
            .collect();
        for &(a, b) in &listed {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPair,
                format!("Pair ({a}, {b}) is never scheduled"),
            ));
        }
        if missing > listed.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPair,
                format!(
                    "{} more pairs are never scheduled ({missing} missing in total)",
                    missing - listed.len()
                ),
            ));
        }
    }

    if !stats.byes_are_fair() {
        let expected = if n % 2 == 1 { "exactly one" } else { "no" };
        let offenders: Vec<_> = stats
            .byes_by_participant
            .iter()
            .filter(|&(_, &count)| count != usize::from(n % 2 == 1))
            .collect();
        let mut listed: Vec<String> = offenders
            .iter()
            .take(MAX_LISTED_PER_CHECK)
            .map(|(id, count)| format!("{id}:{count}"))
            .collect();
        if offenders.len() > listed.len() {
            listed.push(format!("and {} more", offenders.len() - listed.len()));
        }
        errors.push(ValidationError::new(
            ValidationErrorKind::UnfairByes,
            format!(
                "Every participant should have {expected} bye; got {}",
                listed.join(", ")
            ),
        ));
    }

    if !stats.is_fair() {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnevenShifts,
            format!(
                "Shift counts range from {} to {}",
                stats.min_shifts(),
                stats.max_shifts()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pair, Round, Strategy};

    fn four_player_schedule() -> Schedule {
        Schedule::new(
            4,
            Strategy::CircleMethod,
            vec![
                Round::new(vec![Pair::new(1, 4), Pair::new(2, 3)]),
                Round::new(vec![Pair::new(1, 3), Pair::new(4, 2)]),
                Round::new(vec![Pair::new(1, 2), Pair::new(3, 4)]),
            ],
        )
    }

    fn three_player_schedule() -> Schedule {
        Schedule::new(
            3,
            Strategy::ByeRotation,
            vec![
                Round::with_bye(vec![Pair::new(2, 3)], 1),
                Round::with_bye(vec![Pair::new(1, 3)], 2),
                Round::with_bye(vec![Pair::new(1, 2)], 3),
            ],
        )
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_even_schedule() {
        assert!(validate_schedule(&four_player_schedule()).is_ok());
    }

    #[test]
    fn test_valid_odd_schedule() {
        assert!(validate_schedule(&three_player_schedule()).is_ok());
    }

    #[test]
    fn test_duplicate_pair() {
        let mut s = four_player_schedule();
        // Replace round 3 with a repeat of round 1
        s.rounds[2] = Round::new(vec![Pair::new(4, 1), Pair::new(3, 2)]);

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::DuplicatePair));
        assert!(has_kind(&errors, ValidationErrorKind::MissingPair));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingPair && e.message.contains("(1, 2)")));
    }

    #[test]
    fn test_participant_repeated_in_round() {
        let mut s = four_player_schedule();
        s.rounds[0] = Round::new(vec![Pair::new(1, 4), Pair::new(4, 3)]);

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::ParticipantRepeated));
    }

    #[test]
    fn test_bye_also_playing() {
        let mut s = three_player_schedule();
        s.rounds[0].bye = Some(2);

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::ParticipantRepeated));
        assert!(has_kind(&errors, ValidationErrorKind::UnfairByes));
    }

    #[test]
    fn test_unknown_participant_and_self_pair() {
        let mut s = four_player_schedule();
        s.rounds[0] = Round::new(vec![Pair::new(1, 5), Pair::new(2, 2)]);

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnknownParticipant));
        assert!(has_kind(&errors, ValidationErrorKind::SelfPair));
        // A self pair is reported once, not also as a repeat
        assert!(!has_kind(&errors, ValidationErrorKind::ParticipantRepeated));
    }

    #[test]
    fn test_wrong_round_count_and_size() {
        let mut s = four_player_schedule();
        s.rounds.pop();
        s.rounds[0].pairs.pop();

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::WrongRoundCount));
        assert!(has_kind(&errors, ValidationErrorKind::WrongRoundSize));
        assert!(has_kind(&errors, ValidationErrorKind::MissingPair));
    }

    #[test]
    fn test_bye_in_even_schedule() {
        let mut s = four_player_schedule();
        s.rounds[0].bye = Some(1);

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnfairByes));
    }

    #[test]
    fn test_uneven_shifts() {
        let s = Schedule::new(
            4,
            Strategy::CircleMethod,
            vec![
                Round::new(vec![Pair::new(1, 2)]),
                Round::new(vec![Pair::new(1, 3)]),
                Round::new(vec![Pair::new(1, 4)]),
            ],
        );

        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::UnevenShifts));
    }

    #[test]
    fn test_missing_pairs_are_capped_for_large_counts() {
        let s = Schedule::new(1000, Strategy::CircleMethod, Vec::new());
        let errors = validate_schedule(&s).unwrap_err();
        let missing: Vec<&ValidationError> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::MissingPair)
            .collect();

        assert_eq!(missing.len(), MAX_LISTED_PER_CHECK + 1);
        assert_eq!(missing[0].message, "Pair (1, 2) is never scheduled");
        let summary = &missing[MAX_LISTED_PER_CHECK].message;
        assert!(summary.contains("499468 more"), "{summary}");
        assert!(summary.contains("499500 missing"), "{summary}");
    }

    #[test]
    fn test_unfair_byes_message_is_capped() {
        let rounds = (1..=100).map(|id| Round::with_bye(Vec::new(), id)).collect();
        let s = Schedule::new(100, Strategy::CircleMethod, rounds);
        let errors = validate_schedule(&s).unwrap_err();
        let unfair = errors
            .iter()
            .find(|e| e.kind == ValidationErrorKind::UnfairByes)
            .unwrap();
        assert!(unfair.message.ends_with("and 68 more"), "{}", unfair.message);
    }

    #[test]
    fn test_multiple_errors() {
        let s = Schedule::new(5, Strategy::ByeRotation, Vec::new());
        let errors = validate_schedule(&s).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::WrongRoundCount));
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::MissingPair)
                .count(),
            10
        );
    }
}
