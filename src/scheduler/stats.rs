//! Schedule statistics.
//!
//! Recomputes, from a finished schedule, everything needed to certify it:
//! distinct pairs, per-participant shift and bye counts, duplicates, and
//! the longest run of back-to-back rounds each participant plays.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Unique pairs | Distinct in-range pairs `{a, b}` with `a != b` |
//! | Expected pairs | `N(N-1)/2` |
//! | Shifts | Rounds in which a participant plays (byes excluded) |
//! | Spread | `max(shifts) - min(shifts)` |
//! | Consecutive shifts | Longest run of adjacent rounds played |
//!
//! Nothing here mutates the schedule.

use std::collections::{BTreeMap, HashMap};

use crate::models::{ParticipantId, Schedule};

/// Aggregate facts about a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleStatistics {
    /// Participant count the schedule was built for.
    pub total_participants: u32,
    /// Number of rounds.
    pub total_rounds: usize,
    /// Pairs in the first round (every round should match it).
    pub shifts_per_round: usize,
    /// Distinct valid pairs realized.
    pub total_unique_pairs: usize,
    /// Pairs a complete schedule must contain.
    pub expected_pairs: usize,
    /// Rounds played per participant, for every id in `1..=N`.
    pub shifts_by_participant: BTreeMap<ParticipantId, usize>,
    /// Byes per participant, for every id in `1..=N`.
    pub byes_by_participant: BTreeMap<ParticipantId, usize>,
    /// Pairs that occur more than once, with their occurrence count.
    pub duplicate_pairs: BTreeMap<(ParticipantId, ParticipantId), usize>,
    /// Longest run of adjacent rounds played, per participant.
    pub max_consecutive_shifts: BTreeMap<ParticipantId, usize>,
    /// Whether every expected pair was realized.
    pub is_complete: bool,
}

impl ScheduleStatistics {
    /// Computes statistics for a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        let n = schedule.participant_count;
        let in_range = |id: ParticipantId| (1..=n).contains(&id);

        let mut shifts: BTreeMap<ParticipantId, usize> =
            schedule.participants().map(|id| (id, 0)).collect();
        let mut byes = shifts.clone();
        let mut streak: HashMap<ParticipantId, usize> = HashMap::new();
        let mut longest = shifts.clone();
        let mut pair_counts: HashMap<(ParticipantId, ParticipantId), usize> = HashMap::new();

        for round in &schedule.rounds {
            for pair in &round.pairs {
                *pair_counts.entry(pair.key()).or_insert(0) += 1;
                *shifts.entry(pair.first).or_insert(0) += 1;
                if !pair.is_degenerate() {
                    *shifts.entry(pair.second).or_insert(0) += 1;
                }
            }
            if let Some(bye) = round.bye {
                *byes.entry(bye).or_insert(0) += 1;
            }

            // Back-to-back runs
            for id in schedule.participants() {
                let run = streak.entry(id).or_insert(0);
                if round.plays(id) {
                    *run += 1;
                    let best = longest.entry(id).or_insert(0);
                    *best = (*best).max(*run);
                } else {
                    *run = 0;
                }
            }
        }

        let total_unique_pairs = pair_counts
            .keys()
            .filter(|&&(a, b)| a != b && in_range(a) && in_range(b))
            .count();
        let duplicate_pairs = pair_counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .collect();
        let expected_pairs = Schedule::expected_pairs(n);

        Self {
            total_participants: n,
            total_rounds: schedule.round_count(),
            shifts_per_round: schedule.rounds.first().map_or(0, |r| r.pair_count()),
            total_unique_pairs,
            expected_pairs,
            shifts_by_participant: shifts,
            byes_by_participant: byes,
            duplicate_pairs,
            max_consecutive_shifts: longest,
            is_complete: total_unique_pairs == expected_pairs,
        }
    }

    /// Fewest shifts any participant works.
    pub fn min_shifts(&self) -> usize {
        self.shifts_by_participant.values().copied().min().unwrap_or(0)
    }

    /// Most shifts any participant works.
    pub fn max_shifts(&self) -> usize {
        self.shifts_by_participant.values().copied().max().unwrap_or(0)
    }

    /// `max_shifts - min_shifts`.
    pub fn shift_spread(&self) -> usize {
        self.max_shifts() - self.min_shifts()
    }

    /// Whether shift counts differ by at most one.
    pub fn is_fair(&self) -> bool {
        self.shift_spread() <= 1
    }

    /// Whether any pair was scheduled twice.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_pairs.is_empty()
    }

    /// Odd N: everyone sits out exactly once. Even N: nobody sits out.
    pub fn byes_are_fair(&self) -> bool {
        let expected = usize::from(self.total_participants % 2 == 1);
        self.byes_by_participant.values().all(|&b| b == expected)
    }
}
