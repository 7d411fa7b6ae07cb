//! Circle-method planner.
//!
//! # Algorithm
//!
//! 1. Seat participants `1..=N` in order; pad with a BYE seat if `N` is odd.
//! 2. Each round, pair seat `i` with seat `S-1-i` for `i < S/2`
//!    (`S` = seat count).
//! 3. Rotate: seat 0 stays put, the last occupant moves into seat 1 and
//!    everyone else shifts one seat to the right.
//! 4. Repeat for `S-1` rounds, dropping pairs against the BYE seat.
//!
//! The fixed seat meets every rotating seat once, and opposite seats sweep
//! every chord of the circle once, so the result is a 1-factorization of
//! `K_S` without any search.
//!
//! For odd `N` the BYE seat rotates like any other, so whoever faces it
//! sits out. The bye order is fixed by the seating and is not tracked or
//! chosen; use [`ByeRotationPlanner`](super::ByeRotationPlanner) when the
//! bye order itself matters.
//!
//! # Complexity
//! O(N^2) time, O(N) extra space.
//!
//! # Reference
//! Kirkman (1847); de Werra (1981), "Scheduling in Sports"

use tracing::{debug, trace};

use crate::models::{Pair, ParticipantId, Round, Schedule, Seat, Strategy};

/// Builds schedules by rotating a seating arrangement.
#[derive(Debug, Clone)]
pub struct CircleRotationPlanner {
    participant_count: u32,
}

impl CircleRotationPlanner {
    /// Creates a planner for participants `1..=participant_count`.
    pub fn new(participant_count: u32) -> Self {
        Self { participant_count }
    }

    /// Initial seating, padded with a BYE seat for odd counts.
    pub fn seating(&self) -> Vec<Seat> {
        let mut seats: Vec<Seat> = (1..=self.participant_count).map(Seat::from).collect();
        if seats.len() % 2 == 1 {
            seats.push(Seat::Bye);
        }
        seats
    }

    /// Builds every round.
    pub fn plan(&self) -> Schedule {
        let mut seats = self.seating();
        let round_count = seats.len().saturating_sub(1);
        let mut rounds = Vec::with_capacity(round_count);

        for index in 0..round_count {
            let round = pair_opposites(&seats);
            trace!(round = index + 1, pairs = round.pair_count(), bye = ?round.bye, "circle round");
            rounds.push(round);
            rotate(&mut seats);
        }

        debug!(
            participants = self.participant_count,
            rounds = rounds.len(),
            "circle method schedule built"
        );
        Schedule::new(self.participant_count, Strategy::CircleMethod, rounds)
    }
}

/// Pairs seat `i` with seat `len-1-i`; a pair against the BYE seat becomes
/// the round's bye.
fn pair_opposites(seats: &[Seat]) -> Round {
    let last = seats.len().saturating_sub(1);
    let mut pairs = Vec::with_capacity(seats.len() / 2);
    let mut bye: Option<ParticipantId> = None;

    for i in 0..seats.len() / 2 {
        match (seats[i], seats[last - i]) {
            (Seat::Participant(a), Seat::Participant(b)) => pairs.push(Pair::new(a, b)),
            (Seat::Participant(id), Seat::Bye) | (Seat::Bye, Seat::Participant(id)) => {
                bye = Some(id)
            }
            (Seat::Bye, Seat::Bye) => {}
        }
    }

    Round { pairs, bye }
}

/// Holds seat 0 and rotates the rest one step clockwise.
fn rotate(seats: &mut [Seat]) {
    if seats.len() > 2 {
        seats[1..].rotate_right(1);
    }
}
