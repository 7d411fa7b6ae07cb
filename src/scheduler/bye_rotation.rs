//! Fair-bye planner for odd participant counts.
//!
//! # Algorithm
//!
//! For round `r` (0-based) of `N`:
//! 1. Scan `participant[(r + i) mod N]` for `i = 0..N` and give the bye to
//!    the first participant who has not had one yet.
//! 2. Pair everyone else with [`MatchBacktracker`], seeded with every pair
//!    used in earlier rounds.
//!
//! With bye retries enabled, a round that cannot be paired tries the next
//! bye candidate in the same scan order, and when every candidate fails
//! the previous round is undone and resumed from its next candidate. The
//! first successful path is exactly the plain greedy schedule whenever the
//! greedy pass works. A pairing that repeats a pair is never produced; if
//! the search runs dry the result is [`ScheduleError::PairingInfeasible`].
//!
//! # Complexity
//! `N` rounds when no retry is needed; exponential in the worst case.

use tracing::{debug, trace, warn};

use super::backtrack::{MatchBacktracker, SearchOutcome};
use crate::error::ScheduleError;
use crate::models::{Pair, ParticipantId, Round, Schedule, Strategy};
use crate::registry::PairRegistry;

/// Builds an `N`-round schedule for odd `N` in which everyone sits out once.
#[derive(Debug, Clone)]
pub struct ByeRotationPlanner {
    participant_count: u32,
    retry_byes: bool,
    max_search_steps: Option<u64>,
}

impl ByeRotationPlanner {
    /// Smallest participant count this planner accepts.
    pub const MIN_PARTICIPANTS: u32 = 3;

    /// Creates a planner with bye retries on and no step cap.
    pub fn new(participant_count: u32) -> Self {
        Self {
            participant_count,
            retry_byes: true,
            max_search_steps: None,
        }
    }

    /// Enables or disables bye retries and round backtracking.
    pub fn with_retry_byes(mut self, retry: bool) -> Self {
        self.retry_byes = retry;
        self
    }

    /// Caps the total backtracking nodes across all rounds.
    pub fn with_max_search_steps(mut self, steps: Option<u64>) -> Self {
        self.max_search_steps = steps;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    /// - `InvalidInput` if the count is below 3 or even.
    /// - `PairingInfeasible` if no repeat-free pairing was found.
    /// - `SearchBudgetExhausted` if the step cap ran out.
    pub fn plan(&self) -> Result<Schedule, ScheduleError> {
        let n = self.participant_count;
        if n < Self::MIN_PARTICIPANTS {
            return Err(ScheduleError::invalid_input(
                n,
                Self::MIN_PARTICIPANTS,
                "bye rotation needs at least three participants",
            ));
        }
        if n % 2 == 0 {
            return Err(ScheduleError::invalid_input(
                n,
                Self::MIN_PARTICIPANTS,
                "bye rotation needs an odd participant count",
            ));
        }

        let mut search = ByeSearch::new(n, PairRegistry::new(), self.max_search_steps);
        if self.retry_byes {
            if !search.extend()? {
                warn!(participants = n, steps = search.steps, "bye rotation search exhausted");
                return Err(search.infeasible());
            }
        } else {
            search.greedy()?;
        }

        debug!(
            participants = n,
            rounds = search.rounds.len(),
            steps = search.steps,
            "bye rotation schedule built"
        );
        Ok(Schedule::new(n, Strategy::ByeRotation, search.rounds))
    }
}

/// Who has already sat out.
#[derive(Debug, Clone)]
struct ByeTracker {
    had_bye: Vec<bool>,
}

impl ByeTracker {
    fn new(participant_count: u32) -> Self {
        Self {
            had_bye: vec![false; participant_count as usize],
        }
    }

    fn has_had_bye(&self, id: ParticipantId) -> bool {
        self.had_bye[id as usize - 1]
    }

    fn record(&mut self, id: ParticipantId) {
        self.had_bye[id as usize - 1] = true;
    }

    fn release(&mut self, id: ParticipantId) {
        self.had_bye[id as usize - 1] = false;
    }

    /// Participants eligible for the bye in `round`, in scan order.
    fn candidates(&self, round: usize) -> Vec<ParticipantId> {
        let n = self.had_bye.len();
        (0..n)
            .map(|i| ((round + i) % n) as ParticipantId + 1)
            .filter(|&id| !self.has_had_bye(id))
            .collect()
    }

    /// The bye for `round` under the plain scan rule.
    ///
    /// If everyone has already sat out, starts over at `participant[round mod N]`.
    fn next_bye(&mut self, round: usize) -> ParticipantId {
        if let Some(&id) = self.candidates(round).first() {
            return id;
        }
        warn!(round = round + 1, "every participant already had a bye, resetting");
        self.had_bye.iter_mut().for_each(|b| *b = false);
        (round % self.had_bye.len()) as ParticipantId + 1
    }
}

/// Mutable state of one planning run.
#[derive(Debug)]
struct ByeSearch {
    participant_count: u32,
    registry: PairRegistry,
    byes: ByeTracker,
    rounds: Vec<Round>,
    step_limit: Option<u64>,
    steps: u64,
    deepest_failure: Option<(usize, ParticipantId)>,
}

impl ByeSearch {
    fn new(participant_count: u32, registry: PairRegistry, step_limit: Option<u64>) -> Self {
        Self {
            participant_count,
            registry,
            byes: ByeTracker::new(participant_count),
            rounds: Vec::with_capacity(participant_count as usize),
            step_limit,
            steps: 0,
            deepest_failure: None,
        }
    }

    fn is_complete(&self) -> bool {
        self.rounds.len() == self.participant_count as usize
    }

    /// One pass, first bye candidate only, fail on the first dead round.
    fn greedy(&mut self) -> Result<(), ScheduleError> {
        while !self.is_complete() {
            let index = self.rounds.len();
            let bye = self.byes.next_bye(index);
            let Some(pairs) = self.match_round(bye)? else {
                warn!(round = index + 1, bye, "round cannot be paired without a repeat");
                return Err(ScheduleError::PairingInfeasible {
                    round: index + 1,
                    bye: Some(bye),
                });
            };
            self.push_round(Round::with_bye(pairs, bye));
        }
        Ok(())
    }

    /// Depth-first over rounds; `Ok(true)` once all rounds are placed.
    fn extend(&mut self) -> Result<bool, ScheduleError> {
        if self.is_complete() {
            return Ok(true);
        }
        let index = self.rounds.len();
        let candidates = match self.byes.candidates(index) {
            c if c.is_empty() => vec![self.byes.next_bye(index)],
            c => c,
        };

        for bye in candidates {
            let Some(pairs) = self.match_round(bye)? else {
                debug!(round = index + 1, bye, "no pairing with this bye, trying next candidate");
                self.note_failure(index, bye);
                continue;
            };

            self.push_round(Round::with_bye(pairs, bye));
            if self.extend()? {
                return Ok(true);
            }
            self.pop_round();
            debug!(round = index + 1, bye, "later rounds dead-ended, backtracking");
        }

        Ok(false)
    }

    /// Pairs everyone except `bye` against the current registry.
    fn match_round(&mut self, bye: ParticipantId) -> Result<Option<Vec<Pair>>, ScheduleError> {
        let remaining: Vec<ParticipantId> = (1..=self.participant_count)
            .filter(|&id| id != bye)
            .collect();
        let limit = self.step_limit.map(|l| l.saturating_sub(self.steps));

        let (outcome, used) = {
            let mut backtracker = MatchBacktracker::new(&self.registry).with_step_limit(limit);
            let outcome = backtracker.find_pairing(&remaining);
            (outcome, backtracker.steps())
        };
        self.steps += used;

        match outcome {
            SearchOutcome::Found(pairs) => Ok(Some(pairs)),
            SearchOutcome::Infeasible => Ok(None),
            SearchOutcome::BudgetExhausted => {
                warn!(steps = self.steps, "pairing search budget exhausted");
                Err(ScheduleError::SearchBudgetExhausted { steps: self.steps })
            }
        }
    }

    fn push_round(&mut self, round: Round) {
        trace!(round = self.rounds.len() + 1, bye = ?round.bye, "round placed");
        self.registry.mark_round(&round);
        if let Some(bye) = round.bye {
            self.byes.record(bye);
        }
        self.rounds.push(round);
    }

    fn pop_round(&mut self) {
        if let Some(round) = self.rounds.pop() {
            self.registry.unmark_round(&round);
            if let Some(bye) = round.bye {
                self.byes.release(bye);
            }
        }
    }

    fn note_failure(&mut self, index: usize, bye: ParticipantId) {
        if self.deepest_failure.map_or(true, |(deepest, _)| index >= deepest) {
            self.deepest_failure = Some((index, bye));
        }
    }

    fn infeasible(&self) -> ScheduleError {
        let (index, bye) = match self.deepest_failure {
            Some((index, bye)) => (index, Some(bye)),
            None => (self.rounds.len(), None),
        };
        ScheduleError::PairingInfeasible {
            round: index + 1,
            bye,
        }
    }
}
