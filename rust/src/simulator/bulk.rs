//! Bulk-skip planning.
//!
//! While every ready process needs more than one quantum and nobody new can arrive,
//! a round-robin cycle is fully predictable: each ready process runs exactly one quantum
//! in queue order and the queue ends up in the same order. Such cycles can be applied in
//! one step. The planner only decides how many; applying them is
//! [`SimState::apply_bulk`](super::state::SimState::apply_bulk).

use crate::models::Time;

/// A number of full round-robin cycles that can be applied at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkPlan {
    /// Full cycles to apply (always >= 1).
    pub rounds: Time,
    /// Length of one cycle: ready-queue size times quantum.
    pub cycle_len: Time,
}

impl BulkPlan {
    /// Total simulated time the plan advances the clock by.
    pub fn span(&self) -> Time {
        self.cycle_len * self.rounds
    }
}

/// Plan a bulk skip over the ready queue.
///
/// `remaining` yields the remaining burst of each ready process, in queue order.
/// `next_arrival` is the arrival time of the pending head, or `None` if nothing is
/// pending.
///
/// Returns `None` when a ready process could finish within its next quantum, when the
/// next arrival falls within one cycle, or when the ready queue is empty.
pub fn plan<I>(
    quantum: Time,
    now: Time,
    remaining: I,
    next_arrival: Option<Time>,
) -> Option<BulkPlan>
where
    I: IntoIterator<Item = Time>,
{
    let mut ready_len: Time = 0;
    let mut min_remaining = Time::MAX;
    for r in remaining {
        if r <= quantum {
            return None;
        }
        min_remaining = min_remaining.min(r);
        ready_len += 1;
    }
    if ready_len == 0 {
        return None;
    }

    // Leave the soonest-finishing process at least one quantum so that its
    // completion goes through the single-step path.
    let mut rounds = min_remaining / quantum;
    if min_remaining % quantum == 0 {
        rounds -= 1;
    }

    let cycle_len = ready_len * quantum;
    if let Some(arrival) = next_arrival {
        if now + cycle_len >= arrival {
            return None;
        }
        rounds = rounds.min((arrival - now) / cycle_len);
    }

    if rounds == 0 {
        return None;
    }
    Some(BulkPlan { rounds, cycle_len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_plan_when_any_process_fits_in_one_quantum() {
        assert_eq!(plan(4, 0, [10, 4, 12], None), None);
        assert_eq!(plan(4, 0, [10, 3], None), None);
    }

    #[test]
    fn test_no_plan_for_empty_ready_queue() {
        assert_eq!(plan(4, 0, [], Some(100)), None);
    }

    #[test]
    fn test_exact_multiple_keeps_one_quantum_back() {
        // min 100 = 10 quanta, so only 9 rounds are safe
        let p = plan(10, 0, [100, 150], None).unwrap();
        assert_eq!(p.rounds, 9);
        assert_eq!(p.cycle_len, 20);
        assert_eq!(p.span(), 180);
    }

    #[test]
    fn test_non_multiple_uses_floor() {
        // min 25 with quantum 10: two rounds leave 5
        let p = plan(10, 0, [25, 40], None).unwrap();
        assert_eq!(p.rounds, 2);
    }

    #[test]
    fn test_arrival_bounds_rounds() {
        // cycle of 2 * 5 = 10; arrival 35 ticks away allows 3 cycles
        let p = plan(5, 100, [1000, 1000], Some(135)).unwrap();
        assert_eq!(p.rounds, 3);
        assert_eq!(p.span(), 30);
    }

    #[test]
    fn test_arrival_landing_on_cycle_boundary_is_allowed() {
        let p = plan(5, 0, [1000, 1000], Some(30)).unwrap();
        assert_eq!(p.rounds, 3);
    }

    #[test]
    fn test_arrival_within_first_cycle_blocks_plan() {
        assert_eq!(plan(5, 0, [1000, 1000], Some(10)), None);
        assert_eq!(plan(5, 0, [1000, 1000], Some(7)), None);
    }

    #[test]
    fn test_completion_bounds_rounds_before_arrival() {
        let p = plan(5, 0, [21, 1000], Some(500)).unwrap();
        assert_eq!(p.rounds, 4);
    }
}
