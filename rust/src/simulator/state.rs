//! Mutable state of a single simulation run.

use std::collections::VecDeque;

use crate::models::{Process, ProcessId, Slot, Time};

use super::bulk::BulkPlan;
use super::trace::Trace;

/// Per-process bookkeeping, indexed like the input slice.
#[derive(Clone, Debug)]
pub struct ProcessState {
    pub id: ProcessId,
    pub arrival_time: Time,
    pub remaining: Time,
    pub start_time: Option<Time>,
    pub finish_time: Option<Time>,
}

/// Clock, queues, remaining-burst table and trace for one run.
///
/// Queues hold indices into `procs`. Everything is created fresh per run.
#[derive(Clone, Debug)]
pub struct SimState {
    pub now: Time,
    pub quantum: Time,
    pub ready: VecDeque<usize>,
    pub pending: VecDeque<usize>,
    pub procs: Vec<ProcessState>,
    pub trace: Trace,
}

impl SimState {
    /// Build the initial state: everything pending, in input order.
    pub fn new(processes: &[Process], quantum: Time, max_seq_len: usize) -> Self {
        let procs: Vec<ProcessState> = processes
            .iter()
            .map(|p| ProcessState {
                id: p.id,
                arrival_time: p.arrival_time,
                remaining: p.burst,
                start_time: None,
                finish_time: None,
            })
            .collect();

        Self {
            now: 0,
            quantum,
            ready: VecDeque::with_capacity(procs.len()),
            pending: (0..procs.len()).collect(),
            procs,
            trace: Trace::new(max_seq_len),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ready.is_empty() && self.pending.is_empty()
    }

    /// Arrival time of the pending head.
    pub fn next_arrival(&self) -> Option<Time> {
        self.pending.front().map(|&i| self.procs[i].arrival_time)
    }

    /// Move the pending head to the ready tail.
    pub fn admit_next(&mut self) -> Option<ProcessId> {
        let idx = self.pending.pop_front()?;
        self.ready.push_back(idx);
        Some(self.procs[idx].id)
    }

    /// Admit every pending process that arrived strictly before `now`.
    pub fn admit_arrived_before_now(&mut self) -> usize {
        let mut admitted = 0;
        while self.next_arrival().is_some_and(|a| a < self.now) {
            self.admit_next();
            admitted += 1;
        }
        admitted
    }

    pub fn head(&self) -> Option<&ProcessState> {
        self.ready.front().map(|&i| &self.procs[i])
    }

    /// Dispatch the ready head for `span` ticks.
    ///
    /// Records its first start, advances the clock, charges the span against its
    /// remaining burst and records it in the trace. The head stays at the front.
    pub fn run_head(&mut self, span: Time) -> Option<ProcessId> {
        let idx = *self.ready.front()?;
        let now = self.now;
        let proc = &mut self.procs[idx];
        debug_assert!(span <= proc.remaining, "process {} overrun", proc.id);
        proc.start_time.get_or_insert(now);
        proc.remaining -= span;
        let id = proc.id;
        self.now += span;
        self.trace.record(Slot::Running(id));
        Some(id)
    }

    /// Move the ready head to the ready tail.
    pub fn requeue_head(&mut self) {
        if let Some(idx) = self.ready.pop_front() {
            self.ready.push_back(idx);
        }
    }

    /// Remove the ready head, which must have no remaining burst, and stamp its finish.
    pub fn complete_head(&mut self) -> Option<ProcessId> {
        let idx = self.ready.pop_front()?;
        let proc = &mut self.procs[idx];
        debug_assert_eq!(proc.remaining, 0, "process {} completed early", proc.id);
        proc.finish_time = Some(self.now);
        Some(proc.id)
    }

    /// Apply `plan.rounds` full cycles over the ready queue.
    ///
    /// Equivalent to dispatching and requeueing the head `rounds * ready.len()` times,
    /// which leaves the queue order unchanged.
    pub fn apply_bulk(&mut self, plan: BulkPlan) {
        let charge = self.quantum * plan.rounds;
        for (pos, &idx) in self.ready.iter().enumerate() {
            let proc = &mut self.procs[idx];
            proc.start_time.get_or_insert(self.now + self.quantum * pos as Time);
            proc.remaining -= charge;
        }
        self.now += plan.span();

        // One cycle is enough when every round collapses into a single entry. Otherwise
        // each round adds at least one entry, so stop as soon as the trace is full.
        let cycles = if self.ready.len() == 1 { 1 } else { plan.rounds };
        for _ in 0..cycles {
            if self.trace.is_full() {
                break;
            }
            for &idx in &self.ready {
                self.trace.record(Slot::Running(self.procs[idx].id));
            }
        }
    }

    /// Copy start and finish times back onto the caller's processes.
    pub fn write_back(&self, processes: &mut [Process]) {
        for (process, state) in processes.iter_mut().zip(&self.procs) {
            process.start_time = state.start_time;
            process.finish_time = state.finish_time;
        }
    }
}
