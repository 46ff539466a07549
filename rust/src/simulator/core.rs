//! Core round-robin simulator implementation.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::SimulationConfig;
use crate::models::{Process, ProcessId, Slot, Time};
use crate::{log_debug, log_events, log_steps};

use super::bulk;
use super::state::SimState;

/// Errors that can occur when setting up a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Quantum must be greater than zero")]
    ZeroQuantum,
    #[error("Process {0} has a zero burst")]
    ZeroBurst(ProcessId),
    #[error("Duplicate process id: {0}")]
    DuplicateId(ProcessId),
    #[error(
        "Processes must be sorted by arrival time: process {id} arrives at {arrival_time}, \
         after a process arriving at {previous}"
    )]
    UnsortedArrivals {
        id: ProcessId,
        arrival_time: Time,
        previous: Time,
    },
}

/// Steps of the simulation loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// CPU is idle: admit the next pending process and jump the clock to its arrival.
    AdmitNext,
    /// The pending head arrives exactly now: admit it without advancing time.
    Drain,
    /// Try to apply several full cycles at once, then step the head.
    BulkSkip,
    /// Run the head for one quantum and requeue it.
    StepPreempt,
    /// Run the head to completion.
    StepComplete,
    Done,
}

/// Round-robin scheduler simulator over a fixed process list.
#[derive(Clone, Debug)]
pub struct RoundRobinSimulator {
    quantum: Time,
    max_seq_len: usize,
    config: SimulationConfig,
}

impl RoundRobinSimulator {
    /// Create a new simulator.
    pub fn new(
        quantum: Time,
        max_seq_len: usize,
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        if quantum == 0 {
            return Err(SimulationError::ZeroQuantum);
        }
        Ok(Self {
            quantum,
            max_seq_len,
            config,
        })
    }

    pub fn quantum(&self) -> Time {
        self.quantum
    }

    pub fn max_seq_len(&self) -> usize {
        self.max_seq_len
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate `processes`, filling in their start and finish times.
    ///
    /// `processes` must be sorted by arrival time. Returns the compressed execution
    /// trace, at most `max_seq_len` long (see [`SimulationConfig::cap_bootstrap_idle`]).
    pub fn run(&self, processes: &mut [Process]) -> Result<Vec<Slot>, SimulationError> {
        validate(processes)?;

        let mut state = SimState::new(processes, self.quantum, self.max_seq_len);
        let mut phase = self.route(&state);
        while phase != Phase::Done {
            phase = self.transition(&mut state, phase);
        }

        log_events!(
            self.config.verbosity,
            "t={} simulation finished, trace length {}",
            state.now,
            state.trace.len()
        );

        state.write_back(processes);
        Ok(state.trace.into_slots())
    }

    /// Pick the phase that applies at the top of the loop.
    pub fn route(&self, state: &SimState) -> Phase {
        if state.ready.is_empty() {
            return if state.pending.is_empty() {
                Phase::Done
            } else {
                Phase::AdmitNext
            };
        }
        match state.next_arrival() {
            Some(arrival) if arrival == state.now => Phase::Drain,
            Some(_) => Phase::BulkSkip,
            // Last process standing runs straight to completion.
            None if state.ready.len() == 1 => Phase::StepComplete,
            None => Phase::BulkSkip,
        }
    }

    /// Perform `phase` and return the next one.
    pub fn transition(&self, state: &mut SimState, phase: Phase) -> Phase {
        match phase {
            Phase::AdmitNext => {
                self.admit_next(state);
                self.route(state)
            }
            Phase::Drain => {
                if let Some(id) = state.admit_next() {
                    log_events!(self.config.verbosity, "t={} P{} arrives", state.now, id);
                }
                self.route(state)
            }
            Phase::BulkSkip => {
                if self.config.bulk_skip {
                    self.bulk_skip(state);
                }
                self.step_for_head(state)
            }
            Phase::StepPreempt => {
                self.step_preempt(state);
                self.route(state)
            }
            Phase::StepComplete => {
                self.step_complete(state);
                self.route(state)
            }
            Phase::Done => Phase::Done,
        }
    }

    fn step_for_head(&self, state: &SimState) -> Phase {
        match state.head() {
            Some(head) if head.remaining > self.quantum => Phase::StepPreempt,
            Some(_) => Phase::StepComplete,
            None => Phase::Done,
        }
    }

    fn admit_next(&self, state: &mut SimState) {
        let Some(arrival) = state.next_arrival() else {
            return;
        };
        let idle_since = state.now;
        state.now = arrival;
        let Some(id) = state.admit_next() else {
            return;
        };

        if arrival == 0 {
            state.trace.record(Slot::Running(id));
        } else if self.config.cap_bootstrap_idle {
            state.trace.record(Slot::Idle);
        } else {
            state.trace.record_uncapped(Slot::Idle);
        }

        log_events!(
            self.config.verbosity,
            "t={} P{} arrives on idle CPU (idle since t={})",
            arrival,
            id,
            idle_since
        );
    }

    fn bulk_skip(&self, state: &mut SimState) {
        let remaining = state.ready.iter().map(|&i| state.procs[i].remaining);
        let Some(plan) = bulk::plan(self.quantum, state.now, remaining, state.next_arrival())
        else {
            return;
        };

        log_debug!(
            self.config.verbosity,
            "t={} bulk skip: {} rounds over {} ready processes ({} ticks)",
            state.now,
            plan.rounds,
            state.ready.len(),
            plan.span()
        );
        state.apply_bulk(plan);
    }

    fn step_preempt(&self, state: &mut SimState) {
        let Some(id) = state.run_head(self.quantum) else {
            return;
        };
        log_steps!(
            self.config.verbosity,
            "t={} P{} preempted after one quantum",
            state.now,
            id
        );

        if state.pending.is_empty() {
            state.requeue_head();
            return;
        }

        let admitted = state.admit_arrived_before_now();
        // The preempted process goes back ahead of anything arriving this instant.
        state.requeue_head();
        if state.next_arrival() == Some(state.now) {
            state.admit_next();
            log_events!(
                self.config.verbosity,
                "t={} {} arrivals admitted behind P{}",
                state.now,
                admitted + 1,
                id
            );
        } else if admitted > 0 {
            log_events!(
                self.config.verbosity,
                "t={} {} arrivals admitted",
                state.now,
                admitted
            );
        }
    }

    fn step_complete(&self, state: &mut SimState) {
        let Some(remaining) = state.head().map(|h| h.remaining) else {
            return;
        };
        state.run_head(remaining);
        let Some(id) = state.complete_head() else {
            return;
        };
        log_events!(self.config.verbosity, "t={} P{} completes", state.now, id);

        // Only one arrival is admitted per completion; later ones are picked up by
        // the next preemption or completion.
        if state.next_arrival().is_some_and(|a| a <= state.now) {
            if let Some(next) = state.admit_next() {
                log_events!(self.config.verbosity, "t={} P{} admitted", state.now, next);
            }
        }
    }
}

/// Reject inputs the simulation cannot handle.
fn validate(processes: &[Process]) -> Result<(), SimulationError> {
    let mut seen: FxHashSet<ProcessId> = FxHashSet::default();
    let mut previous: Option<Time> = None;

    for process in processes {
        if process.burst == 0 {
            return Err(SimulationError::ZeroBurst(process.id));
        }
        if !seen.insert(process.id) {
            return Err(SimulationError::DuplicateId(process.id));
        }
        if let Some(prev) = previous {
            if process.arrival_time < prev {
                return Err(SimulationError::UnsortedArrivals {
                    id: process.id,
                    arrival_time: process.arrival_time,
                    previous: prev,
                });
            }
        }
        previous = Some(process.arrival_time);
    }

    Ok(())
}

/// Run the simulator with default options.
pub fn simulate_rr(
    quantum: Time,
    max_seq_len: usize,
    processes: &mut [Process],
) -> Result<Vec<Slot>, SimulationError> {
    RoundRobinSimulator::new(quantum, max_seq_len, SimulationConfig::default())?.run(processes)
}
