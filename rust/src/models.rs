//! Core data types for the simulator.

use pyo3::prelude::*;
use std::fmt;

/// Simulated time, in abstract ticks.
pub type Time = u64;

/// Process identifier, also the symbol recorded in the execution trace.
pub type ProcessId = u32;

/// Raw trace value used for an idle CPU on the Python surface.
pub const IDLE_RAW: i64 = -1;

/// A process to be scheduled.
///
/// Only `start_time` and `finish_time` are written by the simulator.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    #[pyo3(get, set)]
    pub id: ProcessId,
    #[pyo3(get, set)]
    pub arrival_time: Time,
    #[pyo3(get, set)]
    pub burst: Time,
    #[pyo3(get)]
    pub start_time: Option<Time>,
    #[pyo3(get)]
    pub finish_time: Option<Time>,
}

impl Process {
    /// Create a process that has not been simulated yet.
    pub fn new(id: ProcessId, arrival_time: Time, burst: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst,
            start_time: None,
            finish_time: None,
        }
    }
}

#[pymethods]
impl Process {
    #[new]
    fn py_new(id: ProcessId, arrival_time: Time, burst: Time) -> Self {
        Self::new(id, arrival_time, burst)
    }

    fn __repr__(&self) -> String {
        format!(
            "Process(id={}, arrival_time={}, burst={}, start_time={:?}, finish_time={:?})",
            self.id, self.arrival_time, self.burst, self.start_time, self.finish_time
        )
    }
}

/// One entry of the execution trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No process was ready; the CPU waited for the next arrival.
    Idle,
    /// The given process occupied the CPU.
    Running(ProcessId),
}

impl Slot {
    /// Integer form: the process id, or `-1` for idle.
    pub fn as_raw(self) -> i64 {
        match self {
            Slot::Idle => IDLE_RAW,
            Slot::Running(id) => i64::from(id),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Idle => write!(f, "idle"),
            Slot::Running(id) => write!(f, "P{}", id),
        }
    }
}

/// Result of a simulation run, in the shape handed to Python.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct SimulationResult {
    #[pyo3(get, set)]
    pub processes: Vec<Process>,
    /// Compressed execution trace; `-1` marks idle.
    #[pyo3(get, set)]
    pub seq: Vec<i64>,
}

impl SimulationResult {
    pub fn from_trace(processes: Vec<Process>, trace: &[Slot]) -> Self {
        Self {
            processes,
            seq: trace.iter().map(|slot| slot.as_raw()).collect(),
        }
    }
}

#[pymethods]
impl SimulationResult {
    fn __repr__(&self) -> String {
        format!(
            "SimulationResult(processes={}, seq_len={})",
            self.processes.len(),
            self.seq.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process_is_unscheduled() {
        let p = Process::new(3, 7, 4);
        assert_eq!(p.start_time, None);
        assert_eq!(p.finish_time, None);
    }

    #[test]
    fn test_slot_raw_values() {
        assert_eq!(Slot::Idle.as_raw(), -1);
        assert_eq!(Slot::Running(0).as_raw(), 0);
        assert_eq!(Slot::Running(42).as_raw(), 42);
    }

    #[test]
    fn test_result_from_trace() {
        let trace = [Slot::Idle, Slot::Running(1), Slot::Running(0)];
        let result = SimulationResult::from_trace(vec![], &trace);
        assert_eq!(result.seq, vec![-1, 1, 0]);
    }
}
