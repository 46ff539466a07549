//! Round-robin CPU scheduling simulator.
//!
//! Simulates fixed-quantum round-robin scheduling over a process list with known
//! arrival times and bursts, reporting each process's start and finish time and a
//! compressed execution trace. Exposed to Python through PyO3.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod logging;
mod models;
pub mod simulator;

pub use config::SimulationConfig;
pub use models::{Process, ProcessId, SimulationResult, Slot, Time, IDLE_RAW};
pub use simulator::{simulate_rr, Phase, RoundRobinSimulator, SimulationError};

/// Simulate round-robin scheduling.
///
/// # Arguments
/// * `quantum` - Time slice granted per dispatch (must be > 0)
/// * `max_seq_len` - Maximum number of entries kept in the execution trace
/// * `processes` - Processes sorted by arrival time, with unique ids and positive bursts
/// * `config` - Optional simulation options
///
/// # Returns
/// * SimulationResult with start/finish times filled in and the trace (-1 = idle)
///
/// # Raises
/// * ValueError if the quantum is zero or the process list is malformed
#[pyfunction]
#[pyo3(name = "simulate_rr", signature = (quantum, max_seq_len, processes, config=None))]
fn py_simulate_rr(
    quantum: Time,
    max_seq_len: usize,
    mut processes: Vec<Process>,
    config: Option<SimulationConfig>,
) -> PyResult<SimulationResult> {
    let simulator = RoundRobinSimulator::new(quantum, max_seq_len, config.unwrap_or_default())
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

    match simulator.run(&mut processes) {
        Ok(trace) => Ok(SimulationResult::from_trace(processes, &trace)),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The rrsim.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<Process>()?;
    m.add_class::<SimulationResult>()?;

    // Config types
    m.add_class::<SimulationConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_simulate_rr, m)?)?;

    Ok(())
}
