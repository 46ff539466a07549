//! Configuration types for the simulator.

use pyo3::prelude::*;

/// Options that tune a simulation run without changing its inputs.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Advance whole round-robin cycles at once when no completion or arrival can occur
    /// inside them. Disabling it gives the one-quantum-at-a-time reference run.
    #[pyo3(get, set)]
    pub bulk_skip: bool,
    /// Whether the idle marker emitted when the CPU waits for the next arrival counts
    /// against `max_seq_len`. When false it is recorded even on a full trace.
    #[pyo3(get, set)]
    pub cap_bootstrap_idle: bool,
    /// Verbosity level: 0=silent, 1=events, 2=steps, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bulk_skip: true,
            cap_bootstrap_idle: true,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (bulk_skip=None, cap_bootstrap_idle=None, verbosity=None))]
    fn new(
        bulk_skip: Option<bool>,
        cap_bootstrap_idle: Option<bool>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            bulk_skip: bulk_skip.unwrap_or(defaults.bulk_skip),
            cap_bootstrap_idle: cap_bootstrap_idle.unwrap_or(defaults.cap_bootstrap_idle),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(bulk_skip={}, cap_bootstrap_idle={}, verbosity={})",
            self.bulk_skip, self.cap_bootstrap_idle, self.verbosity
        )
    }
}

impl SimulationConfig {
    /// Reference configuration: no bulk skipping.
    pub fn naive() -> Self {
        Self {
            bulk_skip: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert!(config.bulk_skip);
        assert!(config.cap_bootstrap_idle);
        assert_eq!(config.verbosity, 0);
    }

    #[test]
    fn test_naive_only_disables_bulk_skip() {
        let config = SimulationConfig::naive();
        assert!(!config.bulk_skip);
        assert!(config.cap_bootstrap_idle);
    }
}
