//! Round-robin CPU scheduling simulator.
//!
//! The simulation loop is a small state machine over [`Phase`]s. Full round-robin
//! cycles that cannot contain a completion or an arrival are applied in one step
//! (see [`bulk`]); this never changes the trace or the start/finish times, only how
//! quickly they are computed.

pub mod bulk;
mod core;
mod state;
mod trace;

pub use bulk::BulkPlan;
pub use self::core::{simulate_rr, Phase, RoundRobinSimulator, SimulationError};
pub use state::{ProcessState, SimState};
pub use trace::Trace;
