//! Logging macros for the simulator with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Verbosity levels:
//! - 0: SILENT
//! - 1: EVENTS (admissions, completions, idle gaps)
//! - 2: STEPS (every dispatch)
//! - 3: DEBUG (bulk-skip planning internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_EVENTS: u8 = 1;
pub const VERBOSITY_STEPS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at EVENTS level (verbosity >= 1).
///
/// Used for: process admissions, completions, idle gaps.
#[macro_export]
macro_rules! log_events {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_EVENTS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at STEPS level (verbosity >= 2).
///
/// Used for: single-quantum dispatches and requeues.
#[macro_export]
macro_rules! log_steps {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STEPS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_EVENTS);
        assert!(VERBOSITY_EVENTS < VERBOSITY_STEPS);
        assert!(VERBOSITY_STEPS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_compile() {
        let verbosity = VERBOSITY_SILENT;
        log_events!(verbosity, "admit {}", 1);
        log_steps!(verbosity, "dispatch {}", 2);
        log_debug!(verbosity, "plan {}", 3);
    }
}
