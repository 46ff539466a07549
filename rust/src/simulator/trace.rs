//! Compressed, length-capped execution trace.

use crate::models::Slot;

/// Records which slot occupies the CPU over time.
///
/// Consecutive duplicates are collapsed into one entry, and at most `cap` entries are
/// kept. Once full, further records are dropped.
#[derive(Clone, Debug)]
pub struct Trace {
    slots: Vec<Slot>,
    cap: usize,
}

impl Trace {
    pub fn new(cap: usize) -> Self {
        Self {
            slots: Vec::new(),
            cap,
        }
    }

    /// Append `slot` unless it repeats the last entry or the trace is full.
    ///
    /// Returns whether an entry was added.
    pub fn record(&mut self, slot: Slot) -> bool {
        if self.is_full() {
            return false;
        }
        self.record_uncapped(slot)
    }

    /// Append `slot` unless it repeats the last entry, ignoring the cap.
    pub fn record_uncapped(&mut self, slot: Slot) -> bool {
        if self.slots.last() == Some(&slot) {
            return false;
        }
        self.slots.push(slot);
        true
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_slots(self) -> Vec<Slot> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_repeats_collapse() {
        let mut trace = Trace::new(10);
        assert!(trace.record(Slot::Running(1)));
        assert!(!trace.record(Slot::Running(1)));
        assert!(trace.record(Slot::Idle));
        assert!(!trace.record(Slot::Idle));
        assert!(trace.record(Slot::Running(1)));
        assert_eq!(
            trace.into_slots(),
            vec![Slot::Running(1), Slot::Idle, Slot::Running(1)]
        );
    }

    #[test]
    fn test_cap_drops_later_entries() {
        let mut trace = Trace::new(2);
        trace.record(Slot::Running(0));
        trace.record(Slot::Running(1));
        assert!(trace.is_full());
        assert!(!trace.record(Slot::Running(2)));
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_zero_cap_records_nothing() {
        let mut trace = Trace::new(0);
        assert!(!trace.record(Slot::Running(0)));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_uncapped_bypasses_cap_but_still_compresses() {
        let mut trace = Trace::new(0);
        assert!(trace.record_uncapped(Slot::Idle));
        assert!(!trace.record_uncapped(Slot::Idle));
        assert_eq!(trace.into_slots(), vec![Slot::Idle]);
    }
}
