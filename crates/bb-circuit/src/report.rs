//! Diagnostic channel for circuit usage errors.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::CircuitError;

/// Receives every usage error a circuit detects, whether or not the
/// operation is then aborted.
pub trait Reporter {
    fn report(&self, error: &CircuitError);
}

/// Default reporter: emits a `tracing` warning per error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: &CircuitError) {
        tracing::warn!(kind = error.kind(), "{error}");
    }
}

/// Keeps every reported error in memory.
///
/// Clones share the same log, so a clone can be handed to a circuit while
/// the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    entries: Rc<RefCell<Vec<CircuitError>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<CircuitError> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, error: &CircuitError) {
        self.entries.borrow_mut().push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_log() {
        let reporter = RecordingReporter::new();
        let handle = reporter.clone();
        handle.report(&CircuitError::MissingBoard);
        assert_eq!(reporter.len(), 1);
        assert_eq!(reporter.entries(), vec![CircuitError::MissingBoard]);
        assert_eq!(reporter.messages()[0], "Circuit is not bound to a board");
    }
}
