//! The pending-sequence worklist for the current generation.

use sonde_input::InputSequence;

/// A batch of sequences awaiting execution.
///
/// Sequences are handed out exactly once; the worklist never revisits a
/// sequence after `take` returns it. Hand-out order is unspecified by the
/// contract — this implementation drains from the tail.
#[derive(Debug, Default)]
pub struct Worklist {
    pending: Vec<InputSequence>,
}

impl Worklist {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn has_more(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return one pending sequence, or `None` when drained.
    pub fn take(&mut self) -> Option<InputSequence> {
        self.pending.pop()
    }

    /// Replace the entire contents with the next generation's batch.
    pub fn replace(&mut self, batch: Vec<InputSequence>) {
        self.pending = batch;
    }
}
