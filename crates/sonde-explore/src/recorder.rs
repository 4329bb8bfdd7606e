//! Per-generation accumulation of execution feedback.

use sonde_input::Record;

#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("generation expected {expected} records but a {got}th was delivered")]
    Overflow { expected: usize, got: usize },
}

/// Accumulates one record per dispatched sequence until the generation's
/// expected count is reached, then is drained and re-armed for the next
/// generation.
#[derive(Debug, Default)]
pub struct FeedbackRecorder {
    records: Vec<Record>,
    expected: usize,
}

impl FeedbackRecorder {
    /// A recorder armed for a generation of `expected` dispatches.
    pub fn new(expected: usize) -> Self {
        Self {
            records: Vec::new(),
            expected,
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record. Delivering more records than the generation
    /// dispatched is a caller contract violation and fails fast.
    pub fn push(&mut self, record: Record) -> Result<(), RecorderError> {
        if self.records.len() >= self.expected {
            return Err(RecorderError::Overflow {
                expected: self.expected,
                got: self.records.len() + 1,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Whether every dispatched sequence of this generation has reported.
    pub fn generation_complete(&self) -> bool {
        self.records.len() == self.expected
    }

    /// Drain the accumulated records, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.records)
    }

    /// Re-arm for the next generation's dispatch count.
    pub fn arm(&mut self, expected: usize) {
        self.expected = expected;
    }
}
