//! The target-executor boundary.
//!
//! The search loop never runs the target itself; it consumes this contract.
//! Implementations must be deterministic for the same sequence — the
//! reduction algorithm's correctness assumes it.

use std::collections::{HashMap, HashSet};

use sonde_input::{CoverageSet, InputSequence, StateSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("target run failed: {0}")]
    Failed(String),
}

/// Runs one input sequence against the system under test and reports the
/// branch coverage and final-state snapshot it produced.
pub trait TargetExecutor {
    fn run(
        &mut self,
        sequence: &InputSequence,
    ) -> Result<(CoverageSet, StateSnapshot), ExecutorError>;
}

/// Table-driven executor for tests — canned responses per sequence, with a
/// configurable fallback for everything unscripted.
pub struct ScriptedExecutor {
    coverage_width: usize,
    responses: HashMap<InputSequence, (CoverageSet, StateSnapshot)>,
    failures: HashSet<InputSequence>,
    /// Fallback state bytes for unscripted sequences.
    default_state: Vec<u8>,
}

impl ScriptedExecutor {
    pub fn new(coverage_width: usize) -> Self {
        Self {
            coverage_width,
            responses: HashMap::new(),
            failures: HashSet::new(),
            default_state: Vec::new(),
        }
    }

    /// Script the response for one sequence.
    pub fn stub(&mut self, sequence: InputSequence, branches: &[usize], state: &[u8]) {
        self.responses.insert(
            sequence,
            (
                CoverageSet::from_branches(self.coverage_width, branches),
                StateSnapshot::new(state.to_vec()),
            ),
        );
    }

    /// Script a failure for one sequence.
    pub fn fail_for(&mut self, sequence: InputSequence) {
        self.failures.insert(sequence);
    }

    pub fn set_default_state(&mut self, state: Vec<u8>) {
        self.default_state = state;
    }
}

impl TargetExecutor for ScriptedExecutor {
    fn run(
        &mut self,
        sequence: &InputSequence,
    ) -> Result<(CoverageSet, StateSnapshot), ExecutorError> {
        if self.failures.contains(sequence) {
            return Err(ExecutorError::Failed(format!(
                "scripted failure for {sequence}"
            )));
        }
        if let Some((coverage, snapshot)) = self.responses.get(sequence) {
            return Ok((coverage.clone(), snapshot.clone()));
        }
        Ok((
            CoverageSet::new(self.coverage_width),
            StateSnapshot::new(self.default_state.clone()),
        ))
    }
}
