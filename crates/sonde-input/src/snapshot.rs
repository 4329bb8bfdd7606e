//! Target-state snapshots and the per-execution feedback record.

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageSet;
use crate::sequence::InputSequence;

/// An opaque byte image of the target's observable state after one run.
///
/// Compared only by full byte equality. Snapshot lengths may legitimately
/// differ across differently-sized input sequences; unequal lengths simply
/// compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSnapshot {
    bytes: Vec<u8>,
}

impl StateSnapshot {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The snapshot of a run that produced no observable state, e.g. a
    /// substitute record for a failed execution.
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The unit exchanged between execution and corpus reduction: one input
/// sequence together with the coverage and final state it produced.
///
/// Records are immutable and compared by value, never by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub sequence: InputSequence,
    pub coverage: CoverageSet,
    pub snapshot: StateSnapshot,
}

impl Record {
    pub fn new(sequence: InputSequence, coverage: CoverageSet, snapshot: StateSnapshot) -> Self {
        Self {
            sequence,
            coverage,
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Action;

    #[test]
    fn test_snapshot_equality_is_byte_equality() {
        let a = StateSnapshot::new(vec![1, 2, 3]);
        let b = StateSnapshot::new(vec![1, 2, 3]);
        let c = StateSnapshot::new(vec![1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_record_value_equality() {
        let make = || {
            Record::new(
                InputSequence::from_actions(vec![Action(0)]),
                CoverageSet::from_branches(8, &[1]),
                StateSnapshot::new(vec![7]),
            )
        };
        assert_eq!(make(), make());
    }
}
