//! Immutable action sequences — one candidate test input each.

use serde::{Deserialize, Serialize};

use crate::alphabet::Action;

/// An ordered, immutable list of actions.
///
/// Equality and hashing are structural over the element list. `append`
/// produces a fresh sequence one element longer; no sequence is ever
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSequence {
    actions: Vec<Action>,
}

impl InputSequence {
    /// The empty sequence.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// A new sequence with `action` appended. `self` is unchanged.
    pub fn append(&self, action: Action) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl std::fmt::Display for InputSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{action}")?;
        }
        write!(f, "]")
    }
}
