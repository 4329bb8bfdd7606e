pub mod alphabet;
pub mod coverage;
pub mod sequence;
pub mod snapshot;

pub use alphabet::{Action, Alphabet};
pub use coverage::CoverageSet;
pub use sequence::InputSequence;
pub use snapshot::{Record, StateSnapshot};
