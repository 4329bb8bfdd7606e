pub mod enumerate;
pub mod expand;
pub mod generator;
pub mod recorder;
pub mod reduce;
pub mod rng;
pub mod sample;
pub mod worklist;

pub use generator::{GeneratorConfig, GeneratorError, InputGenerator};
