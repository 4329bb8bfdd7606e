//! The input generator — one search run's generation cycle.
//!
//! Each generation walks the same cycle: dispatch every pending sequence,
//! collect one feedback record per dispatch, then reduce the records to a
//! seed corpus, expand each seed by one action, down-sample to the worklist
//! cap, and start the next generation. The three operations exposed here
//! (`has_more` / `generate` / `record`) are the entire boundary the
//! surrounding harness needs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sonde_input::{Alphabet, CoverageSet, InputSequence, Record, StateSnapshot};

use crate::enumerate::enumerate;
use crate::expand::expand;
use crate::recorder::{FeedbackRecorder, RecorderError};
use crate::reduce::reduce;
use crate::rng::generation_rng;
use crate::sample::sample;
use crate::worklist::Worklist;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The caller delivered feedback for a sequence this generation never
    /// dispatched, or delivered it twice.
    #[error("record for a sequence that was never dispatched (or already recorded): {0}")]
    UnknownSequence(InputSequence),

    #[error(transparent)]
    Recorder(#[from] RecorderError),
}

/// Tuning knobs for one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Longest sequence length seeded into generation one. The first
    /// worklist holds every sequence of every length `1..=initial_length`.
    pub initial_length: usize,
    /// Worklist size cap; oversized expansions are uniformly down-sampled.
    pub worklist_cap: usize,
    /// Keep at most this many seeds after reduction, first-encountered
    /// wins. `None` disables the cap.
    pub max_seeds: Option<usize>,
    /// RNG seed for sampling reproducibility.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_length: 2,
            worklist_cap: 300,
            max_seeds: Some(5),
            seed: 42,
        }
    }
}

/// Feedback-directed generator of action sequences.
///
/// Owns the full generation state — worklist, recorder, in-flight dispatch
/// set, target length, generation counter — so independent search runs can
/// coexist. Single-threaded by contract: callers running the target in
/// parallel must serialize `record` calls.
pub struct InputGenerator {
    alphabet: Alphabet,
    config: GeneratorConfig,
    worklist: Worklist,
    recorder: FeedbackRecorder,
    /// Dispatched but not yet recorded in the current generation.
    in_flight: HashSet<InputSequence>,
    target_length: usize,
    generation: u64,
}

impl InputGenerator {
    /// Create a generator with generation one seeded by exhaustive
    /// enumeration of all lengths up to `config.initial_length`.
    pub fn new(alphabet: Alphabet, config: GeneratorConfig) -> Self {
        let mut pending = Vec::new();
        for length in 1..=config.initial_length {
            pending.extend(enumerate(&alphabet, length));
        }

        let mut worklist = Worklist::new();
        worklist.replace(pending);
        let recorder = FeedbackRecorder::new(worklist.len());
        let target_length = config.initial_length;

        Self {
            alphabet,
            config,
            worklist,
            recorder,
            in_flight: HashSet::new(),
            target_length,
            generation: 1,
        }
    }

    /// Whether any sequence is still pending dispatch.
    pub fn has_more(&self) -> bool {
        self.worklist.has_more()
    }

    /// Dispatch one pending sequence, or `None` when the worklist is empty.
    pub fn generate(&mut self) -> Option<InputSequence> {
        let sequence = self.worklist.take()?;
        self.in_flight.insert(sequence.clone());
        Some(sequence)
    }

    /// Deliver the coverage and final state observed for a dispatched
    /// sequence.
    ///
    /// When the last outstanding record of the generation arrives, the
    /// worklist is rebuilt for the next generation: reduce the records to
    /// seeds, expand each seed by every alphabet action, and down-sample
    /// to the worklist cap. An empty surviving set ends the search
    /// gracefully — `has_more` turns false.
    pub fn record(
        &mut self,
        sequence: InputSequence,
        coverage: CoverageSet,
        snapshot: StateSnapshot,
    ) -> Result<(), GeneratorError> {
        if !self.in_flight.remove(&sequence) {
            return Err(GeneratorError::UnknownSequence(sequence));
        }
        self.recorder
            .push(Record::new(sequence, coverage, snapshot))?;

        if self.recorder.generation_complete() {
            self.advance_generation();
        }
        Ok(())
    }

    /// Generation boundary: reduce -> expand -> sample, then re-arm.
    fn advance_generation(&mut self) {
        let records = self.recorder.drain();

        let seeds = reduce(records, self.config.max_seeds);
        let candidates = expand(&seeds, &self.alphabet);
        let mut rng = generation_rng(self.config.seed, self.generation);
        let next = sample(candidates, self.config.worklist_cap, &mut rng);

        self.worklist.replace(next);
        self.recorder.arm(self.worklist.len());
        self.target_length += 1;
        self.generation += 1;
    }

    /// Generation counter, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Sequence length the current generation's expansions target.
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Sequences still pending dispatch in the current generation.
    pub fn pending_len(&self) -> usize {
        self.worklist.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_input::Action;

    fn tiny_config() -> GeneratorConfig {
        GeneratorConfig {
            initial_length: 1,
            worklist_cap: 300,
            max_seeds: None,
            seed: 42,
        }
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.initial_length, config.initial_length);
        assert_eq!(back.worklist_cap, config.worklist_cap);
        assert_eq!(back.max_seeds, config.max_seeds);
        assert_eq!(back.seed, config.seed);
    }

    #[test]
    fn test_initial_worklist_covers_all_lengths() {
        let alphabet = Alphabet::new(3).unwrap();
        let config = GeneratorConfig {
            initial_length: 2,
            ..GeneratorConfig::default()
        };
        let generator = InputGenerator::new(alphabet, config);
        // 3^1 + 3^2
        assert_eq!(generator.pending_len(), 12);
        assert_eq!(generator.generation(), 1);
    }

    #[test]
    fn test_record_unknown_sequence_rejected() {
        let alphabet = Alphabet::new(2).unwrap();
        let mut generator = InputGenerator::new(alphabet, tiny_config());

        let never_dispatched = InputSequence::from_actions(vec![Action(0), Action(1)]);
        let err = generator
            .record(
                never_dispatched,
                CoverageSet::new(8),
                StateSnapshot::empty(),
            )
            .unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownSequence(_)));
    }

    #[test]
    fn test_double_record_rejected() {
        let alphabet = Alphabet::new(2).unwrap();
        let mut generator = InputGenerator::new(alphabet, tiny_config());

        let seq = generator.generate().unwrap();
        generator
            .record(seq.clone(), CoverageSet::new(8), StateSnapshot::new(vec![1]))
            .unwrap();
        let err = generator
            .record(seq, CoverageSet::new(8), StateSnapshot::new(vec![1]))
            .unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownSequence(_)));
    }

    #[test]
    fn test_boundary_advances_length_and_generation() {
        let alphabet = Alphabet::new(2).unwrap();
        let mut generator = InputGenerator::new(alphabet, tiny_config());
        assert_eq!(generator.target_length(), 1);

        // Drain generation one fully before recording, so the rebuilt
        // worklist is not consumed by this loop.
        let dispatched: Vec<InputSequence> = std::iter::from_fn(|| generator.generate()).collect();
        assert_eq!(dispatched.len(), 2);

        // Distinct states, incomparable coverage: both survive reduction.
        for (branch, seq) in dispatched.into_iter().enumerate() {
            generator
                .record(
                    seq,
                    CoverageSet::from_branches(8, &[branch]),
                    StateSnapshot::new(vec![branch as u8]),
                )
                .unwrap();
        }

        assert_eq!(generator.generation(), 2);
        assert_eq!(generator.target_length(), 2);
        // 2 seeds x 2 actions
        assert_eq!(generator.pending_len(), 4);
    }
}
