//! Uniform down-sampling of oversized candidate batches.

use rand::seq::SliceRandom;
use rand::Rng;
use sonde_input::InputSequence;

/// Reduce `candidates` to at most `cap` elements.
///
/// Under the cap the batch is returned untouched, order included.
/// Over the cap, a uniformly random subset of exactly `cap` elements is
/// kept, without replacement. The RNG is caller-supplied so the same seed
/// always picks the same subset.
pub fn sample<R: Rng>(
    mut candidates: Vec<InputSequence>,
    cap: usize,
    rng: &mut R,
) -> Vec<InputSequence> {
    if candidates.len() <= cap {
        return candidates;
    }
    candidates.shuffle(rng);
    candidates.truncate(cap);
    candidates
}
