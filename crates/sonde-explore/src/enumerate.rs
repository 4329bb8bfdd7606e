//! Exhaustive enumeration of fixed-length action sequences.

use sonde_input::{Alphabet, InputSequence};

/// All sequences of exactly `length` actions over `alphabet`, in
/// lexicographic order of action ordinals.
///
/// Yields exactly `alphabet.len() ^ length` distinct sequences; `length`
/// zero yields the single empty sequence. A no-op alphabet member counts
/// like any other symbol.
pub fn enumerate(alphabet: &Alphabet, length: usize) -> Vec<InputSequence> {
    let base = alphabet.len();
    let mut out = Vec::new();
    let mut ordinals = vec![0usize; length];

    loop {
        let actions = ordinals.iter().filter_map(|&o| alphabet.get(o)).collect();
        out.push(InputSequence::from_actions(actions));

        // Advance the odometer, least-significant position last.
        let mut position = length;
        loop {
            if position == 0 {
                return out;
            }
            position -= 1;
            if ordinals[position] + 1 < base {
                ordinals[position] += 1;
                break;
            }
            ordinals[position] = 0;
        }
    }
}
