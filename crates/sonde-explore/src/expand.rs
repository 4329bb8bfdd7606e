//! Seed expansion — the next generation's candidate worklist.

use sonde_input::{Alphabet, InputSequence};

/// Extend every surviving seed with every alphabet action.
///
/// Output size is `|seeds| * alphabet.len()`; each output is a freshly
/// constructed sequence one element longer than its seed. Empty seed sets
/// expand to an empty candidate list.
pub fn expand(seeds: &[InputSequence], alphabet: &Alphabet) -> Vec<InputSequence> {
    let mut candidates = Vec::with_capacity(seeds.len() * alphabet.len());
    for seed in seeds {
        for action in alphabet.actions() {
            candidates.push(seed.append(action));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_input::Action;

    #[test]
    fn test_expansion_size_law() {
        let alphabet = Alphabet::new(3).unwrap();
        let seeds = vec![
            InputSequence::from_actions(vec![Action(0)]),
            InputSequence::from_actions(vec![Action(2)]),
        ];
        let candidates = expand(&seeds, &alphabet);
        assert_eq!(candidates.len(), 6);
        assert!(candidates.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_each_candidate_extends_its_seed() {
        let alphabet = Alphabet::new(2).unwrap();
        let seed = InputSequence::from_actions(vec![Action(1)]);
        let candidates = expand(std::slice::from_ref(&seed), &alphabet);
        assert_eq!(
            candidates,
            vec![seed.append(Action(0)), seed.append(Action(1))]
        );
    }

    #[test]
    fn test_empty_seed_set_expands_to_nothing() {
        let alphabet = Alphabet::new(4).unwrap();
        assert!(expand(&[], &alphabet).is_empty());
    }
}
