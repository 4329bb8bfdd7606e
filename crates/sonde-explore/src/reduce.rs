//! Corpus reduction — selecting the minimal seed set worth expanding.
//!
//! Two commutative set-reduction filters, both always applied:
//! - **State deduplication**: at most one record per distinct final-state
//!   snapshot. Two sequences that land the target in the same state will
//!   explore the same continuations.
//! - **Coverage subsumption**: a record whose coverage is contained in
//!   another record's coverage contributes no new branch information and
//!   is dropped.
//!
//! Both filters keep the first-encountered record on ties, so reduction is
//! deterministic for any input order. Snapshots and coverage are
//! generation-scoped: only the surviving sequences are carried forward.

use sonde_input::{InputSequence, Record};
use std::collections::HashSet;

/// Keep one representative record per distinct state snapshot,
/// first-encountered wins.
pub fn dedup_by_state(records: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.snapshot.clone()))
        .collect()
}

/// Drop every record whose coverage is subsumed by another record's.
///
/// Record `i` is dropped when some index-distinct record `j` covers a
/// strict superset of `i`'s branches, or covers exactly the same branches
/// with `j < i` (so identical-coverage groups keep exactly one member).
/// Self-exclusion is by index, not identity: equal-valued records at
/// different positions still reduce to one survivor.
pub fn filter_subsumed(records: Vec<Record>) -> Vec<Record> {
    let subsumed: Vec<bool> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            records.iter().enumerate().any(|(j, other)| {
                j != i
                    && record.coverage.is_subset_of(&other.coverage)
                    && (!other.coverage.is_subset_of(&record.coverage) || j < i)
            })
        })
        .collect();

    records
        .into_iter()
        .zip(subsumed)
        .filter(|(_, dropped)| !dropped)
        .map(|(record, _)| record)
        .collect()
}

/// Full reduction: dedup, subsumption, then the optional seed cap.
///
/// `max_seeds` keeps the first `K` survivors after filtering; `None`
/// disables the cap. Total over empty input — zero records reduce to zero
/// seeds.
pub fn reduce(records: Vec<Record>, max_seeds: Option<usize>) -> Vec<InputSequence> {
    let survivors = filter_subsumed(dedup_by_state(records));

    let mut seeds: Vec<InputSequence> = survivors
        .into_iter()
        .map(|record| record.sequence)
        .collect();
    if let Some(cap) = max_seeds {
        seeds.truncate(cap);
    }
    seeds
}
