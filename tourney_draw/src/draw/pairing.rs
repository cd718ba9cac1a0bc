//! Shared-table counts for every pair of competitors within one block.

use crate::roster::CompetitorId;
use std::collections::HashMap;

/// Counts how often each unordered pair of competitors has shared a table.
///
/// One tracker lives for one block computation and is dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct PairingTracker {
    counts: HashMap<(CompetitorId, CompetitorId), u32>,
}

fn pair_key(a: CompetitorId, b: CompetitorId) -> (CompetitorId, CompetitorId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl PairingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one shared table for every pair in `members`
    pub fn increment(&mut self, members: &[CompetitorId]) {
        for (idx, &a) in members.iter().enumerate() {
            for &b in &members[idx + 1..] {
                *self.counts.entry(pair_key(a, b)).or_insert(0) += 1;
            }
        }
    }

    /// Times `a` and `b` have shared a table
    pub fn count(&self, a: CompetitorId, b: CompetitorId) -> u32 {
        self.counts.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    /// Sum of current counts over all pairs of a candidate table
    pub fn cost(&self, members: &[CompetitorId]) -> u32 {
        members
            .iter()
            .enumerate()
            .map(|(idx, &a)| {
                members[idx + 1..]
                    .iter()
                    .map(|&b| self.count(a, b))
                    .sum::<u32>()
            })
            .sum()
    }

    /// Cost increase from seating `candidate` with `members`
    pub fn added_cost(&self, candidate: CompetitorId, members: &[CompetitorId]) -> u32 {
        members.iter().map(|&m| self.count(candidate, m)).sum()
    }

    /// Highest count over all recorded pairs, 0 when nothing is recorded
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Number of pairs that have shared a table more than once
    pub fn repeated_pairs(&self) -> usize {
        self.counts.values().filter(|&&count| count > 1).count()
    }

    /// Forget every recorded pairing
    pub fn reset(&mut self) {
        self.counts.clear();
    }
}
