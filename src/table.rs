// src/table.rs
// VoteCounts + the results normalizer.
//
// A vote distribution is a closed 1–10 domain, so it lives in a fixed
// array rather than a map: every vote value always has a slot, and a value
// the page never mentioned is simply 0.

use std::collections::HashSet;

use crate::error::PollError;

pub const MIN_VOTE: u32 = 1;
pub const MAX_VOTE: u32 = 10;

/// Vote counts for one question, indexed by vote value 1–10.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VoteCounts([u32; 10]);

impl VoteCounts {
    /// Build from (vote value, count) pairs. Values outside 1–10 are the
    /// caller's bug, not page noise — the extractor filters those earlier.
    pub fn from_pairs<I: IntoIterator<Item = (u32, u32)>>(pairs: I) -> Self {
        let mut c = Self::default();
        for (value, count) in pairs {
            c.add(value, count);
        }
        c
    }

    pub fn get(&self, value: u32) -> u32 {
        debug_assert!((MIN_VOTE..=MAX_VOTE).contains(&value));
        self.0[(value - 1) as usize]
    }

    pub fn add(&mut self, value: u32, count: u32) {
        debug_assert!((MIN_VOTE..=MAX_VOTE).contains(&value));
        self.0[(value - 1) as usize] += count;
    }

    /// Accumulate another distribution (category rollup).
    pub fn merge(&mut self, other: &VoteCounts) {
        for (slot, v) in self.0.iter_mut().zip(other.0.iter()) {
            *slot += v;
        }
    }

    /// Total votes cast on this question.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| c as u64).sum()
    }

    /// Turnout-sensitive score: Σ value × count. Deliberately not
    /// normalized per question — more votes means a bigger score.
    pub fn weighted(&self) -> u64 {
        (MIN_VOTE..=MAX_VOTE).map(|v| v as u64 * self.get(v) as u64).sum()
    }

    /// (value, count) pairs in ascending vote-value order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (MIN_VOTE..=MAX_VOTE).map(move |v| (v, self.get(v)))
    }
}

/// Normalized results: one row per question, in ingestion order.
/// Question text is the row key and must be unique.
#[derive(Clone, Debug, Default)]
pub struct ResultsTable {
    rows: Vec<(String, VoteCounts)>,
}

impl ResultsTable {
    /// Normalize the extractor's ordered pairs. A repeated question text is
    /// fatal: downstream scoring joins on it.
    pub fn from_pairs(pairs: Vec<(String, VoteCounts)>) -> Result<Self, PollError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(pairs.len());
        for (question, _) in &pairs {
            if !seen.insert(question.as_str()) {
                return Err(PollError::DuplicateQuestion(question.clone()));
            }
        }
        Ok(Self { rows: pairs })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[(String, VoteCounts)] {
        &self.rows
    }
}
