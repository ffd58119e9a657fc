// src/score.rs
// Scoring engine: buckets, weighted score, grouped score, catalog
// attachment, final ranking order.

use crate::catalog::{Catalog, Category};
use crate::error::PollError;
use crate::table::{ResultsTable, VoteCounts};

/// The four enthusiasm tiers, most to least enthusiastic. The labels are
/// part of the output format.
pub const BUCKET_LABELS: [&str; 4] = [
    "Implement it today!",
    "I'm interested.",
    "Meh.",
    "Don't waste your time.",
];

/// Vote values per bucket, same order as `BUCKET_LABELS`.
const BUCKET_VALUES: [&[u32]; 4] = [&[10, 9], &[8, 7], &[6, 5, 4], &[3, 2, 1]];

/// Grouped-score weights per bucket. The negative tier is weighted 0 on
/// purpose: the ranking de-emphasizes "don't" votes rather than punishing
/// them. Changing these changes the whole ranking.
const BUCKET_WEIGHTS: [u64; 4] = [3, 2, 1, 0];

/// One fully scored question row.
#[derive(Clone, Debug)]
pub struct ScoredRow {
    pub question: String,
    pub short: String,
    pub category: Category,
    pub counts: VoteCounts,
    pub buckets: [u32; 4],
    pub weighted: u64,
    pub grouped: u64,
}

impl ScoredRow {
    fn build(question: String, counts: VoteCounts, catalog: &Catalog) -> Result<Self, PollError> {
        let (short, category) = catalog.lookup(&question)?;
        let buckets = bucket_scores(&counts);
        let grouped = buckets
            .iter()
            .zip(BUCKET_WEIGHTS)
            .map(|(&b, w)| b as u64 * w)
            .sum();
        Ok(Self {
            short: s!(short),
            category,
            weighted: counts.weighted(),
            grouped,
            buckets,
            counts,
            question,
        })
    }
}

/// Sum counts over each bucket's vote values.
pub fn bucket_scores(counts: &VoteCounts) -> [u32; 4] {
    let mut out = [0u32; 4];
    for (slot, values) in out.iter_mut().zip(BUCKET_VALUES) {
        *slot = values.iter().map(|&v| counts.get(v)).sum();
    }
    out
}

/// Score every row and rank by weighted score, descending. The sort is
/// stable, so ties keep their ingestion order.
pub fn score_rows(table: &ResultsTable, catalog: &Catalog) -> Result<Vec<ScoredRow>, PollError> {
    let mut rows = table
        .rows()
        .iter()
        .map(|(q, counts)| ScoredRow::build(q.clone(), *counts, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    rows.sort_by(|a, b| b.weighted.cmp(&a.weighted));
    Ok(rows)
}

/* ---------------- Export shape ---------------- */

pub fn score_headers() -> Vec<String> {
    let mut h = vec![s!("Question")];
    h.extend((1..=10).map(|v| v.to_string()));
    h.extend(BUCKET_LABELS.iter().map(|&l| s!(l)));
    h.push(s!("Score (weighted)"));
    h.push(s!("Score (grouped)"));
    h.push(s!("Category"));
    h.push(s!("Short"));
    h
}

pub fn score_row_cells(row: &ScoredRow) -> Vec<String> {
    let mut out = Vec::with_capacity(18);
    out.push(row.question.clone());
    out.extend(row.counts.iter().map(|(_, c)| c.to_string()));
    out.extend(row.buckets.iter().map(|b| b.to_string()));
    out.push(row.weighted.to_string());
    out.push(row.grouped.to_string());
    out.push(s!(row.category.as_str()));
    out.push(row.short.clone());
    out
}
