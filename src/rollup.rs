// src/rollup.rs
// Category rollup: sum member questions per category and normalize so
// categories with different question counts stay comparable.

use crate::catalog::Category;
use crate::score::{ScoredRow, bucket_scores};
use crate::table::VoteCounts;

#[derive(Clone, Debug)]
pub struct CategoryRollup {
    pub category: Category,
    pub counts: VoteCounts,
    pub buckets: [u32; 4],
    pub num_questions: usize,
    /// Σ v·count(v) over the category, divided by the maximum possible
    /// vote-weight (respondents × questions). Lands in 0..=1 when
    /// `respondents` is the true respondent count and everyone answered
    /// every question.
    pub normalized: f64,
}

/// Roll scored rows up by category, in the fixed `Category::ALL` order.
/// Categories with no member questions are omitted — the category set is
/// static but the question set varies run to run.
pub fn rollup(rows: &[ScoredRow], respondents: u32) -> Vec<CategoryRollup> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members: Vec<&ScoredRow> = rows.iter().filter(|r| r.category == category).collect();
            if members.is_empty() {
                return None;
            }

            let mut counts = VoteCounts::default();
            for r in &members {
                counts.merge(&r.counts);
            }
            let num_questions = members.len();
            let denom = respondents as f64 * num_questions as f64;
            Some(CategoryRollup {
                category,
                buckets: bucket_scores(&counts),
                num_questions,
                normalized: counts.weighted() as f64 / denom,
                counts,
            })
        })
        .collect()
}

/* ---------------- Export shape ---------------- */

pub fn rollup_headers() -> Vec<String> {
    let mut h = vec![s!("Category")];
    h.extend((1..=10).map(|v| v.to_string()));
    h.extend(crate::score::BUCKET_LABELS.iter().map(|&l| s!(l)));
    h.push(s!("Questions"));
    h.push(s!("Score (normalized)"));
    h
}

pub fn rollup_row_cells(r: &CategoryRollup) -> Vec<String> {
    let mut out = Vec::with_capacity(17);
    out.push(s!(r.category.as_str()));
    out.extend(r.counts.iter().map(|(_, c)| c.to_string()));
    out.extend(r.buckets.iter().map(|b| b.to_string()));
    out.push(r.num_questions.to_string());
    out.push(format!("{:.4}", r.normalized));
    out
}
