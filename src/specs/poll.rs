// src/specs/poll.rs
//! Scraping *spec* for the survey results page.
//!
//! Purpose:
//! - Parse the **rendered HTML** of the Forms analytics page and extract one
//!   `(question_text, VoteCounts)` pair per poll question.
//! - Question titles live in `freebirdAnalyticsViewQuestionTitle` spans; each
//!   question's data lives in the `<table>` inside the container labelled
//!   "A tabular representation of the data in the chart.".
//! - Titles and tables are collected in document order and paired
//!   positionally. The aria-label is identical on every table, so there is
//!   no stable key to pair by; a count mismatch is therefore fatal.
//!
//! Non-Responsibilities (by design):
//! - **No fetching.** The page only renders its tables under a real browser,
//!   so the document arrives as a string (saved file, stdin, test fixture).
//! - **No scoring, no export.**

use log::warn;

use crate::core::html::{
    inner_after_open_tag, next_tag_block_ci, next_tag_block_with_ci, normalize_entities,
    strip_tags, to_lowercase_fast,
};
use crate::error::PollError;
use crate::table::{MAX_VOTE, MIN_VOTE, VoteCounts};

/// Marker attribute on the container that wraps all per-question blocks.
const POLL_ROOT_MARKER: &str = r#"jsname="caphhf""#;
/// Class on the question title spans.
const QUESTION_TITLE_CLASS: &str = "freebirdanalyticsviewquestiontitle";
/// aria-label fragment on every per-question data-table container.
const RESULT_TABLE_LABEL: &str = "a tabular representation of the data in the chart";

/// Extract ordered `(question, counts)` pairs from one results document.
pub fn extract(doc: &str) -> Result<Vec<(String, VoteCounts)>, PollError> {
    let root = poll_root(doc).ok_or(PollError::PollRootMissing)?;

    let questions = question_titles(root);
    let tables = result_tables(root);

    if questions.len() != tables.len() {
        return Err(PollError::CountMismatch {
            questions: questions.len(),
            results: tables.len(),
        });
    }

    Ok(questions.into_iter().zip(tables).collect())
}

/// Slice the document from the poll container onwards. The container is the
/// last interesting element on the page, so an end bound buys nothing.
fn poll_root(doc: &str) -> Option<&str> {
    let lc = to_lowercase_fast(doc);
    let marker = lc.find(POLL_ROOT_MARKER)?;
    let tag_start = lc[..marker].rfind('<')?;
    Some(&doc[tag_start..])
}

/// Question title texts in document order.
fn question_titles(root: &str) -> Vec<String> {
    let mut titles = Vec::new();
    let mut pos = 0usize;
    while let Some((start, end)) =
        next_tag_block_with_ci(root, "<span", "</span>", QUESTION_TITLE_CLASS, pos)
    {
        let inner = inner_after_open_tag(&root[start..end]);
        titles.push(strip_tags(&normalize_entities(&inner)));
        pos = end;
    }
    titles
}

/// Parsed data tables in document order: for each labelled container, take
/// the next `<table>` block and read it into a distribution.
fn result_tables(root: &str) -> Vec<VoteCounts> {
    let lc = to_lowercase_fast(root);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(label_rel) = lc.get(pos..).and_then(|s| s.find(RESULT_TABLE_LABEL)) {
        let label_at = pos + label_rel;
        match next_tag_block_ci(root, "<table", "</table>", label_at) {
            Some((ts, te)) => {
                out.push(parse_result_table(&root[ts..te]));
                pos = te;
            }
            None => {
                // Label with no table after it; count mismatch surfaces upstream.
                warn!("results container without a data table (offset {label_at})");
                pos = label_at + RESULT_TABLE_LABEL.len();
            }
        }
    }
    out
}

/// Read one data table: rows are `<tr>` with a label cell and a count cell.
/// Header rows carry `<th>` cells only and are skipped silently; a `<td>`
/// row whose label is not 1–10 (the page occasionally slips in a summary
/// row) is dropped with a diagnostic.
fn parse_result_table(table: &str) -> VoteCounts {
    let mut counts = VoteCounts::default();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let cells = data_cells(tr);
        if cells.is_empty() {
            continue; // header row
        }

        let label = cells[0].as_str();
        let count_text = cells.get(1).map(String::as_str).unwrap_or("");
        match (parse_vote_value(label), parse_count(count_text)) {
            (Some(value), Some(count)) => counts.add(value, count),
            _ => warn!("dropping malformed results row: label={label:?} count={count_text:?}"),
        }
    }
    counts
}

/// Clean `<td>` cell texts of one row.
fn data_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        let inner = inner_after_open_tag(&tr[td_s..td_e]);
        cells.push(strip_tags(&normalize_entities(&inner)));
        pos = td_e;
    }
    cells
}

fn parse_vote_value(label: &str) -> Option<u32> {
    let v: u32 = label.trim().parse().ok()?;
    (MIN_VOTE..=MAX_VOTE).contains(&v).then_some(v)
}

/// Counts may carry thousands separators ("1,234").
fn parse_count(text: &str) -> Option<u32> {
    let cleaned: String = text.chars().filter(|&c| c != ',').collect();
    cleaned.trim().parse().ok()
}
