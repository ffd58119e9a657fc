// src/runner.rs
// Top-level pipeline: read document → extract → normalize → score →
// rollup → export. One page, one pass, no shared state between runs.

use std::io::Read;
use std::path::PathBuf;

use log::info;

use crate::catalog::Catalog;
use crate::error::PollError;
use crate::file::{resolve_out_paths, write_table};
use crate::params::Params;
use crate::rollup::{rollup, rollup_headers, rollup_row_cells};
use crate::score::{score_headers, score_row_cells, score_rows};
use crate::specs;
use crate::table::ResultsTable;

/// Summary of what was produced.
pub struct RunSummary {
    pub questions: usize,
    pub categories: usize,
    pub files_written: Vec<PathBuf>,
}

pub fn run(params: &Params) -> Result<RunSummary, PollError> {
    let doc = read_input(params)?;

    let pairs = specs::poll::extract(&doc)?;
    info!("extracted {} question(s)", pairs.len());

    let table = ResultsTable::from_pairs(pairs)?;

    let catalog = match &params.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    info!("catalog has {} entries", catalog.len());

    let scored = score_rows(&table, &catalog)?;
    let rollups = rollup(&scored, params.respondents);

    let score_cells: Vec<Vec<String>> = scored.iter().map(score_row_cells).collect();
    let rollup_cells: Vec<Vec<String>> = rollups.iter().map(rollup_row_cells).collect();
    let score_hdr = params.headers.then(score_headers);
    let rollup_hdr = params.headers.then(rollup_headers);

    let mut files_written = Vec::new();
    if params.stdout {
        let delim = params.format.delim();
        print!("{}", crate::csv::rows_to_string(&score_cells, score_hdr.as_deref(), delim));
        println!();
        print!("{}", crate::csv::rows_to_string(&rollup_cells, rollup_hdr.as_deref(), delim));
    } else {
        let (scores_path, rollup_path) = resolve_out_paths(&params.out, params.format);
        write_table(&scores_path, score_hdr.as_deref(), &score_cells, params.format)?;
        write_table(&rollup_path, rollup_hdr.as_deref(), &rollup_cells, params.format)?;
        files_written.push(scores_path);
        files_written.push(rollup_path);
    }

    Ok(RunSummary {
        questions: scored.len(),
        categories: rollups.len(),
        files_written,
    })
}

/// The document comes from a file or stdin; fetching a rendered page is
/// the caller's problem (headless browser, curl of a saved copy, ...).
fn read_input(params: &Params) -> Result<String, PollError> {
    match &params.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
