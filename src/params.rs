// src/params.rs
use std::path::PathBuf;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const SCORES_STEM: &str = "poll_scores";
pub const ROLLUP_STEM: &str = "poll_categories";

// Survey
// Respondent count published with the survey wave the built-in catalog
// covers. Every question was shown to every respondent, so this is the
// shared denominator for category normalization.
pub const DEFAULT_RESPONDENTS: u32 = 3607;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Csv,
    Tsv,
}

impl Format {
    pub fn ext(&self) -> &'static str {
        match self { Format::Csv => "csv", Format::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { Format::Csv => ',', Format::Tsv => '\t' }
    }
}

#[derive(Clone, Debug)]
pub struct Params {
    pub input: Option<PathBuf>,    // saved results page; None = stdin
    pub catalog: Option<PathBuf>,  // question catalog override; None = built-in
    pub respondents: u32,          // rollup denominator (> 0)
    pub out: PathBuf,              // output dir, or file path for the scores table
    pub format: Format,
    pub headers: bool,             // emit header row
    pub stdout: bool,              // print tables instead of writing files
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            catalog: None,
            respondents: DEFAULT_RESPONDENTS,
            out: PathBuf::from(DEFAULT_OUT_DIR),
            format: Format::Csv,
            headers: true,
            stdout: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
