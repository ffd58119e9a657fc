// src/error.rs
// Fatal pipeline errors. Malformed result rows are *not* here: they are
// dropped with a warning and the run continues (see specs::poll).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollError {
    /// The poll container was not found in the document. Either the page
    /// structure changed or the fetch silently returned the wrong page.
    #[error("poll container not found in document")]
    PollRootMissing,

    /// Question titles and result tables are paired positionally; unequal
    /// list lengths mean the page is malformed and no pairing is safe.
    #[error("question/result table count mismatch: {questions} questions, {results} tables")]
    CountMismatch { questions: usize, results: usize },

    /// Question text is the table's row key; a repeat makes the join ambiguous.
    #[error("duplicate question text: {0:?}")]
    DuplicateQuestion(String),

    /// The catalog is maintained by hand and lags new or reworded survey
    /// questions. Carry the exact text so the catalog can be extended.
    #[error("question not in catalog: {0:?}")]
    UnknownQuestion(String),

    #[error("catalog file: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
