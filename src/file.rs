// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::rows_to_string;
use crate::error::PollError;
use crate::params::Format;

/// Write one table to `path` in full (no append path: each run produces
/// its output from scratch).
pub fn write_table(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    format: Format,
) -> Result<(), PollError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, rows_to_string(rows, headers, format.delim()))?;
    Ok(())
}

/// Resolve the two output paths from the user's `-o` value: a directory
/// (or directory-looking) hint gets the default stems, a file path is used
/// for the scores table with the rollup written next to it.
pub fn resolve_out_paths(out: &Path, format: Format) -> (PathBuf, PathBuf) {
    use crate::params::{ROLLUP_STEM, SCORES_STEM};

    if out.is_dir() || looks_like_dir_hint(out) || out.extension().is_none() {
        let ext = format.ext();
        (
            out.join(format!("{SCORES_STEM}.{ext}")),
            out.join(format!("{ROLLUP_STEM}.{ext}")),
        )
    } else {
        let rollup = {
            let stem = out.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
            let ext = out.extension().map(|s| s.to_string_lossy()).unwrap_or_default();
            out.with_file_name(format!("{stem}_categories.{ext}"))
        };
        (out.to_path_buf(), rollup)
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), PollError> {
    if dir.exists() && !dir.is_dir() {
        return Err(PollError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
