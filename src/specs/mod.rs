// src/specs/mod.rs
//! Page-specific scraping specification(s).
//!
//! A spec knows *where the ground truth lives in the HTML* and *how to
//! extract it robustly*: selector constants, tolerant case-insensitive
//! scanning via `core::html`, and light shaping into pipeline input.
//! It does not fetch, score, or export — and it is testable offline
//! against fixture documents.

pub mod poll;
