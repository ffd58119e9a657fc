// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod specs;

pub mod catalog;
pub mod csv;
pub mod error;
pub mod file;
pub mod params;
pub mod rollup;
pub mod runner;
pub mod score;
pub mod table;
