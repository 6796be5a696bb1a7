//! dftcalc library: application logic for the transform command-line tool.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod input;
pub mod output;
