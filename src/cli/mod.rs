//! Command line interface for lexisearch.

pub mod args;
pub mod commands;
