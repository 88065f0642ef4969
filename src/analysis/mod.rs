//! Linguistic annotation for sentence units and queries.
//!
//! This module provides the pure text-analysis functions of the pipeline:
//! tokenization and sentence splitting, Porter stemming, heuristic POS
//! tagging, and the [`annotator::Annotator`] facade that combines them with
//! the lexical resource and the dependency parser.

pub mod annotator;
pub mod stemmer;
pub mod tagger;
pub mod tokenizer;
