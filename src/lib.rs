//! # Lexisearch
//!
//! A lexical-semantic search pipeline for short-article corpora.
//!
//! Instead of matching raw keywords alone, lexisearch enriches every indexed
//! sentence with features drawn from a WordNet-style lexical resource and a
//! dependency parser (lemmas, stems, POS tags, syntactic head word, hypernyms,
//! hyponyms, part-meronyms, part-holonyms), and mirrors the same derivation
//! over free-text queries to build a boosted boolean disjunction for an
//! external search engine.
//!
//! ## Pipeline
//!
//! - [`corpus`] segments article files into addressable sentence units
//! - [`analysis`] tokenizes, lemmatizes, stems, and POS-tags word lists
//! - [`lexical`] adapts the WordNet-style knowledge base
//! - [`parse`] adapts the remote dependency parser
//! - [`extract`] derives per-unit feature bundles (baseline and disambiguated)
//! - [`index`] joins units and bundles into records and hands them to the engine
//! - [`query`] derives the same features from a query and assembles the query string
//! - [`search`] is the boundary to the external search engine

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod index;
pub mod lexical;
pub mod parse;
pub mod query;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
