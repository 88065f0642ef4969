//! Command line argument parsing for the lexisearch CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::index::IndexVariant;

/// Lexisearch - lexical-semantic sentence search
#[derive(Parser, Debug, Clone)]
#[command(name = "lexisearch")]
#[command(about = "Lexical-semantic sentence search over WordNet-style relations")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct LexisearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rebuild a search collection from a corpus directory
    Index(IndexArgs),

    /// Run a query against a previously built collection
    Search(SearchArgs),
}

/// Connection and pipeline options shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Corpus directory of numbered article files (1.txt, 2.txt, ...)
    #[arg(long)]
    pub corpus: PathBuf,

    /// Lexical resource JSON file
    #[arg(long)]
    pub resource: PathBuf,

    /// Which build profile to target
    #[arg(long, value_enum, default_value_t = VariantArg::Features)]
    pub variant: VariantArg,

    /// Search engine base URL
    #[arg(long, default_value = "http://localhost:8983/solr")]
    pub engine: String,

    /// Dependency parser base URL
    #[arg(long = "parser", default_value = "http://localhost:9000")]
    pub parser_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// The free-text query
    #[arg(long)]
    pub query: String,

    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Build profile selector.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Raw distinct tokens only
    Words,
    /// Baseline multi-feature profile
    Features,
    /// POS-aware multi-feature profile
    FeaturesDisambiguated,
}

impl VariantArg {
    pub fn index_variant(self) -> IndexVariant {
        match self {
            VariantArg::Words => IndexVariant::WordsOnly,
            VariantArg::Features => IndexVariant::MultiFeature,
            VariantArg::FeaturesDisambiguated => IndexVariant::MultiFeatureDisambiguated,
        }
    }
}
