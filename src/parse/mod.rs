//! Dependency parsing boundary.
//!
//! The pipeline needs exactly one thing from a dependency parser: the word at
//! the address the top-level `ROOT` relation points to (the syntactic head of
//! the sentence). Parsing is delegated to an external service behind the
//! [`DependencyParser`] trait; [`corenlp::CoreNlpParser`] talks to a
//! CoreNLP-style HTTP server.

pub mod corenlp;

use crate::error::Result;

/// One node of a parse graph: an addressable token.
///
/// Address `0` is the artificial root node and carries no word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub address: usize,
    pub word: Option<String>,
}

/// One labeled dependency edge, pointing at its dependent's address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub relation: String,
    pub dependent: usize,
}

/// A dependency parse of a single sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseGraph {
    pub nodes: Vec<ParseNode>,
    pub dependencies: Vec<Dependency>,
}

impl ParseGraph {
    /// The word at the address the `ROOT` relation points to.
    ///
    /// Fails open: a graph without a `ROOT` relation, a dangling address, or
    /// an empty word all yield `None`, never an error.
    pub fn root_word(&self) -> Option<&str> {
        let root = self
            .dependencies
            .iter()
            .find(|d| d.relation.eq_ignore_ascii_case("root"))?;
        self.nodes
            .iter()
            .find(|n| n.address == root.dependent)?
            .word
            .as_deref()
            .filter(|w| !w.is_empty())
    }
}

/// Boundary to an external dependency parser.
///
/// Implementations return exactly the first parse of the sentence. Transport
/// and protocol failures are errors (the run must abort rather than index an
/// incomplete corpus); linguistic degenerate cases are not.
pub trait DependencyParser: Send + Sync {
    fn parse(&self, sentence: &str) -> Result<ParseGraph>;
}
