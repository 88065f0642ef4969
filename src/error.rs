//! Error types for the lexisearch library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`LexisearchError`] enum. External-service failures (the dependency
//! parser, the search engine) and data errors (join mismatches, malformed
//! corpus filenames) abort the current run; degenerate linguistic outcomes
//! (a word with no senses, an empty relation list) are not errors and are
//! represented as absent features instead.

use std::io;

use thiserror::Error;

/// The main error type for lexisearch operations.
#[derive(Error, Debug)]
pub enum LexisearchError {
    /// I/O errors (corpus files, resource files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors from the parser or search engine clients.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Corpus loading errors (malformed filename ordinal, empty directory).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Text analysis errors (tokenization, tagging, stemming).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexical resource errors.
    #[error("Lexical resource error: {0}")]
    Lexical(String),

    /// Dependency parse errors (unreachable or malformed parser response).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Index build errors (unit/bundle join mismatches).
    #[error("Index error: {0}")]
    Index(String),

    /// Query construction errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Search engine errors.
    #[error("Search error: {0}")]
    Search(String),
}

/// Result type alias for operations that may fail with [`LexisearchError`].
pub type Result<T> = std::result::Result<T, LexisearchError>;

impl LexisearchError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Corpus(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Analysis(msg.into())
    }

    /// Create a new lexical resource error.
    pub fn lexical<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Lexical(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Parse(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Query(msg.into())
    }

    /// Create a new search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        LexisearchError::Search(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexisearchError::corpus("filename 'notes.txt' has no numeric prefix");
        assert_eq!(
            err.to_string(),
            "Corpus error: filename 'notes.txt' has no numeric prefix"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: LexisearchError = io_err.into();
        assert!(matches!(err, LexisearchError::Io(_)));
    }
}
