//! Boundary to the external search engine.
//!
//! The engine owns document storage, the inverted index, and ranking; this
//! crate only clears collections, adds record sets, and executes boolean
//! query strings. [`solr::SolrClient`] is the production implementation;
//! tests substitute in-memory doubles.

pub mod solr;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::UnitRecord;

/// One ranked result from the engine.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// Sentence unit id.
    pub id: String,
    /// Stored fields returned alongside the id.
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl SearchHit {
    pub fn new<S: Into<String>>(id: S) -> Self {
        SearchHit {
            id: id.into(),
            fields: serde_json::Map::new(),
        }
    }
}

/// External search engine client.
pub trait SearchClient: Send + Sync {
    /// Remove every document from a collection.
    fn delete_all(&self, collection: &str) -> Result<()>;

    /// Add records to a collection.
    fn add(&self, collection: &str, records: &[UnitRecord]) -> Result<()>;

    /// Execute a boolean query string, returning ranked hits.
    fn search(&self, collection: &str, query: &str) -> Result<Vec<SearchHit>>;
}

/// Join ranked hit ids back to sentence text through the corpus unit map.
///
/// The engine is authoritative for ranking and the corpus for text; a hit id
/// the corpus does not know (a stale collection searched against a newer
/// corpus snapshot) is skipped.
pub fn resolve_hits<'a>(hits: &[SearchHit], corpus: &'a Corpus) -> Vec<(String, &'a str)> {
    hits.iter()
        .filter_map(|hit| {
            corpus
                .sentence(&hit.id)
                .map(|text| (hit.id.clone(), text))
        })
        .collect()
}
