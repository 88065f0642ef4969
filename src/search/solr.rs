//! Blocking HTTP client for a Solr-style search engine.

use serde::Deserialize;
use serde_json::json;

use crate::error::{LexisearchError, Result};
use crate::index::UnitRecord;
use crate::search::{SearchClient, SearchHit};

/// Number of ranked hits requested per query.
const DEFAULT_ROWS: usize = 10;

#[derive(Debug, Deserialize)]
struct SelectResponse {
    response: SelectBody,
}

#[derive(Debug, Deserialize)]
struct SelectBody {
    #[serde(default)]
    docs: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Search client backed by a Solr server.
#[derive(Debug, Clone)]
pub struct SolrClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SolrClient {
    /// Create a client for a Solr base URL, e.g. `http://localhost:8983/solr`.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        SolrClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn update_url(&self, collection: &str) -> String {
        format!("{}/{}/update", self.base_url, collection)
    }

    fn select_url(&self, collection: &str) -> String {
        format!("{}/{}/select", self.base_url, collection)
    }
}

impl SearchClient for SolrClient {
    fn delete_all(&self, collection: &str) -> Result<()> {
        self.http
            .post(self.update_url(collection))
            .query(&[("commit", "true")])
            .json(&json!({ "delete": { "query": "*:*" } }))
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn add(&self, collection: &str, records: &[UnitRecord]) -> Result<()> {
        self.http
            .post(self.update_url(collection))
            .query(&[("commit", "true")])
            .json(records)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn search(&self, collection: &str, query: &str) -> Result<Vec<SearchHit>> {
        let response: SelectResponse = self
            .http
            .get(self.select_url(collection))
            .query(&[
                ("q", query),
                ("wt", "json"),
                ("rows", &DEFAULT_ROWS.to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        response
            .response
            .docs
            .into_iter()
            .map(|doc| {
                let id = doc
                    .get("id")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
                    .ok_or_else(|| {
                        LexisearchError::search("engine returned a document without an id")
                    })?;
                Ok(SearchHit { id, fields: doc })
            })
            .collect()
    }
}
