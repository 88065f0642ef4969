//! Blocking HTTP client for a CoreNLP-style dependency parse server.
//!
//! The sentence is POSTed as the request body with a `properties` query
//! parameter selecting the `depparse` annotator and JSON output. Only the
//! first sentence of the response is consumed (the caller segments text into
//! sentences before parsing).

use serde::Deserialize;

use crate::error::{LexisearchError, Result};
use crate::parse::{Dependency, DependencyParser, ParseGraph, ParseNode};

const PARSE_PROPERTIES: &str =
    r#"{"annotators":"tokenize,ssplit,pos,depparse","outputFormat":"json"}"#;

#[derive(Debug, Deserialize)]
struct CoreNlpResponse {
    #[serde(default)]
    sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpSentence {
    #[serde(default)]
    tokens: Vec<CoreNlpToken>,
    #[serde(rename = "basicDependencies", default)]
    basic_dependencies: Vec<CoreNlpDependency>,
}

#[derive(Debug, Deserialize)]
struct CoreNlpToken {
    index: usize,
    word: String,
}

#[derive(Debug, Deserialize)]
struct CoreNlpDependency {
    dep: String,
    dependent: usize,
}

/// Dependency parser backed by a CoreNLP server.
#[derive(Debug, Clone)]
pub struct CoreNlpParser {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl CoreNlpParser {
    /// Create a parser client for a server base URL, e.g. `http://localhost:9000`.
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        CoreNlpParser {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn graph_from_response(response: CoreNlpResponse) -> Result<ParseGraph> {
        // Exactly the first parse.
        let Some(sentence) = response.sentences.into_iter().next() else {
            return Err(LexisearchError::parse(
                "parser response contains no sentences",
            ));
        };

        let mut nodes = vec![ParseNode {
            address: 0,
            word: None,
        }];
        nodes.extend(sentence.tokens.into_iter().map(|t| ParseNode {
            address: t.index,
            word: Some(t.word),
        }));

        let dependencies = sentence
            .basic_dependencies
            .into_iter()
            .map(|d| Dependency {
                relation: d.dep,
                dependent: d.dependent,
            })
            .collect();

        Ok(ParseGraph {
            nodes,
            dependencies,
        })
    }
}

impl DependencyParser for CoreNlpParser {
    fn parse(&self, sentence: &str) -> Result<ParseGraph> {
        let response: CoreNlpResponse = self
            .http
            .post(&self.endpoint)
            .query(&[("properties", PARSE_PROPERTIES)])
            .body(sentence.to_string())
            .send()?
            .error_for_status()?
            .json()?;
        Self::graph_from_response(response)
    }
}
