//! Query construction.
//!
//! A free-text query goes through exactly the same feature derivation as an
//! indexed sentence unit, then each non-empty feature list becomes one
//! field-scoped clause of a boolean disjunction. Clauses are held in a
//! structured intermediate representation and serialized to the engine's
//! query syntax only at the boundary, so the weighting policy is testable
//! without string scraping.
//!
//! In the disambiguated variant, clauses carry fixed relevance boosts:
//! lemma and stem matches are weighted far above raw tokens, morphological
//! normalization being the strongest semantic signal, with first-ranked
//! hypernyms close behind. The baseline variant is uniformly weighted.

use log::debug;

use crate::error::Result;
use crate::extract::{FeatureBundle, FeatureExtractor, Variant};
use crate::index::pos_pair_term;
use crate::lexical::{LexicalResource, RelationKind};
use crate::parse::DependencyParser;

/// Boost factors for the disambiguated query path.
pub const WORDS_BOOST: f32 = 1.0;
pub const LEMMAS_BOOST: f32 = 10.0;
pub const STEMS_BOOST: f32 = 6.0;
pub const POS_WITH_WORDS_BOOST: f32 = 1.0;
pub const HEAD_BOOST: f32 = 1.0;
pub const HYPERNYMS_BOOST: f32 = 7.0;
pub const HYPONYMS_BOOST: f32 = 1.0;
pub const MERONYMS_BOOST: f32 = 1.0;
pub const HOLONYMS_BOOST: f32 = 1.0;

fn relation_boost(kind: RelationKind) -> f32 {
    match kind {
        RelationKind::Hypernym => HYPERNYMS_BOOST,
        RelationKind::Hyponym => HYPONYMS_BOOST,
        RelationKind::Meronym => MERONYMS_BOOST,
        RelationKind::Holonym => HOLONYMS_BOOST,
    }
}

/// One field-scoped clause of the final disjunction.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryClause {
    pub field: &'static str,
    pub terms: Vec<String>,
    pub boost: Option<f32>,
    scalar: bool,
}

impl QueryClause {
    /// A clause over a term list, rendered as `field:(t1 t2 ...)`.
    pub fn list(field: &'static str, terms: Vec<String>) -> Self {
        QueryClause {
            field,
            terms,
            boost: None,
            scalar: false,
        }
    }

    /// A single-term clause, rendered as `field:term`.
    pub fn scalar(field: &'static str, term: String) -> Self {
        QueryClause {
            field,
            terms: vec![term],
            boost: None,
            scalar: true,
        }
    }

    /// Attach a relevance boost, rendered as a `^N.N` suffix.
    pub fn boosted(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }

    /// An empty clause contributes nothing to the disjunction.
    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(|t| t.is_empty())
    }

    /// Serialize to the engine's query syntax.
    pub fn render(&self) -> String {
        let mut clause = if self.scalar {
            format!("{}:{}", self.field, self.terms[0])
        } else {
            format!("{}:({})", self.field, self.terms.join(" "))
        };
        if let Some(boost) = self.boost {
            clause.push_str(&format!("^{boost:.1}"));
        }
        clause
    }
}

/// Join clauses into the final boolean disjunction, skipping empty ones.
pub fn render_query(clauses: &[QueryClause]) -> String {
    clauses
        .iter()
        .filter(|c| !c.is_empty())
        .map(QueryClause::render)
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Derives features from a raw query string and assembles the query string.
pub struct QueryProcessor<'a> {
    extractor: FeatureExtractor<'a>,
}

impl<'a> QueryProcessor<'a> {
    pub fn new(resource: &'a dyn LexicalResource, parser: &'a dyn DependencyParser) -> Self {
        QueryProcessor {
            extractor: FeatureExtractor::new(resource, parser),
        }
    }

    /// Words-only disjunction: one `words:` clause per distinct token.
    pub fn words_query(&self, text: &str) -> String {
        let clauses: Vec<QueryClause> = crate::analysis::tokenizer::distinct_tokens(text)
            .into_iter()
            .map(|token| QueryClause::scalar("words", token))
            .collect();
        let query = render_query(&clauses);
        debug!("assembled words query: {query}");
        query
    }

    /// Multi-feature disjunction mirroring the index-side derivation.
    pub fn feature_query(&self, text: &str, variant: Variant) -> Result<String> {
        let bundle = self.extractor.extract_query(text, variant)?;
        let query = render_query(&Self::clauses(&bundle, variant));
        debug!("assembled {variant:?} feature query: {query}");
        Ok(query)
    }

    /// Build the clause list for a query-side feature bundle.
    ///
    /// Baseline clauses are unboosted; disambiguated clauses carry the fixed
    /// boost table. A feature with an empty value list contributes no clause.
    pub fn clauses(bundle: &FeatureBundle, variant: Variant) -> Vec<QueryClause> {
        let mut clauses = vec![
            QueryClause::list("words", bundle.words.clone()),
            QueryClause::list("lemmas", bundle.lemmas.clone()),
            QueryClause::list("stems", bundle.stems.clone()),
        ];

        match variant {
            Variant::Baseline => {
                if let Some(tags) = &bundle.pos_tags {
                    clauses.push(QueryClause::list("POS", tags.clone()));
                }
            }
            Variant::Disambiguated => {
                if let Some(pairs) = &bundle.pos_pairs {
                    let terms = pairs.iter().map(|(w, t)| pos_pair_term(w, t)).collect();
                    clauses.push(QueryClause::list("POSWithWords", terms));
                }
            }
        }

        if let Some(head) = &bundle.head {
            clauses.push(QueryClause::scalar("head", head.clone()));
        }
        for kind in RelationKind::ALL {
            clauses.push(QueryClause::list(kind.field(), bundle.relation(kind).to_vec()));
        }

        if variant == Variant::Disambiguated {
            for clause in &mut clauses {
                let boost = match clause.field {
                    "words" => WORDS_BOOST,
                    "lemmas" => LEMMAS_BOOST,
                    "stems" => STEMS_BOOST,
                    "POSWithWords" => POS_WITH_WORDS_BOOST,
                    "head" => HEAD_BOOST,
                    "hypernyms" => relation_boost(RelationKind::Hypernym),
                    "hyponyms" => relation_boost(RelationKind::Hyponym),
                    "meronyms" => relation_boost(RelationKind::Meronym),
                    "holonyms" => relation_boost(RelationKind::Holonym),
                    _ => 1.0,
                };
                clause.boost = Some(boost);
            }
        }

        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::dictionary::DictionaryResource;
    use crate::parse::{Dependency, DependencyParser, ParseGraph, ParseNode};

    struct FixedParser {
        root: &'static str,
    }

    impl DependencyParser for FixedParser {
        fn parse(&self, _sentence: &str) -> Result<ParseGraph> {
            Ok(ParseGraph {
                nodes: vec![
                    ParseNode {
                        address: 0,
                        word: None,
                    },
                    ParseNode {
                        address: 1,
                        word: Some(self.root.to_string()),
                    },
                ],
                dependencies: vec![Dependency {
                    relation: "ROOT".to_string(),
                    dependent: 1,
                }],
            })
        }
    }

    fn resource() -> DictionaryResource {
        let mut dict = DictionaryResource::new();
        dict.add_senses("dog", &["dog.n.01"]);
        dict.add_relations("dog.n.01", RelationKind::Hypernym, &["canine.n.02"]);
        dict
    }

    #[test]
    fn test_clause_rendering() {
        let list = QueryClause::list("words", vec!["dog".to_string(), "barked".to_string()]);
        assert_eq!(list.render(), "words:(dog barked)");

        let boosted = QueryClause::list("lemmas", vec!["dog".to_string()]).boosted(10.0);
        assert_eq!(boosted.render(), "lemmas:(dog)^10.0");

        let head = QueryClause::scalar("head", "bark".to_string()).boosted(1.0);
        assert_eq!(head.render(), "head:bark^1.0");
    }

    #[test]
    fn test_empty_clauses_contribute_nothing() {
        let clauses = vec![
            QueryClause::list("words", vec!["dog".to_string()]),
            QueryClause::list("hypernyms", Vec::new()),
        ];
        assert_eq!(render_query(&clauses), "words:(dog)");
        // Never an empty parenthesis.
        assert!(!render_query(&clauses).contains("()"));
    }

    #[test]
    fn test_words_query() {
        let dict = resource();
        let parser = FixedParser { root: "barked" };
        let processor = QueryProcessor::new(&dict, &parser);
        assert_eq!(
            processor.words_query("dog barked"),
            "words:dog || words:barked"
        );
    }

    #[test]
    fn test_baseline_feature_query_is_unboosted_and_keeps_fallback_words() {
        let dict = resource();
        let parser = FixedParser { root: "barked" };
        let processor = QueryProcessor::new(&dict, &parser);

        let query = processor
            .feature_query("dog barked", Variant::Baseline)
            .unwrap();
        assert!(query.contains("words:(dog barked)"));
        // "barked" has no senses, so the baseline hypernym clause carries the
        // literal word as fallback.
        assert!(query.contains("hypernyms:(canine barked)"));
        assert!(!query.contains('^'));
    }

    #[test]
    fn test_disambiguated_lemma_clause_outboosts_words_clause() {
        let dict = resource();
        let parser = FixedParser { root: "barked" };
        let processor = QueryProcessor::new(&dict, &parser);

        let bundle = processor
            .extractor
            .extract_query("dog barked", Variant::Disambiguated)
            .unwrap();
        let clauses = QueryProcessor::clauses(&bundle, Variant::Disambiguated);

        let words = clauses.iter().find(|c| c.field == "words").unwrap();
        let lemmas = clauses.iter().find(|c| c.field == "lemmas").unwrap();
        assert!(!words.is_empty());
        assert!(!lemmas.is_empty());
        assert!(lemmas.boost.unwrap() > words.boost.unwrap());
    }

    #[test]
    fn test_disambiguated_query_rendering() {
        let dict = resource();
        let parser = FixedParser { root: "barked" };
        let processor = QueryProcessor::new(&dict, &parser);

        let query = processor
            .feature_query("dog barked", Variant::Disambiguated)
            .unwrap();
        assert!(query.contains("words:(dog barked)^1.0"));
        assert!(query.contains("lemmas:(dog barked)^10.0"));
        assert!(query.contains("POSWithWords:(dog/NN barked/VBD)^1.0"));
        assert!(query.contains("head:barked^1.0"));
        // "barked" resolves to nothing in the disambiguated path and "dog"
        // has only a hypernym, so the other relation clauses vanish.
        assert!(query.contains("hypernyms:(canine)^7.0"));
        assert!(!query.contains("hyponyms"));
        assert!(query.split(" || ").count() >= 5);
    }
}
