//! Index record construction and ingestion.
//!
//! The builder joins sentence units with their feature bundles into the
//! exported record schema and hands the record set to the search client.
//! Ingestion has full-rebuild semantics: the target collection is cleared
//! first, so index builds are idempotent and never partially stale.

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::SentenceUnit;
use crate::error::{LexisearchError, Result};
use crate::extract::{FeatureBundle, Variant};
use crate::search::SearchClient;

/// The three build profiles, each with its own engine collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexVariant {
    /// Raw distinct tokens only.
    WordsOnly,
    /// Baseline multi-feature records.
    MultiFeature,
    /// POS-aware multi-feature records.
    MultiFeatureDisambiguated,
}

impl IndexVariant {
    /// Name of the engine collection this profile writes to and reads from.
    pub fn collection(&self) -> &'static str {
        match self {
            IndexVariant::WordsOnly => "units-words",
            IndexVariant::MultiFeature => "units-features",
            IndexVariant::MultiFeatureDisambiguated => "units-features-disambiguated",
        }
    }

    /// The extraction flavor feeding this profile, if it has one.
    pub fn extraction(&self) -> Option<Variant> {
        match self {
            IndexVariant::WordsOnly => None,
            IndexVariant::MultiFeature => Some(Variant::Baseline),
            IndexVariant::MultiFeatureDisambiguated => Some(Variant::Disambiguated),
        }
    }
}

/// One exported record per sentence unit.
///
/// Field names match the engine schema; absent features are omitted from the
/// serialized object. POS-with-word pairs are flattened to `word/TAG` terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: String,
    pub words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemmas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stems: Option<Vec<String>>,
    #[serde(rename = "POS", skip_serializing_if = "Option::is_none")]
    pub pos: Option<Vec<String>>,
    #[serde(rename = "POSWithWords", skip_serializing_if = "Option::is_none")]
    pub pos_with_words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypernyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hyponyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meronyms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holonyms: Option<Vec<String>>,
}

/// Render a (word, tag) pair as a single indexable term.
pub fn pos_pair_term(word: &str, tag: &str) -> String {
    format!("{word}/{tag}")
}

/// Builds record sets and ingests them into the search engine.
pub struct IndexBuilder;

impl IndexBuilder {
    /// Join units and bundles into records.
    ///
    /// The join is strict: every unit must have exactly its own bundle at the
    /// same position. A missing or mismatched bundle is an error, never a
    /// silently dropped record.
    pub fn build(units: &[SentenceUnit], bundles: &[FeatureBundle]) -> Result<Vec<UnitRecord>> {
        if units.len() != bundles.len() {
            return Err(LexisearchError::index(format!(
                "unit/bundle mismatch: {} units but {} feature bundles",
                units.len(),
                bundles.len()
            )));
        }

        units
            .iter()
            .zip(bundles)
            .map(|(unit, bundle)| {
                if unit.id != bundle.id {
                    return Err(LexisearchError::index(format!(
                        "feature bundle '{}' does not match unit '{}'",
                        bundle.id, unit.id
                    )));
                }
                Ok(UnitRecord {
                    id: unit.id.clone(),
                    words: bundle.words.clone(),
                    lemmas: Some(bundle.lemmas.clone()),
                    stems: Some(bundle.stems.clone()),
                    pos: bundle.pos_tags.clone(),
                    pos_with_words: bundle.pos_pairs.as_ref().map(|pairs| {
                        pairs.iter().map(|(w, t)| pos_pair_term(w, t)).collect()
                    }),
                    head: bundle.head.clone(),
                    hypernyms: Some(bundle.hypernyms.clone()),
                    hyponyms: Some(bundle.hyponyms.clone()),
                    meronyms: Some(bundle.meronyms.clone()),
                    holonyms: Some(bundle.holonyms.clone()),
                })
            })
            .collect()
    }

    /// Records for the words-only profile: id and distinct tokens, nothing else.
    pub fn build_words_only(units: &[SentenceUnit]) -> Vec<UnitRecord> {
        units
            .iter()
            .map(|unit| UnitRecord {
                id: unit.id.clone(),
                words: unit.words.clone(),
                ..UnitRecord::default()
            })
            .collect()
    }

    /// Hand a record set to the engine, clearing the collection first.
    pub fn ingest(
        client: &dyn SearchClient,
        variant: IndexVariant,
        records: &[UnitRecord],
    ) -> Result<()> {
        let collection = variant.collection();
        info!("rebuilding collection '{collection}' with {} records", records.len());
        client.delete_all(collection)?;
        client.add(collection, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str, words: &[&str]) -> SentenceUnit {
        SentenceUnit {
            id: id.to_string(),
            text: words.join(" "),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn bundle(id: &str, words: &[&str]) -> FeatureBundle {
        FeatureBundle {
            id: id.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            lemmas: words.iter().map(|w| w.to_lowercase()).collect(),
            stems: words.iter().map(|w| w.to_lowercase()).collect(),
            pos_tags: Some(vec!["NN".to_string(); words.len()]),
            ..FeatureBundle::default()
        }
    }

    #[test]
    fn test_build_joins_by_id() {
        let units = vec![unit("A1S1", &["cat"]), unit("A1S2", &["dog"])];
        let bundles = vec![bundle("A1S1", &["cat"]), bundle("A1S2", &["dog"])];

        let records = IndexBuilder::build(&units, &bundles).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "A1S1");
        assert_eq!(records[1].words, vec!["dog"]);
    }

    #[test]
    fn test_build_rejects_count_mismatch() {
        let units = vec![unit("A1S1", &["cat"]), unit("A1S2", &["dog"])];
        let bundles = vec![bundle("A1S1", &["cat"])];
        assert!(IndexBuilder::build(&units, &bundles).is_err());
    }

    #[test]
    fn test_build_rejects_id_mismatch() {
        let units = vec![unit("A1S1", &["cat"])];
        let bundles = vec![bundle("A9S9", &["cat"])];
        assert!(IndexBuilder::build(&units, &bundles).is_err());
    }

    #[test]
    fn test_record_schema_field_names() {
        let mut b = bundle("A1S1", &["dog"]);
        b.pos_tags = None;
        b.pos_pairs = Some(vec![("dog".to_string(), "NN".to_string())]);
        b.head = Some("dog".to_string());
        let records = IndexBuilder::build(&[unit("A1S1", &["dog"])], &[b]).unwrap();

        let value = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(value["id"], "A1S1");
        assert_eq!(value["POSWithWords"][0], "dog/NN");
        assert_eq!(value["head"], "dog");
        assert!(value.get("POS").is_none());
    }

    #[test]
    fn test_words_only_records_omit_features() {
        let records = IndexBuilder::build_words_only(&[unit("A1S1", &["cat", "."])]);
        let value = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(value["words"][0], "cat");
        assert!(value.get("lemmas").is_none());
        assert!(value.get("hypernyms").is_none());
    }

    #[test]
    fn test_collections_are_distinct_per_variant() {
        let names = [
            IndexVariant::WordsOnly.collection(),
            IndexVariant::MultiFeature.collection(),
            IndexVariant::MultiFeatureDisambiguated.collection(),
        ];
        assert_eq!(
            names.iter().collect::<std::collections::HashSet<_>>().len(),
            3
        );
    }
}
