//! Feature extraction over sentence units.
//!
//! Each unit yields a [`FeatureBundle`]: lemmas, stems, POS tags, the
//! syntactic head word, and the first-ranked hypernym/hyponym/meronym/holonym
//! of each distinct word. Every feature comes in two flavors:
//!
//! - **baseline** — senses are looked up with no part-of-speech restriction,
//!   and a word that resolves to nothing contributes itself as a placeholder,
//!   keeping every relation list positionally aligned with `words`;
//! - **disambiguated** — each word is POS-tagged first and the lookup is
//!   restricted to the mapped part of speech; unresolved words contribute
//!   nothing, so relation lists may be shorter than `words`.
//!
//! The "first sense, first related entry" policy is a most-frequent-sense
//! heuristic, not true word-sense disambiguation; index and query sides must
//! apply it identically, which is why both go through this module.

use log::info;
use rayon::prelude::*;

use crate::analysis::annotator::Annotator;
use crate::analysis::tokenizer;
use crate::corpus::SentenceUnit;
use crate::error::Result;
use crate::lexical::{LexicalResource, PartOfSpeech, RelationKind};
use crate::parse::DependencyParser;

/// Which of the two extraction flavors to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Baseline,
    Disambiguated,
}

/// The derived features of one sentence unit (or one query).
///
/// A bundle is immutable once computed; rebuilding an index recomputes every
/// bundle from scratch. `pos_tags` is populated by the baseline variant,
/// `pos_pairs` by the disambiguated one. Query-side bundles carry an empty
/// `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureBundle {
    pub id: String,
    pub words: Vec<String>,
    pub lemmas: Vec<String>,
    pub stems: Vec<String>,
    pub pos_tags: Option<Vec<String>>,
    pub pos_pairs: Option<Vec<(String, String)>>,
    pub head: Option<String>,
    pub hypernyms: Vec<String>,
    pub hyponyms: Vec<String>,
    pub meronyms: Vec<String>,
    pub holonyms: Vec<String>,
}

impl FeatureBundle {
    /// Mutable access to one relation list, keyed by kind.
    fn relation_mut(&mut self, kind: RelationKind) -> &mut Vec<String> {
        match kind {
            RelationKind::Hypernym => &mut self.hypernyms,
            RelationKind::Hyponym => &mut self.hyponyms,
            RelationKind::Meronym => &mut self.meronyms,
            RelationKind::Holonym => &mut self.holonyms,
        }
    }

    /// Shared access to one relation list, keyed by kind.
    pub fn relation(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Hypernym => &self.hypernyms,
            RelationKind::Hyponym => &self.hyponyms,
            RelationKind::Meronym => &self.meronyms,
            RelationKind::Holonym => &self.holonyms,
        }
    }
}

/// Derives feature bundles from sentence units and query strings.
pub struct FeatureExtractor<'a> {
    resource: &'a dyn LexicalResource,
    annotator: Annotator<'a>,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(resource: &'a dyn LexicalResource, parser: &'a dyn DependencyParser) -> Self {
        FeatureExtractor {
            resource,
            annotator: Annotator::new(resource, parser),
        }
    }

    /// Resolve one word to the canonical name of the first related sense.
    ///
    /// With a POS hint the sense lookup is restricted to that part of speech,
    /// otherwise it is unrestricted. Returns `None` when the word has no
    /// senses or the first sense's relation list is empty; neither case is
    /// an error.
    pub fn resolve_relation(
        &self,
        word: &str,
        kind: RelationKind,
        pos_hint: Option<PartOfSpeech>,
    ) -> Result<Option<String>> {
        let senses = self.resource.senses(word, pos_hint)?;
        let Some(first) = senses.first() else {
            return Ok(None);
        };
        let related = self.resource.related(first, kind)?;
        Ok(related.first().map(|s| s.canonical().to_string()))
    }

    /// Baseline relation list: one entry per word, unresolved words fall
    /// back to themselves.
    fn baseline_relations(&self, words: &[String], kind: RelationKind) -> Result<Vec<String>> {
        words
            .iter()
            .map(|word| {
                Ok(self
                    .resolve_relation(word, kind, None)?
                    .unwrap_or_else(|| word.clone()))
            })
            .collect()
    }

    /// Disambiguated relation list: POS-restricted lookups, no fallback, so
    /// the list may be shorter than the input.
    fn disambiguated_relations(
        &self,
        pairs: &[(String, String)],
        kind: RelationKind,
    ) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for (word, tag) in pairs {
            let hint = PartOfSpeech::from_penn_tag(tag);
            if let Some(name) = self.resolve_relation(word, kind, hint)? {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Extract a bundle for one sentence unit.
    pub fn extract_unit(&self, unit: &SentenceUnit, variant: Variant) -> Result<FeatureBundle> {
        self.extract(&unit.id, &unit.text, &unit.words, variant)
    }

    /// Extract a bundle for a free-text query (no persistent id).
    pub fn extract_query(&self, text: &str, variant: Variant) -> Result<FeatureBundle> {
        let words = tokenizer::distinct_tokens(text);
        self.extract("", text, &words, variant)
    }

    fn extract(
        &self,
        id: &str,
        text: &str,
        words: &[String],
        variant: Variant,
    ) -> Result<FeatureBundle> {
        let mut bundle = FeatureBundle {
            id: id.to_string(),
            words: words.to_vec(),
            stems: self.annotator.stem(words),
            ..FeatureBundle::default()
        };

        match variant {
            Variant::Baseline => {
                bundle.lemmas = self.annotator.lemmatize(words)?;
                bundle.pos_tags = Some(self.annotator.pos_tags(words));
                bundle.head = self.annotator.head_word(text)?;
                for kind in RelationKind::ALL {
                    *bundle.relation_mut(kind) = self.baseline_relations(words, kind)?;
                }
            }
            Variant::Disambiguated => {
                let pairs = self.annotator.pos_pairs(words);
                bundle.lemmas = self.annotator.lemmatize_tagged(&pairs)?;
                bundle.head = self.annotator.head_word_disambiguated(text)?;
                for kind in RelationKind::ALL {
                    *bundle.relation_mut(kind) = self.disambiguated_relations(&pairs, kind)?;
                }
                bundle.pos_pairs = Some(pairs);
            }
        }

        Ok(bundle)
    }

    /// Extract bundles for every unit, fanned out across a worker pool.
    ///
    /// Results come back in original unit order, and any failure aborts the
    /// whole batch: a partially extracted corpus must never reach the index
    /// builder.
    pub fn extract_all(&self, units: &[SentenceUnit], variant: Variant) -> Result<Vec<FeatureBundle>> {
        info!(
            "extracting {:?} features for {} sentence units",
            variant,
            units.len()
        );
        units
            .par_iter()
            .map(|unit| self.extract_unit(unit, variant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::dictionary::DictionaryResource;
    use crate::parse::{Dependency, ParseGraph, ParseNode};

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
        dict.add_relations("dog.n.01", RelationKind::Hyponym, &["puppy.n.01"]);
        dict.add_relations("dog.n.01", RelationKind::Meronym, &["flag.n.07"]);
        dict.add_relations("dog.n.01", RelationKind::Holonym, &["pack.n.06"]);
        // A word whose only sense has no relations at all.
        dict.add_senses("mat", &["mat.n.01"]);
        dict
    }

    fn unit(id: &str, text: &str) -> SentenceUnit {
        SentenceUnit {
            id: id.to_string(),
            text: text.to_string(),
            words: tokenizer::distinct_tokens(text),
        }
    }

    #[test]
    fn test_baseline_relation_lists_align_with_words() {
        let dict = resource();
        let parser = FixedParser { root: "dog" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        let u = unit("A1S1", "The dog sat on the mat.");
        let bundle = extractor.extract_unit(&u, Variant::Baseline).unwrap();

        for kind in RelationKind::ALL {
            assert_eq!(bundle.relation(kind).len(), bundle.words.len());
        }
        // "dog" resolves; everything else falls back to the word itself.
        let dog_idx = bundle.words.iter().position(|w| w == "dog").unwrap();
        assert_eq!(bundle.hypernyms[dog_idx], "canine");
        let the_idx = bundle.words.iter().position(|w| w == "The").unwrap();
        assert_eq!(bundle.hypernyms[the_idx], "The");
        // A sense with an empty relation list also falls back.
        let mat_idx = bundle.words.iter().position(|w| w == "mat").unwrap();
        assert_eq!(bundle.hypernyms[mat_idx], "mat");
    }

    #[test]
    fn test_disambiguated_relation_lists_never_longer_than_words() {
        let dict = resource();
        let parser = FixedParser { root: "dog" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        let u = unit("A1S1", "The dog sat on the mat.");
        let bundle = extractor.extract_unit(&u, Variant::Disambiguated).unwrap();

        for kind in RelationKind::ALL {
            assert!(bundle.relation(kind).len() <= bundle.words.len());
        }
        // Only "dog" resolves to a hypernym; no fallback placeholders appear.
        assert_eq!(bundle.hypernyms, vec!["canine"]);
        assert!(bundle.words.len() > 1);
    }

    #[test]
    fn test_resolve_relation_degenerate_cases_are_none() {
        let dict = resource();
        let parser = FixedParser { root: "dog" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        // No senses at all.
        assert_eq!(
            extractor
                .resolve_relation("xyzzy", RelationKind::Hypernym, None)
                .unwrap(),
            None
        );
        // A sense with an empty relation list.
        assert_eq!(
            extractor
                .resolve_relation("mat", RelationKind::Hypernym, None)
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let dict = resource();
        let parser = FixedParser { root: "dog" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        let u = unit("A1S1", "The dog sat on the mat.");
        let first = extractor.extract_unit(&u, Variant::Baseline).unwrap();
        let second = extractor.extract_unit(&u, Variant::Baseline).unwrap();
        assert_eq!(first, second);

        let first = extractor.extract_unit(&u, Variant::Disambiguated).unwrap();
        let second = extractor.extract_unit(&u, Variant::Disambiguated).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_all_preserves_unit_order() {
        let dict = resource();
        let parser = FixedParser { root: "dog" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        let units = vec![
            unit("A1S1", "The dog barked."),
            unit("A1S2", "The mat stayed."),
            unit("A2S1", "A dog slept."),
        ];
        let bundles = extractor.extract_all(&units, Variant::Baseline).unwrap();
        let ids: Vec<&str> = bundles.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["A1S1", "A1S2", "A2S1"]);
    }

    #[test]
    fn test_query_bundle_has_no_id() {
        let dict = resource();
        let parser = FixedParser { root: "barked" };
        let extractor = FeatureExtractor::new(&dict, &parser);

        let bundle = extractor
            .extract_query("dog barked", Variant::Baseline)
            .unwrap();
        assert!(bundle.id.is_empty());
        assert_eq!(bundle.words, vec!["dog", "barked"]);
        // Fallback keeps the literal word for the unknown one.
        assert_eq!(bundle.hypernyms, vec!["canine", "barked"]);
    }
}
