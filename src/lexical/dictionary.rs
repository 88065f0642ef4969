//! In-memory dictionary implementation of [`LexicalResource`].
//!
//! The dictionary is deserialized from a JSON file holding three tables:
//!
//! ```json
//! {
//!   "senses": { "dog": ["dog.n.01", "frump.n.01", "chase.v.01"] },
//!   "synsets": {
//!     "dog.n.01": {
//!       "hypernyms": ["canine.n.02"],
//!       "hyponyms": ["puppy.n.01"],
//!       "meronyms": ["flag.n.07"],
//!       "holonyms": ["pack.n.06"]
//!     }
//!   },
//!   "lemmas": { "dogs": "dog", "saw:v": "see" }
//! }
//! ```
//!
//! `senses` maps a spelling to its ranked sense names across all parts of
//! speech; POS restriction filters on the code embedded in each sense name.
//! `lemmas` keys are either a plain spelling or `spelling:<pos code>` for
//! part-of-speech-sensitive exceptions. Typically the file is exported from a
//! WordNet dump; the same type doubles as the fixture resource in tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisearchError, Result};
use crate::lexical::{LexicalResource, PartOfSpeech, RelationKind, Sense};

/// Relation lists attached to one synset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynsetEntry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hypernyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hyponyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meronyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holonyms: Vec<String>,
}

impl SynsetEntry {
    fn relation(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Hypernym => &self.hypernyms,
            RelationKind::Hyponym => &self.hyponyms,
            RelationKind::Meronym => &self.meronyms,
            RelationKind::Holonym => &self.holonyms,
        }
    }
}

/// A WordNet-style lexical resource held entirely in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryResource {
    /// Spelling -> ranked sense names (most frequent sense first).
    #[serde(default)]
    senses: HashMap<String, Vec<String>>,
    /// Sense name -> relation lists.
    #[serde(default)]
    synsets: HashMap<String, SynsetEntry>,
    /// Lemma exceptions: `spelling` or `spelling:<pos code>` -> base form.
    #[serde(default)]
    lemmas: HashMap<String, String>,
}

impl DictionaryResource {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        DictionaryResource::default()
    }

    /// Load a dictionary from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LexisearchError::lexical(format!(
                "failed to read lexical resource file '{}': {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            LexisearchError::lexical(format!(
                "failed to parse lexical resource JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Register the ranked sense names for a spelling.
    pub fn add_senses<S: Into<String>>(&mut self, word: S, names: &[&str]) {
        self.senses
            .insert(word.into(), names.iter().map(|n| n.to_string()).collect());
    }

    /// Register a relation list on a synset.
    pub fn add_relations<S: Into<String>>(&mut self, synset: S, kind: RelationKind, names: &[&str]) {
        let entry = self.synsets.entry(synset.into()).or_default();
        let list = match kind {
            RelationKind::Hypernym => &mut entry.hypernyms,
            RelationKind::Hyponym => &mut entry.hyponyms,
            RelationKind::Meronym => &mut entry.meronyms,
            RelationKind::Holonym => &mut entry.holonyms,
        };
        *list = names.iter().map(|n| n.to_string()).collect();
    }

    /// Register a lemma exception (`key` may carry a `:<pos code>` suffix).
    pub fn add_lemma<K: Into<String>, V: Into<String>>(&mut self, key: K, lemma: V) {
        self.lemmas.insert(key.into(), lemma.into());
    }

    fn ranked(&self, word: &str) -> Option<&Vec<String>> {
        // Lookups are case-insensitive the way the exported resource is:
        // exact spelling first, lowercase second.
        self.senses
            .get(word)
            .or_else(|| self.senses.get(word.to_lowercase().as_str()))
    }
}

impl LexicalResource for DictionaryResource {
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<Vec<Sense>> {
        let Some(ranked) = self.ranked(word) else {
            return Ok(Vec::new());
        };
        Ok(ranked
            .iter()
            .map(|name| Sense::new(name.clone()))
            .filter(|sense| match pos {
                Some(p) => sense.pos_code().is_some_and(|code| p.matches_code(code)),
                None => true,
            })
            .collect())
    }

    fn related(&self, sense: &Sense, kind: RelationKind) -> Result<Vec<Sense>> {
        let Some(entry) = self.synsets.get(&sense.name) else {
            return Ok(Vec::new());
        };
        Ok(entry
            .relation(kind)
            .iter()
            .map(|name| Sense::new(name.clone()))
            .collect())
    }

    fn lemma(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<String> {
        if let Some(p) = pos
            && let Some(lemma) = self.lemmas.get(&format!("{word}:{}", p.code()))
        {
            return Ok(lemma.clone());
        }
        if let Some(lemma) = self.lemmas.get(word) {
            return Ok(lemma.clone());
        }
        Ok(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DictionaryResource {
        let mut dict = DictionaryResource::new();
        dict.add_senses("dog", &["dog.n.01", "frump.n.01", "chase.v.01"]);
        dict.add_relations("dog.n.01", RelationKind::Hypernym, &["canine.n.02"]);
        dict.add_relations("dog.n.01", RelationKind::Meronym, &["flag.n.07"]);
        dict.add_relations("chase.v.01", RelationKind::Hypernym, &["pursue.v.02"]);
        dict.add_lemma("dogs", "dog");
        dict.add_lemma("saw:v", "see");
        dict.add_lemma("saw", "saw");
        dict
    }

    #[test]
    fn test_senses_ranked_and_filtered() {
        let dict = fixture();
        let all = dict.senses("dog", None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "dog.n.01");

        let verbs = dict.senses("dog", Some(PartOfSpeech::Verb)).unwrap();
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].name, "chase.v.01");

        assert!(dict.senses("xyzzy", None).unwrap().is_empty());
    }

    #[test]
    fn test_senses_case_insensitive_fallback() {
        let dict = fixture();
        let senses = dict.senses("Dog", None).unwrap();
        assert_eq!(senses.len(), 3);
    }

    #[test]
    fn test_related() {
        let dict = fixture();
        let dog = Sense::new("dog.n.01");
        let hypernyms = dict.related(&dog, RelationKind::Hypernym).unwrap();
        assert_eq!(hypernyms, vec![Sense::new("canine.n.02")]);
        assert!(dict.related(&dog, RelationKind::Holonym).unwrap().is_empty());

        // Unknown synsets have no relations, which is not an error.
        let unknown = Sense::new("missing.n.01");
        assert!(dict.related(&unknown, RelationKind::Hypernym).unwrap().is_empty());
    }

    #[test]
    fn test_lemma_pos_sensitivity() {
        let dict = fixture();
        assert_eq!(dict.lemma("dogs", None).unwrap(), "dog");
        assert_eq!(dict.lemma("saw", Some(PartOfSpeech::Verb)).unwrap(), "see");
        assert_eq!(dict.lemma("saw", Some(PartOfSpeech::Noun)).unwrap(), "saw");
        assert_eq!(dict.lemma("saw", None).unwrap(), "saw");
        // Unknown words come back unchanged.
        assert_eq!(dict.lemma("qwerty", None).unwrap(), "qwerty");
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "senses": { "cat": ["cat.n.01"] },
            "synsets": { "cat.n.01": { "hypernyms": ["feline.n.01"] } },
            "lemmas": { "cats": "cat" }
        }"#;
        let dict: DictionaryResource = serde_json::from_str(json).unwrap();
        let senses = dict.senses("cat", Some(PartOfSpeech::Noun)).unwrap();
        assert_eq!(senses[0].name, "cat.n.01");
        assert_eq!(dict.lemma("cats", None).unwrap(), "cat");
    }
}
