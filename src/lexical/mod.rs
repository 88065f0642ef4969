//! Lexical resource adapter.
//!
//! This module defines the boundary to a WordNet-style knowledge base: ranked
//! word senses queried by spelling and optional part of speech, plus the four
//! lexical-semantic relations used by the feature extractor. The resource is
//! read-only and deterministic for a fixed input, so lookups within one run
//! may be memoized (see [`cache::CachedResource`]).

pub mod cache;
pub mod dictionary;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Part of speech as understood by the lexical resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl PartOfSpeech {
    /// Map a Penn Treebank tag to a lexical-resource part of speech.
    ///
    /// `J*` tags map to adjectives, `V*` to verbs, `N*` to nouns and `R*` to
    /// adverbs; every other tag has no counterpart in the resource.
    pub fn from_penn_tag(tag: &str) -> Option<Self> {
        match tag.chars().next() {
            Some('J') => Some(PartOfSpeech::Adjective),
            Some('V') => Some(PartOfSpeech::Verb),
            Some('N') => Some(PartOfSpeech::Noun),
            Some('R') => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Single-letter code used inside sense names (`dog.n.01`).
    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Whether a sense-name code belongs to this part of speech.
    ///
    /// Adjectives also match the satellite-adjective code `s`.
    pub fn matches_code(&self, code: &str) -> bool {
        match self {
            PartOfSpeech::Adjective => code == "a" || code == "s",
            PartOfSpeech::Verb => code == "v",
            PartOfSpeech::Noun => code == "n",
            PartOfSpeech::Adverb => code == "r",
        }
    }
}

/// The four lexical-semantic relations derived per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// More general related sense.
    Hypernym,
    /// More specific related sense.
    Hyponym,
    /// Part-of related sense.
    Meronym,
    /// Has-part related sense.
    Holonym,
}

impl RelationKind {
    /// All relation kinds, in the order they appear in records and queries.
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Hypernym,
        RelationKind::Hyponym,
        RelationKind::Meronym,
        RelationKind::Holonym,
    ];

    /// Field name used in records and query clauses.
    pub fn field(&self) -> &'static str {
        match self {
            RelationKind::Hypernym => "hypernyms",
            RelationKind::Hyponym => "hyponyms",
            RelationKind::Meronym => "meronyms",
            RelationKind::Holonym => "holonyms",
        }
    }
}

/// One word sense in the lexical resource.
///
/// Senses are identified by a canonical name of the form `lemma.pos.rank`
/// (for example `dog.n.01`). The rank among candidate senses for a spelling
/// is owned by the resource; "first" always means most representative by the
/// resource's own ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sense {
    /// Canonical sense name, e.g. `dog.n.01`.
    pub name: String,
}

impl Sense {
    /// Create a sense from its canonical name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Sense { name: name.into() }
    }

    /// The headword of the sense name: the segment before the first `.`.
    pub fn canonical(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    /// The part-of-speech code embedded in the sense name, if any.
    pub fn pos_code(&self) -> Option<&str> {
        self.name.split('.').nth(1)
    }
}

/// Boundary to a WordNet-style knowledge base.
///
/// Implementations must return senses and related senses in the resource's
/// own ranking order (first = most representative). Lookups for words the
/// resource does not know return empty lists, never errors.
pub trait LexicalResource: Send + Sync {
    /// Ranked senses for a spelling, optionally restricted to one part of speech.
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<Vec<Sense>>;

    /// Ranked related senses of `sense` for the given relation kind.
    fn related(&self, sense: &Sense, kind: RelationKind) -> Result<Vec<Sense>>;

    /// Dictionary base form of a word, optionally part-of-speech-sensitive.
    ///
    /// Returns the input unchanged when the resource has no lemma for it.
    fn lemma(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_penn_tag() {
        assert_eq!(PartOfSpeech::from_penn_tag("NN"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_penn_tag("NNS"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_penn_tag("VBD"), Some(PartOfSpeech::Verb));
        assert_eq!(
            PartOfSpeech::from_penn_tag("JJ"),
            Some(PartOfSpeech::Adjective)
        );
        assert_eq!(PartOfSpeech::from_penn_tag("RB"), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_penn_tag("DT"), None);
        assert_eq!(PartOfSpeech::from_penn_tag("."), None);
        assert_eq!(PartOfSpeech::from_penn_tag(""), None);
    }

    #[test]
    fn test_sense_canonical() {
        let sense = Sense::new("domestic_dog.n.01");
        assert_eq!(sense.canonical(), "domestic_dog");
        assert_eq!(sense.pos_code(), Some("n"));

        let bare = Sense::new("dog");
        assert_eq!(bare.canonical(), "dog");
        assert_eq!(bare.pos_code(), None);
    }

    #[test]
    fn test_adjective_matches_satellite_code() {
        assert!(PartOfSpeech::Adjective.matches_code("a"));
        assert!(PartOfSpeech::Adjective.matches_code("s"));
        assert!(!PartOfSpeech::Adjective.matches_code("n"));
        assert!(PartOfSpeech::Noun.matches_code("n"));
        assert!(!PartOfSpeech::Noun.matches_code("v"));
    }
}
