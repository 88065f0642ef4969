//! The annotation facade combining the pure analyzers with the external
//! collaborators.
//!
//! Every operation has a baseline form and, where part-of-speech context
//! changes the outcome, a disambiguated form: lemmatization consults the POS
//! tag of each word, and head-word extraction replaces the raw head with the
//! canonical name of its first-ranked sense when one exists.

use crate::analysis::stemmer::PorterStemmer;
use crate::analysis::tagger::PosTagger;
use crate::error::Result;
use crate::lexical::{LexicalResource, PartOfSpeech};
use crate::parse::DependencyParser;

/// Linguistic annotator over word lists and sentences.
///
/// The lexical resource and the dependency parser are injected at
/// construction time so tests can substitute doubles for both.
pub struct Annotator<'a> {
    resource: &'a dyn LexicalResource,
    parser: &'a dyn DependencyParser,
    tagger: PosTagger,
    stemmer: PorterStemmer,
}

impl<'a> Annotator<'a> {
    pub fn new(resource: &'a dyn LexicalResource, parser: &'a dyn DependencyParser) -> Self {
        Annotator {
            resource,
            parser,
            tagger: PosTagger::new(),
            stemmer: PorterStemmer::new(),
        }
    }

    /// Baseline lemmatization: default-sense base form, no POS context.
    pub fn lemmatize(&self, words: &[String]) -> Result<Vec<String>> {
        words
            .iter()
            .map(|word| self.resource.lemma(word, None))
            .collect()
    }

    /// Disambiguated lemmatization over (word, Penn tag) pairs.
    ///
    /// The tag is mapped to a lexical part of speech; words whose tag has no
    /// counterpart fall back to the default-sense lemma.
    pub fn lemmatize_tagged(&self, pairs: &[(String, String)]) -> Result<Vec<String>> {
        pairs
            .iter()
            .map(|(word, tag)| self.resource.lemma(word, PartOfSpeech::from_penn_tag(tag)))
            .collect()
    }

    /// Stem every word; the same fixed algorithm serves both variants.
    pub fn stem(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.stemmer.stem(w)).collect()
    }

    /// Penn tags aligned positionally to the input.
    pub fn pos_tags(&self, words: &[String]) -> Vec<String> {
        self.tagger.tag(words)
    }

    /// (word, Penn tag) pairs.
    pub fn pos_pairs(&self, words: &[String]) -> Vec<(String, String)> {
        self.tagger.tag_pairs(words)
    }

    /// The sentence's syntactic head word, if the parse has one.
    pub fn head_word(&self, sentence: &str) -> Result<Option<String>> {
        let graph = self.parser.parse(sentence)?;
        Ok(graph.root_word().map(|w| w.to_string()))
    }

    /// Disambiguated head word: the raw head is replaced by the canonical
    /// name of its first-ranked sense when the lexical resource knows one
    /// for the head's part of speech.
    pub fn head_word_disambiguated(&self, sentence: &str) -> Result<Option<String>> {
        let Some(head) = self.head_word(sentence)? else {
            return Ok(None);
        };
        let tag = self.tagger.tag_word(&head);
        if let Some(pos) = PartOfSpeech::from_penn_tag(&tag) {
            let senses = self.resource.senses(&head, Some(pos))?;
            if let Some(first) = senses.first() {
                return Ok(Some(first.canonical().to_string()));
            }
        }
        Ok(Some(head))
    }
}
