//! Per-run memoization for lexical resource lookups.
//!
//! The lexical resource is read-only and deterministic for a fixed input, so
//! repeated queries for the same (word, part-of-speech) pair within one run
//! are safely cacheable. Only successful lookups are cached; errors always
//! propagate to the caller.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::lexical::{LexicalResource, PartOfSpeech, RelationKind, Sense};

/// A memoizing wrapper around another [`LexicalResource`].
pub struct CachedResource<R> {
    inner: R,
    senses: RwLock<AHashMap<(String, Option<PartOfSpeech>), Vec<Sense>>>,
    related: RwLock<AHashMap<(String, RelationKind), Vec<Sense>>>,
    lemmas: RwLock<AHashMap<(String, Option<PartOfSpeech>), String>>,
}

impl<R: LexicalResource> CachedResource<R> {
    /// Wrap a resource with an empty cache.
    pub fn new(inner: R) -> Self {
        CachedResource {
            inner,
            senses: RwLock::new(AHashMap::new()),
            related: RwLock::new(AHashMap::new()),
            lemmas: RwLock::new(AHashMap::new()),
        }
    }

    /// Unwrap the underlying resource, discarding the cache.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: LexicalResource> LexicalResource for CachedResource<R> {
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<Vec<Sense>> {
        let key = (word.to_string(), pos);
        if let Some(hit) = self.senses.read().get(&key) {
            return Ok(hit.clone());
        }
        let senses = self.inner.senses(word, pos)?;
        self.senses.write().insert(key, senses.clone());
        Ok(senses)
    }

    fn related(&self, sense: &Sense, kind: RelationKind) -> Result<Vec<Sense>> {
        let key = (sense.name.clone(), kind);
        if let Some(hit) = self.related.read().get(&key) {
            return Ok(hit.clone());
        }
        let related = self.inner.related(sense, kind)?;
        self.related.write().insert(key, related.clone());
        Ok(related)
    }

    fn lemma(&self, word: &str, pos: Option<PartOfSpeech>) -> Result<String> {
        let key = (word.to_string(), pos);
        if let Some(hit) = self.lemmas.read().get(&key) {
            return Ok(hit.clone());
        }
        let lemma = self.inner.lemma(word, pos)?;
        self.lemmas.write().insert(key, lemma.clone());
        Ok(lemma)
    }
}
