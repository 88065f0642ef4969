//! Corpus loading and sentence segmentation.
//!
//! A corpus is a directory of plain-text article files whose names begin
//! with a numeric ordinal (`1.txt`, `2.txt`, ...). Files are loaded ordered
//! by that ordinal, never lexicographically: article ordinals become part of
//! unit identifiers and must be reproducible across runs, so `10.txt` must
//! not sort between `1.txt` and `2.txt`. A filename without a numeric prefix
//! is a configuration error and fails the run.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::tokenizer;
use crate::error::{LexisearchError, Result};

/// The atomic indexed and searched entity: one sentence of one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceUnit {
    /// Stable identifier, `A<article>S<sentence>`, both ordinals 1-based.
    pub id: String,
    /// The original sentence text.
    pub text: String,
    /// Distinct tokens of the sentence, first-occurrence order.
    pub words: Vec<String>,
}

/// A segmented corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Sentence units in document order.
    pub units: Vec<SentenceUnit>,
    /// Number of loaded articles.
    pub article_count: usize,
    /// Total token count across all sentences (duplicates included).
    pub word_count: usize,
    index: AHashMap<String, usize>,
}

impl Corpus {
    /// Sentence text for a unit id, if the corpus contains it.
    pub fn sentence(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&i| self.units[i].text.as_str())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Segment every article file in a directory into sentence units.
pub fn segment<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            let path = entry.path();
            files.push((article_ordinal(&path)?, path));
        }
    }
    if files.is_empty() {
        return Err(LexisearchError::corpus(format!(
            "corpus directory '{}' contains no article files",
            dir.display()
        )));
    }
    files.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut corpus = Corpus::default();
    for (article_idx, (_, path)) in files.iter().enumerate() {
        let text = fs::read_to_string(path)?;
        let sentences = segment_article(&text);
        debug!(
            "article {} ('{}'): {} sentences",
            article_idx + 1,
            path.display(),
            sentences.len()
        );
        for (sentence_idx, sentence) in sentences.into_iter().enumerate() {
            let id = format!("A{}S{}", article_idx + 1, sentence_idx + 1);
            let words = tokenizer::distinct_tokens(&sentence);
            corpus.word_count += tokenizer::tokenize(&sentence).len();
            corpus.index.insert(id.clone(), corpus.units.len());
            corpus.units.push(SentenceUnit {
                id,
                text: sentence,
                words,
            });
        }
    }
    corpus.article_count = files.len();
    Ok(corpus)
}

/// Split one article into sentences, stripping a leading title.
///
/// If the first sentence contains a double newline, everything up to and
/// including the first `\n\n` is treated as the article title and discarded.
/// An empty remainder drops the sentence entirely.
fn segment_article(text: &str) -> Vec<String> {
    let mut sentences = tokenizer::split_sentences(text.trim());
    if let Some(first) = sentences.first()
        && let Some(split_at) = first.find("\n\n")
    {
        let remainder = first[split_at + 2..].trim().to_string();
        if remainder.is_empty() {
            sentences.remove(0);
        } else {
            sentences[0] = remainder;
        }
    }
    sentences
}

/// The numeric prefix of an article filename: the portion before the first `.`.
fn article_ordinal(path: &Path) -> Result<u64> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let prefix = name.split('.').next().unwrap_or_default();
    prefix.parse::<u64>().map_err(|_| {
        LexisearchError::corpus(format!(
            "article filename '{name}' has no numeric prefix; files must be named like '1.txt'"
        ))
    })
}
