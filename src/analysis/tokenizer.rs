//! Word tokenization and sentence splitting.
//!
//! Tokenization uses Unicode word boundaries, keeps punctuation marks as
//! their own tokens, and preserves case. Sentence splitting is rule-based:
//! a run of `.`, `!` or `?` followed by whitespace ends a sentence, which is
//! all a corpus of short articles needs.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+\s+").expect("sentence boundary pattern compiles"));

/// Tokenize text into words and punctuation marks, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| segment.to_string())
        .collect()
}

/// Tokenize text into distinct tokens.
///
/// Duplicates are collapsed keeping first-occurrence order, so re-running on
/// identical input yields an identical sequence. Case is preserved: `The`
/// and `the` are distinct tokens.
pub fn distinct_tokens(text: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Split text into sentences.
///
/// A sentence ends at a run of terminal punctuation followed by whitespace;
/// the punctuation stays with its sentence. Trailing text without terminal
/// punctuation forms a final sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        let punct_len = boundary
            .as_str()
            .find(char::is_whitespace)
            .unwrap_or(boundary.len());
        let sentence = text[last_end..boundary.start() + punct_len].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        last_end = boundary.end();
    }

    let rest = text[last_end..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}
