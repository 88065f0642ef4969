//! Heuristic part-of-speech tagging.
//!
//! The tagger assigns Penn Treebank tags from a closed-class lexicon, a
//! handful of suffix rules, and capitalization/digit shape rules, defaulting
//! to `NN`. It is pure and deterministic: the downstream feature pipeline
//! only consumes the coarse tag class (first letter), so a context-free
//! tagger is a deliberate trade against hauling in a statistical model.

use ahash::AHashMap;

/// Closed-class words and frequent irregular forms.
const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    // pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("them", "PRP"),
    ("him", "PRP"),
    ("her", "PRP"),
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // prepositions and conjunctions
    ("of", "IN"),
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("by", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("into", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("about", "IN"),
    ("between", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("against", "IN"),
    ("as", "IN"),
    ("if", "IN"),
    ("to", "TO"),
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    // modals and auxiliaries
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("has", "VBZ"),
    ("have", "VBP"),
    ("had", "VBD"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    // frequent irregular pasts
    ("sat", "VBD"),
    ("ran", "VBD"),
    ("went", "VBD"),
    ("said", "VBD"),
    ("made", "VBD"),
    ("took", "VBD"),
    ("came", "VBD"),
    ("got", "VBD"),
    ("knew", "VBD"),
    ("found", "VBD"),
    ("gave", "VBD"),
    // adverbs and the rest
    ("not", "RB"),
    ("very", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("too", "RB"),
    ("then", "RB"),
    ("now", "RB"),
    ("here", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("there", "EX"),
    ("who", "WP"),
    ("whom", "WP"),
    ("what", "WP"),
    ("which", "WDT"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
];

/// Suffix rules tried longest-first on lowercase words.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ization", "NN"),
    ("ousness", "NN"),
    ("fulness", "NN"),
    ("ation", "NN"),
    ("ility", "NN"),
    ("ment", "NN"),
    ("ness", "NN"),
    ("tion", "NN"),
    ("sion", "NN"),
    ("ship", "NN"),
    ("able", "JJ"),
    ("ible", "JJ"),
    ("ical", "JJ"),
    ("less", "JJ"),
    ("ous", "JJ"),
    ("ful", "JJ"),
    ("ish", "JJ"),
    ("ive", "JJ"),
    ("ity", "NN"),
    ("ing", "VBG"),
    ("ize", "VB"),
    ("ise", "VB"),
    ("est", "JJS"),
    ("ed", "VBD"),
    ("ly", "RB"),
    ("al", "JJ"),
];

/// Context-free Penn Treebank tagger.
#[derive(Debug, Clone)]
pub struct PosTagger {
    lexicon: AHashMap<&'static str, &'static str>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    /// Create a tagger with the built-in lexicon.
    pub fn new() -> Self {
        PosTagger {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Tag a single word.
    pub fn tag_word(&self, word: &str) -> String {
        if word.is_empty() {
            return "NN".to_string();
        }

        // Punctuation tags itself, Penn-style.
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return match word {
                "." | "!" | "?" => ".".to_string(),
                "," => ",".to_string(),
                ";" | ":" => ":".to_string(),
                "(" | "[" | "{" => "(".to_string(),
                ")" | "]" | "}" => ")".to_string(),
                "\"" | "'" | "``" | "''" => "''".to_string(),
                _ => "SYM".to_string(),
            };
        }

        // Number shapes: 12, 3.14, 1,200.
        if word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return "CD".to_string();
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return tag.to_string();
        }

        // Capitalized open-class words are treated as proper nouns; there is
        // no sentence context to tell an initial capital apart.
        if word.chars().next().is_some_and(char::is_uppercase) {
            return "NNP".to_string();
        }

        for (suffix, tag) in SUFFIX_RULES {
            if lower.len() > suffix.len() + 1 && lower.ends_with(suffix) {
                return tag.to_string();
            }
        }

        if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 2 {
            return "NNS".to_string();
        }

        "NN".to_string()
    }

    /// Tag a word list; the tag sequence is positionally aligned to the input.
    pub fn tag(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.tag_word(w)).collect()
    }

    /// Tag a word list, returning (word, tag) pairs.
    pub fn tag_pairs(&self, words: &[String]) -> Vec<(String, String)> {
        words
            .iter()
            .map(|w| (w.clone(), self.tag_word(w)))
            .collect()
    }
}
