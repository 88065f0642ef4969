//! Porter stemming.
//!
//! A fixed, deterministic implementation of the Porter algorithm. Stemming
//! is morphology-agnostic and shared by the baseline and disambiguated
//! feature variants, so the exact stem shapes matter less than stability:
//! the same word must always produce the same stem.

/// Porter stemming algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stem a word to its root form.
    ///
    /// Input is lowercased first. Words of two characters or fewer, and
    /// non-ASCII words (the algorithm is defined over English spelling),
    /// are returned lowercased but otherwise unchanged.
    pub fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_lowercase();
        }

        let word = word.to_lowercase();
        let word = self.step1a(&word);
        let word = self.step1b(&word);
        let word = self.step2(&word);
        let word = self.step3(&word);
        let word = self.step4(&word);
        self.step5(&word)
    }

    /// Whether the character at `pos` acts as a vowel ('y' after a consonant does).
    fn is_vowel(&self, word: &str, pos: usize) -> bool {
        let bytes = word.as_bytes();
        if pos >= bytes.len() {
            return false;
        }
        match bytes[pos].to_ascii_lowercase() {
            b'a' | b'e' | b'i' | b'o' | b'u' => true,
            b'y' if pos > 0 => !self.is_vowel(word, pos - 1),
            _ => false,
        }
    }

    /// The Porter measure: number of VC patterns in the word.
    fn measure(&self, word: &str) -> usize {
        let n = word.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && !self.is_vowel(word, i) {
            i += 1;
        }
        while i < n {
            while i < n && self.is_vowel(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && !self.is_vowel(word, i) {
                i += 1;
            }
        }
        m
    }

    fn contains_vowel(&self, word: &str) -> bool {
        (0..word.len()).any(|i| self.is_vowel(word, i))
    }

    fn ends_double_consonant(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        let len = bytes.len();
        len >= 2 && bytes[len - 1] == bytes[len - 2] && !self.is_vowel(word, len - 1)
    }

    /// Consonant-vowel-consonant ending, last consonant not w, x or y.
    fn ends_cvc(&self, word: &str) -> bool {
        let len = word.len();
        if len < 3 {
            return false;
        }
        !self.is_vowel(word, len - 3)
            && self.is_vowel(word, len - 2)
            && !self.is_vowel(word, len - 1)
            && !matches!(word.as_bytes()[len - 1], b'w' | b'x' | b'y')
    }

    /// Replace `old` with `new` when the remaining stem has measure >= `min_measure`.
    fn replace_suffix(&self, word: &str, old: &str, new: &str, min_measure: usize) -> String {
        if word.ends_with(old) {
            let stem = &word[..word.len() - old.len()];
            if self.measure(stem) >= min_measure {
                return format!("{stem}{new}");
            }
        }
        word.to_string()
    }

    fn step1a(&self, word: &str) -> String {
        if word.ends_with("sses") {
            format!("{}ss", &word[..word.len() - 4])
        } else if word.ends_with("ies") {
            format!("{}i", &word[..word.len() - 3])
        } else if word.ends_with("ss") {
            word.to_string()
        } else if word.ends_with('s') && word.len() > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word.to_string()
        }
    }

    fn step1b(&self, word: &str) -> String {
        let original = word;
        let word = if word.ends_with("eed") {
            self.replace_suffix(word, "eed", "ee", 1)
        } else if word.ends_with("ed") {
            let stem = &word[..word.len() - 2];
            if self.contains_vowel(stem) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else if word.ends_with("ing") {
            let stem = &word[..word.len() - 3];
            if self.contains_vowel(stem) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if word == original {
            return word;
        }
        if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
            format!("{word}e")
        } else if self.ends_double_consonant(&word)
            && !word.ends_with('l')
            && !word.ends_with('s')
            && !word.ends_with('z')
        {
            word[..word.len() - 1].to_string()
        } else if self.measure(&word) == 1 && self.ends_cvc(&word) {
            format!("{word}e")
        } else {
            word
        }
    }

    fn step2(&self, word: &str) -> String {
        const SUFFIXES: [(&str, &str); 20] = [
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];
        for (old, new) in SUFFIXES {
            if word.ends_with(old) {
                return self.replace_suffix(word, old, new, 1);
            }
        }
        word.to_string()
    }

    fn step3(&self, word: &str) -> String {
        const SUFFIXES: [(&str, &str); 7] = [
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];
        for (old, new) in SUFFIXES {
            if word.ends_with(old) {
                return self.replace_suffix(word, old, new, 1);
            }
        }
        word.to_string()
    }

    fn step4(&self, word: &str) -> String {
        const SUFFIXES: [&str; 19] = [
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent",
            "ion", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];
        for suffix in SUFFIXES {
            if word.ends_with(suffix) {
                let stem = &word[..word.len() - suffix.len()];
                if self.measure(stem) > 1
                    && (suffix != "ion" || stem.ends_with('s') || stem.ends_with('t'))
                {
                    return stem.to_string();
                }
            }
        }
        word.to_string()
    }

    fn step5(&self, word: &str) -> String {
        let word = if word.ends_with('e') {
            let stem = &word[..word.len() - 1];
            let m = self.measure(stem);
            if m > 1 || (m == 1 && !self.ends_cvc(stem)) {
                stem.to_string()
            } else {
                word.to_string()
            }
        } else {
            word.to_string()
        };

        if word.ends_with("ll") && self.measure(&word) > 1 {
            word[..word.len() - 1].to_string()
        } else {
            word
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porter_stemmer() {
        let stemmer = PorterStemmer::new();

        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("flies"), "fli");
        assert_eq!(stemmer.stem("died"), "di");
        assert_eq!(stemmer.stem("agreed"), "agre");
        assert_eq!(stemmer.stem("disabled"), "disabl");
        assert_eq!(stemmer.stem("measuring"), "measur");
        assert_eq!(stemmer.stem("itemization"), "item");
        assert_eq!(stemmer.stem("sensational"), "sensat");
        assert_eq!(stemmer.stem("traditional"), "tradit");
    }

    #[test]
    fn test_short_and_punctuation_tokens_pass_through() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("."), ".");
        assert_eq!(stemmer.stem("on"), "on");
        assert_eq!(stemmer.stem("Be"), "be");
    }

    #[test]
    fn test_stemming_is_case_insensitive() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.stem("Running"), stemmer.stem("running"));
    }

    #[test]
    fn test_measure() {
        let stemmer = PorterStemmer::new();
        assert_eq!(stemmer.measure("tree"), 0);
        assert_eq!(stemmer.measure("trees"), 1);
        assert_eq!(stemmer.measure("trouble"), 1);
        assert_eq!(stemmer.measure("troubles"), 2);
    }
}
