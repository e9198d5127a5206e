//! Word normalization for anagram comparison.
//!
//! A key is built by dropping whitespace, lower-casing and sorting what is
//! left. Sorting works on `char`s, so multi-byte UTF-8 is never split, but no
//! Unicode normalization is applied: composed and decomposed forms of the same
//! letter produce different keys.

/// Grouping key shared by all anagrams of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Derive the key for `word`.
    ///
    /// O(M log M) in the word length.
    pub fn from_word(word: &str) -> Self {
        let mut chars: Vec<char> = word
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
