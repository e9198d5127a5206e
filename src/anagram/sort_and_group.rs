//! Sort-and-group anagram strategy.
//!
//! Each word is reduced to its [`NormalizedKey`] and appended to the bucket
//! for that key. Buckets remember the order in which their key was first seen,
//! so output is deterministic without sorting the result.
//!
//! Time O(N·M·log M), space O(N·M) for N words of at most M characters.

use std::collections::HashMap;

use crate::anagram::{AnagramGroup, AnagramGrouper, NormalizedKey};
use crate::error::AnagramResult;

/// Registry tag for [`SortAndGroup`].
pub const SORT_AND_GROUP: &str = "sort_and_group";

/// Groups words by their sorted, lower-cased, whitespace-free characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct SortAndGroup;

impl SortAndGroup {
    pub fn new() -> Self {
        Self
    }
}

impl AnagramGrouper for SortAndGroup {
    fn find_anagrams(&self, words: Vec<String>) -> AnagramResult<Vec<AnagramGroup>> {
        let mut slots: HashMap<NormalizedKey, usize> = HashMap::with_capacity(words.len());
        let mut buckets: Vec<AnagramGroup> = Vec::new();

        for word in words {
            let key = NormalizedKey::from_word(&word);
            match slots.get(&key) {
                Some(&slot) => buckets[slot].push(word),
                None => {
                    slots.insert(key, buckets.len());
                    buckets.push(vec![word]);
                }
            }
        }

        Ok(buckets.into_iter().filter(|group| group.len() > 1).collect())
    }

    fn name(&self) -> &'static str {
        SORT_AND_GROUP
    }
}
