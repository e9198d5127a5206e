//! Anagram grouping subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<Word> (from a WordSource)
//!     → normalize.rs (word → NormalizedKey)
//!     → sort_and_group.rs (bucket by key, first-seen order)
//!     → Drop singleton buckets
//!     → Vec<AnagramGroup>
//!
//! Grouper selection (at request time):
//!     algorithm tag → factory.rs (frozen registry) → Box<dyn AnagramGrouper>
//! ```
//!
//! # Design Decisions
//! - Groupers are pure: no I/O, no logging, no shared state
//! - Output order is deterministic (first-seen key order, insertion order within a group)
//! - Normalized keys never leave this module

pub mod factory;
pub mod normalize;
pub mod sort_and_group;

pub use factory::GrouperFactory;
pub use normalize::NormalizedKey;
pub use sort_and_group::SortAndGroup;

use crate::error::AnagramResult;

/// A group of input words that are anagrams of each other.
pub type AnagramGroup = Vec<String>;

/// Strategy for grouping words into anagram sets.
pub trait AnagramGrouper: Send + Sync + std::fmt::Debug {
    /// Group `words` into anagram sets, dropping words without a partner.
    fn find_anagrams(&self, words: Vec<String>) -> AnagramResult<Vec<AnagramGroup>>;

    /// Registry tag this grouper is known by.
    fn name(&self) -> &'static str;
}
