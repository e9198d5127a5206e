//! Grouper registry.
//!
//! # Responsibilities
//! - Map algorithm tags to grouper constructors
//! - Reject unknown tags with the list of supported ones
//!
//! # Design Decisions
//! - Built once at startup, read-only afterwards (shared via Arc)
//! - New strategies are added with `register`, existing ones are untouched

use std::collections::BTreeMap;

use crate::anagram::sort_and_group::{SortAndGroup, SORT_AND_GROUP};
use crate::anagram::AnagramGrouper;
use crate::error::{AnagramError, AnagramResult};

/// Constructor stored in the registry.
pub type GrouperConstructor = fn() -> Box<dyn AnagramGrouper>;

/// Creates groupers from algorithm tags.
#[derive(Debug, Clone)]
pub struct GrouperFactory {
    constructors: BTreeMap<&'static str, GrouperConstructor>,
}

impl GrouperFactory {
    /// Empty registry.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in strategies.
    pub fn new() -> Self {
        Self::empty().register(SORT_AND_GROUP, || Box::new(SortAndGroup::new()))
    }

    /// Add (or replace) the constructor for `tag`.
    pub fn register(mut self, tag: &'static str, constructor: GrouperConstructor) -> Self {
        self.constructors.insert(tag, constructor);
        self
    }

    /// Instantiate the grouper registered under `tag`.
    pub fn create(&self, tag: &str) -> AnagramResult<Box<dyn AnagramGrouper>> {
        self.constructors
            .get(tag)
            .map(|constructor| constructor())
            .ok_or_else(|| AnagramError::UnknownAlgorithm {
                tag: tag.to_string(),
                supported: self.supported().iter().map(|t| t.to_string()).collect(),
            })
    }

    /// Registered tags, in sorted order.
    pub fn supported(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }
}

impl Default for GrouperFactory {
    fn default() -> Self {
        Self::new()
    }
}
