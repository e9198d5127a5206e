//! Comma-separated inline words.

use async_trait::async_trait;

use crate::error::{AnagramError, AnagramResult};
use crate::source::{WordSource, INLINE_TEXT};

/// Words given inline as `a,b,c`. Tokens are kept verbatim, spaces included.
#[derive(Debug, Clone)]
pub struct InlineTextSource {
    text: String,
}

impl InlineTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl WordSource for InlineTextSource {
    async fn get_words(self: Box<Self>) -> AnagramResult<Vec<String>> {
        if self.text.is_empty() {
            return Err(AnagramError::EmptySource);
        }
        let words: Vec<String> = self.text.split(',').map(str::to_string).collect();
        if words.len() < 2 {
            return Err(AnagramError::EmptySource);
        }
        Ok(words)
    }

    fn origin(&self) -> &'static str {
        INLINE_TEXT
    }
}
