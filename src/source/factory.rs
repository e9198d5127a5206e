//! Word source registry.
//!
//! # Responsibilities
//! - Map origin tags to source constructors
//! - Check that the payload variant fits the origin
//! - Hand shared resources (HTTP client, line cap) to constructors
//!
//! # Design Decisions
//! - Built once at startup, read-only afterwards (shared via Arc)
//! - New origins are added with `register`, existing ones are untouched

use std::collections::BTreeMap;

use crate::error::{AnagramError, AnagramResult};
use crate::source::remote_url::DEFAULT_MAX_LINE_BYTES;
use crate::source::{
    InlineTextSource, RemoteUrlSource, SourcePayload, UploadedFileSource, WordSource, INLINE_TEXT,
    REMOTE_URL, UPLOADED_FILE,
};

/// Process-wide resources available to every source constructor.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Client used for remote word lists.
    pub client: reqwest::Client,
    /// Cap on a single buffered line of a remote word list.
    pub max_line_bytes: usize,
}

impl Default for SourceContext {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

/// Constructor stored in the registry.
pub type SourceConstructor = fn(&SourceContext, SourcePayload) -> AnagramResult<Box<dyn WordSource>>;

/// Creates word sources from origin tags and payloads.
#[derive(Debug, Clone)]
pub struct SourceFactory {
    context: SourceContext,
    constructors: BTreeMap<&'static str, SourceConstructor>,
}

impl SourceFactory {
    /// Empty registry.
    pub fn empty(context: SourceContext) -> Self {
        Self {
            context,
            constructors: BTreeMap::new(),
        }
    }

    /// Registry holding the built-in origins.
    pub fn new(context: SourceContext) -> Self {
        Self::empty(context)
            .register(INLINE_TEXT, inline_text)
            .register(UPLOADED_FILE, uploaded_file)
            .register(REMOTE_URL, remote_url)
    }

    /// Add (or replace) the constructor for `tag`.
    pub fn register(mut self, tag: &'static str, constructor: SourceConstructor) -> Self {
        self.constructors.insert(tag, constructor);
        self
    }

    /// Instantiate the source registered under `tag` for `payload`.
    pub fn create(&self, tag: &str, payload: SourcePayload) -> AnagramResult<Box<dyn WordSource>> {
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| AnagramError::UnknownOrigin {
                tag: tag.to_string(),
                supported: self.supported().iter().map(|t| t.to_string()).collect(),
            })?;
        constructor(&self.context, payload)
    }

    /// Registered tags, in sorted order.
    pub fn supported(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    pub fn context(&self) -> &SourceContext {
        &self.context
    }
}

impl Default for SourceFactory {
    fn default() -> Self {
        Self::new(SourceContext::default())
    }
}

fn mismatch(origin: &str, expected: &'static str) -> AnagramError {
    AnagramError::PayloadMismatch {
        origin: origin.to_string(),
        expected,
    }
}

fn inline_text(_: &SourceContext, payload: SourcePayload) -> AnagramResult<Box<dyn WordSource>> {
    match payload {
        SourcePayload::Text(text) => Ok(Box::new(InlineTextSource::new(text))),
        _ => Err(mismatch(INLINE_TEXT, "comma-separated text")),
    }
}

fn uploaded_file(_: &SourceContext, payload: SourcePayload) -> AnagramResult<Box<dyn WordSource>> {
    match payload {
        SourcePayload::Stream(reader) => Ok(Box::new(UploadedFileSource::new(reader))),
        _ => Err(mismatch(UPLOADED_FILE, "a file upload")),
    }
}

fn remote_url(context: &SourceContext, payload: SourcePayload) -> AnagramResult<Box<dyn WordSource>> {
    match payload {
        SourcePayload::Url(url) => Ok(Box::new(RemoteUrlSource::new(
            context.client.clone(),
            &url,
            context.max_line_bytes,
        )?)),
        _ => Err(mismatch(REMOTE_URL, "a url")),
    }
}
