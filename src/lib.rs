//! Anagram finder: groups word lists into anagram sets over HTTP.

pub mod anagram;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod source;

pub use anagram::{AnagramGroup, AnagramGrouper, GrouperFactory};
pub use config::AppConfig;
pub use error::{AnagramError, AnagramResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use source::{SourceFactory, SourcePayload, WordSource};
