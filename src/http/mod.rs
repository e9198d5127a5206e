//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout, body limit)
//!     → request.rs (content-type sniffing, JSON / multipart → ParsedRequest)
//!     → anagram.rs (registries → WordSource + AnagramGrouper → groups)
//!     → response.rs (JSON body, error → status code)
//!     → Send to client
//! ```

pub mod anagram;
pub mod request;
pub mod response;
pub mod server;

pub use request::{AnagramRequest, ParsedRequest};
pub use response::{AnagramResponse, ApiError};
pub use server::{AppState, HttpServer, X_REQUEST_ID};
