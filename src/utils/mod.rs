//! Utility modules supporting the query client and CLI.
//!
//! - [`HttpClient`]: shared reqwest client with a user agent and timeouts
//! - [`normalize_whitespace`]: collapse newlines and runs of whitespace in feed text
//! - [`truncate_with_ellipsis`]: shorten long text for display
//!
//! # Text helpers
//!
//! ```rust
//! use arxiv_cli::utils::{normalize_whitespace, truncate_with_ellipsis};
//!
//! assert_eq!(normalize_whitespace("  Deep\n  Learning "), "Deep Learning");
//! assert_eq!(truncate_with_ellipsis("Hello World", 5), "Hello...");
//! ```

mod http;
mod text;

pub use http::{HttpClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use text::{normalize_whitespace, truncate_with_ellipsis};
