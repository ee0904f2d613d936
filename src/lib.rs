//! # arxiv-cli
//!
//! A small client for the arXiv query API: build a search or `id_list`
//! request, perform one GET, and flatten the Atom feed into [`PaperRecord`]s.
//!
//! ## Architecture
//!
//! - [`models`]: `PaperRecord`, `SearchQuery`, `SortBy`
//! - [`sources`]: the [`Source`] trait and the arXiv implementation
//! - [`commands`]: the `search` and `get` operations behind the CLI
//! - [`config`]: optional TOML file plus environment overrides
//! - [`ui`]: plain-text rendering used by the binary
//! - [`utils`]: HTTP client and text helpers
//!
//! ```rust,no_run
//! use arxiv_cli::models::{SearchQuery, SortBy};
//! use arxiv_cli::sources::{ArxivSource, Source};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let arxiv = ArxivSource::new()?;
//! let query = SearchQuery::new("ti:gravity AND au:Einstein")
//!     .sort_by(SortBy::SubmittedDate)
//!     .max_results(5);
//!
//! for paper in arxiv.search_papers(&query).await {
//!     println!("{} - {}", paper.arxiv_id, paper.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use models::PaperRecord;
pub use sources::{ArxivSource, Source, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
