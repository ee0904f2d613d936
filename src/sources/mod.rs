//! Paper sources behind a small trait-based seam.
//!
//! [`Source`] has two fallible operations ([`Source::search`] and
//! [`Source::get_by_id`]) that report *why* a request failed, and two
//! provided wrappers ([`Source::search_papers`] and
//! [`Source::get_paper_details`]) that collapse every failure into an empty
//! list or `None`. The CLI only uses the wrappers.
//!
//! [`ArxivSource`] talks to the arXiv query API. [`MockSource`] returns canned
//! data for tests of code that is generic over `Source`.

mod arxiv;
pub mod atom;
pub mod mock;

pub use arxiv::{ArxivSource, ARXIV_API_URL};
pub use mock::MockSource;

use crate::models::{PaperRecord, SearchQuery};
use async_trait::async_trait;

/// The Source trait defines the interface for paper lookups.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Search for papers matching the query
    async fn search(&self, query: &SearchQuery) -> Result<Vec<PaperRecord>, SourceError>;

    /// Look up a single paper by its source-specific ID.
    ///
    /// `Ok(None)` means the request succeeded but nothing matched.
    async fn get_by_id(&self, id: &str) -> Result<Option<PaperRecord>, SourceError>;

    /// Search, returning an empty list on any failure
    async fn search_papers(&self, query: &SearchQuery) -> Vec<PaperRecord> {
        match self.search(query).await {
            Ok(papers) => papers,
            Err(e) => {
                tracing::warn!("Search on {} failed: {}", self.name(), e);
                Vec::new()
            }
        }
    }

    /// Look up a paper, returning `None` on any failure
    async fn get_paper_details(&self, id: &str) -> Option<PaperRecord> {
        match self.get_by_id(id).await {
            Ok(paper) => paper,
            Err(e) => {
                tracing::warn!("Lookup of '{}' on {} failed: {}", id, self.name(), e);
                None
            }
        }
    }
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Parsing error (malformed XML or an entry missing a required field)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<quick_xml::Error> for SourceError {
    fn from(err: quick_xml::Error) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}

impl From<quick_xml::DeError> for SourceError {
    fn from(err: quick_xml::DeError) -> Self {
        SourceError::Parse(format!("XML: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidRequest(format!("URL: {}", err))
    }
}
