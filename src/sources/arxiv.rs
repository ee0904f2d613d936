//! arXiv query client.

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::config::ApiConfig;
use crate::models::{PaperRecord, SearchQuery};
use crate::sources::atom::{self, AtomEntry};
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// Base URL for arXiv API
pub const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// arXiv research source
///
/// Each call performs exactly one GET against the query endpoint. There is
/// no paging (`start` is always 0), retrying or caching.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: HttpClient,
    base_url: String,
}

impl ArxivSource {
    /// Create a new arXiv source with default HTTP settings
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self::with_client(HttpClient::new()?))
    }

    /// Create with a custom HTTP client
    pub fn with_client(client: HttpClient) -> Self {
        Self {
            client,
            base_url: ARXIV_API_URL.to_string(),
        }
    }

    /// Create from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, SourceError> {
        let client = HttpClient::with_settings(
            config.user_agent(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Url::parse(&config.base_url)?;
        Ok(Self::with_client(client).base_url(&config.base_url))
    }

    /// Point the source at a different query endpoint (mirrors, test servers)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The query endpoint this source talks to
    pub fn endpoint(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for a search request.
    ///
    /// Parameters are form-encoded in the order `search_query`, `sortBy`,
    /// `start`, `max_results`.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, SourceError> {
        if query.max_results == 0 {
            return Err(SourceError::InvalidRequest(
                "max_results must be a positive integer".to_string(),
            ));
        }

        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut()
            .append_pair("search_query", &query.query)
            .append_pair("sortBy", query.sort_by.as_str())
            .append_pair("start", "0")
            .append_pair("max_results", &query.max_results.to_string());
        Ok(url)
    }

    /// Build the URL for an `id_list` lookup
    pub fn lookup_url(&self, arxiv_id: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)?;
        url.query_pairs_mut().append_pair("id_list", arxiv_id);
        Ok(url)
    }

    /// Parse every usable entry of a feed, in feed order.
    ///
    /// Entries that are malformed or missing a mandatory field are dropped;
    /// only a document that is not a feed at all is an error.
    pub fn parse_feed(xml: &str) -> Result<Vec<PaperRecord>, SourceError> {
        Ok(atom::parse_entries(xml)?
            .into_iter()
            .filter_map(|entry| match entry.and_then(AtomEntry::into_record) {
                Ok(paper) => Some(paper),
                Err(e) => {
                    tracing::debug!("Skipping arXiv entry: {}", e);
                    None
                }
            })
            .collect())
    }

    /// Parse only the first entry of a feed
    pub fn parse_first_entry(xml: &str) -> Result<Option<PaperRecord>, SourceError> {
        atom::parse_entries(xml)?
            .into_iter()
            .next()
            .map(|entry| entry.and_then(AtomEntry::into_record))
            .transpose()
    }

    async fn fetch_feed(&self, url: Url) -> Result<String, SourceError> {
        tracing::debug!(%url, "Querying arXiv");

        let response = self
            .client
            .get(url.as_str())
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch arXiv results: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "arXiv API returned status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl Source for ArxivSource {
    fn name(&self) -> &str {
        "arXiv"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PaperRecord>, SourceError> {
        let url = self.search_url(query)?;
        let body = self.fetch_feed(url).await?;
        let papers = Self::parse_feed(&body)?;
        tracing::info!("Found {} papers on arXiv for '{}'", papers.len(), query.query);
        Ok(papers)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<PaperRecord>, SourceError> {
        let url = self.lookup_url(id)?;
        let body = self.fetch_feed(url).await?;
        Self::parse_first_entry(&body)
    }
}
