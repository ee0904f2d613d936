//! Search request model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort field accepted by the arXiv query API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Relevance,
    LastUpdatedDate,
    SubmittedDate,
}

impl SortBy {
    /// Value sent as the `sortBy` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::SubmittedDate => "submittedDate",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortBy::Relevance),
            "lastUpdatedDate" => Ok(SortBy::LastUpdatedDate),
            "submittedDate" => Ok(SortBy::SubmittedDate),
            other => Err(format!(
                "unknown sort field '{}' (expected relevance, lastUpdatedDate or submittedDate)",
                other
            )),
        }
    }
}

/// Search query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Field-prefixed search expression, e.g. `ti:gravity AND au:Einstein`.
    /// Sent to the API as-is.
    pub query: String,

    /// Sort field
    pub sort_by: SortBy,

    /// Maximum number of results to return (must be positive)
    pub max_results: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_by: SortBy::default(),
            max_results: 10,
        }
    }
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = max;
        self
    }

    /// Set sort by
    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort_by = sort;
        self
    }
}
