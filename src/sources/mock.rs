//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::models::{PaperRecord, SearchQuery};
use crate::sources::{Source, SourceError};

/// A mock source that returns predefined papers, or fails on demand.
#[derive(Debug, Default)]
pub struct MockSource {
    papers: Mutex<Vec<PaperRecord>>,
    failure: Mutex<Option<String>>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the papers returned by searches and lookups.
    pub fn set_papers(&self, papers: Vec<PaperRecord>) {
        *lock(&self.papers) = papers;
    }

    /// Make every call fail with a network error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *lock(&self.failure) = Some(message.into());
    }

    /// Queries received so far, oldest first.
    pub fn received_queries(&self) -> Vec<SearchQuery> {
        lock(&self.queries).clone()
    }

    fn check_failure(&self) -> Result<(), SourceError> {
        match lock(&self.failure).as_ref() {
            Some(message) => Err(SourceError::Network(message.clone())),
            None => Ok(()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<PaperRecord>, SourceError> {
        lock(&self.queries).push(query.clone());
        self.check_failure()?;
        let papers = lock(&self.papers);
        Ok(papers
            .iter()
            .take(query.max_results as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<PaperRecord>, SourceError> {
        self.check_failure()?;
        Ok(lock(&self.papers)
            .iter()
            .find(|paper| paper.arxiv_id == id)
            .cloned())
    }
}

/// Helper function to create a mock paper for testing.
pub fn make_paper(arxiv_id: &str, title: &str) -> PaperRecord {
    PaperRecord::new(arxiv_id, title, format!("Abstract of {}", title), "2024-01-01T00:00:00Z")
        .pdf_url(format!("http://arxiv.org/pdf/{}", arxiv_id))
}
