//! Paper model representing a single arXiv entry.

use serde::{Deserialize, Serialize};

/// A paper parsed from one `<entry>` of an arXiv Atom feed.
///
/// Every field is populated when a record exists: entries missing an id,
/// title, summary or published date never become a `PaperRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// arXiv identifier, e.g. `2301.12345v1` or `hep-ex/0307015v1`
    pub arxiv_id: String,

    /// Paper title, whitespace-normalized
    pub title: String,

    /// Author display names in feed order
    pub authors: Vec<String>,

    /// Abstract text, whitespace-normalized
    pub summary: String,

    /// Publication timestamp exactly as given by the feed
    pub published_date: String,

    /// Link to the PDF, empty when the feed carries none
    pub pdf_url: String,
}

impl PaperRecord {
    /// Create a record with the mandatory fields; authors and PDF link start empty
    pub fn new(
        arxiv_id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            arxiv_id: arxiv_id.into(),
            title: title.into(),
            authors: Vec::new(),
            summary: summary.into(),
            published_date: published_date.into(),
            pdf_url: String::new(),
        }
    }

    /// Set the author list
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Set the PDF link
    pub fn pdf_url(mut self, pdf_url: impl Into<String>) -> Self {
        self.pdf_url = pdf_url.into();
        self
    }

    /// Authors joined for display, e.g. `"Ada Lovelace, Alan Turing"`
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_builder() {
        let paper = PaperRecord::new("2301.12345v1", "Title", "Abstract", "2023-01-15T10:00:00Z")
            .authors(vec!["A. One".to_string(), "B. Two".to_string()])
            .pdf_url("http://arxiv.org/pdf/2301.12345v1");

        assert_eq!(paper.arxiv_id, "2301.12345v1");
        assert_eq!(paper.authors_display(), "A. One, B. Two");
        assert_eq!(paper.pdf_url, "http://arxiv.org/pdf/2301.12345v1");
    }

    #[test]
    fn test_paper_defaults() {
        let paper = PaperRecord::new("2301.12345", "Title", "Abstract", "2023-01-15T10:00:00Z");
        assert!(paper.authors.is_empty());
        assert_eq!(paper.authors_display(), "");
        assert_eq!(paper.pdf_url, "");
    }

    #[test]
    fn test_structural_equality() {
        let a = PaperRecord::new("1", "T", "S", "P");
        let b = PaperRecord::new("1", "T", "S", "P");
        assert_eq!(a, b);
        assert_ne!(a, b.pdf_url("x"));
    }
}
