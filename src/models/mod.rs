//! Core data models for arXiv papers and search requests.

mod paper;
mod search;

pub use paper::PaperRecord;
pub use search::{SearchQuery, SortBy};
