//! Plain-text rendering for the CLI.
//!
//! Everything is written to a caller-supplied [`Write`] so the binary can
//! target stdout while tests capture into a `Vec<u8>`.

use std::io::{self, Write};

use crate::models::{PaperRecord, SearchQuery};
use crate::utils::truncate_with_ellipsis;

/// Summaries in search listings are cut to this many characters
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Line printed before a search request is sent.
pub fn write_search_header<W: Write>(out: &mut W, query: &SearchQuery) -> io::Result<()> {
    writeln!(
        out,
        "Searching arXiv for: '{}', sort_by: {}, max_results: {}",
        query.query, query.sort_by, query.max_results
    )
}

/// Numbered result blocks, or a "no papers" notice for an empty list.
pub fn write_search_results<W: Write>(out: &mut W, papers: &[PaperRecord]) -> io::Result<()> {
    if papers.is_empty() {
        return writeln!(out, "No papers found or an error occurred during the search.");
    }

    writeln!(out, "Found {} paper(s):", papers.len())?;
    for (i, paper) in papers.iter().enumerate() {
        writeln!(out, "--- Result {} ---", i + 1)?;
        write_fields(
            out,
            paper,
            &truncate_with_ellipsis(&paper.summary, SUMMARY_PREVIEW_CHARS),
        )?;
    }
    Ok(())
}

/// Line printed before a lookup request is sent.
pub fn write_lookup_header<W: Write>(out: &mut W, arxiv_id: &str) -> io::Result<()> {
    writeln!(out, "Fetching details for arXiv ID: {}", arxiv_id)
}

/// Full details of one paper with the untruncated summary, or a not-found notice.
pub fn write_paper_details<W: Write>(
    out: &mut W,
    arxiv_id: &str,
    paper: Option<&PaperRecord>,
) -> io::Result<()> {
    match paper {
        Some(paper) => {
            writeln!(out, "--- Paper Details ---")?;
            write_fields(out, paper, &paper.summary)
        }
        None => writeln!(
            out,
            "Could not retrieve details for arXiv ID '{}', or the ID is invalid.",
            arxiv_id
        ),
    }
}

fn write_fields<W: Write>(out: &mut W, paper: &PaperRecord, summary: &str) -> io::Result<()> {
    writeln!(out, "  ID: {}", paper.arxiv_id)?;
    writeln!(out, "  Title: {}", paper.title)?;
    writeln!(out, "  Authors: {}", paper.authors_display())?;
    writeln!(out, "  Published: {}", paper.published_date)?;
    writeln!(out, "  PDF: {}", paper.pdf_url)?;
    writeln!(out, "  Summary: {}", summary)
}
