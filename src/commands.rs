//! The two CLI operations, generic over any [`Source`].
//!
//! Each prints its header before the request goes out, performs exactly one
//! lookup through the source's infallible wrapper, then renders the outcome.
//! Failures have already been collapsed by the time anything is printed, so
//! the only errors returned here are I/O errors on `out`.

use std::io::{self, Write};

use crate::models::SearchQuery;
use crate::sources::Source;
use crate::ui;

/// `search <query> [--sort ..] [--max_results ..]`
pub async fn search<S, W>(source: &S, query: &SearchQuery, out: &mut W) -> io::Result<()>
where
    S: Source + ?Sized,
    W: Write,
{
    ui::write_search_header(out, query)?;
    out.flush()?;

    let papers = source.search_papers(query).await;
    ui::write_search_results(out, &papers)?;
    out.flush()
}

/// `get <arxiv_id>`
pub async fn get<S, W>(source: &S, arxiv_id: &str, out: &mut W) -> io::Result<()>
where
    S: Source + ?Sized,
    W: Write,
{
    ui::write_lookup_header(out, arxiv_id)?;
    out.flush()?;

    let paper = source.get_paper_details(arxiv_id).await;
    ui::write_paper_details(out, arxiv_id, paper.as_ref())?;
    out.flush()
}
