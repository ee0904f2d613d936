//! Atom feed model for arXiv query responses.
//!
//! The feed is walked with a streaming [`Reader`] and every `<entry>` is
//! deserialized from its own slice of the document, so a malformed entry
//! (duplicate `<title>`, markup inside `<summary>`, a missing element) only
//! fails itself. Within an entry only the elements the client reads are
//! modelled; `arxiv:` extensions and categories are skipped by serde.

use quick_xml::de::from_str;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::models::PaperRecord;
use crate::sources::SourceError;
use crate::utils::normalize_whitespace;

/// `title` attribute arXiv puts on the PDF variant of an entry's links
const PDF_LINK_TITLE: &str = "pdf";

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtomEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
    #[serde(rename = "author")]
    pub authors: Vec<AtomAuthor>,
    #[serde(rename = "link")]
    pub links: Vec<AtomLink>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtomAuthor {
    pub name: Option<String>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AtomLink {
    #[serde(rename = "@href")]
    pub href: Option<String>,
    #[serde(rename = "@title")]
    pub title: Option<String>,
}

/// Split a feed into its entries, in document order.
///
/// The outer `Result` fails only when the document itself is not a
/// well-formed `<feed>`; each inner `Result` is the outcome for one entry.
pub fn parse_entries(xml: &str) -> Result<Vec<Result<AtomEntry, SourceError>>, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut seen_feed = false;

    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(tag) if depth == 1 && tag.local_name().as_ref() == b"entry" => {
                let end = tag.to_end().into_owned();
                reader.read_to_end(end.name())?;
                let stop = reader.buffer_position() as usize;
                entries.push(from_str::<AtomEntry>(&xml[start..stop]).map_err(SourceError::from));
            }
            Event::Start(tag) => {
                if depth == 0 {
                    check_root(tag.local_name().as_ref())?;
                    seen_feed = true;
                }
                depth += 1;
            }
            Event::Empty(tag) if depth == 0 => {
                check_root(tag.local_name().as_ref())?;
                seen_feed = true;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_feed {
        return Err(SourceError::Parse("document has no <feed> element".to_string()));
    }
    Ok(entries)
}

fn check_root(name: &[u8]) -> Result<(), SourceError> {
    if name == b"feed" {
        Ok(())
    } else {
        Err(SourceError::Parse(format!(
            "expected <feed> root, found <{}>",
            String::from_utf8_lossy(name)
        )))
    }
}

impl AtomEntry {
    /// Convert into a [`PaperRecord`], failing if id, title, summary or
    /// published date is missing or blank.
    pub fn into_record(self) -> Result<PaperRecord, SourceError> {
        let raw_id = required(self.id, "id")?;
        let arxiv_id = arxiv_id_from_url(&raw_id);
        if arxiv_id.is_empty() {
            return Err(SourceError::Parse(format!(
                "entry id '{}' has no trailing identifier",
                raw_id
            )));
        }

        let title = normalize_whitespace(&required(self.title, "title")?);
        let summary = normalize_whitespace(&required(self.summary, "summary")?);
        let published = required(self.published, "published")?;

        let authors = self
            .authors
            .into_iter()
            .filter_map(|author| author.name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        let pdf_url = self
            .links
            .into_iter()
            .find(|link| link.title.as_deref() == Some(PDF_LINK_TITLE))
            .and_then(|link| link.href)
            .unwrap_or_default();

        Ok(PaperRecord::new(arxiv_id, title, summary, published)
            .authors(authors)
            .pdf_url(pdf_url))
    }
}

fn required(value: Option<String>, element: &str) -> Result<String, SourceError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| SourceError::Parse(format!("entry is missing <{}>", element)))
}

/// Extract the arXiv identifier from an entry's `<id>` URL.
///
/// Everything after `/abs/` is kept so legacy ids keep their archive prefix
/// (`http://arxiv.org/abs/hep-ex/0307015v1` gives `hep-ex/0307015v1`).
/// Without an `/abs/` segment the text after the last `/` is used.
pub fn arxiv_id_from_url(raw: &str) -> String {
    let raw = raw.trim();
    match raw.rfind("/abs/") {
        Some(pos) => raw[pos + "/abs/".len()..].to_string(),
        None => raw.rsplit('/').next().unwrap_or(raw).to_string(),
    }
}
