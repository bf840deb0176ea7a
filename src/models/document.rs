// file: src/models/document.rs
// description: extracted document model with per-page text
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single physical page of a PDF. Page numbers are 1-indexed and form a
/// contiguous ascending sequence within a [`Document`]. `text` is empty when
/// the page has no extractable text layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub text: String,
}

impl Page {
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// The result of extracting a PDF. Immutable once produced; safe to share
/// across concurrent query calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
    pub page_count: u32,
    pub title: Option<String>,
    pub content_hash: String,
    pub extracted_at: u64,
}

impl Document {
    pub fn new(pages: Vec<Page>, title: Option<String>) -> Self {
        let content_hash = Self::compute_hash(&pages);
        let page_count = pages.len() as u32;
        let extracted_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            pages,
            page_count,
            title,
            content_hash,
            extracted_at,
        }
    }

    /// Build a document from raw page texts, numbering pages 1..=N.
    pub fn from_page_texts<I, S>(texts: I, title: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| Page {
                number: idx as u32 + 1,
                text: text.into(),
            })
            .collect();
        Self::new(pages, title)
    }

    fn compute_hash(pages: &[Page]) -> String {
        let mut hasher = Sha256::new();
        for page in pages {
            hasher.update(page.text.as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }

    /// True when at least one page carries searchable text.
    pub fn has_text(&self) -> bool {
        self.pages.iter().any(Page::has_text)
    }

    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }
}
