// file: src/models/chunk.rs
// description: sub-page text unit used for relevance scoring
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A contiguous substring of a page's text. Chunks are derived on demand and
/// have no identity beyond (page, start..end); `text` always equals
/// `page.text[start..end]` for the owning page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Owning page number, 1-indexed
    pub page: u32,
    /// Byte offset of the chunk start within the page text
    pub start: usize,
    /// Byte offset one past the chunk end within the page text
    pub end: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(page: u32, start: usize, end: usize, text: String) -> Self {
        Self {
            page,
            start,
            end,
            text,
        }
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}
