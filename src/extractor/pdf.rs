// file: src/extractor/pdf.rs
// description: in-memory pdf text extraction with lopdf
// reference: https://docs.rs/lopdf

use crate::config::ExtractionConfig;
use crate::error::{QueryError, Result};
use crate::models::{Document, Page};
use lopdf::Object;
use tracing::{debug, warn};

pub struct PdfExtractor {
    config: ExtractionConfig,
}

impl PdfExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract per-page text and metadata from raw PDF bytes.
    ///
    /// Pages without a readable text layer (scanned images, broken content
    /// streams) yield an empty string; only a malformed document, a zero-page
    /// document, or one beyond the configured ceilings is an error.
    pub fn extract(&self, bytes: &[u8]) -> Result<Document> {
        if bytes.is_empty() {
            return Err(QueryError::Extraction("input is empty".to_string()));
        }

        let max_bytes = (self.config.max_file_size_mb as u64) * 1_048_576;
        if max_bytes > 0 && bytes.len() as u64 > max_bytes {
            return Err(QueryError::Extraction(format!(
                "input too large: {} bytes (limit {} MB)",
                bytes.len(),
                self.config.max_file_size_mb
            )));
        }

        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| QueryError::Extraction(format!("not a valid PDF: {}", e)))?;

        let page_map = doc.get_pages();
        if page_map.is_empty() {
            return Err(QueryError::Extraction("PDF has no pages".to_string()));
        }
        if page_map.len() > self.config.max_pages {
            return Err(QueryError::Extraction(format!(
                "PDF has {} pages (limit {})",
                page_map.len(),
                self.config.max_pages
            )));
        }

        let mut source_numbers: Vec<u32> = page_map.keys().copied().collect();
        source_numbers.sort_unstable();

        let mut pages = Vec::with_capacity(source_numbers.len());
        for (idx, source_number) in source_numbers.iter().enumerate() {
            let text = match doc.extract_text(&[*source_number]) {
                Ok(raw) => clean_page_text(&raw),
                Err(e) => {
                    warn!(
                        "No extractable text on page {}: {} (treating as empty)",
                        source_number, e
                    );
                    String::new()
                }
            };
            pages.push(Page {
                number: idx as u32 + 1,
                text,
            });
        }

        let title = read_title(&doc);
        debug!(
            "Extracted {} pages, title: {:?}",
            pages.len(),
            title.as_deref()
        );

        Ok(Document::new(pages, title))
    }
}

/// Drop control characters the content stream decoder leaks through,
/// keeping line structure for downstream sentence splitting.
fn clean_page_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c == '\n' || c == '\t' || !c.is_control() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.trim_end().to_string()
}

/// Read the document title from the trailer Info dictionary, if present.
fn read_title(doc: &lopdf::Document) -> Option<String> {
    let info = doc.trailer.get(b"Info").ok()?;
    let info_id = info.as_reference().ok()?;
    let dict = doc.get_object(info_id).ok()?.as_dict().ok()?;

    match dict.get(b"Title") {
        Ok(Object::String(bytes, _)) => decode_pdf_string(bytes),
        _ => None,
    }
}

/// Decode a PDF string: UTF-16BE with BOM, then UTF-8, then Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16(&utf16)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
        return None;
    }

    let latin1: String = bytes.iter().map(|&b| b as char).collect();
    let trimmed = latin1.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
