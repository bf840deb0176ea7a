// file: src/engine/chunker.rs
// description: deterministic sentence-window chunking with offset tracking
// reference: sentence segmentation over per-page text

use crate::config::EngineConfig;
use crate::models::{Chunk, Document, Page};

/// Splits page text into chunks of whole sentences: windows grow to
/// `target` chars, never past `max` chars, and consecutive windows share
/// `overlap` sentences. The rule is purely a function of the text and the
/// three limits, so re-chunking a page always yields the same sequence.
pub struct DocumentChunker {
    target: usize,
    max: usize,
    overlap: usize,
}

impl DocumentChunker {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            target: config.chunk_target_chars,
            max: config.chunk_max_chars,
            overlap: config.chunk_overlap_sentences,
        }
    }

    /// Chunk every non-empty page, in page order.
    pub fn chunk_document(&self, document: &Document) -> Vec<Chunk> {
        document
            .pages
            .iter()
            .filter(|page| page.has_text())
            .flat_map(|page| self.chunk_page(page))
            .collect()
    }

    pub fn chunk_page(&self, page: &Page) -> Vec<Chunk> {
        let text = page.text.as_str();
        let spans: Vec<(usize, usize)> = sentence_spans(text)
            .into_iter()
            .flat_map(|span| self.split_oversized_span(text, span))
            .collect();

        let mut chunks = Vec::new();
        let mut i = 0;
        while i < spans.len() {
            let mut j = i;
            let mut len = char_len(text, spans[i]);
            while j + 1 < spans.len() && len < self.target {
                let merged = char_len(text, (spans[i].0, spans[j + 1].1));
                if merged > self.max {
                    break;
                }
                j += 1;
                len = merged;
            }

            let (start, end) = (spans[i].0, spans[j].1);
            chunks.push(Chunk::new(
                page.number,
                start,
                end,
                text[start..end].to_string(),
            ));

            if j + 1 >= spans.len() {
                break;
            }
            i = ((j + 1).saturating_sub(self.overlap)).max(i + 1);
        }

        chunks
    }

    /// Split a sentence longer than `max` at word boundaries. A single word
    /// longer than `max` stays intact.
    fn split_oversized_span(&self, text: &str, span: (usize, usize)) -> Vec<(usize, usize)> {
        if char_len(text, span) <= self.max {
            return vec![span];
        }

        let (start, end) = span;
        let slice = &text[start..end];
        let mut words: Vec<(usize, usize)> = Vec::new();
        let mut word_start: Option<usize> = None;
        for (i, c) in slice.char_indices() {
            if c.is_whitespace() {
                if let Some(ws) = word_start.take() {
                    words.push((start + ws, start + i));
                }
            } else if word_start.is_none() {
                word_start = Some(i);
            }
        }
        if let Some(ws) = word_start {
            words.push((start + ws, end));
        }

        let mut out = Vec::new();
        let mut group = words[0];
        for &(ws, we) in &words[1..] {
            let candidate = char_len(text, (group.0, we));
            if candidate > self.max {
                out.push(group);
                group = (ws, we);
            } else {
                group.1 = we;
            }
        }
        out.push(group);
        out
    }
}

fn char_len(text: &str, span: (usize, usize)) -> usize {
    text[span.0..span.1].chars().count()
}

/// Byte spans of sentences: a sentence ends after `.`, `!` or `?` followed
/// by whitespace, or at a newline. Spans exclude surrounding whitespace.
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_terminator = false;

    for (i, c) in text.char_indices() {
        if c == '\n' {
            if let Some(s) = start.take() {
                push_trimmed(text, s, i, &mut spans);
            }
            prev_terminator = false;
            continue;
        }

        if prev_terminator && c.is_whitespace() {
            if let Some(s) = start.take() {
                push_trimmed(text, s, i, &mut spans);
            }
        }

        if start.is_none() && !c.is_whitespace() {
            start = Some(i);
        }
        prev_terminator = matches!(c, '.' | '!' | '?');
    }

    if let Some(s) = start {
        push_trimmed(text, s, text.len(), &mut spans);
    }

    spans
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let trimmed = text[start..end].trim_end();
    if !trimmed.is_empty() {
        spans.push((start, start + trimmed.len()));
    }
}
