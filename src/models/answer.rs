// file: src/models/answer.rs
// description: query answer model with page citation and confidence
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// The result of answering a query against a document: a quoted passage,
/// the 1-indexed page it came from, and a confidence in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub page: u32,
    pub confidence: f64,
}

impl Answer {
    pub fn new(text: String, page: u32, confidence: f64) -> Self {
        Self {
            text,
            page,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// True when no query term matched anywhere in the document.
    pub fn is_no_match(&self) -> bool {
        self.confidence == 0.0
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_text_len: usize) -> String {
        let preview: String = if self.text.chars().count() > max_text_len {
            let truncated: String = self.text.chars().take(max_text_len).collect();
            format!("{}...", truncated)
        } else {
            self.text.clone()
        };

        format!(
            "Page {} | Confidence: {:.0}%\n{}",
            self.page,
            self.confidence * 100.0,
            preview
        )
    }
}
