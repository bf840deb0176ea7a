// file: src/engine/query.rs
// description: query answering over an extracted document
// reference: validation, chunking, scoring and passage selection

use crate::config::EngineConfig;
use crate::engine::chunker::DocumentChunker;
use crate::engine::scorer::ChunkScorer;
use crate::error::{QueryError, Result};
use crate::models::{Answer, Document};
use tracing::debug;

/// Stateless answer engine: every call re-derives chunks from the given
/// document, so repeated calls with the same inputs return identical
/// Answers and concurrent calls share nothing mutable.
pub struct QueryEngine {
    chunker: DocumentChunker,
}

impl QueryEngine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            chunker: DocumentChunker::new(config),
        }
    }

    /// Answer a query against a document with a page citation and a
    /// confidence score.
    ///
    /// Chunks are visited in (page, offset) order and a candidate only
    /// replaces the current best on a strictly higher score, which makes
    /// the tie-break lowest page first, then lowest start offset. When no
    /// chunk shares a term with the query the tie-break winner is returned
    /// with confidence 0.0 rather than an error.
    pub fn answer(&self, document: &Document, query: &str) -> Result<Answer> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::InvalidQuery(
                "query is empty after trimming".to_string(),
            ));
        }

        if !document.has_text() {
            return Err(QueryError::EmptyDocument);
        }

        let chunks = self.chunker.chunk_document(document);
        if chunks.is_empty() {
            return Err(QueryError::EmptyDocument);
        }

        let scorer = ChunkScorer::new(query);
        debug!(
            "Scoring {} chunks against {} query terms",
            chunks.len(),
            scorer.terms().len()
        );

        let mut best = &chunks[0];
        let mut best_score = scorer.score(&best.text);
        for chunk in &chunks[1..] {
            let score = scorer.score(&chunk.text);
            if score > best_score {
                best = chunk;
                best_score = score;
            }
        }

        Ok(Answer::new(
            collapse_whitespace(&best.text),
            best.page,
            best_score,
        ))
    }
}

/// Collapse runs of whitespace without rewording the quoted source text.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine() -> QueryEngine {
        QueryEngine::new(&EngineConfig {
            chunk_target_chars: 400,
            chunk_max_chars: 800,
            chunk_overlap_sentences: 1,
        })
    }

    fn france_doc() -> Document {
        Document::from_page_texts(
            [
                "The capital of France is Paris.",
                "Paris has a population of over two million.",
            ],
            None,
        )
    }

    #[test]
    fn test_empty_query_rejected() {
        let result = engine().answer(&france_doc(), "");
        assert!(matches!(result, Err(QueryError::InvalidQuery(_))));

        let result = engine().answer(&france_doc(), "   ");
        assert!(matches!(result, Err(QueryError::InvalidQuery(_))));
    }

    #[test]
    fn test_empty_document_rejected() {
        let doc = Document::from_page_texts(["", "  ", "\n\n"], None);
        let result = engine().answer(&doc, "anything");
        assert!(matches!(result, Err(QueryError::EmptyDocument)));
    }

    #[test]
    fn test_capital_question_cites_page_one() {
        let answer = engine()
            .answer(&france_doc(), "What is the capital of France?")
            .unwrap();

        assert_eq!(answer.page, 1);
        assert!(answer.text.contains("Paris"));
        assert!(answer.confidence > 0.0);
    }

    #[test]
    fn test_population_question_cites_page_two() {
        let answer = engine().answer(&france_doc(), "population of Paris").unwrap();
        assert_eq!(answer.page, 2);
    }

    #[test]
    fn test_no_match_returns_zero_confidence_answer() {
        let answer = engine()
            .answer(&france_doc(), "quantum chromodynamics lattice")
            .unwrap();

        assert_eq!(answer.confidence, 0.0);
        assert!(answer.is_no_match());
        // Tie-break winner: first chunk of the lowest page
        assert_eq!(answer.page, 1);
        assert!(!answer.text.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let doc = france_doc();
        let e = engine();
        let first = e.answer(&doc, "capital of France").unwrap();
        let second = e.answer(&doc, "capital of France").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_break_prefers_lower_page() {
        let doc = Document::from_page_texts(
            [
                "An identical sentence about gravity.",
                "An identical sentence about gravity.",
            ],
            None,
        );
        for _ in 0..5 {
            let answer = engine().answer(&doc, "gravity").unwrap();
            assert_eq!(answer.page, 1);
        }
    }

    #[test]
    fn test_tie_break_prefers_lower_offset_within_page() {
        let e = QueryEngine::new(&EngineConfig {
            chunk_target_chars: 20,
            chunk_max_chars: 40,
            chunk_overlap_sentences: 0,
        });
        let doc = Document::from_page_texts(
            ["Gravity pulls things down. Later words here. Gravity pulls things down."],
            None,
        );
        let answer = e.answer(&doc, "gravity").unwrap();
        assert_eq!(answer.page, 1);
        assert_eq!(answer.text, "Gravity pulls things down.");
    }

    #[test]
    fn test_page_and_confidence_bounds() {
        let doc = france_doc();
        let answer = engine().answer(&doc, "million").unwrap();

        assert!(answer.page >= 1 && answer.page <= doc.page_count);
        assert!((0.0..=1.0).contains(&answer.confidence));
    }

    #[test]
    fn test_answer_text_has_collapsed_whitespace() {
        let doc = Document::from_page_texts(["Spaced    out\ttext   about turbines."], None);
        let answer = engine().answer(&doc, "turbines").unwrap();
        assert_eq!(answer.text, "Spaced out text about turbines.");
    }

    #[test]
    fn test_skips_empty_pages_when_answering() {
        let doc = Document::from_page_texts(["", "The answer lives here."], None);
        let answer = engine().answer(&doc, "answer").unwrap();
        assert_eq!(answer.page, 2);
    }
}
