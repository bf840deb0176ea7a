// file: src/engine/scorer.rs
// description: pure term-overlap relevance scoring
// reference: lexical retrieval over chunked text

use crate::engine::tokenizer::{query_terms, term_counts};

/// Frequency contribution saturates at this many occurrences of a term.
const TF_SATURATION: usize = 4;

/// Scores chunks against a fixed query. A pure function of (query, chunk
/// text): each distinct query term found in the chunk contributes
/// `(0.9 + 0.1 * min(tf, 4) / 4) / |terms|`, so the score is bounded by 1.0,
/// strictly grows when another query term is matched, and is exactly 0.0
/// when the chunk shares no terms with the query.
pub struct ChunkScorer {
    terms: Vec<String>,
}

impl ChunkScorer {
    pub fn new(query: &str) -> Self {
        Self {
            terms: query_terms(query),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn score(&self, chunk_text: &str) -> f64 {
        if self.terms.is_empty() {
            return 0.0;
        }

        let counts = term_counts(chunk_text);
        let mut total = 0.0;
        for term in &self.terms {
            if let Some(&tf) = counts.get(term) {
                let saturated = tf.min(TF_SATURATION) as f64 / TF_SATURATION as f64;
                total += 0.9 + 0.1 * saturated;
            }
        }

        total / self.terms.len() as f64
    }
}
