// file: src/engine/tokenizer.rs
// description: lowercase term tokenization and stopword filtering
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"[\p{L}\p{N}]+").expect("TOKEN regex is valid");

    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "can", "did",
        "do", "does", "for", "from", "had", "has", "have", "how", "if", "in",
        "into", "is", "it", "its", "not", "of", "on", "or", "that", "the",
        "their", "there", "these", "this", "to", "was", "were", "what", "when",
        "where", "which", "who", "will", "with", "you", "your",
    ]
    .into_iter()
    .collect();
}

/// Lowercase alphanumeric tokens in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Distinct query terms in first-seen order, with stopwords removed. Falls
/// back to the unfiltered token set when every token is a stopword, so a
/// query like "the who" still has something to match on.
pub fn query_terms(query: &str) -> Vec<String> {
    let tokens = tokenize(query);

    let mut seen = HashSet::new();
    let mut filtered: Vec<String> = tokens
        .iter()
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .filter(|t| seen.insert((*t).clone()))
        .cloned()
        .collect();

    if filtered.is_empty() {
        let mut seen = HashSet::new();
        filtered = tokens.into_iter().filter(|t| seen.insert(t.clone())).collect();
    }

    filtered
}

/// Token -> occurrence count for a body of text.
pub fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("The Capital, of FRANCE!"),
            vec!["the", "capital", "of", "france"]
        );
    }

    #[test]
    fn test_query_terms_drop_stopwords() {
        assert_eq!(
            query_terms("What is the capital of France?"),
            vec!["capital", "france"]
        );
    }

    #[test]
    fn test_query_terms_deduplicate() {
        assert_eq!(query_terms("population population Paris"), vec!["population", "paris"]);
    }

    #[test]
    fn test_query_terms_stopword_only_fallback() {
        assert_eq!(query_terms("the who"), vec!["the", "who"]);
    }

    #[test]
    fn test_term_counts() {
        let counts = term_counts("paris paris population");
        assert_eq!(counts.get("paris"), Some(&2));
        assert_eq!(counts.get("population"), Some(&1));
        assert_eq!(counts.get("france"), None);
    }
}
