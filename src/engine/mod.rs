// file: src/engine/mod.rs
// description: answer engine module exports
// reference: internal module structure

pub mod chunker;
pub mod query;
pub mod scorer;
pub mod tokenizer;

pub use chunker::DocumentChunker;
pub use query::QueryEngine;
pub use scorer::ChunkScorer;
