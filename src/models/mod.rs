// file: src/models/mod.rs
// description: data model module exports
// reference: internal module structure

pub mod answer;
pub mod chunk;
pub mod document;

pub use answer::Answer;
pub use chunk::Chunk;
pub use document::{Document, Page};
