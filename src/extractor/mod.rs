// file: src/extractor/mod.rs
// description: pdf extraction module exports
// reference: internal module structure

pub mod pdf;

pub use pdf::PdfExtractor;
