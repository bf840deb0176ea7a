// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod engine;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod utils;

pub use config::{Config, EngineConfig, ExtractionConfig};
pub use engine::{ChunkScorer, DocumentChunker, QueryEngine};
pub use error::{QueryError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use extractor::PdfExtractor;
pub use models::{Answer, Chunk, Document, Page};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _extractor = PdfExtractor::new(config.extraction.clone());
        let _engine = QueryEngine::new(&config.engine);
    }
}
