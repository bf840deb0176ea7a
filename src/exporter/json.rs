// file: src/exporter/json.rs
// description: json export utilities for extracted documents and answers

use crate::error::Result;
use crate::models::{Answer, Document};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub content_hash: String,
    pub page_count: u32,
    pub file: String,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Write a document as JSON, named by the leading bytes of its content
    /// hash. Returns the manifest describing the export.
    pub fn export_document(&self, document: &Document, pretty: bool) -> Result<ExportManifest> {
        let file_name = format!("document-{}.json", &document.content_hash[..12]);
        let path = self.output_dir.join(&file_name);

        let body = if pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        fs::write(&path, body)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            content_hash: document.content_hash.clone(),
            page_count: document.page_count,
            file: file_name,
        };

        info!(
            "Exported document ({} pages) to {}",
            document.page_count,
            path.display()
        );
        Ok(manifest)
    }

    /// Write an answer alongside the query it resolves, in the boundary
    /// shape callers exchange.
    pub fn export_answer(
        &self,
        answer: &Answer,
        query: &str,
        filename: &str,
        pretty: bool,
    ) -> Result<PathBuf> {
        let body = serde_json::json!({
            "success": true,
            "query": query,
            "answer": answer,
            "filename": filename,
        });

        let path = self.output_dir.join("answer.json");
        let rendered = if pretty {
            serde_json::to_string_pretty(&body)?
        } else {
            serde_json::to_string(&body)?
        };
        fs::write(&path, rendered)?;

        info!("Exported answer to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("exports"));
        assert!(exporter.is_ok());
    }

    #[test]
    fn test_export_document_round_trip() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let doc = Document::from_page_texts(["page one text"], Some("Title".to_string()));

        let manifest = exporter.export_document(&doc, true).unwrap();
        assert_eq!(manifest.page_count, 1);

        let written = std::fs::read_to_string(dir.path().join(&manifest.file)).unwrap();
        let back: Document = serde_json::from_str(&written).unwrap();
        assert_eq!(back.content_hash, doc.content_hash);
        assert_eq!(back.pages[0].text, "page one text");
    }

    #[test]
    fn test_export_answer_shape() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let answer = Answer::new("Paris".to_string(), 1, 0.9);

        let path = exporter
            .export_answer(&answer, "capital?", "report.pdf", false)
            .unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["filename"], "report.pdf");
        assert_eq!(value["answer"]["page"], 1);
    }
}
