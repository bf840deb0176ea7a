// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{QueryError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Input ceiling in megabytes, 0 disables the check
    pub max_file_size_mb: usize,
    /// Page ceiling, documents beyond it are rejected
    pub max_pages: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Target chunk length in characters
    pub chunk_target_chars: usize,
    /// Chunk length ceiling in characters
    pub chunk_max_chars: usize,
    /// Sentences shared between consecutive chunks
    pub chunk_overlap_sentences: usize,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PDF_QUERY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| QueryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| QueryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            extraction: ExtractionConfig {
                max_file_size_mb: 25,
                max_pages: 500,
            },
            engine: EngineConfig {
                chunk_target_chars: 400,
                chunk_max_chars: 800,
                chunk_overlap_sentences: 1,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.max_pages == 0 {
            return Err(QueryError::Config(
                "max_pages must be greater than 0".to_string(),
            ));
        }

        if self.engine.chunk_target_chars == 0 {
            return Err(QueryError::Config(
                "chunk_target_chars must be greater than 0".to_string(),
            ));
        }

        if self.engine.chunk_max_chars < self.engine.chunk_target_chars {
            return Err(QueryError::Config(
                "chunk_max_chars must be at least chunk_target_chars".to_string(),
            ));
        }

        Ok(())
    }
}
