// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pdf_query::{
    Config, Document, JsonExporter, OperationTimer, PdfExtractor, QueryEngine, Validator,
    utils::logging,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pdf_query")]
#[command(version = "0.1.0")]
#[command(about = "Extract PDF text per page and answer questions with page citations", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract per-page text from a PDF and export it as a Document JSON
    Extract {
        /// Path to the PDF file
        file: PathBuf,

        #[arg(short, long, default_value = "./exports")]
        output: PathBuf,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Answer a question against a PDF (or a previously extracted Document JSON)
    Ask {
        /// Path to the PDF file or exported Document JSON
        file: PathBuf,

        /// Question to answer
        query: String,

        /// Treat the input file as an exported Document JSON
        #[arg(long)]
        from_json: bool,

        /// Print the answer as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show page count, title and per-page statistics for a PDF
    Info {
        /// Path to the PDF file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());
    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Extract {
            file,
            output,
            pretty,
        } => cmd_extract(&config, &file, output, pretty),
        Commands::Ask {
            file,
            query,
            from_json,
            json,
        } => cmd_ask(&config, &file, &query, from_json, json),
        Commands::Info { file } => cmd_info(&config, &file),
    }
}

fn load_document(config: &Config, file: &Path, from_json: bool) -> Result<Document> {
    Validator::validate_file_path(file)?;
    let bytes = std::fs::read(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    if from_json {
        let document: Document =
            serde_json::from_slice(&bytes).context("Failed to parse Document JSON")?;
        return Ok(document);
    }

    if Validator::validate_pdf_extension(file).is_err() {
        warn!("{} does not have a .pdf extension", file.display());
    }

    let timer = OperationTimer::new("extract");
    let extractor = PdfExtractor::new(config.extraction.clone());
    let document = extractor
        .extract(&bytes)
        .with_context(|| format!("Failed to extract {}", file.display()))?;
    timer.finish_with_count(document.page_count as usize, "pages");

    Ok(document)
}

fn cmd_extract(config: &Config, file: &Path, output: PathBuf, pretty: bool) -> Result<()> {
    let document = load_document(config, file, false)?;

    info!(
        "Extracted {} pages ({} chars)",
        document.page_count,
        document.total_chars()
    );
    if let Some(title) = &document.title {
        info!("Title: {}", title);
    }

    let exporter = JsonExporter::new(output)?;
    let manifest = exporter.export_document(&document, pretty)?;

    println!(
        "{}",
        logging::format_success(&format!(
            "Exported {} pages to {}",
            manifest.page_count, manifest.file
        ))
    );

    Ok(())
}

fn cmd_ask(config: &Config, file: &Path, query: &str, from_json: bool, json: bool) -> Result<()> {
    let document = load_document(config, file, from_json)?;

    let engine = QueryEngine::new(&config.engine);
    let timer = OperationTimer::new("answer");
    let answer = engine.answer(&document, query)?;
    timer.finish();

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if json {
        let body = serde_json::json!({
            "success": true,
            "answer": answer,
            "filename": filename,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if answer.is_no_match() {
        println!(
            "{}",
            logging::format_error("No passage shares any terms with the query")
        );
    }
    println!("{}", logging::format_field("Page", &answer.page.to_string()));
    println!(
        "{}",
        logging::format_field("Confidence", &format!("{:.0}%", answer.confidence * 100.0))
    );
    println!("\n{}", answer.text);

    Ok(())
}

fn cmd_info(config: &Config, file: &Path) -> Result<()> {
    let document = load_document(config, file, false)?;

    println!(
        "{}",
        logging::format_field("Pages", &document.page_count.to_string())
    );
    println!(
        "{}",
        logging::format_field("Title", document.title.as_deref().unwrap_or("(none)"))
    );
    println!(
        "{}",
        logging::format_field("Content hash", &document.content_hash[..12])
    );

    for page in &document.pages {
        let status = if page.has_text() {
            format!("{} chars", page.text.chars().count())
        } else {
            "no text layer".to_string()
        };
        println!("  page {:>3}: {}", page.number, status);
    }

    Ok(())
}
