//! docmeta - generate structured metadata for documents.
//!
//! # Usage
//!
//! ```text
//! docmeta file report.pdf --output report.json
//! docmeta directory ./inbox --recursive --jobs 4
//! docmeta files a.txt b.docx
//! docmeta formats
//! ```
//!
//! `RUST_LOG` overrides `--log-level` when set. Configuration is read from
//! `--config` when given, otherwise from `DOCMETA_*` environment variables
//! (a `.env` file is loaded first).

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docmeta_core::{DocumentProcessor, GeneratorConfig, MetadataRecord};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "docmeta")]
#[command(about = "Generate structured metadata for PDF, DOCX, text and image documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Print a summary of every processed document
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (.toml, .json or .yaml)
    #[arg(short, long, global = true, env = "DOCMETA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for metadata files and batch summaries
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Documents processed in parallel
    #[arg(short, long, global = true)]
    jobs: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single document
    File {
        path: PathBuf,

        /// Metadata file to write instead of <output-dir>/<stem>_metadata.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Process every supported document in a directory
    Directory {
        path: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
    /// Process a list of documents
    Files {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// List supported file formats
    Formats,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::from_env(),
    };

    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(jobs) = cli.jobs {
        config = config.with_concurrency(jobs);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let config = load_config(&cli)?;
    debug!(output_dir = %config.output_dir.display(), concurrency = config.concurrency, "Configuration loaded");
    let processor = DocumentProcessor::new(config);

    let records: Vec<MetadataRecord> = match &cli.command {
        Commands::Formats => {
            report::print_formats(processor.supported_formats());
            return Ok(ExitCode::SUCCESS);
        }
        Commands::File { path, output } => {
            vec![processor.process_single_document(path, output.as_deref())]
        }
        Commands::Directory { path, recursive } => processor
            .process_directory(path, *recursive)
            .await
            .with_context(|| format!("Failed to process directory {}", path.display()))?,
        Commands::Files { paths } => processor.process_file_list(paths).await,
    };

    if cli.verbose {
        for record in &records {
            report::print_record(record);
        }
    }

    let stats = processor.stats();
    report::print_stats(&stats);
    info!(
        total = stats.total_files,
        successful = stats.successful,
        failed = stats.failed,
        output_dir = %processor.config().output_dir.display(),
        "Processing finished"
    );

    Ok(if stats.any_successful() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
