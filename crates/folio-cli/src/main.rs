//! Command-line front end for the folio merge engine

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use folio_formats::archive::Archive;
use folio_merge::{MergeInput, NativeParser, Orchestrator};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Merge folio document archives into one composite multi-page archive",
    version,
    long_about = "A command-line tool for combining independently produced folio \
                  document archives into a single composite archive a rendering \
                  engine loads as one document, and for inspecting archive contents."
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Merge archives into one composite; argument order becomes page order
    Merge {
        /// Input archive files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path for the composite archive
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Summarize an archive's blocks and resources
    Inspect {
        /// Archive file to inspect
        archive: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .init();

    match cli.command {
        Commands::Merge { inputs, output } => merge_command(&inputs, &output),
        Commands::Inspect { archive } => inspect_command(&archive),
    }
}

fn merge_command(inputs: &[PathBuf], output: &Path) -> anyhow::Result<()> {
    let mut merge_inputs = Vec::with_capacity(inputs.len());
    for path in inputs {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        merge_inputs.push(MergeInput::new(bytes, display_name(path)));
    }

    let orchestrator = Orchestrator::new(NativeParser);
    let result = orchestrator.process(&merge_inputs)?;

    for skipped in &result.skipped {
        eprintln!("Skipped {}: {}", skipped.display_name, skipped.reason);
    }

    let bytes = result.archive.serialize()?;
    fs::write(output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({} pages, {} resources, {} bytes)",
        output.display(),
        result.pages.len(),
        result.archive.resources.len(),
        bytes.len()
    );
    for page in &result.pages {
        println!(
            "  page {}: {} (from {})",
            page.page_index, page.page_name, page.source_file
        );
    }

    Ok(())
}

fn inspect_command(path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let archive =
        Archive::parse(&bytes).with_context(|| format!("Failed to parse {}", path.display()))?;
    archive
        .validate()
        .with_context(|| format!("Archive {} is inconsistent", path.display()))?;

    let pages = archive.blocks.iter().filter(|block| block.is_page()).count();
    println!(
        "{}: {} blocks ({} pages), {} resources",
        path.display(),
        archive.blocks.len(),
        pages,
        archive.resources.len()
    );

    for block in &archive.blocks {
        let kind: String = block.kind.clone().into();
        println!(
            "  block {} [{}] parent={} children={}",
            block.id,
            kind,
            block
                .parent
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            block.children.len()
        );
    }
    for (resource, data) in &archive.resources {
        println!("  resource {} ({} bytes)", resource, data.len());
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
