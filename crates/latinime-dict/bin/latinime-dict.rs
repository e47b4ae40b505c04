//! Dictionary inspection tool.
//!
//! Thin wrapper around the latinime-dict library that maps a dictionary
//! file and reports its format, root offset and header contents.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use latinime_dict::{DictionaryHeader, FormatVersion, HeaderFlags, MappedDictionary};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "latinime-dict",
    about = "Inspect binary predictive-text dictionaries",
    version
)]
struct Cli {
    /// Log filter, overrides RUST_LOG
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show format version, root offset and header attributes
    Info {
        /// Dictionary file
        path: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct Summary {
    path: PathBuf,
    size: usize,
    format: FormatVersion,
    root_offset: usize,
    root_position: usize,
    flags: Option<HeaderFlags>,
    attributes: BTreeMap<String, String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level).context("invalid log filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { path, json } => info(path, json),
    }
}

fn info(path: PathBuf, json: bool) -> Result<()> {
    let dictionary = MappedDictionary::open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let view = dictionary
        .view()
        .with_context(|| format!("failed to read header of {}", path.display()))?;

    let header = match view.format() {
        FormatVersion::Unknown => None,
        FormatVersion::V1 | FormatVersion::V2 => Some(view.header()?),
    };

    let summary = Summary {
        path: path.clone(),
        size: dictionary.len(),
        format: view.format(),
        root_offset: view.root_offset(),
        root_position: view.root_position(),
        flags: header.as_ref().map(DictionaryHeader::flags),
        attributes: header
            .map(|header| header.attributes().clone())
            .unwrap_or_default(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&summary);
    }

    if summary.format == FormatVersion::Unknown {
        bail!("{}: dictionary unavailable or corrupt", path.display());
    }
    Ok(())
}

fn print_text(summary: &Summary) {
    println!("Path:          {}", summary.path.display());
    println!("Size:          {} bytes", summary.size);
    println!("Format:        {}", summary.format);
    println!("Root offset:   {}", summary.root_offset);
    println!("Root position: {}", summary.root_position);
    if let Some(flags) = summary.flags {
        println!("Flags:         {flags}");
    }
    if !summary.attributes.is_empty() {
        println!("Attributes:");
        for (key, value) in &summary.attributes {
            println!("  {key} = {value}");
        }
    }
}
