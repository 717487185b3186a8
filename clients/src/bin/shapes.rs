//! `oslc-shapes`: Exports the suite's OSLC resource shapes as Turtle.
//!
//! **Usage:**
//! ```
//! oslc-shapes [--shape <id>] [--out <path>]
//! ```
//!
//! Without `--out` the Turtle is written to stdout.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use oslc_vocab::serializer::turtle;
use oslc_vocab::Vocabulary;

/// Export OSLC resource shapes.
#[derive(Parser)]
#[command(name = "oslc-shapes", about = "Export OSLC resource shapes as Turtle")]
struct Args {
    /// Export only the shape with this identifier (e.g. `ChangeRequest`).
    #[arg(long)]
    shape: Option<String>,

    /// Output file.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let vocab = Vocabulary::full();

    let ttl = match &args.shape {
        Some(id) => {
            let shape = vocab
                .find_shape(id)
                .with_context(|| format!("Unknown shape: {}", id))?;
            turtle::shape_to_turtle(shape)
        }
        None => turtle::to_turtle(vocab),
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &ttl).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "OSLC vocabulary: {} domains, {} shapes",
                vocab.modules.len(),
                vocab.shape_count()
            );
            eprintln!("  Written: {}", path.display());
        }
        None => print!("{}", ttl),
    }
    Ok(())
}
