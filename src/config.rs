use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::histogram::Sampling;

/// Rank the JPEG images of a directory by color-histogram similarity to a
/// target image.
#[derive(Parser, Debug, Clone)]
#[command(name = "imrank", version)]
pub struct Opts {
    /// Target image, relative to the search directory
    pub target: String,
    /// Directory to search for candidate images
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
    /// Print rank index and similarity score for each result
    #[arg(short, long)]
    pub verbose: bool,
    /// Maximum number of results
    #[arg(short, long, value_name = "COUNT", default_value_t = 500)]
    pub count: usize,
    /// Histogram extraction mode
    #[arg(long, value_enum, value_name = "MODE", default_value = "block")]
    pub sampling: Sampling,
    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "table")]
    pub output_format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}
