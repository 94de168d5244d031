//! Error types shared across the ranking pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;

/// Failures surfaced by histogram extraction and comparison. Every variant
/// is fatal to the run; only the binary turns one into an exit code.
#[derive(Debug, Error)]
pub enum RankError {
    /// The path does not resolve to a readable file.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a decodable image.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image produced no classifiable samples, e.g. it is smaller than
    /// the sampling grid in one axis.
    #[error("{}: no color samples (image smaller than the sampling grid?)", path.display())]
    EmptyHistogram { path: PathBuf },

    /// An all-zero vector has no direction to normalize.
    #[error("cannot normalize a zero vector")]
    ZeroNorm,

    /// Fingerprint vectors of different lengths cannot be compared.
    #[error("vector dimensions do not match: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}
