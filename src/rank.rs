//! Ranking pipeline: extract fingerprints, compare, sort, truncate.

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::{RankError, Result};
use crate::histogram::{self, Sampling};
use crate::vector::{distance, normalize};

/// One ranked candidate. The score is the Euclidean distance between the
/// normalized fingerprints; 0 means an identical fingerprint.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub filename: String,
    pub score: f64,
}

/// Options threaded through one ranking run.
#[derive(Debug, Clone, Copy)]
pub struct RankOptions {
    /// Maximum number of entries in the result.
    pub limit: usize,
    /// Histogram extraction mode.
    pub sampling: Sampling,
}

/// Unit-length color fingerprint of the image at `path`.
fn fingerprint(path: &Path, sampling: Sampling) -> Result<Vec<f64>> {
    let hist = histogram::histogram_from_path(path, sampling)?;
    if hist.is_empty() {
        return Err(RankError::EmptyHistogram { path: path.to_path_buf() });
    }
    normalize(&hist)
}

/// Rank `candidates` by fingerprint distance to `target`, ascending, and
/// truncate to the configured limit.
///
/// The first extraction or comparison failure aborts the whole run; no
/// partial ranking is returned. Score ties sort by filename so output is
/// stable across runs.
pub fn rank(target: &Path, candidates: &[PathBuf], opts: &RankOptions) -> Result<Vec<RankedEntry>> {
    info!("loading target {}", target.display());
    let target_fp = fingerprint(target, opts.sampling)?;

    let mut entries = Vec::with_capacity(candidates.len());
    for path in candidates {
        info!("loading {}", path.display());
        let fp = fingerprint(path, opts.sampling)?;
        let score = distance(&target_fp, &fp)?;
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.display().to_string(),
        };
        entries.push(RankedEntry { filename, score });
    }

    entries.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.filename.cmp(&b.filename)));
    entries.truncate(opts.limit);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    use super::*;

    // PNG fixtures keep pixel values exact; the binary-level tests cover JPEG.
    fn save(dir: &Path, name: &str, color: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(200, 200, Rgb(color)).save(&path).unwrap();
        path
    }

    fn opts() -> RankOptions {
        RankOptions { limit: 500, sampling: Sampling::Block }
    }

    #[test]
    fn identical_fingerprint_scores_zero_and_ranks_first() {
        let dir = TempDir::new().unwrap();
        let target = save(dir.path(), "target.png", [255, 0, 0]);
        let copy = dir.path().join("copy.png");
        fs::copy(&target, &copy).unwrap();
        let candidates = vec![save(dir.path(), "green.png", [0, 255, 0]), copy];

        let result = rank(&target, &candidates, &opts()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].filename, "copy.png");
        assert_eq!(result[0].score, 0.0);
        assert_eq!(result[1].filename, "green.png");
        assert!((result[1].score - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn equal_scores_fall_back_to_filename_order() {
        let dir = TempDir::new().unwrap();
        let target = save(dir.path(), "target.png", [255, 0, 0]);
        // both orthogonal to the target, so both score sqrt(2)
        let candidates = vec![
            save(dir.path(), "b_green.png", [0, 255, 0]),
            save(dir.path(), "a_blue.png", [0, 0, 255]),
        ];

        let result = rank(&target, &candidates, &opts()).unwrap();
        let names: Vec<_> = result.iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(names, ["a_blue.png", "b_green.png"]);
    }

    #[test]
    fn result_is_truncated_to_the_limit() {
        let dir = TempDir::new().unwrap();
        let target = save(dir.path(), "target.png", [255, 0, 0]);
        let candidates: Vec<_> =
            (0..5).map(|i| save(dir.path(), &format!("c{i}.png"), [0, 255, 0])).collect();

        let opts = RankOptions { limit: 2, ..opts() };
        let result = rank(&target, &candidates, &opts).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn candidate_open_failure_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let target = save(dir.path(), "target.png", [255, 0, 0]);
        let candidates = vec![dir.path().join("missing.png")];

        let err = rank(&target, &candidates, &opts()).unwrap_err();
        assert!(matches!(err, RankError::Open { .. }));
    }

    #[test]
    fn undersized_target_is_rejected() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("tiny.png");
        RgbImage::from_pixel(100, 100, Rgb([255, 0, 0])).save(&target).unwrap();

        let err = rank(&target, &[], &opts()).unwrap_err();
        assert!(matches!(err, RankError::EmptyHistogram { .. }));
    }
}
