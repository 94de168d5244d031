//! Coarse color fingerprinting: dominant-channel classification and
//! histogram extraction.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use image::{ImageReader, Rgba, RgbaImage};
use log::debug;

use crate::error::{RankError, Result};

/// Grid resolution of the partitioned sampler. An image is divided into
/// `PARTITION * PARTITION` blocks, one classification per block.
pub const PARTITION: u32 = 200;

/// Dominant-channel bucket of a color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Red,
    Green,
    Blue,
}

/// Classify an accumulated `(r, g, b)` magnitude triple by its dominant
/// channel. Ties resolve toward Blue in both branches; ranking output
/// depends on this exact tie-break.
pub fn classify(r: u64, g: u64, b: u64) -> Bucket {
    if r > g {
        if r > b { Bucket::Red } else { Bucket::Blue }
    } else if g > b {
        Bucket::Green
    } else {
        Bucket::Blue
    }
}

/// Fixed three-bucket color histogram. Counts only ever increment; the
/// total equals the number of classified samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 3],
}

impl Histogram {
    /// Classify one sample and increment its bucket.
    pub fn record(&mut self, r: u64, g: u64, b: u64) {
        self.counts[classify(r, g, b) as usize] += 1;
    }

    pub fn counts(&self) -> [u64; 3] {
        self.counts
    }

    /// Number of classified samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Raw counts as a real-valued vector.
    pub fn to_vector(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.counts;
        write!(f, "R: {r} G: {g} B: {b} (total {})", self.total())
    }
}

/// Histogram extraction mode.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sampling {
    /// One classification per grid block, over the block's summed channels.
    #[default]
    Block,
    /// One classification per pixel.
    Pixel,
}

/// Converted channel triple of one pixel. The decoder yields straight
/// alpha, so the 0-255 triple is the raw channels; a fully transparent
/// pixel carries no color information and yields no sample.
fn converted(px: &Rgba<u8>) -> Option<(u64, u64, u64)> {
    let [r, g, b, a] = px.0;
    (a != 0).then_some((r as u64, g as u64, b as u64))
}

/// Build a histogram over a `PARTITION`-square grid, classifying each
/// block's summed channels once. Remainder pixels past the last full block
/// at the right and bottom edges are not sampled. An image smaller than the
/// grid in either axis has no full blocks and yields an empty histogram.
pub fn block_histogram(img: &RgbaImage) -> Histogram {
    let mut hist = Histogram::default();
    let bw = img.width() / PARTITION;
    let bh = img.height() / PARTITION;
    if bw == 0 || bh == 0 {
        return hist;
    }
    for by in 0..PARTITION {
        for bx in 0..PARTITION {
            let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
            for y in by * bh..(by + 1) * bh {
                for x in bx * bw..(bx + 1) * bw {
                    if let Some((pr, pg, pb)) = converted(img.get_pixel(x, y)) {
                        r += pr;
                        g += pg;
                        b += pb;
                    }
                }
            }
            hist.record(r, g, b);
        }
    }
    hist
}

/// Build a histogram by classifying every pixel individually.
pub fn pixel_histogram(img: &RgbaImage) -> Histogram {
    let mut hist = Histogram::default();
    for px in img.pixels() {
        if let Some((r, g, b)) = converted(px) {
            hist.record(r, g, b);
        }
    }
    hist
}

/// Decode the image at `path` and extract its histogram. The file handle
/// lives only for the duration of the decode.
pub fn histogram_from_path(path: &Path, sampling: Sampling) -> Result<Histogram> {
    let reader = ImageReader::open(path)
        .map_err(|source| RankError::Open { path: path.to_path_buf(), source })?;
    let img = reader
        .decode()
        .map_err(|source| RankError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();
    let hist = match sampling {
        Sampling::Block => block_histogram(&img),
        Sampling::Pixel => pixel_histogram(&img),
    };
    debug!("{}: {hist}", path.display());
    Ok(hist)
}
