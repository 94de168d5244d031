pub mod config;
pub mod error;
pub mod histogram;
pub mod rank;
pub mod vector;

pub use config::Opts;
pub use error::{RankError, Result};
pub use histogram::{Histogram, PARTITION, Sampling};
pub use rank::{RankOptions, RankedEntry, rank};
