use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use walkdir::WalkDir;

use imrank::config::{Opts, OutputFormat};
use imrank::rank::{RankOptions, RankedEntry, rank};

fn main() {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(err) => {
            // usage errors exit 1 (clap's default is 2); help and version exit 0
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let default_level = if opts.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(err) = run(&opts) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> Result<()> {
    let target = opts.directory.join(&opts.target);
    let candidates = jpeg_candidates(&opts.directory, &opts.target)?;

    let rank_opts = RankOptions { limit: opts.count, sampling: opts.sampling };
    let result = rank(&target, &candidates, &rank_opts)?;
    print_result(&result, opts)
}

/// List the `.jpg` files of `dir` (case-sensitive suffix, non-recursive),
/// excluding the target's own filename, sorted by name.
fn jpeg_candidates(dir: &Path, target: &str) -> Result<Vec<PathBuf>> {
    let target_name = match Path::new(target).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => target.to_string(),
    };

    let mut files = vec![];
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to read directory {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".jpg") && name != target_name {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn print_result(result: &[RankedEntry], opts: &Opts) -> Result<()> {
    match opts.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?)
        }
        OutputFormat::Table => {
            for (i, entry) in result.iter().enumerate() {
                if opts.verbose {
                    println!("{:2}: {:.5}\t{}", i + 1, entry.score, entry.filename);
                } else {
                    println!("{}", entry.filename);
                }
            }
        }
    }
    Ok(())
}
