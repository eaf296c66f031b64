use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write `df` as Parquet when `out` ends in `.parquet`, otherwise as CSV.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing parquet {}", out.display()))?;
        }
        _ => {
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("writing csv {}", out.display()))?;
        }
    }
    tracing::debug!(rows = df.height(), cols = df.width(), out = %out.display(), "frame_written");
    Ok(())
}

/// One-row frame with `<col>_min`, `<col>_mean`, `<col>_max` per requested column.
pub fn summarize(df: &DataFrame, cols: &[&str]) -> Result<DataFrame> {
    let exprs: Vec<Expr> = cols
        .iter()
        .flat_map(|c| {
            [
                col(*c).min().alias(format!("{c}_min").as_str()),
                col(*c).mean().alias(format!("{c}_mean").as_str()),
                col(*c).max().alias(format!("{c}_max").as_str()),
            ]
        })
        .collect();
    Ok(df.clone().lazy().select(exprs).collect()?)
}
