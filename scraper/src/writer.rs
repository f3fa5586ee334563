use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::aggregator::Failure;
use crate::record::{Link, MovieRecord, COLUMNS};

pub const INDEX_COLUMN: &str = "index";

pub fn table_path(dir: &Path, year: u32) -> PathBuf {
    dir.join(format!("movies_{}.csv", year))
}

pub fn failures_path(dir: &Path, year: u32) -> PathBuf {
    dir.join(format!("failures_{}.json", year))
}

pub fn links_path(dir: &Path, year: u32) -> PathBuf {
    dir.join(format!("links_{}.json", year))
}

/// A year is finished once its table is written and no failures are waiting
/// to be re-run.
pub fn year_is_complete(dir: &Path, year: u32) -> bool {
    table_path(dir, year).exists() && !failures_path(dir, year).exists()
}

/// Writes one year's table, replacing any earlier run for the same year.
pub fn write_year(dir: &Path, year: u32, movies: &[MovieRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = table_path(dir, year);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(std::iter::once(INDEX_COLUMN).chain(COLUMNS))?;
    for (index, movie) in movies.iter().enumerate() {
        let mut row = movie.to_row();
        row.insert(0, index.to_string());
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to write row {} of {}", index, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} movies to {}", movies.len(), path.display());
    Ok(path)
}

/// Reads back a table written by [`write_year`], in row order.
pub fn read_year(path: &Path) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut movies = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("Failed to read {}", path.display()))?;
        let movie = MovieRecord::from_row(row.iter().skip(1))
            .with_context(|| format!("Malformed row {} in {}", line, path.display()))?;
        movies.push(movie);
    }

    Ok(movies)
}

/// Records the pages a year failed on. A clean run removes the report left by
/// an earlier one.
pub fn write_failures(dir: &Path, year: u32, failures: &[Failure]) -> Result<Option<PathBuf>> {
    let path = failures_path(dir, year);

    if failures.is_empty() {
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stale {}", path.display()))?;
        }
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    let json =
        serde_json::to_string_pretty(failures).context("Failed to serialize failure report")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} failures to {}", failures.len(), path.display());
    Ok(Some(path))
}

pub fn write_links(dir: &Path, year: u32, links: &[Link]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let path = links_path(dir, year);
    let json = serde_json::to_string_pretty(links).context("Failed to serialize links")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved {} links to {}", links.len(), path.display());
    Ok(path)
}
