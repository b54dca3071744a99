use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{EpisodeNumber, RawRow};
use crate::error::{DashboardError, DashboardResult};
use crate::models::parse_duration;

/// Header of the metrics dataset, in file order.
pub const CSV_COLUMNS: [&str; 11] = [
    "episode",
    "title",
    "description",
    "guest",
    "duration",
    "downloads",
    "completion_numbers",
    "new_listeners",
    "returning_listeners",
    "subscribers_gained",
    "social_media_shares",
];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Somewhere the raw dataset can be read from, once per load.
pub trait DatasetSource {
    /// Name used in error messages and logs.
    fn name(&self) -> String;

    /// Read the whole dataset.
    fn read(&self) -> DashboardResult<Vec<u8>>;
}

/// Dataset stored in a CSV file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> DashboardResult<Vec<u8>> {
        let bytes = fs::read(&self.path).map_err(|e| DashboardError::dataset_load(self.name(), e))?;
        info!("Read {} bytes from {}", bytes.len(), self.name());
        Ok(bytes)
    }
}

/// Dataset held in memory, mostly for embedding and tests.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    content: String,
}

impl InMemorySource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl DatasetSource for InMemorySource {
    fn name(&self) -> String {
        "in-memory dataset".to_string()
    }

    fn read(&self) -> DashboardResult<Vec<u8>> {
        Ok(self.content.as_bytes().to_vec())
    }
}

/// One CSV record before validation.
#[derive(Debug, Deserialize)]
struct CsvRow {
    episode: String,
    title: String,
    description: String,
    guest: String,
    duration: String,
    downloads: String,
    completion_numbers: String,
    new_listeners: String,
    returning_listeners: String,
    subscribers_gained: String,
    social_media_shares: String,
}

fn parse_count(row: usize, column: &str, value: &str) -> DashboardResult<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DashboardError::malformed_numeric(row, column, value));
    }
    value
        .parse::<u64>()
        .map_err(|_| DashboardError::malformed_numeric(row, column, value))
}

impl CsvRow {
    /// Validate into a [`RawRow`]. `row` is the 1-based data row number.
    fn validate(self, row: usize) -> DashboardResult<RawRow> {
        parse_duration(&self.duration)?;

        Ok(RawRow {
            episode: EpisodeNumber(parse_count(row, "episode", &self.episode)?),
            title: self.title,
            description: self.description,
            guest: if self.guest.is_empty() {
                None
            } else {
                Some(self.guest)
            },
            duration: self.duration,
            downloads: parse_count(row, "downloads", &self.downloads)?,
            completions: parse_count(row, "completion_numbers", &self.completion_numbers)?,
            new_listeners: parse_count(row, "new_listeners", &self.new_listeners)?,
            returning_listeners: parse_count(
                row,
                "returning_listeners",
                &self.returning_listeners,
            )?,
            subscribers_gained: parse_count(row, "subscribers_gained", &self.subscribers_gained)?,
            social_shares: parse_count(row, "social_media_shares", &self.social_media_shares)?,
        })
    }
}

/// Parse and validate every row of a metrics CSV.
///
/// The first malformed row aborts the whole read; rows are never skipped.
/// A structurally broken file (missing columns, ragged rows, invalid UTF-8)
/// is reported as a load failure of `source_name`.
pub fn read_rows(content: &[u8], source_name: &str) -> DashboardResult<Vec<RawRow>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        let record = record.map_err(|e| DashboardError::dataset_load(source_name, e))?;
        rows.push(record.validate(index + 1)?);
    }

    info!("Parsed {} rows from {}", rows.len(), source_name);
    Ok(rows)
}
