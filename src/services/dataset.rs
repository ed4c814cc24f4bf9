use crate::models::{Dataset, RawSchemeRow};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Column headers of the scheme dataset
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "Scheme_Name",
    "Min_Age",
    "Max_Age",
    "Gender_Eligibility",
    "Min_Education",
    "Area",
    "State",
    "Target_Group",
    "Application_Link",
    "Summary",
];

/// Errors that can occur while loading the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Dataset source returned status {0}")]
    HttpStatus(u16),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Loads the scheme catalog from a local CSV file or an HTTP(S) URL
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    /// Create a loader with the given HTTP timeout
    pub fn new(timeout: Duration) -> Result<Self, DatasetError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Load and normalize the dataset from `source`
    pub async fn load(&self, source: &str) -> Result<Dataset, DatasetError> {
        let body = if is_remote(source) {
            self.fetch(source).await?
        } else {
            tracing::debug!("Reading dataset from file: {}", source);
            tokio::fs::read(Path::new(source)).await?
        };

        let rows = parse_csv(&body)?;
        tracing::info!("Parsed {} scheme rows from {}", rows.len(), source);

        Ok(Dataset::from_raw(rows))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DatasetError> {
        tracing::debug!("Fetching dataset from: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::HttpStatus(response.status().as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn is_remote(source: &str) -> bool {
    let source = source.trim_start();
    source.starts_with("http://") || source.starts_with("https://")
}

/// Parse CSV bytes into raw rows
///
/// Columns are located by header name; absent columns and empty cells are
/// `None`. Short rows are tolerated and invalid UTF-8 is decoded lossily.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawSchemeRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.byte_headers()?.clone();
    let positions: Vec<Option<usize>> = REQUIRED_COLUMNS
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h).trim() == *column)
        })
        .collect();

    for (column, position) in REQUIRED_COLUMNS.iter().zip(&positions) {
        if position.is_none() {
            tracing::warn!("Dataset has no {} column, filling with empty values", column);
        }
    }

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        let cell = |idx: usize| -> Option<String> {
            positions[idx]
                .and_then(|pos| record.get(pos))
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .filter(|s| !s.is_empty())
        };

        rows.push(RawSchemeRow {
            scheme_name: cell(0),
            min_age: cell(1),
            max_age: cell(2),
            gender_eligibility: cell(3),
            min_education: cell(4),
            area: cell(5),
            state: cell(6),
            target_group: cell(7),
            application_link: cell(8),
            summary: cell(9),
        });
    }

    Ok(rows)
}
