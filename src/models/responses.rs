use serde::{Deserialize, Serialize};
use crate::models::domain::SchemeRecord;
use crate::services::CacheStats;

/// A recommended scheme as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeSummary {
    pub scheme_name: String,
    pub state: String,
    pub summary: String,
    pub link: String,
    pub target_group: String,
}

impl From<&SchemeRecord> for SchemeSummary {
    fn from(record: &SchemeRecord) -> Self {
        Self {
            scheme_name: record.name.clone(),
            state: record.state.clone(),
            summary: record.summary.clone(),
            link: record.application_link.clone(),
            target_group: record.target_group.clone(),
        }
    }
}

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub count: usize,
    pub results: Vec<SchemeSummary>,
}

impl RecommendResponse {
    pub fn new(results: Vec<SchemeSummary>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub schemes_loaded: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
