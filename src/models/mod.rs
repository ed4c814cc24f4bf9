// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dataset, RawSchemeRow, SchemeRecord, ScoringWeights, UserProfile};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, SchemeSummary};
