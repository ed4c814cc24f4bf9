//! Schemely Algo - Welfare scheme recommendation service
//!
//! This library provides the scheme matching algorithm used by Schemely.
//! It normalizes a scheme catalog once, then answers each profile with a
//! ranked shortlist built from three successively relaxed tiers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{recommend, Recommendation, Recommender, Tier};
pub use crate::models::{
    Dataset, RawSchemeRow, RecommendRequest, RecommendResponse, SchemeRecord, ScoringWeights,
    UserProfile,
};
