use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    Dataset, ErrorResponse, HealthResponse, RecommendRequest, RecommendResponse, SchemeSummary,
};
use crate::services::{CacheKey, RecommendationCache};
use crate::core::{Recommender, Tier};
use std::sync::Arc;

/// Result size limits
#[derive(Debug, Clone, Copy)]
pub struct RecommendLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for RecommendLimits {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub recommender: Recommender,
    pub cache: Option<Arc<RecommendationCache>>,
    pub limits: RecommendLimits,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        schemes_loaded: state.dataset.len(),
        cache: state.cache.as_ref().map(|cache| cache.stats()),
    })
}

/// Recommend schemes endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "gender": "female",
///   "education": "graduate",
///   "area": "urban",
///   "state": "kerala",
///   "tags": ["student", "women"],
///   "limit": 10
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit);

    let profile = req.to_profile();

    tracing::info!(
        "Recommending schemes: age={}, state={:?}, tags={:?}, limit={}",
        profile.age,
        profile.state,
        profile.tags,
        limit
    );

    let cache_key = CacheKey::recommendation(&profile, limit);
    if let Some(cache) = &state.cache {
        if let Some(results) = cache.get(&cache_key).await {
            tracing::debug!("Serving {} cached recommendations", results.len());
            return HttpResponse::Ok().json(RecommendResponse::new((*results).clone()));
        }
    }

    let result = state
        .recommender
        .recommend(state.dataset.records(), &profile, limit);

    tracing::debug!(
        "Tier contributions: strong={}, mild={}, core={} (eligible {} of {})",
        result.count_in(Tier::Strong),
        result.count_in(Tier::Mild),
        result.count_in(Tier::Core),
        result.eligible_schemes,
        result.total_schemes
    );

    let results: Vec<SchemeSummary> = result.schemes().map(SchemeSummary::from).collect();

    if let Some(cache) = &state.cache {
        cache.set(cache_key, Arc::new(results.clone())).await;
    }

    tracing::info!("Returning {} schemes", results.len());

    HttpResponse::Ok().json(RecommendResponse::new(results))
}
