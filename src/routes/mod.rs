// Route exports
pub mod health;
pub mod recommend;
pub mod social;

use actix_web::{error, web, HttpRequest};
use std::sync::Arc;
use std::time::Duration;
use crate::config::Settings;
use crate::core::{PlaceMatcher, Ranker, RankingPreference, SocialMatcher};
use crate::error::{ServiceError, StartupError};
use crate::services::{CountLookup, PoolConfig, ReviewStore, SocialStore};

/// Largest accepted JSON body
const JSON_LIMIT_BYTES: usize = 1 << 20;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<ReviewStore>,
    pub social: Arc<SocialStore>,
    pub lookup: Arc<CountLookup>,
    pub ranker: Ranker,
    pub social_matcher: SocialMatcher,
    pub default_preference: RankingPreference,
}

impl AppState {
    /// Open both stores and build the matchers from configuration
    pub fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        let defaults = PoolConfig::default();
        let pool = PoolConfig {
            max_connections: settings.storage.max_connections.unwrap_or(defaults.max_connections),
            acquire_timeout: settings
                .storage
                .acquire_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
        };

        let reviews = Arc::new(ReviewStore::new(&settings.storage.review_db_url, pool)?);
        let social = Arc::new(SocialStore::new(&settings.storage.social_db_url, pool)?);
        let lookup = Arc::new(CountLookup::new(reviews.clone(), social.clone(), &settings.matching)?);

        let matcher = PlaceMatcher::new(&settings.matching);

        Ok(Self {
            reviews,
            social,
            lookup,
            ranker: Ranker::new(settings.ranking.max_results),
            social_matcher: SocialMatcher::new(matcher, &settings.matching),
            default_preference: RankingPreference::from_name(&settings.ranking.default_preference),
        })
    }
}

/// Register every endpoint
///
/// The frontend calls some routes without the `/api` prefix, so those are
/// mounted at both paths.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(recommend::configure)
            .configure(social::configure),
    )
    .route("/health", web::get().to(health::health_check))
    .route("/recommend", web::post().to(recommend::recommend))
    .route("/smart-match", web::post().to(social::smart_match))
    .route("/restaurants", web::get().to(social::list_top_restaurants));
}

/// JSON extractor settings with a 400 body for malformed payloads
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(handle_json_payload_error)
}

/// Query extractor settings with a 400 body for malformed query strings
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(handle_query_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ServiceError::InvalidPayload(format!("Invalid JSON: {}", err)).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ServiceError::InvalidPayload(format!("Invalid query: {}", err)).into()
}
