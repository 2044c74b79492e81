use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, StoreHealth};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health check endpoint
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (reviews, social) = tokio::join!(state.reviews.health_check(), state.social.health_check());

    if let Err(e) = &reviews {
        tracing::error!("Health check: {}", e);
    }
    if let Err(e) = &social {
        tracing::error!("Health check: {}", e);
    }

    let stores = StoreHealth {
        reviews: reviews.is_ok(),
        social: social.is_ok(),
    };
    let status = if stores.reviews && stores.social { "ok" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        stores,
    })
}
