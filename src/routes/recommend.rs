use actix_web::{web, HttpResponse};
use tracing::Instrument;
use validator::Validate;
use crate::core::RankingPreference;
use crate::error::ServiceError;
use crate::models::{GeoPoint, Place, ProcessSearchRequest, RankedPlace, RecommendRequest, RecommendResponse};
use crate::routes::AppState;

/// Configure ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/restaurants/process-search", web::post().to(process_search))
        .route("/recommend", web::post().to(recommend));
}

/// Rank map search results
///
/// POST /api/restaurants/process-search
///
/// Request body:
/// ```json
/// {
///   "searchResults": [{ "id": "26338954", "place_name": "...", "distance": "120", ... }],
///   "rankingPreference": "distance|reviews|instagram|balanced"
/// }
/// ```
pub async fn process_search(
    state: web::Data<AppState>,
    req: web::Json<ProcessSearchRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;

    let req = req.into_inner();
    let preference = req
        .ranking_preference
        .as_deref()
        .map(RankingPreference::from_name)
        .unwrap_or(state.default_preference);

    let ranked = rank_batch(&state, req.search_results, preference, req.origin).await?;

    Ok(HttpResponse::Ok().json(ranked))
}

/// Rank places for the web frontend
///
/// POST /recommend
///
/// Same ranking as `process-search`, wrapped as `{ "recommended_places": [...] }`.
/// Defaults to the `instagram` preset.
pub async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, ServiceError> {
    req.validate()?;

    let req = req.into_inner();
    let preference = RankingPreference::from_name(&req.ranking_preference);

    let recommended_places = rank_batch(&state, req.places, preference, req.origin).await?;

    Ok(HttpResponse::Ok().json(RecommendResponse { recommended_places }))
}

async fn rank_batch(
    state: &AppState,
    places: Vec<Place>,
    preference: RankingPreference,
    origin: Option<GeoPoint>,
) -> Result<Vec<RankedPlace>, ServiceError> {
    let span = tracing::info_span!(
        "rank",
        request_id = %uuid::Uuid::new_v4(),
        places = places.len(),
        preference = preference.as_str(),
    );

    async move {
        tracing::info!("Ranking {} places with preset {:?}", places.len(), preference.weights());

        let enriched = state.lookup.enrich(places, origin.as_ref()).await.map_err(|e| {
            tracing::error!("Count lookup failed: {}", e);
            ServiceError::from(e)
        })?;

        let ranked = state.ranker.rank(enriched, preference);

        tracing::info!("Returning {} ranked places", ranked.len());
        Ok(ranked)
    }
    .instrument(span)
    .await
}
