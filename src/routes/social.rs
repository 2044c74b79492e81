use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FailureResponse, RestaurantsResponse, SmartMatchRequest, SnsRestaurantsQuery};
use crate::routes::AppState;

/// Page size cap for the social record listing
const MAX_PAGE_SIZE: u32 = 100;
/// Number of records in the top listing
const TOP_RESTAURANTS: u32 = 50;

/// Configure social record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/match-restaurants", web::post().to(smart_match))
        .route("/smart-match", web::post().to(smart_match))
        .route("/sns-restaurants", web::get().to(list_sns_restaurants));
}

fn failure(message: impl Into<String>) -> FailureResponse {
    FailureResponse {
        success: false,
        error: message.into(),
    }
}

/// Pair map places with curated social records
///
/// POST /smart-match
///
/// Request body:
/// ```json
/// {
///   "mapRestaurants": [{ "id": "...", "place_name": "...", "address_name": "..." }],
///   "searchArea": {}
/// }
/// ```
pub async fn smart_match(
    state: web::Data<AppState>,
    req: web::Json<SmartMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Rejected smart match request: {}", errors);
        return HttpResponse::BadRequest().json(failure("No map restaurants to match"));
    }

    let records = match state.social.all_restaurants().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load social restaurants: {}", e);
            return HttpResponse::InternalServerError()
                .json(failure(format!("Matching failed: {}", e)));
        }
    };

    tracing::info!(
        "Matching {} map restaurants against {} social records",
        req.map_restaurants.len(),
        records.len()
    );

    let response = state.social_matcher.match_all(&req.map_restaurants, &records);

    tracing::info!(
        "Matched {} of {} ({}%)",
        response.stats.matched_count,
        response.stats.total_map_restaurants,
        response.stats.match_rate
    );

    HttpResponse::Ok().json(response)
}

/// List social records, most mentioned first
///
/// GET /api/sns-restaurants?limit=10&offset=0&keyword=치킨
pub async fn list_sns_restaurants(
    state: web::Data<AppState>,
    query: web::Query<SnsRestaurantsQuery>,
) -> impl Responder {
    let limit = query.limit.min(MAX_PAGE_SIZE);

    match state
        .social
        .list_restaurants(Some(query.keyword.as_str()), limit, query.offset)
        .await
    {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            tracing::error!("Failed to list social restaurants: {}", e);
            HttpResponse::InternalServerError().json(failure(e.to_string()))
        }
    }
}

/// Top social records
///
/// GET /restaurants
pub async fn list_top_restaurants(state: web::Data<AppState>) -> impl Responder {
    match state.social.list_restaurants(None, TOP_RESTAURANTS, 0).await {
        Ok(restaurants) => HttpResponse::Ok().json(RestaurantsResponse {
            success: true,
            count: restaurants.len(),
            restaurants,
        }),
        Err(e) => {
            tracing::error!("Failed to list social restaurants: {}", e);
            HttpResponse::InternalServerError().json(failure(e.to_string()))
        }
    }
}
