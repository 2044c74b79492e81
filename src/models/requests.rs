use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{GeoPoint, Place};

/// Request to rank a batch of map search results
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProcessSearchRequest {
    #[validate(length(min = 1, message = "searchResults must not be empty"))]
    #[serde(rename = "searchResults", alias = "search_results")]
    pub search_results: Vec<Place>,
    #[serde(rename = "rankingPreference", alias = "ranking_preference", default)]
    pub ranking_preference: Option<String>,
    #[serde(default)]
    pub origin: Option<GeoPoint>,
}

/// Request body used by the web frontend
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1, message = "places must not be empty"))]
    pub places: Vec<Place>,
    #[serde(default = "default_recommend_preference", alias = "rankingPreference")]
    pub ranking_preference: String,
    #[serde(default)]
    pub origin: Option<GeoPoint>,
}

fn default_recommend_preference() -> String {
    "instagram".to_string()
}

/// Request to pair map places with curated social records
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SmartMatchRequest {
    #[validate(length(min = 1, message = "mapRestaurants must not be empty"))]
    #[serde(rename = "mapRestaurants", alias = "map_restaurants", default)]
    pub map_restaurants: Vec<Place>,
    #[serde(rename = "searchArea", alias = "search_area", default)]
    pub search_area: Option<serde_json::Value>,
}

/// Query string for the social record listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsRestaurantsQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub keyword: String,
}

fn default_limit() -> u32 {
    10
}
