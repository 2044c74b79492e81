use serde::{Deserialize, Serialize};
use crate::models::domain::{MentionRecord, Place, RankedPlace};

/// Response for the frontend recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommended_places: Vec<RankedPlace>,
}

/// One map place paired with its best social record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedRestaurant {
    pub map_info: Place,
    pub sns_info: MentionRecord,
    pub match_score: f64,
    pub match_type: MatchType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    NameBased,
    FuzzyMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchStats {
    pub total_map_restaurants: usize,
    pub matched_count: usize,
    /// Percentage, one decimal
    pub match_rate: f64,
}

/// Response for the smart match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartMatchResponse {
    pub success: bool,
    pub matched_restaurants: Vec<MatchedRestaurant>,
    pub total_count: usize,
    pub stats: MatchStats,
}

/// Response for the top restaurants listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantsResponse {
    pub success: bool,
    pub restaurants: Vec<MentionRecord>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreHealth {
    pub reviews: bool,
    pub social: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub stores: StoreHealth,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Failure body used by the matching endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}
