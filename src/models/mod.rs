// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Place, GeoPoint, StoredPlaceRecord, StoredPostRecord, MentionRecord, RankedPlace};
pub use requests::{ProcessSearchRequest, RecommendRequest, SmartMatchRequest, SnsRestaurantsQuery};
pub use responses::{
    RecommendResponse, MatchedRestaurant, MatchType, MatchStats, SmartMatchResponse,
    RestaurantsResponse, StoreHealth, HealthResponse, ErrorResponse, FailureResponse,
};
