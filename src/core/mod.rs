// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod normalize;
pub mod ranking;
pub mod social_match;

pub use distance::{haversine_distance, parse_distance, resolve_distance_m, UNKNOWN_DISTANCE_M};
pub use matcher::{PlaceMatcher, char_overlap};
pub use normalize::{normalize_name, clean_address, address_keywords, NameRules};
pub use ranking::{Ranker, RankingPreference, RankingWeights, EnrichedPlace, DEFAULT_MAX_RESULTS};
pub use social_match::SocialMatcher;
