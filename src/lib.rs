//! Place Rank - restaurant ranking service
//!
//! Ranks map search results by blending distance with review counts scraped from
//! map listings and mention counts scraped from social media posts. Both scraped
//! datasets live in local SQLite databases that this service only reads.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{PlaceMatcher, Ranker, RankingPreference, SocialMatcher, EnrichedPlace};
pub use error::{ServiceError, StartupError};
pub use models::{Place, RankedPlace, MentionRecord};
pub use routes::AppState;
