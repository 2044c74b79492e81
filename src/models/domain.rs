use serde::{Deserialize, Serialize};

/// A place as returned by the map search API, supplied per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub road_address_name: Option<String>,
    /// Longitude
    #[serde(default)]
    pub x: String,
    /// Latitude
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub place_url: String,
    /// Metres from the search origin, as a string
    #[serde(default)]
    pub distance: Option<String>,
}

impl Place {
    /// Parse the map coordinates, if both are present and numeric
    pub fn coordinates(&self) -> Option<GeoPoint> {
        let lng = self.x.trim().parse::<f64>().ok()?;
        let lat = self.y.trim().parse::<f64>().ok()?;
        Some(GeoPoint { lat, lng })
    }
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A map listing row written by the map scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPlaceRecord {
    pub name: String,
    pub area: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub review_count: Option<String>,
    pub rating: Option<String>,
}

/// A social post row written by the tag-page scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPostRecord {
    pub id: i64,
    pub post_url: String,
    pub caption: Option<String>,
    /// Serialized hashtag list, e.g. `["#tag1", "#tag2"]`
    pub hashtags: Option<String>,
}

/// A curated restaurant with aggregated social mentions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRecord {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub sns_mentions: i64,
    pub rating: f64,
    pub review_count: i64,
    pub tags: Vec<String>,
    pub description: String,
    pub source: String,
}

/// A place annotated with lookup counts and its ranking score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPlace {
    #[serde(flatten)]
    pub place: Place,
    pub review_count: u32,
    pub instagram_mentions: u32,
    pub score: f64,
}
