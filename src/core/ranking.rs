use crate::models::{Place, RankedPlace};

/// Default number of places returned by a ranking
pub const DEFAULT_MAX_RESULTS: usize = 45;

/// Named ranking emphasis chosen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPreference {
    Distance,
    Reviews,
    Instagram,
    Balanced,
}

impl RankingPreference {
    /// Parse a preset name; anything unrecognised is `Balanced`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "distance" => Self::Distance,
            "reviews" => Self::Reviews,
            "instagram" => Self::Instagram,
            _ => Self::Balanced,
        }
    }

    pub fn weights(self) -> RankingWeights {
        match self {
            Self::Distance => RankingWeights { distance: 0.45, reviews: 0.3, mentions: 0.25 },
            Self::Reviews => RankingWeights { distance: 0.2, reviews: 0.8, mentions: 0.0 },
            Self::Instagram => RankingWeights { distance: 0.2, reviews: 0.0, mentions: 0.8 },
            Self::Balanced => RankingWeights { distance: 0.25, reviews: 0.375, mentions: 0.375 },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Reviews => "reviews",
            Self::Instagram => "instagram",
            Self::Balanced => "balanced",
        }
    }
}

/// Weight triple of a preset; the three weights sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub distance: f64,
    pub reviews: f64,
    pub mentions: f64,
}

/// A place with its looked-up counts and resolved distance
#[derive(Debug, Clone)]
pub struct EnrichedPlace {
    pub place: Place,
    pub review_count: u32,
    pub mention_count: u32,
    pub distance_m: u32,
}

/// Weighted ranking of enriched places
///
/// Each signal is normalized against the batch maximum (a zero maximum counts as 1):
/// closer places score `1 - d / max_d`, busier places `n / max_n`.
#[derive(Debug, Clone)]
pub struct Ranker {
    max_results: usize,
}

impl Ranker {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Score, sort (descending, stable) and truncate a batch
    pub fn rank(&self, places: Vec<EnrichedPlace>, preference: RankingPreference) -> Vec<RankedPlace> {
        let weights = preference.weights();

        let max_distance = divisor(places.iter().map(|p| p.distance_m).max());
        let max_reviews = divisor(places.iter().map(|p| p.review_count).max());
        let max_mentions = divisor(places.iter().map(|p| p.mention_count).max());

        let mut ranked: Vec<RankedPlace> = places
            .into_iter()
            .map(|p| {
                let norm_distance = 1.0 - p.distance_m as f64 / max_distance;
                let norm_reviews = p.review_count as f64 / max_reviews;
                let norm_mentions = p.mention_count as f64 / max_mentions;

                let score = norm_distance * weights.distance
                    + norm_reviews * weights.reviews
                    + norm_mentions * weights.mentions;

                RankedPlace {
                    place: p.place,
                    review_count: p.review_count,
                    instagram_mentions: p.mention_count,
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked.truncate(self.max_results);
        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

#[inline]
fn divisor(max: Option<u32>) -> f64 {
    match max {
        Some(0) | None => 1.0,
        Some(value) => value as f64,
    }
}
