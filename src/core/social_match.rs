use crate::config::MatchingSettings;
use crate::core::matcher::PlaceMatcher;
use crate::models::{MatchStats, MatchType, MatchedRestaurant, MentionRecord, Place, SmartMatchResponse};

/// Score given when a record's description mentions the place by name
const CONTENT_SCORE: f64 = 0.7;

/// Pairs map places with curated social mention records
#[derive(Debug, Clone)]
pub struct SocialMatcher {
    matcher: PlaceMatcher,
    match_threshold: f64,
    name_threshold: f64,
    name_based_threshold: f64,
}

impl SocialMatcher {
    pub fn new(matcher: PlaceMatcher, settings: &MatchingSettings) -> Self {
        Self {
            matcher,
            match_threshold: settings.match_threshold,
            name_threshold: settings.name_threshold,
            name_based_threshold: settings.name_based_threshold,
        }
    }

    /// Score one place against one record
    ///
    /// Name agreement dominates (`0.7 * name + 0.3 * region`); a record whose
    /// description mentions the place falls back to `0.8 * content + 0.2 * region`.
    pub fn score(&self, place: &Place, record: &MentionRecord) -> f64 {
        let name = place.place_name.trim();
        let name_score = self.matcher.name_similarity(name, &record.name);

        let content_score = if !name.is_empty() && record.description.contains(name) {
            CONTENT_SCORE
        } else {
            0.0
        };

        let region_score = self
            .matcher
            .address_similarity(place.address_name.trim(), &record.address);

        if name_score > self.name_threshold {
            name_score * 0.7 + region_score * 0.3
        } else if content_score > 0.0 {
            content_score * 0.8 + region_score * 0.2
        } else {
            0.0
        }
    }

    /// Best record above the threshold for a place; earlier records win ties
    pub fn best_match<'a>(&self, place: &Place, records: &'a [MentionRecord]) -> Option<(&'a MentionRecord, f64)> {
        let mut best: Option<(&MentionRecord, f64)> = None;

        for record in records {
            let score = self.score(place, record);
            let current = best.map(|(_, s)| s).unwrap_or(0.0);
            if score > self.match_threshold && score > current {
                best = Some((record, score));
            }
        }

        best
    }

    /// Match a batch and summarise the outcome
    pub fn match_all(&self, places: &[Place], records: &[MentionRecord]) -> SmartMatchResponse {
        let mut matched: Vec<MatchedRestaurant> = places
            .iter()
            .filter(|place| !place.place_name.trim().is_empty())
            .filter_map(|place| {
                let (record, score) = self.best_match(place, records)?;
                tracing::debug!("Matched {} -> {} ({:.3})", place.place_name, record.name, score);

                Some(MatchedRestaurant {
                    map_info: place.clone(),
                    sns_info: record.clone(),
                    match_score: round_to(score, 3),
                    match_type: if score > self.name_based_threshold {
                        MatchType::NameBased
                    } else {
                        MatchType::FuzzyMatch
                    },
                })
            })
            .collect();

        matched.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let match_rate = if places.is_empty() {
            0.0
        } else {
            round_to(matched.len() as f64 / places.len() as f64 * 100.0, 1)
        };

        SmartMatchResponse {
            success: true,
            total_count: matched.len(),
            stats: MatchStats {
                total_map_restaurants: places.len(),
                matched_count: matched.len(),
                match_rate,
            },
            matched_restaurants: matched,
        }
    }
}

impl Default for SocialMatcher {
    fn default() -> Self {
        let settings = MatchingSettings::default();
        Self::new(PlaceMatcher::new(&settings), &settings)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
