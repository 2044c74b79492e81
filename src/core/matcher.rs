use std::collections::HashSet;
use strsim::normalized_levenshtein;
use crate::config::MatchingSettings;
use crate::core::normalize::normalize_name;

const FULL_WEIGHT: f64 = 0.4;
const TOKEN_WEIGHT: f64 = 0.4;
const FIRST_CHAR_WEIGHT: f64 = 0.1;
const CONTAIN_WEIGHT: f64 = 0.1;

const DISTRICT_SCORE: f64 = 0.8;
const NEIGHBORHOOD_SCORE: f64 = 0.6;
const CITY_SCORE: f64 = 0.4;
const FALLBACK_ADDRESS_SCORE: f64 = 0.1;

/// Fuzzy name and address matcher
///
/// Scores how likely two free-text place descriptions refer to the same restaurant.
/// All scores are in `[0, 1]` and depend only on the inputs and the configured vocabulary.
#[derive(Debug, Clone)]
pub struct PlaceMatcher {
    stop_words: HashSet<String>,
    district_suffixes: Vec<String>,
    neighborhood_suffixes: Vec<String>,
    city_suffixes: Vec<String>,
    city_names: HashSet<String>,
}

impl PlaceMatcher {
    pub fn new(settings: &MatchingSettings) -> Self {
        Self {
            stop_words: settings.stop_words.iter().map(|w| normalize_name(w)).collect(),
            district_suffixes: settings.district_suffixes.clone(),
            neighborhood_suffixes: settings.neighborhood_suffixes.clone(),
            city_suffixes: settings.city_suffixes.clone(),
            city_names: settings.city_names.iter().cloned().collect(),
        }
    }

    /// Distinctive tokens of a name: stop words and single characters removed
    pub fn keywords(&self, name: &str) -> HashSet<String> {
        normalize_name(name)
            .split_whitespace()
            .filter(|w| w.chars().count() > 1 && !self.stop_words.contains(*w))
            .map(str::to_string)
            .collect()
    }

    /// Combined name similarity
    ///
    /// `0.4 * full + 0.4 * token + 0.1 * first_char + 0.1 * containment`, capped at 1.0.
    pub fn name_similarity(&self, a: &str, b: &str) -> f64 {
        let norm_a = normalize_name(a);
        let norm_b = normalize_name(b);
        if norm_a.is_empty() || norm_b.is_empty() {
            return 0.0;
        }
        // every component is saturated
        if norm_a == norm_b {
            return 1.0;
        }

        let full = normalized_levenshtein(&norm_a, &norm_b);

        let keywords_a = self.keywords(a);
        let keywords_b = self.keywords(b);
        let token = if keywords_a.is_empty() || keywords_b.is_empty() {
            0.0
        } else {
            let shared = keywords_a.intersection(&keywords_b).count() as f64;
            let total = keywords_a.union(&keywords_b).count() as f64;
            shared / total
        };

        let first = if norm_a.chars().next() == norm_b.chars().next() { 1.0 } else { 0.0 };

        let contain = if norm_a.chars().count() >= 2
            && norm_b.chars().count() >= 2
            && (norm_a.contains(&norm_b) || norm_b.contains(&norm_a))
        {
            1.0
        } else {
            0.0
        };

        let score = full * FULL_WEIGHT
            + token * TOKEN_WEIGHT
            + first * FIRST_CHAR_WEIGHT
            + contain * CONTAIN_WEIGHT;

        score.min(1.0)
    }

    /// Administrative-unit address agreement
    ///
    /// The best exact token match decides: district 0.8, neighbourhood 0.6, city 0.4.
    /// Configured city names count as cities whatever their suffix.
    /// Addresses sharing no unit score 0.1; an empty address scores 0.
    pub fn address_similarity(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return 0.0;
        }

        let tokens_b: HashSet<&str> = b.split_whitespace().collect();

        a.split_whitespace()
            .filter(|token| tokens_b.contains(token))
            .map(|token| self.unit_score(token))
            .fold(FALLBACK_ADDRESS_SCORE, f64::max)
    }

    fn unit_score(&self, token: &str) -> f64 {
        let has_suffix = |suffixes: &[String]| suffixes.iter().any(|s| token.ends_with(s.as_str()));

        if self.city_names.contains(token) {
            CITY_SCORE
        } else if has_suffix(&self.district_suffixes) {
            DISTRICT_SCORE
        } else if has_suffix(&self.neighborhood_suffixes) {
            NEIGHBORHOOD_SCORE
        } else if has_suffix(&self.city_suffixes) {
            CITY_SCORE
        } else {
            FALLBACK_ADDRESS_SCORE
        }
    }
}

impl Default for PlaceMatcher {
    fn default() -> Self {
        Self::new(&MatchingSettings::default())
    }
}

/// Shared distinct characters over the longer name's length
pub fn char_overlap(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }

    let chars_a: HashSet<char> = a.chars().collect();
    let chars_b: HashSet<char> = b.chars().collect();

    chars_a.intersection(&chars_b).count() as f64 / longest as f64
}
