use futures::future::join_all;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use crate::config::MatchingSettings;
use crate::core::distance::resolve_distance_m;
use crate::core::matcher::char_overlap;
use crate::core::normalize::{address_keywords, clean_address, NameRules};
use crate::core::ranking::EnrichedPlace;
use crate::models::{GeoPoint, Place};
use crate::services::review_store::ReviewStore;
use crate::services::social_store::SocialStore;
use crate::services::store::StoreError;

/// Shortest keyword worth sending to a `LIKE` search
const MIN_KEYWORD_CHARS: usize = 2;
/// Shortest address keyword used for address-first matching
const MIN_ANCHOR_CHARS: usize = 3;
/// Name prefix length used to pre-filter address-first candidates
const NAME_PREFIX_CHARS: usize = 3;

/// Looks up review and mention counts for map places
///
/// Every place is looked up independently; a failure for one place is logged
/// and counted as zero. Only an unreachable store fails a whole batch.
pub struct CountLookup {
    reviews: Arc<ReviewStore>,
    social: Arc<SocialStore>,
    rules: NameRules,
    address_overlap_threshold: f64,
}

impl CountLookup {
    pub fn new(
        reviews: Arc<ReviewStore>,
        social: Arc<SocialStore>,
        settings: &MatchingSettings,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            reviews,
            social,
            rules: NameRules::new(settings)?,
            address_overlap_threshold: settings.address_overlap_threshold,
        })
    }

    /// Attach review counts, mention counts and distances to a batch
    ///
    /// Both stores are queried concurrently.
    pub async fn enrich(
        &self,
        places: Vec<Place>,
        origin: Option<&GeoPoint>,
    ) -> Result<Vec<EnrichedPlace>, StoreError> {
        let (reviews, mentions) = tokio::join!(
            self.review_counts(&places),
            self.mention_counts(&places),
        );
        let reviews = reviews?;
        let mentions = mentions?;

        Ok(places
            .into_iter()
            .map(|place| {
                let review_count = reviews.get(&place.id).copied().unwrap_or(0);
                let mention_count = mentions.get(&place.id).copied().unwrap_or(0);
                let distance_m = resolve_distance_m(&place, origin);
                tracing::debug!(
                    "{}: reviews {}, mentions {}, distance {}m",
                    place.place_name,
                    review_count,
                    mention_count,
                    distance_m
                );
                EnrichedPlace {
                    place,
                    review_count,
                    mention_count,
                    distance_m,
                }
            })
            .collect())
    }

    /// Review count per place id
    pub async fn review_counts(&self, places: &[Place]) -> Result<HashMap<String, u32>, StoreError> {
        if places.is_empty() {
            return Ok(HashMap::new());
        }
        self.reviews.health_check().await?;

        let lookups = places.iter().map(|place| async move {
            let count = match self.review_count_for(place).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!("Review lookup failed for {}: {}", place.place_name, e);
                    0
                }
            };
            (place.id.clone(), count)
        });

        let counts: HashMap<String, u32> = join_all(lookups).await.into_iter().collect();
        let matched = counts.values().filter(|c| **c > 0).count();
        tracing::info!("Review lookup matched {} of {} places", matched, places.len());

        Ok(counts)
    }

    /// Distinct social post count per place id
    pub async fn mention_counts(&self, places: &[Place]) -> Result<HashMap<String, u32>, StoreError> {
        if places.is_empty() {
            return Ok(HashMap::new());
        }
        self.social.health_check().await?;

        let lookups = places.iter().map(|place| async move {
            let count = match self.mention_count_for(place).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!("Mention lookup failed for {}: {}", place.place_name, e);
                    0
                }
            };
            (place.id.clone(), count)
        });

        let counts: HashMap<String, u32> = join_all(lookups).await.into_iter().collect();
        let matched = counts.values().filter(|c| **c > 0).count();
        tracing::info!("Mention lookup matched {} of {} places", matched, places.len());

        Ok(counts)
    }

    /// Try progressively looser strategies until one listing matches
    async fn review_count_for(&self, place: &Place) -> Result<u32, StoreError> {
        let name = place.place_name.trim();
        let address = place
            .road_address_name
            .as_deref()
            .map(clean_address)
            .unwrap_or_default();

        // 1. name and cleaned address as given
        if let Some(record) = self.reviews.find_by_name_and_address(name, &address).await? {
            return Ok(parse_review_count(record.review_count.as_deref()));
        }

        // 2. known branch-name variants
        let aliased = self.rules.apply_aliases(name);
        if aliased != name {
            if let Some(record) = self.reviews.find_by_name_and_address(&aliased, &address).await? {
                tracing::debug!("{}: matched via alias '{}'", name, aliased);
                return Ok(parse_review_count(record.review_count.as_deref()));
            }
        }

        // 3. brand name against each road/building keyword
        let core = self.rules.core_name(name);
        let keywords = address_keywords(&address);
        if !core.is_empty() {
            for keyword in keywords.iter().filter(|k| k.chars().count() >= MIN_KEYWORD_CHARS) {
                if let Some(record) = self.reviews.find_by_name_and_address(&core, keyword).await? {
                    tracing::debug!("{}: matched core name '{}' at '{}'", name, core, keyword);
                    return Ok(parse_review_count(record.review_count.as_deref()));
                }
            }
        }

        // 4. most specific address keyword first, closest name wins
        let anchor = longest(&keywords).filter(|k| k.chars().count() >= MIN_ANCHOR_CHARS);
        if let Some(anchor) = anchor {
            let prefix: String = core.chars().take(NAME_PREFIX_CHARS).collect();
            let candidates = self.reviews.find_candidates_at_address(anchor, &prefix).await?;

            let mut best: Option<(f64, Option<String>)> = None;
            for candidate in candidates {
                let overlap = char_overlap(&core, &candidate.name);
                if overlap > best.as_ref().map(|(s, _)| *s).unwrap_or(0.0) {
                    best = Some((overlap, candidate.review_count));
                }
            }

            if let Some((overlap, review_count)) = best {
                if overlap > self.address_overlap_threshold {
                    tracing::debug!("{}: matched by address '{}' ({:.2})", name, anchor, overlap);
                    return Ok(parse_review_count(review_count.as_deref()));
                }
            }
        }

        tracing::debug!("{}: no review listing matched", name);
        Ok(0)
    }

    async fn mention_count_for(&self, place: &Place) -> Result<u32, StoreError> {
        let keywords = mention_keywords(&self.rules, place);
        if keywords.is_empty() {
            return Ok(0);
        }

        let search_hashtags = main_name(&place.place_name).chars().count() >= MIN_KEYWORD_CHARS;
        let mut post_ids: HashSet<i64> = HashSet::new();

        for keyword in &keywords {
            post_ids.extend(self.social.find_posts_by_caption(keyword).await?.iter().map(|p| p.id));
            if search_hashtags {
                post_ids.extend(self.social.find_posts_by_hashtag(keyword).await?.iter().map(|p| p.id));
            }
        }

        Ok(post_ids.len() as u32)
    }
}

/// Search keywords for a place's social mentions
///
/// Names whose first word is a single character are too ambiguous, so the
/// road address stands in for them.
pub fn mention_keywords(rules: &NameRules, place: &Place) -> BTreeSet<String> {
    let name = place.place_name.trim();
    let main = main_name(name);
    let mut keywords = BTreeSet::new();

    if main.chars().count() < MIN_KEYWORD_CHARS {
        if let Some(address) = place.road_address_name.as_deref() {
            keywords.insert(clean_address(address));
        }
    } else {
        keywords.insert(name.to_string());
        keywords.insert(name.replace(' ', ""));
        keywords.insert(main.to_string());

        let aliased = rules.apply_aliases(name);
        if aliased != name {
            keywords.insert(aliased.replace(' ', ""));
            keywords.insert(aliased);
        }

        let core = rules.core_name(name);
        if !core.is_empty() && core != name {
            keywords.insert(core);
        }
    }

    keywords.retain(|k| k.chars().count() >= MIN_KEYWORD_CHARS);
    keywords
}

fn main_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// First of the longest keywords, by character count
fn longest(keywords: &[String]) -> Option<&String> {
    keywords.iter().fold(None, |best: Option<&String>, k| match best {
        Some(b) if b.chars().count() >= k.chars().count() => Some(b),
        _ => Some(k),
    })
}

/// Parse a scraped review count; thousands separators are allowed, anything else is 0
pub fn parse_review_count(raw: Option<&str>) -> u32 {
    let digits: String = raw.unwrap_or("").trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }
    digits.parse().unwrap_or(0)
}
