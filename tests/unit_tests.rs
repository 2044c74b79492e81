// Unit tests for Place Rank

use place_rank::core::{
    matcher::PlaceMatcher,
    normalize::{normalize_name, NameRules},
    ranking::{EnrichedPlace, Ranker, RankingPreference},
    distance::{resolve_distance_m, UNKNOWN_DISTANCE_M},
};
use place_rank::config::MatchingSettings;
use place_rank::models::{GeoPoint, Place, RankedPlace};

const PRESETS: [RankingPreference; 4] = [
    RankingPreference::Distance,
    RankingPreference::Reviews,
    RankingPreference::Instagram,
    RankingPreference::Balanced,
];

fn place(id: &str, distance: Option<&str>) -> Place {
    Place {
        id: id.to_string(),
        place_name: format!("가게 {}", id),
        category_name: "음식점 > 한식".to_string(),
        phone: Some("053-000-0000".to_string()),
        address_name: "경북 경산시 대동 1".to_string(),
        road_address_name: Some("경북 경산시 대학로 1".to_string()),
        x: "128.75".to_string(),
        y: "35.83".to_string(),
        place_url: format!("http://place.map.kakao.com/{}", id),
        distance: distance.map(str::to_string),
    }
}

fn enriched(id: &str, distance_m: u32, reviews: u32, mentions: u32) -> EnrichedPlace {
    EnrichedPlace {
        place: place(id, Some(&distance_m.to_string())),
        review_count: reviews,
        mention_count: mentions,
        distance_m,
    }
}

fn ids(ranked: &[RankedPlace]) -> Vec<String> {
    ranked.iter().map(|r| r.place.id.clone()).collect()
}

#[test]
fn test_identical_normalized_names_score_one() {
    let matcher = PlaceMatcher::default();
    let pairs = [
        ("교촌치킨 영남대점", "교촌치킨  영남대점"),
        ("Burger King", "burger king"),
        ("스시야마다!", "스시야마다"),
        ("카페", "카페"),
        ("a", "A"),
    ];

    for (a, b) in pairs {
        assert_eq!(normalize_name(a), normalize_name(b));
        assert_eq!(matcher.name_similarity(a, b), 1.0, "{} vs {}", a, b);
    }
}

#[test]
fn test_empty_inputs_score_zero() {
    let matcher = PlaceMatcher::default();
    assert_eq!(matcher.name_similarity("", ""), 0.0);
    assert_eq!(matcher.name_similarity("", "맛있는집"), 0.0);
    assert_eq!(matcher.name_similarity("맛있는집", ""), 0.0);
    assert_eq!(matcher.address_similarity("", "서울 강남구"), 0.0);
    assert_eq!(matcher.address_similarity("서울 강남구", "  "), 0.0);
}

#[test]
fn test_similarity_is_bounded_and_deterministic() {
    let matcher = PlaceMatcher::default();
    let names = ["맛있는집", "맛있는 집 본점", "피자스쿨 경산점", "pizza school", "라멘하우스"];

    for a in names {
        for b in names {
            let first = matcher.name_similarity(a, b);
            let second = matcher.name_similarity(a, b);
            assert_eq!(first, second);
            assert!((0.0..=1.0).contains(&first), "{} vs {} = {}", a, b, first);
        }
    }
}

#[test]
fn test_single_place_scores_distance_weight() {
    let ranker = Ranker::default();

    for preference in PRESETS {
        let ranked = ranker.rank(vec![enriched("solo", 0, 0, 0)], preference);
        assert_eq!(ranked.len(), 1);
        assert!(
            (ranked[0].score - preference.weights().distance).abs() < 1e-12,
            "{:?}: {}",
            preference,
            ranked[0].score
        );
    }
}

#[test]
fn test_distance_preset_orders_by_ascending_distance() {
    let ranker = Ranker::default();
    let places = vec![enriched("400", 400, 0, 0), enriched("100", 100, 0, 0), enriched("350", 350, 0, 0)];

    let ranked = ranker.rank(places, RankingPreference::Distance);
    assert_eq!(ids(&ranked), vec!["100", "350", "400"]);
}

#[test]
fn test_reviews_and_instagram_presets_disagree() {
    let ranker = Ranker::default();
    let batch = || vec![enriched("reviewed", 300, 10, 0), enriched("mentioned", 300, 0, 10)];

    let by_reviews = ranker.rank(batch(), RankingPreference::Reviews);
    assert_eq!(by_reviews[0].place.id, "reviewed");
    assert!(by_reviews[0].score > by_reviews[1].score);

    let by_mentions = ranker.rank(batch(), RankingPreference::Instagram);
    assert_eq!(by_mentions[0].place.id, "mentioned");
    assert!(by_mentions[0].score > by_mentions[1].score);
}

#[test]
fn test_output_length_is_capped() {
    let ranker = Ranker::default();

    for n in [0usize, 1, 10, 45, 46, 120] {
        let places = (0..n)
            .map(|i| enriched(&i.to_string(), (i as u32) * 37 % 1000, (i as u32) % 7, (i as u32) % 3))
            .collect();
        let ranked = ranker.rank(places, RankingPreference::Balanced);
        assert_eq!(ranked.len(), n.min(45));
    }
}

#[test]
fn test_unknown_preset_matches_balanced() {
    let ranker = Ranker::default();
    let batch = || {
        vec![
            enriched("a", 120, 40, 1),
            enriched("b", 800, 3, 9),
            enriched("c", 50, 0, 0),
            enriched("d", 450, 18, 4),
        ]
    };

    let unknown = ranker.rank(batch(), RankingPreference::from_name("popularity"));
    let balanced = ranker.rank(batch(), RankingPreference::Balanced);

    assert_eq!(ids(&unknown), ids(&balanced));
    for (u, b) in unknown.iter().zip(&balanced) {
        assert_eq!(u.score, b.score);
    }
}

#[test]
fn test_sorted_descending() {
    let ranker = Ranker::default();
    let places = vec![
        enriched("a", 120, 40, 1),
        enriched("b", 800, 3, 9),
        enriched("c", 50, 0, 0),
    ];

    let ranked = ranker.rank(places, RankingPreference::Balanced);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_missing_distance_is_far_away() {
    let p = place("x", None);
    assert_eq!(resolve_distance_m(&p, None), UNKNOWN_DISTANCE_M);

    let p = place("x", Some("약 300m"));
    assert_eq!(resolve_distance_m(&p, None), UNKNOWN_DISTANCE_M);

    let origin = GeoPoint { lat: 35.83, lng: 128.75 };
    assert_eq!(resolve_distance_m(&p, Some(&origin)), 0);
}

#[test]
fn test_core_name_rules_are_configurable() {
    let mut settings = MatchingSettings::default();
    settings.branch_suffixes = vec!["강남점".to_string()];
    settings.region_words = vec![];

    let rules = NameRules::new(&settings).unwrap();
    assert_eq!(rules.core_name("경산 버거 강남점"), "경산 버거");
    assert_eq!(rules.core_name("버거 본점"), "버거 본점");
}
