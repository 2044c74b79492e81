// Criterion benchmarks for Place Rank

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use place_rank::core::{
    distance::haversine_distance,
    matcher::PlaceMatcher,
    ranking::{EnrichedPlace, Ranker, RankingPreference},
    social_match::SocialMatcher,
};
use place_rank::models::{MentionRecord, Place};

const NAMES: [&str; 8] = [
    "교촌치킨 영남대점",
    "피자스쿨 경산점",
    "라멘하우스",
    "카페 모먼트",
    "맘스터치 영대점",
    "스시야마다",
    "김밥천국 본점",
    "버거킹 경산점",
];

fn create_place(id: usize) -> Place {
    Place {
        id: id.to_string(),
        place_name: format!("{} {}", NAMES[id % NAMES.len()], id),
        category_name: "음식점".to_string(),
        phone: None,
        address_name: format!("경북 경산시 대동 {}", id),
        road_address_name: Some(format!("경북 경산시 대학로 {}", id)),
        x: "128.75".to_string(),
        y: "35.83".to_string(),
        place_url: String::new(),
        distance: Some(((id * 37) % 1500).to_string()),
    }
}

fn create_record(id: usize) -> MentionRecord {
    MentionRecord {
        id: id as i64,
        name: NAMES[id % NAMES.len()].to_string(),
        address: format!("경북 경산시 중방동 {}", id),
        sns_mentions: (id * 13 % 200) as i64,
        rating: 4.2,
        review_count: (id * 7 % 500) as i64,
        tags: vec!["맛집".to_string()],
        description: String::new(),
        source: "instagram".to_string(),
    }
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(35.8362),
                black_box(128.7530),
                black_box(35.8251),
                black_box(128.7411),
            )
        });
    });
}

fn bench_name_similarity(c: &mut Criterion) {
    let matcher = PlaceMatcher::default();

    c.bench_function("name_similarity", |b| {
        b.iter(|| matcher.name_similarity(black_box("교촌치킨 영남대점"), black_box("교촌 치킨 영대점")));
    });

    c.bench_function("address_similarity", |b| {
        b.iter(|| {
            matcher.address_similarity(
                black_box("경북 경산시 대동 214-3"),
                black_box("경상북도 경산시 대동 214"),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::default();
    let mut group = c.benchmark_group("ranking");

    for place_count in [10, 45, 100, 500].iter() {
        let places: Vec<EnrichedPlace> = (0..*place_count)
            .map(|i| EnrichedPlace {
                place: create_place(i),
                review_count: (i * 31 % 900) as u32,
                mention_count: (i * 11 % 40) as u32,
                distance_m: (i * 37 % 1500) as u32,
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_balanced", place_count),
            place_count,
            |b, _| {
                b.iter(|| ranker.rank(black_box(places.clone()), RankingPreference::Balanced));
            },
        );
    }

    group.finish();
}

fn bench_smart_match(c: &mut Criterion) {
    let matcher = SocialMatcher::default();
    let places: Vec<Place> = (0..45).map(create_place).collect();
    let records: Vec<MentionRecord> = (0..200).map(create_record).collect();

    c.bench_function("smart_match_45_places_200_records", |b| {
        b.iter(|| matcher.match_all(black_box(&places), black_box(&records)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_name_similarity,
    bench_ranking,
    bench_smart_match
);

criterion_main!(benches);
