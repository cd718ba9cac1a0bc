use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use tourney_draw::{
    DrawConfig, PointsEntry, build_placements_from_points, build_round_table_sizes,
    plan_category_draw,
    roster::{Block, Category, Competitor, Game, PointsOrder, ScoringType},
};

/// Helper to create a roster of `n` competitors spread over clubs of four
fn roster(n: usize) -> Vec<Competitor> {
    (1..=n as i64)
        .map(|id| Competitor::new(id, format!("Player {id}"), format!("Club {}", id / 4), 1))
        .collect()
}

/// Benchmark a full three-block category draw at several roster sizes
fn bench_category_draw(c: &mut Criterion) {
    let category = Category::new(1, "Open");
    let games = vec![Game::new(1, "Riichi", ScoringType::Both, PointsOrder::Desc)];
    let blocks: Vec<_> = (1..=3).map(|n| Block::new(n, 1, 1)).collect();
    let config = DrawConfig::default();

    let mut group = c.benchmark_group("category_draw");
    for n in [16, 40, 101] {
        let competitors = roster(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &competitors, |b, competitors| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                plan_category_draw(&category, competitors, &blocks, &games, &config, &mut rng)
                    .expect("draw")
            });
        });
    }
    group.finish();
}

/// Benchmark round table size planning
fn bench_table_sizes(c: &mut Criterion) {
    let config = DrawConfig::default();
    c.bench_function("table_sizes_101", |b| {
        b.iter(|| build_round_table_sizes(black_box(101), &config));
    });
}

/// Benchmark placements for a five-seat table with ties
fn bench_placements(c: &mut Criterion) {
    let entries = [
        PointsEntry::new(1, 40.0),
        PointsEntry::new(2, 40.0),
        PointsEntry::new(3, 25.0),
        PointsEntry::new(4, 10.0),
        PointsEntry::new(5, 10.0),
    ];

    c.bench_function("placements_5_seats", |b| {
        b.iter(|| build_placements_from_points(black_box(&entries), PointsOrder::Desc));
    });
}

criterion_group!(benches, bench_category_draw, bench_table_sizes, bench_placements);
criterion_main!(benches);
