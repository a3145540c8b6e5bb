use criterion::{criterion_group, criterion_main, Criterion};

use holdem_odds::core::{Card, Classify};
use holdem_odds::holdem::{Game, Pocket};

fn card(value: u8, suit: u8) -> Card {
    Card::try_from_raw(value, suit).unwrap()
}

fn bench_classify_seven(c: &mut Criterion) {
    let cards = vec![
        card(13, 0),
        card(13, 3),
        card(14, 0),
        card(12, 0),
        card(11, 0),
        card(2, 1),
        card(7, 2),
    ];
    c.bench_function("classify seven cards", |b| {
        b.iter(|| std::hint::black_box(&cards).category())
    });
}

fn bench_flop_evaluation(c: &mut Criterion) {
    let pocket = Pocket::new(card(13, 0), card(13, 3)).unwrap();
    let mut game = Game::new(pocket, 4).unwrap();
    game.open_flop([card(14, 0), card(12, 0), card(11, 0)])
        .unwrap();
    c.bench_function("evaluate flop stage", |b| {
        b.iter(|| std::hint::black_box(&game).evaluate())
    });
}

fn bench_river_evaluation(c: &mut Criterion) {
    let pocket = Pocket::new(card(13, 0), card(13, 3)).unwrap();
    let mut game = Game::new(pocket, 4).unwrap();
    game.open_flop([card(14, 0), card(12, 0), card(11, 0)])
        .unwrap();
    game.open_turn(card(2, 1)).unwrap();
    game.open_river(card(7, 2)).unwrap();
    c.bench_function("evaluate river stage", |b| {
        b.iter(|| std::hint::black_box(&game).evaluate())
    });
}

criterion_group!(
    benches,
    bench_classify_seven,
    bench_flop_evaluation,
    bench_river_evaluation
);
criterion_main!(benches);
