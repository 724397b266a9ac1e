use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bitchess::game_state::board::Board;
use bitchess::search::negamax::{SearchConfig, SearchEngine};

const POSITIONS: &[(&str, &str)] = &[
    ("start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for depth in [2u8, 3] {
        for (name, fen) in POSITIONS {
            let board = Board::from_fen(fen).expect("benchmark FEN should parse");
            let config = SearchConfig {
                max_depth: depth,
                quiescence: true,
                tt_size_log2: 18,
            };

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{name}_d{depth}")),
                &board,
                |b, board| {
                    b.iter(|| {
                        // Fresh engine per run so table hits do not skew timing.
                        let mut engine = SearchEngine::new(config);
                        let mut scratch = board.clone();
                        black_box(engine.best_move(&mut scratch))
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
