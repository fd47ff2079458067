use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use prime_chess::game_state::game_state::GameState;
use prime_chess::move_generation::perft::perft;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            let mut warmup = game.clone();
            let nodes = perft(&mut warmup, depth).expect("perft should run");
            assert_eq!(nodes, *expected, "node mismatch for {} depth {}", case.name, depth);

            group.throughput(Throughput::Elements(*expected));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, &depth| {
                    let mut bench_game = game.clone();
                    b.iter(|| black_box(perft(&mut bench_game, black_box(depth)).expect("perft should run")));
                },
            );
        }
    }

    group.finish();
}

fn bench_four_player(c: &mut Criterion) {
    let game = GameState::four_player().expect("four-player start should build");
    c.bench_function("four_player_perft_d2", |b| {
        let mut bench_game = game.clone();
        b.iter(|| black_box(perft(&mut bench_game, 2).expect("perft should run")));
    });
}

criterion_group!(legal_move_benches, bench_perft, bench_four_player);
criterion_main!(legal_move_benches);
