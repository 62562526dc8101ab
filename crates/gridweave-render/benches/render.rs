//! Micro-benchmarks for full-table rendering.
//!
//! Measures the render pipeline on a representative 9×9 puzzle, with and
//! without candidate synthesis.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench render
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use gridweave_core::{Board, find_conflicts};
use gridweave_render::{ConflictHighlight, FilledValues, RenderOptions, render};

const PUZZLE: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

fn puzzle_board() -> Board {
    Board::decode(PUZZLE, 3, 3).expect("benchmark puzzle decodes")
}

fn bench_render_values(c: &mut Criterion) {
    let board = puzzle_board();
    let options = RenderOptions::default();

    c.bench_function("render_values", |b| {
        b.iter(|| {
            let filled = FilledValues::styled(&board, "bold");
            hint::black_box(render(&board, &[&filled], &options))
        });
    });
}

fn bench_render_candidates(c: &mut Criterion) {
    let board = puzzle_board();
    let options = RenderOptions {
        include_candidates: true,
        candidate_style: Some("green not bold".into()),
        ..RenderOptions::default()
    };

    c.bench_function("render_candidates", |b| {
        b.iter(|| {
            let filled = FilledValues::styled(&board, "bold");
            let conflicts = ConflictHighlight::new(&board, find_conflicts(&board));
            hint::black_box(render(&board, &[&conflicts, &filled], &options))
        });
    });
}

criterion_group!(benches, bench_render_values, bench_render_candidates);
criterion_main!(benches);
