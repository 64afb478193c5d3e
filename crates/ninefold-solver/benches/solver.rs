//! Micro-benchmarks for the backtracking search engine.
//!
//! Measures `solve` on representative grids: an almost-complete puzzle, an
//! empty grid, and a hard puzzle that needs a few thousand attempts.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_core::{Digit, DigitGrid, Position};
use ninefold_solver::BacktrackSolver;

fn almost_complete_grid() -> DigitGrid {
    "
        53_ 678 912
        672 19_ 348
        _98 342 567
        859 761 423
        426 8_3 791
        713 924 856
        961 537 2_4
        287 419 635
        345 286 17_
    "
    .parse()
    .unwrap()
}

fn trivial_grid() -> DigitGrid {
    let mut grid = DigitGrid::new();
    grid[Position::new(0, 0)] = Some(Digit::D5);
    grid
}

fn hard_grid() -> DigitGrid {
    "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    "
    .parse()
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("almost_complete", almost_complete_grid()),
        ("trivial", trivial_grid()),
        ("hard", hard_grid()),
    ];

    let solver = BacktrackSolver::with_attempt_limit(1_000_000);

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let solved = solver.solve(grid);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_abort(c: &mut Criterion) {
    // Unsolvable grid with the contradiction at the end of the scan order;
    // the default limit bounds the work.
    let grid: DigitGrid = "
        ___ ___ __9
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        123 456 78_
    "
    .parse()
    .unwrap();

    let solver = BacktrackSolver::new();

    c.bench_with_input(BenchmarkId::new("solve", "aborted"), &grid, |b, grid| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| {
                let solved = solver.solve(grid);
                hint::black_box(solved)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve, bench_abort);
criterion_main!(benches);
