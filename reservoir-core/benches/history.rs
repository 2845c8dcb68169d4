//! Cost of a full `compute_history` run.
//!
//! Time scales with `nsteps * nx * ny`; memory with `(nsteps + 1) * nx * ny`
//! since every frame is kept.
//!
//! ```bash
//! cargo bench -p reservoir-core --bench history
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use reservoir_core::{DiffusionSolver, SolverConfig};

fn bench_default_run(c: &mut Criterion) {
    let solver = DiffusionSolver::new(SolverConfig::default().with_injection_rate(1.0))
        .expect("default config is valid");

    c.bench_function("history/default_50x50x200", |b| {
        b.iter(|| black_box(solver.compute_history()))
    });
}

fn bench_grid_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("history/grid_scaling");
    for n in [25usize, 50, 100] {
        let solver = DiffusionSolver::new(SolverConfig::default().with_grid(n, n).with_nsteps(50))
            .expect("valid config");
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.compute_history()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_default_run, bench_grid_scaling);
criterion_main!(benches);
