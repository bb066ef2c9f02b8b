//! Benchmarks for Laplacian assembly.
//!
//! Run with: `cargo bench --bench laplacian_bench`
//!
//! Measures the 2D Kronecker-sum assembly and the cost of a boundary update,
//! which re-assembles the whole operator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cartmesh::operators::kronecker_sum;
#[cfg(feature = "parallel")]
use cartmesh::operators::kronecker_sum_parallel;
use cartmesh::{Axis, CartesianMesh, MeshScheme, Side};

fn square_mesh(n: usize) -> CartesianMesh {
    CartesianMesh::new(
        2,
        &[n, n],
        &[(0.0, 1.0), (0.0, 1.0)],
        MeshScheme::CellCentered,
    )
    .unwrap()
}

/// Kronecker-sum assembly at different grid sizes.
fn bench_kronecker_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("kronecker_sum");
    group.sample_size(20);

    for n in [8, 16, 32, 48] {
        let mesh = square_mesh(n);
        let dxx = mesh.axis(Axis::X).unwrap().second_derivative();
        let dyy = mesh.axis(Axis::Y).unwrap().second_derivative();
        let unknowns = n * n;

        group.bench_with_input(
            BenchmarkId::new("serial", format!("{}x{}_{}", n, n, unknowns)),
            &unknowns,
            |b, _| b.iter(|| kronecker_sum(black_box(&dxx), black_box(&dyy))),
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", format!("{}x{}_{}", n, n, unknowns)),
            &unknowns,
            |b, _| b.iter(|| kronecker_sum_parallel(black_box(&dxx), black_box(&dyy))),
        );
    }

    group.finish();
}

/// A single boundary update, including Laplacian re-assembly.
fn bench_boundary_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_update");
    group.sample_size(20);

    for n in [8, 16, 32] {
        let mut mesh = square_mesh(n);

        group.bench_with_input(BenchmarkId::new("dirichlet", n), &n, |b, _| {
            b.iter(|| {
                mesh.set_dirichlet_boundary(black_box(Side::Left), black_box(30.0))
                    .unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("neumann", n), &n, |b, _| {
            b.iter(|| {
                mesh.set_neumann_boundary(black_box(Side::Top), black_box(-10.0))
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kronecker_sum, bench_boundary_update);
criterion_main!(benches);
