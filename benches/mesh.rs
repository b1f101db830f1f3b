//! Benchmarks for the mesh append and query hot paths

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voronoi_mesh_rs::{EdgeId, SeedId, SeedPair, Vector2, VoronoiEdge, VoronoiMesh};

const SEED_COUNT: usize = 1_000;

fn seeded_mesh() -> VoronoiMesh {
    let mut mesh = VoronoiMesh::new();
    let seeds = (0..SEED_COUNT)
        .map(|i| Vector2::new((i % 32) as f64, (i / 32) as f64))
        .collect();
    mesh.set_seeds(seeds);
    mesh.insert_cells();
    mesh
}

fn populated_mesh() -> VoronoiMesh {
    let mut mesh = seeded_mesh();
    for i in 0..SEED_COUNT - 1 {
        let a = SeedId::new(i);
        let b = SeedId::new(i + 1);
        let v0 = mesh.add_vertex(Vector2::new(i as f64, 0.5));
        let v1 = mesh.add_vertex(Vector2::new(i as f64 + 1.0, 0.5));
        let line = mesh.add_line(SeedPair::new(a, b));
        mesh.add_edge(VoronoiEdge::new(v0, v1, a, b, line));
        mesh.add_cell_neighbor(SeedPair::new(a, b)).unwrap();
    }
    mesh
}

fn bench_appends(c: &mut Criterion) {
    c.bench_function("append_chain_1k_seeds", |b| {
        b.iter(|| black_box(populated_mesh()))
    });

    c.bench_function("add_vertex_10k", |b| {
        b.iter(|| {
            let mut mesh = VoronoiMesh::new();
            for i in 0..10_000 {
                mesh.add_vertex(black_box(Vector2::new(i as f64, -(i as f64))));
            }
            black_box(mesh.vertex_count())
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let mesh = populated_mesh();

    c.bench_function("edge_line_resolution", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for i in 0..mesh.edge_count() {
                let edge = mesh.edge(EdgeId::new(i)).unwrap();
                let around = mesh.seeds_around_edge(&edge).unwrap();
                sum += around.a.0 + around.b.0;
            }
            black_box(sum)
        })
    });

    c.bench_function("validate_1k_seeds", |b| {
        b.iter(|| mesh.validate().unwrap())
    });
}

criterion_group!(benches, bench_appends, bench_queries);
criterion_main!(benches);
