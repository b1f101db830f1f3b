/// Mesh bookkeeping diagnostic: replay a small builder sequence by hand
/// and print the resulting topology from every query angle.

use anyhow::Result;
use voronoi_mesh_rs::{SeedId, SeedPair, Vector2, VoronoiEdge, VoronoiMesh};

fn main() -> Result<()> {
    let mut mesh = VoronoiMesh::new();

    // Three seeds in a triangle inside a 10x10 boundary.
    mesh.set_origin(Vector2::new(0.0, 0.0));
    mesh.set_boundary(Vector2::new(10.0, 10.0));
    mesh.set_seeds(vec![
        Vector2::new(2.0, 2.0),
        Vector2::new(8.0, 2.0),
        Vector2::new(5.0, 8.0),
    ]);
    mesh.insert_cells();
    println!("1. Seeds loaded: {} inside {}", mesh.num_seeds(), mesh.bounding_box());

    // Hand-computed topology for the triangle: one interior vertex where
    // the three bisectors meet, plus the boundary-clipped corners.
    let center = mesh.add_vertex(Vector2::new(5.0, 4.125));
    let left = mesh.add_vertex(Vector2::new(0.0, 5.0));
    let right = mesh.add_vertex(Vector2::new(10.0, 5.0));
    let bottom = mesh.add_vertex(Vector2::new(5.0, 0.0));
    println!("2. Vertices appended: {}", mesh.vertex_count());

    let pairs = [
        SeedPair::new(SeedId::new(0), SeedId::new(1)),
        SeedPair::new(SeedId::new(0), SeedId::new(2)),
        SeedPair::new(SeedId::new(1), SeedId::new(2)),
    ];
    for pair in pairs {
        let line = mesh.add_line(pair);
        mesh.add_cell_neighbor(pair)?;
        let (left_v, right_v) = match pair.a.0 + pair.b.0 {
            1 => (center, bottom), // 0-1 bisector runs down
            2 => (center, left),   // 0-2 bisector runs left
            _ => (center, right),  // 1-2 bisector runs right
        };
        mesh.add_edge(VoronoiEdge::new(left_v, right_v, pair.a, pair.b, line));
    }
    println!(
        "3. Topology: {} lines, {} edges",
        mesh.line_count(),
        mesh.edge_count()
    );

    for (i, edge) in mesh.edges().enumerate() {
        let around = mesh.seeds_around_edge(edge)?;
        println!("   edge {}: {}  seeds around: {}", i, edge, around);
    }

    for seed in 0..mesh.num_seeds() {
        let id = SeedId::new(seed);
        let neighbors: Vec<String> = mesh
            .neighbor_ids(id)?
            .iter()
            .map(|n| n.to_string())
            .collect();
        println!("   {} neighbors: [{}]", id, neighbors.join(", "));
    }

    // Region 0's clipped polygon.
    for vertex in [left, center, bottom] {
        mesh.add_region_point(SeedId::new(0), vertex)?;
    }
    mesh.build_region_edges(SeedId::new(0))?;
    mesh.mark_boundary_region(SeedId::new(0))?;
    println!(
        "4. Region s0: {} points, {} segments, area {:.3}, perimeter {:.3}",
        mesh.region(SeedId::new(0))?.point_count(),
        mesh.region(SeedId::new(0))?.segments().len(),
        mesh.region_area(SeedId::new(0))?,
        mesh.region_perimeter(SeedId::new(0))?,
    );

    mesh.validate()?;
    println!("5. validate() OK");

    Ok(())
}
