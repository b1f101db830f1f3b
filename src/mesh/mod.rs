//! The Voronoi diagram mesh structure
//!
//! `VoronoiMesh` owns every collection of the diagram topology — seeds,
//! vertices, seed-pair lines, boundary edges, per-seed regions, and neighbor
//! lists — and exposes the append/assign primitives an external incremental
//! builder drives, plus the order-stable read surface consumers use on the
//! finished diagram. The mesh does no geometry of its own: vertex
//! coordinates, adjacency decisions, and clipping all happen in the builder;
//! the mesh guarantees the structural bookkeeping.

pub mod edge;
pub mod region;
mod validation;

pub use edge::{SeedPair, VoronoiEdge};
pub use region::{Region, RegionFlags};

use crate::error::{MeshError, Result};
use crate::store::IdStore;
use crate::types::{BoundingBox2D, EdgeId, EntityId, LineId, SeedId, Vector2, VertexId};

/// Mesh structure holding the topology of a planar Voronoi diagram
///
/// Construction protocol: `set_seeds`, then `insert_cells` (sizes the
/// per-seed collections), then any sequence of the append mutators. After
/// the builder finishes, the mesh is read-only by convention; the `&mut
/// self` / `&self` split on the methods enforces the single-writer,
/// build-then-read phase separation.
#[derive(Debug, Clone, Default)]
pub struct VoronoiMesh {
    seeds: Vec<Vector2>,
    boundary: Vector2,
    origin: Vector2,
    vertices: IdStore<VertexId, Vector2>,
    lines: IdStore<LineId, SeedPair>,
    edges: IdStore<EdgeId, VoronoiEdge>,
    regions: Vec<Region>,
    neighbors: Vec<Vec<SeedId>>,
}

impl VoronoiMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        VoronoiMesh::default()
    }

    // ==================== Seed & boundary state ====================

    /// Replace the seed set; seed id equals position in `seeds`
    ///
    /// No bounds or duplicate checks happen here — degenerate seed
    /// coordinates are the builder's problem. The per-seed region and
    /// neighbor collections keep their old size until the next
    /// `insert_cells`.
    pub fn set_seeds(&mut self, seeds: Vec<Vector2>) {
        self.seeds = seeds;
    }

    /// Record the size extent of the diagram's bounding rectangle
    pub fn set_boundary(&mut self, size: Vector2) {
        self.boundary = size;
    }

    /// Record the origin of the diagram's bounding rectangle
    pub fn set_origin(&mut self, origin: Vector2) {
        self.origin = origin;
    }

    /// The recorded boundary size extent
    pub fn boundary(&self) -> Vector2 {
        self.boundary
    }

    /// The recorded boundary origin
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// The boundary rectangle `[origin, origin + size]`
    pub fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_origin_size(self.origin, self.boundary)
    }

    /// The number of seeds
    pub fn num_seeds(&self) -> usize {
        self.seeds.len()
    }

    /// The seed point for a valid id
    pub fn seed(&self, id: SeedId) -> Result<Vector2> {
        self.seeds
            .get(id.index())
            .copied()
            .ok_or(MeshError::SeedOutOfRange {
                id: id.index(),
                count: self.seeds.len(),
            })
    }

    /// All seeds in id order
    pub fn seeds(&self) -> impl Iterator<Item = &Vector2> {
        self.seeds.iter()
    }

    // ==================== Topology mutation ====================

    /// (Re)allocate one empty region and one empty neighbor list per seed
    ///
    /// Call once per construction pass, after `set_seeds`. Called before
    /// any seeds exist it allocates zero slots, so later per-seed mutators
    /// fail out-of-range instead of writing anywhere stale.
    pub fn insert_cells(&mut self) {
        self.regions = vec![Region::new(); self.seeds.len()];
        self.neighbors = vec![Vec::new(); self.seeds.len()];
    }

    /// Append a diagram vertex, returning its id (monotonic from 0)
    pub fn add_vertex(&mut self, point: Vector2) -> VertexId {
        self.vertices.insert(point)
    }

    /// Append a seed-pair adjacency line, returning its id
    pub fn add_line(&mut self, pair: SeedPair) -> LineId {
        self.lines.insert(pair)
    }

    /// Append a boundary edge record, returning its id
    pub fn add_edge(&mut self, edge: VoronoiEdge) -> EdgeId {
        self.edges.insert(edge)
    }

    /// Record the two seeds as neighbors of each other
    ///
    /// Symmetric by construction: `pair.b` lands in `pair.a`'s list and
    /// vice versa. Duplicate pairs are not filtered — avoiding repeat calls
    /// for the same pair is the builder's job.
    pub fn add_cell_neighbor(&mut self, pair: SeedPair) -> Result<()> {
        self.check_neighbor_slot(pair.a)?;
        self.check_neighbor_slot(pair.b)?;
        self.neighbors[pair.a.index()].push(pair.b);
        self.neighbors[pair.b.index()].push(pair.a);
        Ok(())
    }

    /// Append a vertex id to the named region's boundary loop
    ///
    /// Call order is significant: it defines the polygon winding. The
    /// vertex id is taken on trust; `validate` cross-checks it later.
    pub fn add_region_point(&mut self, seed: SeedId, vertex: VertexId) -> Result<()> {
        self.region_slot(seed)?.add_point_id(vertex);
        Ok(())
    }

    /// Materialize the named region's boundary segments from its loop
    pub fn build_region_edges(&mut self, seed: SeedId) -> Result<()> {
        self.region_slot(seed)?.build_edges();
        Ok(())
    }

    /// Clear only the named region's boundary loop
    ///
    /// Everything else — seeds, vertices, lines, edges, other regions,
    /// neighbor lists — stays untouched. Used by builders that must retry
    /// a single region's boundary.
    pub fn clear_region(&mut self, seed: SeedId) -> Result<()> {
        self.region_slot(seed)?.clear_points();
        Ok(())
    }

    /// Flag the named region as clipped against the diagram boundary
    pub fn mark_boundary_region(&mut self, seed: SeedId) -> Result<()> {
        self.region_slot(seed)?.mark_boundary();
        Ok(())
    }

    /// Clear vertices, lines, and edges for a new construction pass
    ///
    /// Seeds are kept; seed state is replaced only through `set_seeds`.
    /// Region loops and neighbor lists are cleared through `clear_region`
    /// per seed or a fresh `insert_cells` — the builder combines the calls
    /// appropriate to its restart.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.lines.clear();
        self.edges.clear();
    }

    /// Clear the line list only
    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Clear the edge list only
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Clear the vertex list only
    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    // ==================== Query surface ====================

    /// Number of stored vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of stored edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertex for a valid id
    pub fn vertex(&self, id: VertexId) -> Result<Vector2> {
        self.vertices
            .get(id)
            .copied()
            .ok_or(MeshError::VertexOutOfRange {
                id: id.index(),
                count: self.vertices.len(),
            })
    }

    /// The seed-pair line for a valid id
    pub fn line(&self, id: LineId) -> Result<SeedPair> {
        self.lines
            .get(id)
            .copied()
            .ok_or(MeshError::LineOutOfRange {
                id: id.index(),
                count: self.lines.len(),
            })
    }

    /// The edge record for a valid id
    pub fn edge(&self, id: EdgeId) -> Result<VoronoiEdge> {
        self.edges
            .get(id)
            .copied()
            .ok_or(MeshError::EdgeOutOfRange {
                id: id.index(),
                count: self.edges.len(),
            })
    }

    /// The two seed ids an edge separates
    pub fn edge_ends(&self, id: EdgeId) -> Result<SeedPair> {
        Ok(self.edge(id)?.seed_pair())
    }

    /// The line id an edge is associated with
    pub fn edge_line_id(&self, id: EdgeId) -> Result<LineId> {
        Ok(self.edge(id)?.line)
    }

    /// The two seeds around an edge, resolved through its line entry
    pub fn seeds_around_edge(&self, edge: &VoronoiEdge) -> Result<SeedPair> {
        self.line(edge.line)
    }

    /// The region polygon for a seed id
    pub fn region(&self, seed: SeedId) -> Result<&Region> {
        let count = self.seeds.len();
        if seed.index() >= count {
            return Err(MeshError::SeedOutOfRange {
                id: seed.index(),
                count,
            });
        }
        self.regions
            .get(seed.index())
            .ok_or(MeshError::RegionNotAllocated {
                id: seed.index(),
                count: self.regions.len(),
            })
    }

    /// The neighbor seed ids of a seed, in recording order
    pub fn neighbor_ids(&self, seed: SeedId) -> Result<&[SeedId]> {
        let count = self.seeds.len();
        if seed.index() >= count {
            return Err(MeshError::SeedOutOfRange {
                id: seed.index(),
                count,
            });
        }
        self.neighbors
            .get(seed.index())
            .map(Vec::as_slice)
            .ok_or(MeshError::RegionNotAllocated {
                id: seed.index(),
                count: self.neighbors.len(),
            })
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vector2> {
        self.vertices.iter()
    }

    /// All lines in insertion order
    pub fn lines(&self) -> impl Iterator<Item = &SeedPair> {
        self.lines.iter()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &VoronoiEdge> {
        self.edges.iter()
    }

    /// All allocated regions in seed id order
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    // ==================== Derived region geometry ====================

    /// Area of a region polygon (shoelace over the resolved loop)
    ///
    /// Degenerate loops with fewer than three points have zero area. Fails
    /// if the region references a vertex id outside the vertex list.
    pub fn region_area(&self, seed: SeedId) -> Result<f64> {
        let points = self.resolved_loop(seed)?;
        if points.len() < 3 {
            return Ok(0.0);
        }
        let mut area_sum = 0.0;
        for i in 0..points.len() {
            let p1 = points[i];
            let p2 = points[(i + 1) % points.len()];
            area_sum += p1.cross(&p2);
        }
        Ok(0.5 * area_sum.abs())
    }

    /// Perimeter of a region polygon, closing the loop
    pub fn region_perimeter(&self, seed: SeedId) -> Result<f64> {
        let points = self.resolved_loop(seed)?;
        if points.len() < 2 {
            return Ok(0.0);
        }
        let mut perimeter_sum = 0.0;
        for i in 0..points.len() {
            let p1 = points[i];
            let p2 = points[(i + 1) % points.len()];
            perimeter_sum += p1.distance(&p2);
        }
        Ok(perimeter_sum)
    }

    // ==================== Internal helpers ====================

    fn resolved_loop(&self, seed: SeedId) -> Result<Vec<Vector2>> {
        self.region(seed)?
            .point_ids()
            .iter()
            .map(|&vertex| self.vertex(vertex))
            .collect()
    }

    fn region_slot(&mut self, seed: SeedId) -> Result<&mut Region> {
        let count = self.seeds.len();
        if seed.index() >= count {
            return Err(MeshError::SeedOutOfRange {
                id: seed.index(),
                count,
            });
        }
        let allocated = self.regions.len();
        self.regions
            .get_mut(seed.index())
            .ok_or(MeshError::RegionNotAllocated {
                id: seed.index(),
                count: allocated,
            })
    }

    fn check_neighbor_slot(&self, seed: SeedId) -> Result<()> {
        let count = self.seeds.len();
        if seed.index() >= count {
            return Err(MeshError::SeedOutOfRange {
                id: seed.index(),
                count,
            });
        }
        if seed.index() >= self.neighbors.len() {
            return Err(MeshError::RegionNotAllocated {
                id: seed.index(),
                count: self.neighbors.len(),
            });
        }
        Ok(())
    }
}
