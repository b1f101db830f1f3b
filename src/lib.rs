//! # voronoi-mesh-rs
//!
//! A pure Rust library for storing and querying the topology of 2D Voronoi
//! diagrams.
//!
//! Given a set of seed points, a Voronoi diagram partitions the plane into
//! regions, one per seed, each covering the part of the plane closest to
//! its seed. This crate is the mesh structure that holds such a diagram —
//! seeds, diagram vertices, boundary edges, seed-adjacency lines, per-seed
//! polygonal regions, and neighbor lists — together with the bookkeeping
//! mutators an external incremental construction algorithm drives and the
//! order-stable read surface consumers use afterwards. The geometric
//! construction itself (circumcenters, bisector intersections, clipping)
//! lives in the builder, not here.
//!
//! ## Features
//!
//! - Append-only, insertion-ordered storage with typed integer ids
//! - Symmetric-by-construction neighbor adjacency between regions
//! - Per-region boundary loops with materialized edge segments
//! - Out-of-range ids fail loudly, never silently default
//! - Post-build consistency audit (`validate`) over all cross-references
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voronoi_mesh_rs::{SeedId, SeedPair, Vector2, VoronoiMesh};
//!
//! let mut mesh = VoronoiMesh::new();
//! mesh.set_seeds(vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)]);
//! mesh.insert_cells();
//!
//! // A builder appends topology...
//! let v = mesh.add_vertex(Vector2::new(5.0, 3.0));
//! mesh.add_region_point(SeedId::new(0), v)?;
//! mesh.add_cell_neighbor(SeedPair::new(SeedId::new(0), SeedId::new(1)))?;
//!
//! // ...and consumers read it back in insertion order.
//! for vertex in mesh.vertices() {
//!     println!("vertex at {}", vertex);
//! }
//! # Ok::<(), voronoi_mesh_rs::MeshError>(())
//! ```
//!
//! ## Architecture
//!
//! - `VoronoiMesh` - the central mesh structure owning all collections
//! - `IdStore` - the generic append-only arena behind the id-indexed lists
//! - `SeedId` / `VertexId` / `LineId` / `EdgeId` - typed insertion-order ids
//! - `Region` - one seed's polygon as an ordered vertex-id loop
//!
//! Construction is single-writer and strictly phased: `set_seeds`, then
//! `insert_cells`, then append mutators; once the builder finishes, the
//! mesh is read concurrently without synchronization because nothing
//! mutates it anymore.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod mesh;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{MeshError, Result};
pub use mesh::{Region, RegionFlags, SeedPair, VoronoiEdge, VoronoiMesh};
pub use store::IdStore;
pub use types::{BoundingBox2D, EdgeId, EntityId, LineId, SeedId, Vector2, VertexId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
