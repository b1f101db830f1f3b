//! Post-build consistency audit
//!
//! The mutators take every id on trust so that construction stays a plain
//! sequence of O(1) appends; this module is the counterweight. After a
//! build pass, `validate` walks the whole structure and reports the first
//! cross-reference that does not hold.

use super::VoronoiMesh;
use crate::error::{MeshError, Result};
use crate::types::{EntityId, SeedId};
use ahash::AHashSet;

impl VoronoiMesh {
    /// Cross-check the whole mesh after a construction pass
    ///
    /// Verifies that every edge's seed, vertex, and line ids are in range,
    /// that every line's seed ids are in range, that every region loop
    /// references existing vertices, and that the neighbor lists are
    /// symmetric. Symmetric duplicate entries are tolerated; a one-sided
    /// entry is not.
    pub fn validate(&self) -> Result<()> {
        let seed_count = self.seeds.len();
        let vertex_count = self.vertices.len();
        let line_count = self.lines.len();

        let seed_in_range = |seed: SeedId| -> Result<()> {
            if seed.index() >= seed_count {
                return Err(MeshError::SeedOutOfRange {
                    id: seed.index(),
                    count: seed_count,
                });
            }
            Ok(())
        };

        for pair in self.lines.iter() {
            seed_in_range(pair.a)?;
            seed_in_range(pair.b)?;
        }

        for edge in self.edges.iter() {
            seed_in_range(edge.left_seed)?;
            seed_in_range(edge.right_seed)?;
            for vertex in [edge.left_vertex, edge.right_vertex] {
                if vertex.index() >= vertex_count {
                    return Err(MeshError::VertexOutOfRange {
                        id: vertex.index(),
                        count: vertex_count,
                    });
                }
            }
            if edge.line.index() >= line_count {
                return Err(MeshError::LineOutOfRange {
                    id: edge.line.index(),
                    count: line_count,
                });
            }
        }

        for (seed, region) in self.regions.iter().enumerate() {
            for vertex in region.point_ids() {
                if vertex.index() >= vertex_count {
                    return Err(MeshError::DanglingRegionPoint {
                        seed,
                        vertex: vertex.index(),
                    });
                }
            }
        }

        // Symmetry: every recorded (a, b) entry needs its (b, a) mirror.
        let mut entries: AHashSet<(usize, usize)> = AHashSet::new();
        for (a, list) in self.neighbors.iter().enumerate() {
            for b in list {
                seed_in_range(*b)?;
                entries.insert((a, b.index()));
            }
        }
        for &(a, b) in &entries {
            if !entries.contains(&(b, a)) {
                return Err(MeshError::AsymmetricNeighbors { a, b });
            }
        }

        Ok(())
    }
}
