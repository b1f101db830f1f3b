//! Edge and seed-pair records of the diagram topology

use crate::types::{LineId, SeedId, VertexId};
use std::fmt;

/// An ordered pair of seed ids whose regions share a boundary
///
/// This is the "line" entry of the diagram — the dual of a Delaunay edge.
/// The mesh stores each pair verbatim; keeping the list free of duplicate
/// unordered pairs within a construction pass is the builder's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedPair {
    pub a: SeedId,
    pub b: SeedId,
}

impl SeedPair {
    /// Create a new seed pair
    pub const fn new(a: SeedId, b: SeedId) -> Self {
        SeedPair { a, b }
    }

    /// Check whether the pair mentions the given seed
    pub fn contains(&self, seed: SeedId) -> bool {
        self.a == seed || self.b == seed
    }

    /// The pair's other seed, `None` if `seed` is not part of the pair
    pub fn other(&self, seed: SeedId) -> Option<SeedId> {
        if seed == self.a {
            Some(self.b)
        } else if seed == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// The same adjacency with the seeds swapped
    pub fn reversed(&self) -> SeedPair {
        SeedPair {
            a: self.b,
            b: self.a,
        }
    }
}

impl fmt::Display for SeedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// One Voronoi boundary segment between two diagram vertices
///
/// The endpoints are vertex ids into the mesh's vertex list; the record is
/// tagged with the two seeds it separates and with the line entry encoding
/// that seed pair. All ids are builder-supplied and taken on trust at insert
/// time; `VoronoiMesh::validate` cross-checks them after a build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoronoiEdge {
    /// Left endpoint
    pub left_vertex: VertexId,
    /// Right endpoint
    pub right_vertex: VertexId,
    /// Seed on the left side of the segment
    pub left_seed: SeedId,
    /// Seed on the right side of the segment
    pub right_seed: SeedId,
    /// The line entry recording the `(left_seed, right_seed)` adjacency
    pub line: LineId,
}

impl VoronoiEdge {
    /// Create a new edge record
    pub const fn new(
        left_vertex: VertexId,
        right_vertex: VertexId,
        left_seed: SeedId,
        right_seed: SeedId,
        line: LineId,
    ) -> Self {
        VoronoiEdge {
            left_vertex,
            right_vertex,
            left_seed,
            right_seed,
            line,
        }
    }

    /// The two seeds this edge separates, as a pair
    pub fn seed_pair(&self) -> SeedPair {
        SeedPair::new(self.left_seed, self.right_seed)
    }
}

impl fmt::Display for VoronoiEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} [{}|{}] via {}",
            self.left_vertex, self.right_vertex, self.left_seed, self.right_seed, self.line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_contains_and_other() {
        let pair = SeedPair::new(SeedId::new(2), SeedId::new(5));
        assert!(pair.contains(SeedId::new(2)));
        assert!(pair.contains(SeedId::new(5)));
        assert!(!pair.contains(SeedId::new(3)));

        assert_eq!(pair.other(SeedId::new(2)), Some(SeedId::new(5)));
        assert_eq!(pair.other(SeedId::new(5)), Some(SeedId::new(2)));
        assert_eq!(pair.other(SeedId::new(9)), None);
    }

    #[test]
    fn test_pair_reversed() {
        let pair = SeedPair::new(SeedId::new(0), SeedId::new(1));
        assert_eq!(pair.reversed(), SeedPair::new(SeedId::new(1), SeedId::new(0)));
    }

    #[test]
    fn test_edge_seed_pair() {
        let edge = VoronoiEdge::new(
            VertexId::new(0),
            VertexId::new(1),
            SeedId::new(3),
            SeedId::new(4),
            LineId::new(2),
        );
        assert_eq!(edge.seed_pair(), SeedPair::new(SeedId::new(3), SeedId::new(4)));
    }
}
