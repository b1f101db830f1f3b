//! Error types for the voronoi-mesh-rs library

use thiserror::Error;

/// Main error type for mesh operations
///
/// Every indexed lookup fails loudly with the out-of-range variant for its
/// collection; the mesh never substitutes a default value for a bad id.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// Seed id outside `[0, num_seeds)`
    #[error("seed id {id} out of range (diagram has {count} seeds)")]
    SeedOutOfRange { id: usize, count: usize },

    /// Vertex id outside the vertex list
    #[error("vertex id {id} out of range (diagram has {count} vertices)")]
    VertexOutOfRange { id: usize, count: usize },

    /// Line id outside the line list
    #[error("line id {id} out of range (diagram has {count} lines)")]
    LineOutOfRange { id: usize, count: usize },

    /// Edge id outside the edge list
    #[error("edge id {id} out of range (diagram has {count} edges)")]
    EdgeOutOfRange { id: usize, count: usize },

    /// A per-seed region slot was accessed before `insert_cells` sized the
    /// region collection to the current seed count
    #[error("region slot {id} not allocated (only {count} cells inserted)")]
    RegionNotAllocated { id: usize, count: usize },

    /// Audit finding: a neighbor entry without its mirror entry
    #[error("neighbor lists are asymmetric: {a} lists {b}, but not vice versa")]
    AsymmetricNeighbors { a: usize, b: usize },

    /// Audit finding: a region boundary references a missing vertex
    #[error("region {seed} references dangling vertex id {vertex}")]
    DanglingRegionPoint { seed: usize, vertex: usize },
}

/// Result type alias for mesh operations
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = MeshError::SeedOutOfRange { id: 7, count: 3 };
        assert_eq!(
            err.to_string(),
            "seed id 7 out of range (diagram has 3 seeds)"
        );
    }

    #[test]
    fn test_audit_display() {
        let err = MeshError::AsymmetricNeighbors { a: 1, b: 2 };
        assert!(err.to_string().contains("asymmetric"));

        let err = MeshError::DanglingRegionPoint { seed: 0, vertex: 9 };
        assert!(err.to_string().contains("dangling vertex id 9"));
    }
}
