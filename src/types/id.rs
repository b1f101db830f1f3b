//! Typed identifiers for mesh entities
//!
//! Every entity the mesh stores is referenced by an integer id equal to its
//! insertion position in the owning collection. The ids are distinct newtypes
//! so a seed id can never be passed where a vertex id is expected, even
//! though all of them are plain indices under the hood.

use std::fmt;

/// Conversion between a typed id and its raw insertion index
///
/// Implemented by all id newtypes; the arena storage (`IdStore`) is generic
/// over this trait.
pub trait EntityId: Copy + Eq {
    /// Wrap a raw insertion index
    fn from_index(index: usize) -> Self;

    /// Get the raw insertion index
    fn index(self) -> usize;
}

/// Identifier of a seed (site) point; equals its position in the sequence
/// passed to `set_seeds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeedId(pub usize);

/// Identifier of a Voronoi vertex in the append-only vertex list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Identifier of a seed-pair adjacency record in the append-only line list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

/// Identifier of a Voronoi boundary edge in the append-only edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl SeedId {
    /// Create a seed id from a raw index
    pub const fn new(index: usize) -> Self {
        SeedId(index)
    }
}

impl VertexId {
    /// Create a vertex id from a raw index
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }
}

impl LineId {
    /// Create a line id from a raw index
    pub const fn new(index: usize) -> Self {
        LineId(index)
    }
}

impl EdgeId {
    /// Create an edge id from a raw index
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }
}

impl EntityId for SeedId {
    fn from_index(index: usize) -> Self {
        SeedId(index)
    }
    fn index(self) -> usize {
        self.0
    }
}

impl EntityId for VertexId {
    fn from_index(index: usize) -> Self {
        VertexId(index)
    }
    fn index(self) -> usize {
        self.0
    }
}

impl EntityId for LineId {
    fn from_index(index: usize) -> Self {
        LineId(index)
    }
    fn index(self) -> usize {
        self.0
    }
}

impl EntityId for EdgeId {
    fn from_index(index: usize) -> Self {
        EdgeId(index)
    }
    fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SeedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let v = VertexId::from_index(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v, VertexId::new(42));
    }

    #[test]
    fn test_ordering() {
        assert!(SeedId::new(1) < SeedId::new(2));
        assert!(EdgeId::new(10) > EdgeId::new(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(SeedId::new(3).to_string(), "s3");
        assert_eq!(VertexId::new(0).to_string(), "v0");
        assert_eq!(LineId::new(7).to_string(), "l7");
        assert_eq!(EdgeId::new(1).to_string(), "e1");
    }
}
