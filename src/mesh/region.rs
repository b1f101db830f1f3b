//! Per-seed polygonal region

use crate::types::VertexId;
use bitflags::bitflags;

bitflags! {
    /// State flags of a region
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RegionFlags: u8 {
        /// The boundary segment list has been materialized from the point loop
        const EDGES_BUILT = 0b0000_0001;
        /// The region lies on the diagram boundary and was clipped against it
        const BOUNDARY = 0b0000_0010;
    }
}

/// The polygon bounding one seed's Voronoi cell
///
/// The boundary is an ordered sequence of vertex ids into the mesh's vertex
/// list; the order is builder-supplied and defines the polygon winding. The
/// segment list is derived from it by `build_edges` and cleared together
/// with it.
#[derive(Debug, Clone, Default)]
pub struct Region {
    flags: RegionFlags,
    point_ids: Vec<VertexId>,
    segments: Vec<(VertexId, VertexId)>,
}

impl Region {
    /// Create a new empty region
    pub fn new() -> Self {
        Region::default()
    }

    /// Append a vertex id to the boundary loop, preserving call order
    pub fn add_point_id(&mut self, vertex: VertexId) {
        self.point_ids.push(vertex);
        // The loop changed; a previously built segment list is stale.
        self.segments.clear();
        self.flags.remove(RegionFlags::EDGES_BUILT);
    }

    /// The accumulated boundary loop, in insertion (winding) order
    pub fn point_ids(&self) -> &[VertexId] {
        &self.point_ids
    }

    /// Number of points in the boundary loop
    pub fn point_count(&self) -> usize {
        self.point_ids.len()
    }

    /// Check if the boundary loop is empty
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Materialize the boundary segments from the accumulated loop
    ///
    /// Consecutive loop points become segments, plus the closing segment
    /// from the last point back to the first. Loops with fewer than two
    /// points produce no segments.
    pub fn build_edges(&mut self) {
        self.segments.clear();
        if self.point_ids.len() >= 2 {
            for window in self.point_ids.windows(2) {
                self.segments.push((window[0], window[1]));
            }
            let first = self.point_ids[0];
            let last = self.point_ids[self.point_ids.len() - 1];
            self.segments.push((last, first));
        }
        self.flags.insert(RegionFlags::EDGES_BUILT);
    }

    /// The materialized boundary segments (empty until `build_edges`)
    pub fn segments(&self) -> &[(VertexId, VertexId)] {
        &self.segments
    }

    /// Whether `build_edges` has run since the loop last changed
    pub fn edges_built(&self) -> bool {
        self.flags.contains(RegionFlags::EDGES_BUILT)
    }

    /// Mark this region as clipped against the diagram boundary
    pub fn mark_boundary(&mut self) {
        self.flags.insert(RegionFlags::BOUNDARY);
    }

    /// Whether this region lies on the diagram boundary
    pub fn is_boundary(&self) -> bool {
        self.flags.contains(RegionFlags::BOUNDARY)
    }

    /// Current state flags
    pub fn flags(&self) -> RegionFlags {
        self.flags
    }

    /// Clear the boundary loop and its derived segments
    ///
    /// The `BOUNDARY` flag survives; it describes the cell's place in the
    /// diagram, not the loop contents.
    pub fn clear_points(&mut self) {
        self.point_ids.clear();
        self.segments.clear();
        self.flags.remove(RegionFlags::EDGES_BUILT);
    }
}
