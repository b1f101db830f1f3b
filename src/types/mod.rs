//! Core value types: coordinates, bounds, and typed identifiers

pub mod bounds;
pub mod id;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use id::{EdgeId, EntityId, LineId, SeedId, VertexId};
pub use vector::Vector2;
