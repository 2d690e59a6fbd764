//! Kern-Datenmodell: Knotenpuffer, Geometrie-Hilfen, Kurven und Szene.

pub mod curve;
pub mod geometry;
pub mod node_buffer;
pub mod scene;
pub mod shape;

pub use curve::{Bounds, Curve, HighlightState};
pub use geometry::DistanceResult;
pub use node_buffer::{NodeBuffer, INITIAL_NODE_CAPACITY};
pub use scene::{CurveEnd, OverlayScene, ShapeId};
pub use shape::OverlayShape;
