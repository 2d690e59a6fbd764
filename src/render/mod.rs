//! Geometrie-Erzeugung für den Renderer der Host-Anwendung.

pub mod highlight;

pub use highlight::{build_ribbon, node_circle, RibbonQuad};
