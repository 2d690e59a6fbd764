//! Gemeinsame Bausteine: Konfiguration und Render-Schnittstelle.

pub mod options;
pub mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{build_render_scene, HighlightGeometry, RenderScene, ShapeGeometry};
