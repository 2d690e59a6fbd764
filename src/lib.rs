//! Interaktiver Freiform-Kurven-Editor-Kern für 2D-Overlays.
//!
//! Die Bibliothek rendert nicht und öffnet kein Fenster; sie verwaltet
//! das Datenmodell (Kurven, Szene), übersetzt Pointer-Ereignisse in
//! Editieroperationen und erzeugt die Geometrie, die ein Host-Renderer
//! zeichnet.
//!
//! - [`core`]: Knotenpuffer, Geometrie, Kurven und Szene
//! - [`app`]: Freiform-Werkzeug mit Pointer-Zustandsmaschine
//! - [`render`]: Offset-Band und Knotenkreise fürs Highlighting
//! - [`shared`]: Konfiguration und Render-Schnittstelle

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use crate::app::freeform::{FreeformSession, PointerEvent, PointerModifiers, SessionState};
pub use crate::core::geometry::{nearest_point_on_polyline, smooth, DistanceResult};
pub use crate::core::{
    Bounds, Curve, CurveEnd, HighlightState, NodeBuffer, OverlayScene, OverlayShape, ShapeId,
    INITIAL_NODE_CAPACITY,
};
pub use crate::render::{build_ribbon, node_circle, RibbonQuad};
pub use crate::shared::{
    build_render_scene, EditorOptions, HighlightGeometry, RenderScene, ShapeGeometry,
};
