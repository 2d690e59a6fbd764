//! Baut aus der Szene die fertigen Geometrie-Pakete für den Renderer.
//!
//! Der Kern rendert nicht selbst; er liefert pro Shape eine Polylinie
//! mit Farbe und pro hervorgehobener Kurve die Highlight-Geometrie
//! (Offset-Band und Knotenkreise). Die Host-Anwendung zeichnet.

use glam::Vec2;

use crate::core::{OverlayScene, OverlayShape, ShapeId};
use crate::render::highlight::{build_ribbon, node_circle, RibbonQuad};
use crate::shared::options::EditorOptions;

/// Knotenkreis-Radius als Vielfaches der Bandbreite.
const NODE_CIRCLE_RADIUS_FACTOR: f32 = 2.0;

/// Umriss-Geometrie eines Shapes.
#[derive(Debug, Clone)]
pub struct ShapeGeometry {
    pub id: ShapeId,
    pub points: Vec<Vec2>,
    pub color: [f32; 4],
    pub filled: bool,
}

/// Highlight-Geometrie einer selektierten oder editierten Kurve.
#[derive(Debug, Clone)]
pub struct HighlightGeometry {
    pub id: ShapeId,
    /// Offset-Band entlang der Kurve (Glow)
    pub quads: Vec<RibbonQuad>,
    /// Kreise um hervorgehobene Knoten
    pub circles: Vec<Vec<Vec2>>,
    pub color: [f32; 4],
}

/// Alles, was der Renderer für einen Frame braucht.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    pub shapes: Vec<ShapeGeometry>,
    pub highlights: Vec<HighlightGeometry>,
}

/// Übersetzt die Szene in Renderer-Geometrie.
///
/// `pixel_scale` (Domäneneinheiten pro Bildschirmpixel) rechnet die in
/// Pixeln konfigurierten Highlight-Breiten in Domänenkoordinaten um.
pub fn build_render_scene(
    scene: &OverlayScene,
    options: &EditorOptions,
    pixel_scale: f32,
) -> RenderScene {
    let width = options.highlight_width_px * pixel_scale;
    let mut out = RenderScene::default();

    for (id, shape) in scene.iter() {
        let OverlayShape::Freeform(curve) = shape else {
            out.shapes.push(ShapeGeometry {
                id,
                points: shape.outline_points(),
                color: options.shape_color,
                filled: false,
            });
            continue;
        };

        let color = if curve.selected {
            options.selected_color
        } else {
            options.shape_color
        };
        out.shapes.push(ShapeGeometry {
            id,
            points: curve.all_nodes().to_vec(),
            color,
            filled: false,
        });

        let mut circles = Vec::new();
        let radius = NODE_CIRCLE_RADIUS_FACTOR * width;
        if curve.highlight.head {
            if let Some(p) = curve.first_node() {
                circles.push(node_circle(p, radius));
            }
        }
        if curve.highlight.tail {
            if let Some(p) = curve.last_node() {
                circles.push(node_circle(p, radius));
            }
        }
        if let Some(index) = curve.highlight.node {
            if let Ok(p) = curve.node(index) {
                circles.push(node_circle(p, radius));
            }
        }

        if curve.selected {
            if let Some(quads) = build_ribbon(curve.nodes(), width) {
                out.highlights.push(HighlightGeometry {
                    id,
                    quads,
                    circles: Vec::new(),
                    color: options.glow_color,
                });
            }
        }
        if !circles.is_empty() {
            out.highlights.push(HighlightGeometry {
                id,
                quads: Vec::new(),
                circles,
                color: options.node_highlight_color,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests;
