//! Overlay-Shapes: Freiform-Kurven plus einfache Primitive (Linie, Oval).
//!
//! Das interaktive Editieren betrifft nur `Freeform`; Linien und Ovale
//! nehmen lediglich an Distanzabfragen und am Rendering teil.

use glam::Vec2;

use super::curve::{Bounds, Curve};
use super::geometry::{distance_point_to_segment, nearest_point_on_polyline};

/// Segmentanzahl für den abgetasteten Oval-Umriss.
const OVAL_RESOLUTION: usize = 32;

#[derive(Debug, Clone)]
pub enum OverlayShape {
    Freeform(Curve),
    Line {
        p1: Vec2,
        p2: Vec2,
    },
    Oval {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
    },
}

impl OverlayShape {
    /// Distanz von `query` zum Shape-Umriss.
    pub fn distance_to(&mut self, query: Vec2) -> f32 {
        match self {
            Self::Freeform(curve) => curve
                .nearest_point(query)
                .map_or(f32::INFINITY, |hit| hit.distance),
            Self::Line { p1, p2 } => distance_point_to_segment(*p1, *p2, query),
            Self::Oval { .. } => {
                let outline = self.outline_points();
                nearest_point_on_polyline(&outline, query)
                    .map_or(f32::INFINITY, |hit| hit.distance)
            }
        }
    }

    /// Bounding-Box des Shapes.
    pub fn bounding_box(&mut self) -> Option<Bounds> {
        match self {
            Self::Freeform(curve) => curve.bounds(),
            Self::Line { p1, p2 } => Bounds::of_points(&[*p1, *p2]),
            Self::Oval {
                center,
                radius_x,
                radius_y,
            } => {
                let r = Vec2::new(*radius_x, *radius_y);
                Some(Bounds {
                    min: *center - r,
                    max: *center + r,
                })
            }
        }
    }

    /// Umriss als Polylinie, für Rendering und Oval-Distanzen.
    ///
    /// Bei Freiformen werden auch die Scratch-Slots mitgeliefert, damit
    /// ein laufender Drag ohne Flackern gezeichnet werden kann.
    pub fn outline_points(&self) -> Vec<Vec2> {
        match self {
            Self::Freeform(curve) => curve.all_nodes().to_vec(),
            Self::Line { p1, p2 } => vec![*p1, *p2],
            Self::Oval {
                center,
                radius_x,
                radius_y,
            } => (0..=OVAL_RESOLUTION)
                .map(|i| {
                    let angle = i as f32 / OVAL_RESOLUTION as f32 * std::f32::consts::TAU;
                    *center + Vec2::new(angle.cos() * radius_x, angle.sin() * radius_y)
                })
                .collect(),
        }
    }

    pub fn as_freeform(&self) -> Option<&Curve> {
        match self {
            Self::Freeform(curve) => Some(curve),
            _ => None,
        }
    }

    pub fn as_freeform_mut(&mut self) -> Option<&mut Curve> {
        match self {
            Self::Freeform(curve) => Some(curve),
            _ => None,
        }
    }
}
