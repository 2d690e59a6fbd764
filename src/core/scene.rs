//! Szene: geordnete Sammlung aller Overlay-Shapes mit Nachbarschaftsabfragen.

use glam::Vec2;
use indexmap::IndexMap;

use super::curve::Curve;
use super::geometry::DistanceResult;
use super::shape::OverlayShape;

/// Eindeutige, monoton vergebene Shape-Kennung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// Welches Ende einer Kurve gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveEnd {
    Head,
    Tail,
}

/// Alle Shapes eines Overlays in Einfügereihenfolge.
#[derive(Debug, Default)]
pub struct OverlayScene {
    shapes: IndexMap<ShapeId, OverlayShape>,
    next_id: u64,
}

impl OverlayScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: OverlayShape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }

    pub fn add_freeform(&mut self, curve: Curve) -> ShapeId {
        self.add_shape(OverlayShape::Freeform(curve))
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<OverlayShape> {
        self.shapes.shift_remove(&id)
    }

    pub fn shape(&self, id: ShapeId) -> Option<&OverlayShape> {
        self.shapes.get(&id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut OverlayShape> {
        self.shapes.get_mut(&id)
    }

    pub fn freeform(&self, id: ShapeId) -> Option<&Curve> {
        self.shapes.get(&id).and_then(OverlayShape::as_freeform)
    }

    pub fn freeform_mut(&mut self, id: ShapeId) -> Option<&mut Curve> {
        self.shapes
            .get_mut(&id)
            .and_then(OverlayShape::as_freeform_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &OverlayShape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ShapeId, &mut OverlayShape)> {
        self.shapes.iter_mut().map(|(id, s)| (*id, s))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Nächste Freiform-Kurve zu `query`, mit Bounding-Box-Vorfilter.
    ///
    /// Degenerierte Kurven (unter zwei Knoten) und `exclude` werden
    /// übersprungen.
    pub fn nearest_freeform(
        &mut self,
        query: Vec2,
        exclude: Option<ShapeId>,
    ) -> Option<(ShapeId, DistanceResult)> {
        let mut best: Option<(ShapeId, DistanceResult)> = None;
        for (id, shape) in self.shapes.iter_mut() {
            if Some(*id) == exclude {
                continue;
            }
            let Some(curve) = shape.as_freeform_mut() else {
                continue;
            };
            if curve.is_degenerate() {
                continue;
            }
            if let Some((_, hit)) = &best {
                if curve.distance_to_bounding_box(query) > hit.distance {
                    continue;
                }
            }
            if let Some(hit) = curve.nearest_point(query) {
                if best.as_ref().map_or(true, |(_, b)| hit.distance < b.distance) {
                    best = Some((*id, hit));
                }
            }
        }
        best
    }

    /// Nächster Endknoten (Kopf oder Schwanz) aller Freiform-Kurven.
    pub fn nearest_freeform_endpoint(
        &self,
        query: Vec2,
        exclude: Option<ShapeId>,
    ) -> Option<(ShapeId, CurveEnd, f32)> {
        let mut best: Option<(ShapeId, CurveEnd, f32)> = None;
        for (id, shape) in &self.shapes {
            if Some(*id) == exclude {
                continue;
            }
            let Some(curve) = shape.as_freeform() else {
                continue;
            };
            if curve.is_degenerate() {
                continue;
            }
            let candidates = [
                (CurveEnd::Head, curve.first_node()),
                (CurveEnd::Tail, curve.last_node()),
            ];
            for (end, point) in candidates {
                let Some(point) = point else { continue };
                let distance = point.distance(query);
                if best.map_or(true, |(_, _, b)| distance < b) {
                    best = Some((*id, end, distance));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests;
