//! Rein-mathematische Hilfsfunktionen: Polylinien-Abfragen, Glättung,
//! Senkrechten- und Winkelhalbierenden-Vektoren für die Offset-Geometrie.

use glam::Vec2;

/// Toleranz für den Antiparallel-Test zweier Einheitsvektoren.
const ANTIPARALLEL_EPSILON: f32 = 1e-3;

/// Ergebnis einer Nächster-Punkt-Abfrage gegen eine Polylinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceResult {
    /// Euklidische Distanz zum nächsten Punkt auf der Polylinie
    pub distance: f32,
    /// Index des Segments zwischen `points[segment]` und `points[segment + 1]`
    pub segment: usize,
    /// Interpolationsgewicht in `[0, 1]` innerhalb des Segments
    pub weight: f32,
}

impl DistanceResult {
    /// Knotenindex, falls der nächste Punkt exakt auf einem Knoten liegt.
    pub fn node_index(&self) -> Option<usize> {
        if self.weight == 0.0 {
            Some(self.segment)
        } else if self.weight == 1.0 {
            Some(self.segment + 1)
        } else {
            None
        }
    }

    /// Der Punkt auf der Polylinie, den dieses Ergebnis beschreibt.
    pub fn point_on(&self, points: &[Vec2]) -> Vec2 {
        let a = points[self.segment];
        let b = points[self.segment + 1];
        a + (b - a) * self.weight
    }
}

/// Projiziert `query` auf das Segment `a → b`; Gewicht auf `[0, 1]` geklemmt.
///
/// Segmente mit Länge null liefern Gewicht 0 und den Punkt `a`.
fn project_onto_segment(a: Vec2, b: Vec2, query: Vec2) -> (f32, Vec2) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (0.0, a);
    }
    let weight = ((query - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (weight, a + ab * weight)
}

/// Findet den nächsten Punkt auf der Polylinie zu `query`.
///
/// Gibt `None` zurück, wenn weniger als zwei Punkte vorliegen.
pub fn nearest_point_on_polyline(points: &[Vec2], query: Vec2) -> Option<DistanceResult> {
    if points.len() < 2 {
        return None;
    }
    let mut best: Option<DistanceResult> = None;
    for i in 0..points.len() - 1 {
        let (weight, closest) = project_onto_segment(points[i], points[i + 1], query);
        let distance = closest.distance(query);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(DistanceResult {
                distance,
                segment: i,
                weight,
            });
        }
    }
    best
}

/// Distanz von `query` zum Segment `a → b`.
pub fn distance_point_to_segment(a: Vec2, b: Vec2, query: Vec2) -> f32 {
    project_onto_segment(a, b, query).1.distance(query)
}

/// Einfache exponentielle Glättung roher Pointer-Samples.
pub fn smooth(new_point: Vec2, previous: Vec2, factor: f32) -> Vec2 {
    new_point * factor + previous * (1.0 - factor)
}

/// Einheitsvektor senkrecht rechts zur Richtung `from → to`.
pub fn right_perpendicular(to: Vec2, from: Vec2) -> Vec2 {
    let d = (to - from).normalize_or_zero();
    Vec2::new(d.y, -d.x)
}

/// Einheitsvektor der Winkelhalbierenden am Eckpunkt `p2`, auf die rechte
/// Seite der Laufrichtung `p1 → p2 → p3` orientiert.
///
/// Bei gestrecktem Winkel fällt die Halbierende auf die Senkrechte des
/// einlaufenden Segments zurück.
pub fn right_bisector(p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let v1 = (p1 - p2).normalize_or_zero();
    let v2 = (p3 - p2).normalize_or_zero();
    let sum = v1 + v2;
    let perp = right_perpendicular(p2, p1);
    let bisector = if sum.length_squared() > 1e-12 {
        sum.normalize()
    } else {
        perp
    };
    if bisector.dot(perp) < 0.0 {
        -bisector
    } else {
        bisector
    }
}

/// `true`, wenn zwei Einheitsvektoren (nahezu) entgegengesetzt zeigen.
pub fn are_opposite(v1: Vec2, v2: Vec2) -> bool {
    v1.dot(v2) <= -1.0 + ANTIPARALLEL_EPSILON
}

/// 2D-Kreuzprodukt (z-Komponente).
pub fn cross2(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// `true`, wenn sich die Segmente `a1 → a2` und `b1 → b2` echt schneiden.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = cross2(b2 - b1, a1 - b1);
    let d2 = cross2(b2 - b1, a2 - b1);
    let d3 = cross2(a2 - a1, b1 - a1);
    let d4 = cross2(a2 - a1, b2 - a1);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Vorzeichenbehaftete Fläche eines Polygons (Schnürsenkelformel).
pub fn polygon_area(points: &[Vec2]) -> f32 {
    let mut area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        area += cross2(a, b);
    }
    area * 0.5
}
