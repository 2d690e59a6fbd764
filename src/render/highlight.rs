//! Highlight-Geometrie: Offset-Band entlang einer Kurve und Kreise
//! für hervorgehobene Knoten.
//!
//! Das Band besteht aus einem Quad pro Segment, dessen Ecken auf zwei
//! parallel versetzten Schienen (`right`/`left`) liegen. An 180°-Kehren
//! tauschen die Schienen die Seiten (`orientation_changed`), damit sich
//! das Band nicht verdreht.

use std::sync::LazyLock;

use glam::Vec2;

use crate::core::geometry::{
    are_opposite, polygon_area, right_bisector, right_perpendicular, segments_intersect,
};

/// Untergrenze für den Sinus des halben Eckwinkels, damit der
/// Bisektor-Offset nicht explodiert.
const MIN_CORNER_SIN: f32 = 0.1;

/// Mindestfläche, unter der ein Quad als degeneriert gilt.
const MIN_QUAD_AREA: f32 = 1e-6;

/// Obere Hälfte des Einheitskreises, von (-1, 0⁺) nach (1, 0⁺).
///
/// Abgetastet in vier Achtelbögen über `x = ±√t`, `y = √(1 − t)`, damit
/// die Punktdichte entlang des Bogens annähernd gleichmäßig bleibt.
static ARC: LazyLock<Vec<Vec2>> = LazyLock::new(|| {
    let res = 16;
    let mut arc = vec![Vec2::ZERO; 4 * res];
    for i in 0..res {
        let t = 0.5 * (i as f32 + 0.5) / res as f32;
        let x = t.sqrt();
        let y = (1.0 - t).sqrt();
        arc[i] = Vec2::new(-y, x);
        arc[2 * res - i - 1] = Vec2::new(-x, y);
        arc[2 * res + i] = Vec2::new(x, y);
        arc[4 * res - i - 1] = Vec2::new(y, x);
    }
    arc
});

/// Ein Segment-Quad des Offset-Bands, Ecken im Umlaufsinn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonQuad {
    pub corners: [Vec2; 4],
}

/// Berechnet die beiden Schienen des Offset-Bands.
///
/// `right[i]`/`left[i]` liegen beidseits von `nodes[i]`; an inneren
/// Knoten auf der Winkelhalbierenden mit Abstand `w / sin(θ/2)`, damit
/// die senkrechte Bandbreite durch die Kurve konstant bleibt.
fn offset_rails(nodes: &[Vec2], width: f32) -> (Vec<Vec2>, Vec<Vec2>) {
    let len = nodes.len();
    let mut right = Vec::with_capacity(len);
    let mut left = Vec::with_capacity(len);
    let mut orientation_changed = false;

    for i in 0..len {
        let (right_pt, left_pt) = if i == 0 {
            let perp = right_perpendicular(nodes[1], nodes[0]);
            (nodes[0] + perp * width, nodes[0] - perp * width)
        } else if i == len - 1 {
            let p1 = nodes[i - 1];
            let p2 = nodes[i];
            let mut anti = false;
            if len >= 3 {
                let p0 = nodes[i - 2];
                let v1 = (p1 - p0).normalize_or_zero();
                let v2 = (p2 - p1).normalize_or_zero();
                if are_opposite(v1, v2) {
                    anti = true;
                    orientation_changed = !orientation_changed;
                }
            }
            // Im Kehren-Fall werden die Argumente getauscht, um die
            // Spiegelung zu erhalten.
            let perp = if anti {
                right_perpendicular(p1, p2)
            } else {
                right_perpendicular(p2, p1)
            };
            let a = p2 + perp * width;
            let b = p2 - perp * width;
            if orientation_changed {
                (b, a)
            } else {
                (a, b)
            }
        } else {
            let p1 = nodes[i - 1];
            let p2 = nodes[i];
            let p3 = nodes[i + 1];
            let v1 = (p2 - p1).normalize_or_zero();
            let v2 = (p3 - p2).normalize_or_zero();
            if are_opposite(v1, v2) {
                // Kehre: nur die Senkrechte des einlaufenden Segments
                // zählt; die Seiten wechseln ab hier.
                let perp = right_perpendicular(p2, p1);
                let a = p2 + perp * width;
                let b = p2 - perp * width;
                let pair = if orientation_changed { (b, a) } else { (a, b) };
                orientation_changed = !orientation_changed;
                pair
            } else {
                let bisector = right_bisector(p1, p2, p3);
                let sin = cross_sin(bisector, v1).max(MIN_CORNER_SIN);
                let offset = width / sin;
                let a = p2 + bisector * offset;
                let b = p2 - bisector * offset;
                if orientation_changed {
                    (b, a)
                } else {
                    (a, b)
                }
            }
        };
        right.push(right_pt);
        left.push(left_pt);
    }

    (right, left)
}

fn cross_sin(a: Vec2, b: Vec2) -> f32 {
    (a.x * b.y - a.y * b.x).abs()
}

/// `true`, wenn die vier Ecken ein überschneidungsfreies Quad mit
/// nennenswerter Fläche bilden.
fn is_simple_quad(corners: &[Vec2; 4]) -> bool {
    let [a, b, c, d] = *corners;
    if segments_intersect(a, b, c, d) || segments_intersect(b, c, d, a) {
        return false;
    }
    polygon_area(corners).abs() > MIN_QUAD_AREA
}

/// Baut das Offset-Band für eine Knotenfolge.
///
/// Pro Segment wird zuerst das Trapez aus den Schienen versucht; ist es
/// ein Schmetterling, werden die linken Ecken getauscht; schlägt auch
/// das fehl, entsteht ein schlichtes Rechteck aus den Senkrechten des
/// Segments allein. Gibt `None` zurück, wenn keine zwei Knoten vorliegen.
pub fn build_ribbon(nodes: &[Vec2], width: f32) -> Option<Vec<RibbonQuad>> {
    if nodes.len() < 2 {
        return None;
    }
    let (right, left) = offset_rails(nodes, width);
    let mut quads = Vec::with_capacity(nodes.len() - 1);

    for i in 0..nodes.len() - 1 {
        let trapezoid = [right[i], right[i + 1], left[i + 1], left[i]];
        if is_simple_quad(&trapezoid) {
            quads.push(RibbonQuad { corners: trapezoid });
            continue;
        }
        let uncrossed = [right[i], right[i + 1], left[i], left[i + 1]];
        if is_simple_quad(&uncrossed) {
            quads.push(RibbonQuad { corners: uncrossed });
            continue;
        }
        // Letzte Stufe: Rechteck aus den Senkrechten dieses Segments.
        let perp = right_perpendicular(nodes[i + 1], nodes[i]) * width;
        quads.push(RibbonQuad {
            corners: [
                nodes[i] + perp,
                nodes[i + 1] + perp,
                nodes[i + 1] - perp,
                nodes[i] - perp,
            ],
        });
    }

    Some(quads)
}

/// Geschlossener Kreis-Umriss um `center`: obere Bogenhälfte aus [`ARC`],
/// gespiegelte untere Hälfte in Gegenrichtung, erster Punkt wiederholt.
pub fn node_circle(center: Vec2, radius: f32) -> Vec<Vec2> {
    let arc_len = ARC.len();
    let mut points = Vec::with_capacity(2 * arc_len + 1);
    for p in ARC.iter() {
        points.push(center + *p * radius);
    }
    for p in ARC.iter().rev() {
        points.push(center + Vec2::new(p.x, -p.y) * radius);
    }
    let first = points[0];
    points.push(first);
    points
}

#[cfg(test)]
mod tests;
