//! Strukturändernde Kurvenoperationen: Zusammenfügen und Auftrennen.

use anyhow::{bail, Result};
use glam::Vec2;
use log::debug;

use crate::core::geometry::DistanceResult;
use crate::core::{Curve, CurveEnd, OverlayScene, ShapeId};

/// Hängt `second` an das Ende von `first` und ersetzt beide durch eine
/// neue Kurve. `second_end` benennt das getroffene Ende von `second`;
/// bei `Tail` wird `second` vorher umgedreht, damit die Laufrichtungen
/// zusammenpassen.
///
/// Fällt der letzte Knoten von `first` exakt auf den ersten von
/// `second`, wird der doppelte Knoten verworfen.
pub fn join(
    scene: &mut OverlayScene,
    first: ShapeId,
    second: ShapeId,
    second_end: CurveEnd,
) -> Result<ShapeId> {
    // Erst prüfen, dann entfernen: ein Fehlschlag darf die Szene nicht
    // halb abgeräumt zurücklassen.
    let (Some(first_curve), Some(second_curve)) = (scene.freeform(first), scene.freeform(second))
    else {
        bail!("join: {first:?} und {second:?} müssen existierende Freiformen sein");
    };

    let mut points: Vec<Vec2> = first_curve.nodes().to_vec();
    let mut tail: Vec<Vec2> = second_curve.nodes().to_vec();
    if second_end == CurveEnd::Tail {
        tail.reverse();
    }
    let mut tail_iter = tail.into_iter();
    if let (Some(last), Some(next)) = (points.last().copied(), tail_iter.clone().next()) {
        if last == next {
            tail_iter.next();
        }
    }
    points.extend(tail_iter);

    scene.remove(first);
    scene.remove(second);
    let id = scene.add_freeform(Curve::from_points(points));
    debug!("Kurven {first:?} und {second:?} zu {id:?} verbunden");
    Ok(id)
}

/// Trennt die Kurve `id` am Treffer `hit` in zwei Hälften.
///
/// Bei einem Treffer im Segmentinneren erhält jede Hälfte den
/// interpolierten Schnittpunkt als Endknoten. Hälften mit weniger als
/// zwei Knoten werden verworfen. Zurückgegeben wird die Hälfte, deren
/// Schnittende am Schwanz liegt (für den fortgesetzten Radier-Drag);
/// die zweite Hälfte wird dafür umgedreht.
pub fn split(
    scene: &mut OverlayScene,
    id: ShapeId,
    hit: DistanceResult,
) -> Result<Option<ShapeId>> {
    let Some(shape) = scene.remove(id) else {
        bail!("split: Kurve {id:?} existiert nicht");
    };
    let Some(curve) = shape.as_freeform() else {
        bail!("split: Shape {id:?} ist keine Freiform");
    };
    let nodes = curve.nodes();

    let (left, right): (Vec<Vec2>, Vec<Vec2>) = match hit.node_index() {
        // Der getroffene Knoten landet genau in einer Hälfte: bei
        // Gewicht 0 vorne, bei Gewicht 1 hinten.
        Some(_) => (
            nodes[..=hit.segment].to_vec(),
            nodes[hit.segment + 1..].to_vec(),
        ),
        None => {
            let cut = hit.point_on(nodes);
            let mut left = nodes[..=hit.segment].to_vec();
            left.push(cut);
            let mut right = vec![cut];
            right.extend_from_slice(&nodes[hit.segment + 1..]);
            (left, right)
        }
    };

    let mut active = None;
    if left.len() >= 2 {
        active = Some(scene.add_freeform(Curve::from_points(left)));
    } else {
        debug!("split: vordere Hälfte degeneriert, verworfen");
    }
    if right.len() >= 2 {
        if active.is_none() {
            let mut reversed = right;
            reversed.reverse();
            active = Some(scene.add_freeform(Curve::from_points(reversed)));
        } else {
            scene.add_freeform(Curve::from_points(right));
        }
    } else {
        debug!("split: hintere Hälfte degeneriert, verworfen");
    }

    Ok(active)
}
