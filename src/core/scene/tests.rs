use super::*;
use approx::assert_relative_eq;
use glam::Vec2;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn scene_with_two_curves() -> (OverlayScene, ShapeId, ShapeId) {
    let mut scene = OverlayScene::new();
    let a = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let b = scene.add_freeform(Curve::from_points(vec![v(0.0, 20.0), v(10.0, 20.0)]));
    (scene, a, b)
}

#[test]
fn test_nearest_freeform_findet_naechste_kurve() {
    let (mut scene, a, _) = scene_with_two_curves();
    let (id, hit) = scene.nearest_freeform(v(5.0, 3.0), None).unwrap();

    assert_eq!(id, a);
    assert_relative_eq!(hit.distance, 3.0);
}

#[test]
fn test_nearest_freeform_respektiert_exclude() {
    let (mut scene, a, b) = scene_with_two_curves();
    let (id, _) = scene.nearest_freeform(v(5.0, 3.0), Some(a)).unwrap();
    assert_eq!(id, b, "Ausgeschlossene Kurve darf nicht gewinnen");
}

#[test]
fn test_nearest_freeform_ueberspringt_degenerierte() {
    let mut scene = OverlayScene::new();
    scene.add_freeform(Curve::new_at(v(5.0, 0.0)));
    assert!(scene.nearest_freeform(v(5.0, 0.0), None).is_none());
}

#[test]
fn test_nearest_freeform_ignoriert_primitive() {
    let mut scene = OverlayScene::new();
    scene.add_shape(OverlayShape::Line {
        p1: v(0.0, 0.0),
        p2: v(10.0, 0.0),
    });
    assert!(scene.nearest_freeform(v(5.0, 1.0), None).is_none());
}

#[test]
fn test_nearest_endpoint_unterscheidet_kopf_und_schwanz() {
    let (scene, a, _) = scene_with_two_curves();

    let (id, end, d) = scene.nearest_freeform_endpoint(v(-1.0, 0.0), None).unwrap();
    assert_eq!((id, end), (a, CurveEnd::Head));
    assert_relative_eq!(d, 1.0);

    let (id, end, _) = scene.nearest_freeform_endpoint(v(11.0, 0.0), None).unwrap();
    assert_eq!((id, end), (a, CurveEnd::Tail));
}

#[test]
fn test_remove_entfernt_shape() {
    let (mut scene, a, _) = scene_with_two_curves();
    assert!(scene.remove(a).is_some());
    assert_eq!(scene.len(), 1);
    assert!(scene.freeform(a).is_none());
}

#[test]
fn test_ids_bleiben_nach_remove_eindeutig() {
    let (mut scene, a, b) = scene_with_two_curves();
    scene.remove(a);
    let c = scene.add_freeform(Curve::from_points(vec![v(0.0, 40.0), v(1.0, 40.0)]));
    assert_ne!(c, a);
    assert_ne!(c, b);
}
