use glam::Vec2;

use crate::core::{Curve, OverlayScene, OverlayShape};
use crate::shared::options::EditorOptions;

use super::*;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn test_unselektierte_kurve_bekommt_standardfarbe() {
    let mut scene = OverlayScene::new();
    scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let options = EditorOptions::default();

    let render = build_render_scene(&scene, &options, 1.0);

    assert_eq!(render.shapes.len(), 1);
    assert_eq!(render.shapes[0].color, options.shape_color);
    assert!(render.highlights.is_empty());
}

#[test]
fn test_selektierte_kurve_bekommt_glow_band() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    scene.freeform_mut(id).unwrap().selected = true;
    let options = EditorOptions::default();

    let render = build_render_scene(&scene, &options, 1.0);

    assert_eq!(render.shapes[0].color, options.selected_color);
    assert_eq!(render.highlights.len(), 1);
    assert_eq!(render.highlights[0].quads.len(), 1);
    assert_eq!(render.highlights[0].color, options.glow_color);
}

#[test]
fn test_hervorgehobene_knoten_bekommen_kreise() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)]));
    {
        let curve = scene.freeform_mut(id).unwrap();
        curve.highlight.tail = true;
        curve.highlight.node = Some(1);
    }
    let options = EditorOptions::default();

    let render = build_render_scene(&scene, &options, 1.0);

    assert_eq!(render.highlights.len(), 1);
    let highlight = &render.highlights[0];
    assert_eq!(highlight.circles.len(), 2);
    assert_eq!(highlight.color, options.node_highlight_color);
    assert!(highlight.quads.is_empty());
}

#[test]
fn test_primitive_erscheinen_als_umriss() {
    let mut scene = OverlayScene::new();
    scene.add_shape(OverlayShape::Oval {
        center: v(0.0, 0.0),
        radius_x: 5.0,
        radius_y: 3.0,
    });

    let render = build_render_scene(&scene, &EditorOptions::default(), 1.0);

    assert_eq!(render.shapes.len(), 1);
    assert!(render.shapes[0].points.len() > 8);
}

#[test]
fn test_pixel_scale_skaliert_die_bandbreite() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(100.0, 0.0)]));
    scene.freeform_mut(id).unwrap().selected = true;
    let options = EditorOptions::default();

    let render = build_render_scene(&scene, &options, 2.0);

    let quad = &render.highlights[0].quads[0];
    let expected = options.highlight_width_px * 2.0;
    assert!((quad.corners[0].y.abs() - expected).abs() < 1e-4);
}
