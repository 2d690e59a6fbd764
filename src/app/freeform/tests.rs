use approx::assert_relative_eq;
use glam::Vec2;

use crate::core::geometry::DistanceResult;
use crate::core::{Curve, CurveEnd, OverlayScene};

use super::reshape;
use super::tendril::{Tendril, TendrilStep};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn straight_curve() -> Curve {
    Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0), v(30.0, 0.0), v(40.0, 0.0)])
}

fn hit_on_node(segment: usize, weight: f32) -> DistanceResult {
    DistanceResult {
        distance: 0.0,
        segment,
        weight,
    }
}

// ── Tendril ─────────────────────────────────────────────────────────

#[test]
fn test_tendril_create_dupliziert_knotenanker() {
    let mut curve = straight_curve();
    let tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();

    assert!(tendril.nodal);
    assert_eq!((tendril.start, tendril.stop), (2, 3));
    assert_eq!(tendril.tip, None);
    assert_eq!(
        curve.nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0), v(20.0, 0.0), v(30.0, 0.0), v(40.0, 0.0)]
    );
}

#[test]
fn test_tendril_create_interpoliert_segmentanker() {
    let mut curve = straight_curve();
    let hit = DistanceResult {
        distance: 0.0,
        segment: 0,
        weight: 0.5,
    };
    let tendril = Tendril::create(&mut curve, hit).unwrap();

    assert!(!tendril.nodal);
    assert_eq!((tendril.start, tendril.stop), (1, 2));
    assert_eq!(curve.node(1).unwrap(), v(5.0, 0.0));
    assert_eq!(curve.node(2).unwrap(), v(5.0, 0.0));
    assert_eq!(curve.node_count(), 7);
}

#[test]
fn test_tendril_create_verweigert_endknoten() {
    let mut curve = straight_curve();
    assert!(Tendril::create(&mut curve, hit_on_node(0, 0.0)).is_err());
    assert!(Tendril::create(&mut curve, hit_on_node(3, 1.0)).is_err());
    assert_eq!(curve.node_count(), 5, "Fehlschlag darf die Kurve nicht ändern");
}

#[test]
fn test_tendril_extend_fuegt_punktpaare_ein() {
    let mut curve = straight_curve();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();

    tendril.extend(&mut curve, v(20.0, 10.0)).unwrap();
    assert_eq!(tendril.tip, Some(3));
    assert_eq!(tendril.stop, 4);
    assert_eq!(curve.node(3).unwrap(), v(20.0, 10.0));

    tendril.extend(&mut curve, v(25.0, 15.0)).unwrap();
    assert_eq!(tendril.tip, Some(4));
    assert_eq!(tendril.stop, 6);
    // Hinweg, neue Spitze, gespiegelter Rückweg
    assert_eq!(curve.node(3).unwrap(), v(20.0, 10.0));
    assert_eq!(curve.node(4).unwrap(), v(25.0, 15.0));
    assert_eq!(curve.node(5).unwrap(), v(20.0, 10.0));
    assert_eq!(curve.node(6).unwrap(), v(20.0, 0.0));
}

#[test]
fn test_tendril_finalize_stellt_knotenanker_wieder_her() {
    let mut curve = straight_curve();
    let original = curve.nodes().to_vec();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();
    tendril.extend(&mut curve, v(20.0, 10.0)).unwrap();
    tendril.extend(&mut curve, v(25.0, 15.0)).unwrap();

    tendril.finalize(&mut curve).unwrap();

    assert_eq!(curve.nodes(), original.as_slice());
}

#[test]
fn test_tendril_finalize_entfernt_segmentanker() {
    let mut curve = straight_curve();
    let original = curve.nodes().to_vec();
    let hit = DistanceResult {
        distance: 0.0,
        segment: 1,
        weight: 0.25,
    };
    let tendril = Tendril::create(&mut curve, hit).unwrap();

    tendril.finalize(&mut curve).unwrap();

    assert_eq!(curve.nodes(), original.as_slice());
}

#[test]
fn test_tendril_reconnect_hinterer_abschnitt() {
    let mut curve = straight_curve();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();

    let step = tendril
        .extend_or_reconnect(&mut curve, v(20.0, 10.0), 1.0, 2.0, false)
        .unwrap();
    assert_eq!(step, TendrilStep::Extended);

    let step = tendril
        .extend_or_reconnect(&mut curve, v(29.0, 1.0), 1.0, 2.0, false)
        .unwrap();
    assert_eq!(step, TendrilStep::Extended);

    let step = tendril
        .extend_or_reconnect(&mut curve, v(30.0, 0.5), 1.0, 2.0, false)
        .unwrap();
    assert_eq!(step, TendrilStep::Reconnected);

    assert_eq!(
        curve.nodes(),
        &[
            v(0.0, 0.0),
            v(10.0, 0.0),
            v(20.0, 0.0),
            v(20.0, 10.0),
            v(29.0, 1.0),
            v(30.0, 0.0),
            v(40.0, 0.0)
        ]
    );
}

#[test]
fn test_tendril_reconnect_vorderer_abschnitt_mit_interpolation() {
    let mut curve = straight_curve();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();

    tendril
        .extend_or_reconnect(&mut curve, v(15.0, 5.0), 1.0, 2.0, false)
        .unwrap();
    let step = tendril
        .extend_or_reconnect(&mut curve, v(5.0, 0.5), 1.0, 2.0, false)
        .unwrap();
    assert_eq!(step, TendrilStep::Reconnected);

    assert_eq!(
        curve.nodes(),
        &[
            v(0.0, 0.0),
            v(5.0, 0.0),
            v(15.0, 5.0),
            v(20.0, 0.0),
            v(30.0, 0.0),
            v(40.0, 0.0)
        ]
    );
}

#[test]
fn test_tendril_keep_extending_unterdrueckt_anschluss() {
    let mut curve = straight_curve();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();
    tendril
        .extend_or_reconnect(&mut curve, v(20.0, 10.0), 1.0, 2.0, false)
        .unwrap();

    let step = tendril
        .extend_or_reconnect(&mut curve, v(30.0, 0.5), 1.0, 2.0, true)
        .unwrap();
    assert_eq!(step, TendrilStep::Extended, "Modifier muss den Anschluss verhindern");
}

#[test]
fn test_tendril_wartet_bei_kleinen_bewegungen() {
    let mut curve = straight_curve();
    let mut tendril = Tendril::create(&mut curve, hit_on_node(1, 1.0)).unwrap();

    let step = tendril
        .extend_or_reconnect(&mut curve, v(20.5, 0.5), 1.0, 2.0, true)
        .unwrap();
    assert_eq!(step, TendrilStep::Waiting);
    assert_eq!(tendril.tip, None);
}

// ── Reshape: join ───────────────────────────────────────────────────

#[test]
fn test_join_haengt_kopf_an_schwanz() {
    let mut scene = OverlayScene::new();
    let a = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let b = scene.add_freeform(Curve::from_points(vec![v(11.0, 0.0), v(20.0, 0.0)]));

    let joined = reshape::join(&mut scene, a, b, CurveEnd::Head).unwrap();

    assert_eq!(scene.len(), 1);
    assert_eq!(
        scene.freeform(joined).unwrap().nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0), v(11.0, 0.0), v(20.0, 0.0)]
    );
}

#[test]
fn test_join_dreht_zweite_kurve_bei_schwanz_treffer() {
    let mut scene = OverlayScene::new();
    let a = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let b = scene.add_freeform(Curve::from_points(vec![v(20.0, 0.0), v(11.0, 0.0)]));

    let joined = reshape::join(&mut scene, a, b, CurveEnd::Tail).unwrap();

    assert_eq!(
        scene.freeform(joined).unwrap().nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0), v(11.0, 0.0), v(20.0, 0.0)]
    );
}

#[test]
fn test_join_verwirft_exakt_doppelten_nahtknoten() {
    let mut scene = OverlayScene::new();
    let a = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let b = scene.add_freeform(Curve::from_points(vec![v(10.0, 0.0), v(20.0, 0.0)]));

    let joined = reshape::join(&mut scene, a, b, CurveEnd::Head).unwrap();

    assert_eq!(
        scene.freeform(joined).unwrap().nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)]
    );
}

// ── Reshape: split ──────────────────────────────────────────────────

#[test]
fn test_split_an_knoten_teilt_ohne_duplikat() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(straight_curve());

    // Gewicht 1 trifft Knoten 2: er gehört zur hinteren Hälfte.
    let surviving = reshape::split(&mut scene, id, hit_on_node(1, 1.0)).unwrap();

    assert_eq!(scene.len(), 2);
    let surviving = surviving.unwrap();
    assert_eq!(
        scene.freeform(surviving).unwrap().nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0)]
    );
    let other: Vec<_> = scene
        .iter()
        .filter(|(sid, _)| *sid != surviving)
        .filter_map(|(_, s)| s.as_freeform())
        .collect();
    assert_eq!(other[0].nodes(), &[v(20.0, 0.0), v(30.0, 0.0), v(40.0, 0.0)]);
}

#[test]
fn test_split_im_segment_gibt_beiden_haelften_den_schnittpunkt() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)]));
    let hit = DistanceResult {
        distance: 0.0,
        segment: 1,
        weight: 0.5,
    };

    let surviving = reshape::split(&mut scene, id, hit).unwrap().unwrap();

    assert_eq!(scene.len(), 2);
    assert_eq!(
        scene.freeform(surviving).unwrap().nodes(),
        &[v(0.0, 0.0), v(10.0, 0.0), v(15.0, 0.0)]
    );
    let other: Vec<_> = scene
        .iter()
        .filter(|(sid, _)| *sid != surviving)
        .filter_map(|(_, s)| s.as_freeform())
        .collect();
    assert_eq!(other[0].nodes(), &[v(15.0, 0.0), v(20.0, 0.0)]);
}

#[test]
fn test_split_am_randknoten_verwirft_degenerierte_haelfte() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)]));

    // Treffer auf Knoten 0: vordere Hälfte hat nur einen Knoten.
    let surviving = reshape::split(&mut scene, id, hit_on_node(0, 0.0)).unwrap().unwrap();

    assert_eq!(scene.len(), 1);
    // Die hintere Hälfte wird umgedreht, damit das Schnittende am Schwanz liegt.
    assert_eq!(
        scene.freeform(surviving).unwrap().nodes(),
        &[v(20.0, 0.0), v(10.0, 0.0)]
    );
}

#[test]
fn test_split_zweiknoten_kurve_im_segment() {
    let mut scene = OverlayScene::new();
    let id = scene.add_freeform(Curve::from_points(vec![v(0.0, 0.0), v(10.0, 0.0)]));
    let hit = DistanceResult {
        distance: 0.0,
        segment: 0,
        weight: 0.3,
    };

    let surviving = reshape::split(&mut scene, id, hit).unwrap().unwrap();

    assert_eq!(scene.len(), 2);
    assert_relative_eq!(
        scene.freeform(surviving).unwrap().last_node().unwrap().x,
        3.0
    );
}
