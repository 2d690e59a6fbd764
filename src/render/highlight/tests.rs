use super::*;
use approx::assert_relative_eq;

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn test_schienen_gerade_kurve_liegen_exakt_auf_abstand() {
    let nodes = [v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)];
    let width = 2.0;
    let (right, left) = offset_rails(&nodes, width);

    for (i, node) in nodes.iter().enumerate() {
        assert_relative_eq!(right[i].distance(*node), width, epsilon = 1e-5);
        assert_relative_eq!(left[i].distance(*node), width, epsilon = 1e-5);
        assert_relative_eq!(right[i].y, -width, epsilon = 1e-5);
        assert_relative_eq!(left[i].y, width, epsilon = 1e-5);
    }
}

#[test]
fn test_schienen_kehre_kreuzen_sich_nicht() {
    // Kurve läuft nach rechts und kehrt exakt um 180° um.
    let nodes = [v(0.0, 0.0), v(10.0, 0.0), v(5.0, 0.0)];
    let width = 1.0;
    let (right, left) = offset_rails(&nodes, width);

    assert_eq!(right, vec![v(0.0, -1.0), v(10.0, -1.0), v(5.0, -1.0)]);
    assert_eq!(left, vec![v(0.0, 1.0), v(10.0, 1.0), v(5.0, 1.0)]);

    // Die Schienen bleiben zwischen dem Knoten vor und nach der Kehre
    // jeweils auf ihrer Seite.
    for i in 0..nodes.len() - 1 {
        assert!(
            !crate::core::geometry::segments_intersect(
                right[i],
                right[i + 1],
                left[i],
                left[i + 1]
            ),
            "Schienen dürfen sich an der Kehre nicht kreuzen"
        );
    }
}

#[test]
fn test_bisektor_offset_haelt_bandbreite_in_der_ecke() {
    // Rechter Winkel: Offset entlang der Halbierenden ist w / sin(45°).
    let nodes = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0)];
    let width = 2.0;
    let (right, _) = offset_rails(&nodes, width);

    let expected = width / std::f32::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(right[1].distance(nodes[1]), expected, epsilon = 1e-4);
}

#[test]
fn test_ribbon_braucht_zwei_knoten() {
    assert!(build_ribbon(&[v(0.0, 0.0)], 1.0).is_none());
    assert!(build_ribbon(&[], 1.0).is_none());
}

#[test]
fn test_ribbon_gerade_kurve_liefert_trapeze() {
    let nodes = [v(0.0, 0.0), v(10.0, 0.0), v(20.0, 0.0)];
    let quads = build_ribbon(&nodes, 2.0).unwrap();

    assert_eq!(quads.len(), 2);
    assert_eq!(
        quads[0].corners,
        [v(0.0, -2.0), v(10.0, -2.0), v(10.0, 2.0), v(0.0, 2.0)]
    );
}

#[test]
fn test_ribbon_doppelknoten_faellt_auf_rechteck_zurueck() {
    // Doppelter Endknoten: Schienen kollabieren auf die Kurvenachse,
    // die letzte Stufe muss trotzdem ein Quad liefern.
    let nodes = [v(0.0, 0.0), v(5.0, 0.0), v(5.0, 0.0)];
    let quads = build_ribbon(&nodes, 1.0).unwrap();

    assert_eq!(quads.len(), 2, "Der Band-Bau darf niemals scheitern");
}

#[test]
fn test_node_circle_ist_geschlossen() {
    let circle = node_circle(v(3.0, 4.0), 2.0);

    assert_eq!(circle.len(), 129);
    assert_eq!(circle.first(), circle.last());
    for p in &circle {
        assert_relative_eq!(p.distance(v(3.0, 4.0)), 2.0, epsilon = 1e-4);
    }
}

#[test]
fn test_node_circle_beginnt_links_und_laeuft_oben() {
    let circle = node_circle(Vec2::ZERO, 1.0);

    assert!(circle[0].x < -0.99, "Start nahe (-1, 0)");
    assert!(circle[0].y > 0.0);
    // Obere Hälfte zuerst, untere gespiegelt danach.
    assert!(circle[..64].iter().all(|p| p.y > 0.0));
    assert!(circle[64..128].iter().all(|p| p.y < 0.0));
}
