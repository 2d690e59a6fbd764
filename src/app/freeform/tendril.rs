//! Tendril: der temporäre Auswuchs beim Splice-Editing einer Kurve.
//!
//! Beim Anfassen eines inneren Kurvenpunkts wird der Ankerknoten
//! dupliziert; jede Drag-Bewegung fügt ein Punktpaar ein (Hinweg und
//! gespiegelter Rückweg), sodass die Kurve stets eine zusammenhängende
//! Polylinie bleibt. Kehrt der Zeiger nah genug an die Kurve zurück,
//! wird der Hinweg dauerhaft eingespleißt; andernfalls räumt
//! [`Tendril::finalize`] alles rückstandsfrei wieder ab.

use anyhow::{bail, Result};
use glam::Vec2;
use log::debug;

use crate::core::geometry::{nearest_point_on_polyline, DistanceResult};
use crate::core::Curve;

/// Ergebnis eines Drag-Schritts während des Splice-Editings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TendrilStep {
    /// Die Tendril ist um ein Punktpaar gewachsen
    Extended,
    /// Die Tendril wurde in die Kurve eingespleißt; das Editing ist beendet
    Reconnected,
    /// Der Zeiger hat sich nicht weit genug bewegt
    Waiting,
}

/// Buchhaltung des Auswuchses: Indizes in den Knotenpuffer der Kurve
/// plus Schnappschüsse der unberührten Kurvenabschnitte.
#[derive(Debug, Clone)]
pub struct Tendril {
    /// Index des Ankerknotens (Wurzel)
    pub start: usize,
    /// Index des Wurzel-Duplikats hinter dem Rückweg
    pub stop: usize,
    /// Index der aktuellen Spitze, sobald der erste Schritt gewachsen ist
    pub tip: Option<usize>,
    /// `true`, wenn der Anker ein existierender Knoten war
    pub nodal: bool,
    /// Kurvenabschnitt vor der Wurzel; `pre[j]` lebt an Index `j`
    pre: Vec<Vec2>,
    /// Kurvenabschnitt hinter dem Duplikat; `post[j]` lebt an Index `stop + 1 + j`
    post: Vec<Vec2>,
}

impl Tendril {
    /// Verankert eine neue Tendril am Treffer `hit` auf `curve`.
    ///
    /// Der Anker muss im Kurveninneren liegen; Endknoten werden über den
    /// Weiterzeichnen-Pfad bedient, nicht über das Splice-Editing.
    pub fn create(curve: &mut Curve, hit: DistanceResult) -> Result<Self> {
        let (root, nodal) = match hit.node_index() {
            Some(node) => {
                if node == 0 || node + 1 >= curve.node_count() {
                    bail!("Tendril-Anker {node} liegt auf einem Endknoten");
                }
                (node, true)
            }
            None => {
                let anchor = hit.point_on(curve.nodes());
                curve.insert_node_before(hit.segment + 1, anchor)?;
                (hit.segment + 1, false)
            }
        };

        // Wurzel duplizieren: das Duplikat trennt Hinweg und Rückweg und
        // hält den Anschluss an den hinteren Kurvenabschnitt.
        let root_point = curve.node(root)?;
        curve.insert_node_before(root + 1, root_point)?;

        let pre = curve.nodes()[..root].to_vec();
        let post = curve.nodes()[root + 2..].to_vec();
        debug!(
            "Tendril verankert an Knoten {root} (nodal: {nodal}, pre: {}, post: {})",
            pre.len(),
            post.len()
        );

        Ok(Self {
            start: root,
            stop: root + 1,
            tip: None,
            nodal,
            pre,
            post,
        })
    }

    /// Lässt die Tendril um den Punkt `s` wachsen.
    ///
    /// Jeder Schritt fügt ein Paar ein: den neuen Punkt auf dem Hinweg
    /// und ein Duplikat der alten Spitze auf dem Rückweg.
    pub fn extend(&mut self, curve: &mut Curve, s: Vec2) -> Result<()> {
        match self.tip {
            None => {
                curve.insert_node_before(self.stop, s)?;
                self.tip = Some(self.start + 1);
                self.stop += 1;
            }
            Some(t) => {
                let old_tip = curve.node(t)?;
                curve.insert_node_before(t + 1, old_tip)?;
                curve.insert_node_before(t + 1, s)?;
                self.tip = Some(t + 1);
                self.stop += 2;
            }
        }
        Ok(())
    }

    /// Ein Drag-Schritt: entweder wieder an die Kurve anschließen oder
    /// weiterwachsen.
    ///
    /// `keep_extending` unterdrückt den Anschluss-Test, solange der
    /// Nutzer den entsprechenden Modifier hält.
    pub fn extend_or_reconnect(
        &mut self,
        curve: &mut Curve,
        s: Vec2,
        reconnect_threshold: f32,
        draw_threshold: f32,
        keep_extending: bool,
    ) -> Result<TendrilStep> {
        let Some(t) = self.tip else {
            let root = curve.node(self.start)?;
            if s.distance(root) > draw_threshold {
                self.extend(curve, s)?;
                return Ok(TendrilStep::Extended);
            }
            return Ok(TendrilStep::Waiting);
        };

        if !keep_extending {
            if let Some((on_pre, hit)) = self.nearest_on_snapshots(s) {
                if hit.distance <= reconnect_threshold {
                    self.reconnect(curve, on_pre, hit)?;
                    return Ok(TendrilStep::Reconnected);
                }
            }
        }

        let tip_point = curve.node(t)?;
        if s.distance(tip_point) > draw_threshold {
            self.extend(curve, s)?;
            return Ok(TendrilStep::Extended);
        }
        Ok(TendrilStep::Waiting)
    }

    /// Nächster Punkt auf den unberührten Kurvenabschnitten.
    ///
    /// Gibt zusätzlich zurück, ob der vordere Abschnitt getroffen wurde.
    /// Bei exakt gleichem Abstand beider Seiten wird kein Treffer
    /// gemeldet.
    fn nearest_on_snapshots(&self, s: Vec2) -> Option<(bool, DistanceResult)> {
        let pre_hit = nearest_point_on_polyline(&self.pre, s);
        let post_hit = nearest_point_on_polyline(&self.post, s);
        match (pre_hit, post_hit) {
            (Some(a), Some(b)) => {
                if a.distance < b.distance {
                    Some((true, a))
                } else if b.distance < a.distance {
                    Some((false, b))
                } else {
                    None
                }
            }
            (Some(a), None) => Some((true, a)),
            (None, Some(b)) => Some((false, b)),
            (None, None) => None,
        }
    }

    /// Spleißt den Hinweg dauerhaft ein: verbindet die Spitze mit dem
    /// Treffer auf dem unberührten Kurvenabschnitt und entfernt alle
    /// Knoten dazwischen.
    fn reconnect(&mut self, curve: &mut Curve, on_pre: bool, hit: DistanceResult) -> Result<()> {
        let mut t = self.tip.unwrap_or(self.start);

        let target = if on_pre {
            match hit.node_index() {
                Some(node) => node,
                None => {
                    curve.insert_node_before(hit.segment + 1, hit.point_on(&self.pre))?;
                    self.start += 1;
                    self.stop += 1;
                    t += 1;
                    hit.segment + 1
                }
            }
        } else {
            let base = self.stop + 1;
            match hit.node_index() {
                Some(node) => base + node,
                None => {
                    let anchor = hit.point_on(&self.post);
                    curve.insert_node_before(base + hit.segment + 1, anchor)?;
                    base + hit.segment + 1
                }
            }
        };

        let victims = curve.delete_node_range(t.min(target), t.max(target))?;
        debug!("Tendril eingespleißt ({victims} Knoten entfernt, Ziel {target})");
        self.tip = Some(t);
        Ok(())
    }

    /// Räumt die Tendril beim Loslassen ohne Anschluss vollständig ab
    /// und stellt den ursprünglichen Kurvenverlauf wieder her.
    pub fn finalize(&self, curve: &mut Curve) -> Result<()> {
        let root = curve.node(self.start)?;
        curve.delete_node_range(self.start - 1, self.stop + 1)?;
        if self.nodal {
            curve.insert_node_before(self.start, root)?;
        }
        debug!("Tendril verworfen, Kurve wiederhergestellt");
        Ok(())
    }
}
