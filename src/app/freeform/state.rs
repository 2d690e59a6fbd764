//! Pointer-Zustandsmaschine des Freiform-Werkzeugs.
//!
//! Die Session übersetzt rohe Pointer-Ereignisse in Operationen auf der
//! Szene: Zeichnen, Radieren, Weiterzeichnen an Endknoten und
//! Splice-Editing über eine [`Tendril`].

use anyhow::Result;
use glam::Vec2;
use log::{debug, warn};

use crate::core::geometry::smooth;
use crate::core::{Curve, CurveEnd, OverlayScene, ShapeId};
use crate::shared::options::EditorOptions;

use super::reshape;
use super::tendril::{Tendril, TendrilStep};

/// Modifier-Tasten, die das Werkzeugverhalten umschalten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerModifiers {
    /// Radier-Modus (z. B. Strg)
    pub erase: bool,
    /// Unterdrückt beim Splice-Editing den Wiederanschluss an die Kurve
    pub keep_extending: bool,
}

/// Ein Pointer-Ereignis in Bildschirm- und Domänenkoordinaten.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    pub screen: Vec2,
    pub domain: Vec2,
    pub modifiers: PointerModifiers,
}

/// Zustand der laufenden Pointer-Interaktion.
#[derive(Debug, Default)]
pub enum SessionState {
    /// Keine Interaktion
    #[default]
    Idle,
    /// Gedrückt im Leeren; die Kurve entsteht erst beim ersten Drag
    Initializing { anchor: Vec2 },
    /// Eine Kurve wird gezeichnet oder weitergezeichnet
    Drawing { curve: ShapeId },
    /// Eine Kurve wird vom Schwanz her radiert
    Erasing { curve: ShapeId },
    /// Splice-Editing an einem inneren Kurvenpunkt
    Editing { curve: ShapeId, tendril: Tendril },
}

/// Interaktions-Session des Freiform-Werkzeugs.
pub struct FreeformSession {
    state: SessionState,
    pub options: EditorOptions,
    /// Domäneneinheiten pro Bildschirmpixel
    pub pixel_scale: f32,
    smoothed: Option<Vec2>,
}

impl Default for FreeformSession {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

impl FreeformSession {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            state: SessionState::Idle,
            options,
            pixel_scale: 1.0,
            smoothed: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // ── Schwellwerte in Domänenkoordinaten ──────────────────────────

    fn draw_threshold(&self) -> f32 {
        self.options.draw_threshold_px * self.pixel_scale
    }

    fn erase_threshold(&self) -> f32 {
        self.options.erase_threshold_px * self.pixel_scale
    }

    fn edit_threshold(&self) -> f32 {
        self.options.edit_threshold_px * self.pixel_scale
    }

    fn reconnect_threshold(&self) -> f32 {
        self.options.reconnect_threshold_px * self.pixel_scale
    }

    fn resume_threshold(&self) -> f32 {
        self.options.resume_threshold_px * self.pixel_scale
    }

    // ── Ereignisbehandlung ──────────────────────────────────────────

    pub fn on_pointer_down(&mut self, scene: &mut OverlayScene, event: PointerEvent) -> Result<()> {
        // Eine noch offene Interaktion wird erst sauber abgeschlossen.
        if !matches!(self.state, SessionState::Idle) {
            self.on_pointer_up(scene, event)?;
        }
        self.smoothed = Some(event.domain);
        self.state = if event.modifiers.erase {
            self.begin_erase(scene, event)?
        } else {
            self.begin_draw_or_edit(scene, event)?
        };
        Ok(())
    }

    pub fn on_pointer_drag(&mut self, scene: &mut OverlayScene, event: PointerEvent) -> Result<()> {
        let previous = self.smoothed.unwrap_or(event.domain);
        let s = smooth(event.domain, previous, self.options.smoothing_factor);
        self.smoothed = Some(s);

        let state = std::mem::take(&mut self.state);
        self.state = match state {
            SessionState::Idle => SessionState::Idle,
            SessionState::Initializing { anchor } => {
                let id = scene.add_freeform(Curve::new_at(anchor));
                if let Some(curve) = scene.freeform_mut(id) {
                    curve.selected = true;
                }
                debug!("Neue Freiform {id:?} bei {anchor} begonnen");
                self.drag_draw(scene, id, s, event)?
            }
            SessionState::Drawing { curve } => self.drag_draw(scene, curve, s, event)?,
            SessionState::Erasing { curve } => self.drag_erase(scene, curve, s)?,
            SessionState::Editing { curve, tendril } => {
                self.drag_edit(scene, curve, tendril, s, event)?
            }
        };
        Ok(())
    }

    pub fn on_pointer_up(&mut self, scene: &mut OverlayScene, _event: PointerEvent) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        match state {
            SessionState::Idle | SessionState::Initializing { .. } => {}
            SessionState::Drawing { curve } | SessionState::Erasing { curve } => {
                self.settle_curve(scene, curve);
            }
            SessionState::Editing { curve, tendril } => {
                if let Some(c) = scene.freeform_mut(curve) {
                    tendril.finalize(c)?;
                }
                self.settle_curve(scene, curve);
            }
        }
        self.smoothed = None;
        Ok(())
    }

    // ── Pointer-Down-Zweige ─────────────────────────────────────────

    fn begin_draw_or_edit(
        &self,
        scene: &mut OverlayScene,
        event: PointerEvent,
    ) -> Result<SessionState> {
        if let Some((id, end, distance)) = scene.nearest_freeform_endpoint(event.domain, None) {
            if distance <= self.resume_threshold() {
                if let Some(curve) = scene.freeform_mut(id) {
                    if end == CurveEnd::Head {
                        curve.reverse_nodes();
                    }
                    curve.drawing_in_progress = true;
                    curve.selected = true;
                    curve.highlight.clear();
                    curve.highlight.tail = true;
                }
                debug!("Weiterzeichnen an {id:?} ({end:?})");
                return Ok(SessionState::Drawing { curve: id });
            }
        }

        if let Some((id, hit)) = scene.nearest_freeform(event.domain, None) {
            if hit.distance <= self.edit_threshold() {
                if let Some(curve) = scene.freeform_mut(id) {
                    match Tendril::create(curve, hit) {
                        Ok(tendril) => {
                            curve.selected = true;
                            curve.highlight.clear();
                            curve.highlight.node = Some(tendril.start);
                            return Ok(SessionState::Editing { curve: id, tendril });
                        }
                        // Endknoten-Anker: kein Splice, Klick verpufft
                        Err(e) => debug!("Kein Splice-Editing: {e}"),
                    }
                }
                return Ok(SessionState::Idle);
            }
            // Totzone zwischen Edit- und Radier-Schwelle: zu weit weg
            // für Splice-Editing, zu nah dran für eine neue Kurve.
            if hit.distance <= self.erase_threshold() {
                return Ok(SessionState::Idle);
            }
        }

        Ok(SessionState::Initializing {
            anchor: event.domain,
        })
    }

    fn begin_erase(&self, scene: &mut OverlayScene, event: PointerEvent) -> Result<SessionState> {
        if let Some((id, end, distance)) = scene.nearest_freeform_endpoint(event.domain, None) {
            if distance <= self.erase_threshold() {
                if let Some(curve) = scene.freeform_mut(id) {
                    if end == CurveEnd::Head {
                        curve.reverse_nodes();
                    }
                    curve.selected = true;
                    curve.highlight.clear();
                    curve.highlight.tail = true;
                }
                debug!("Radieren an {id:?} ({end:?})");
                return Ok(SessionState::Erasing { curve: id });
            }
        }

        if let Some((id, hit)) = scene.nearest_freeform(event.domain, None) {
            if hit.distance <= self.erase_threshold() {
                let surviving = reshape::split(scene, id, hit)?;
                return Ok(match surviving {
                    Some(curve) => {
                        if let Some(c) = scene.freeform_mut(curve) {
                            c.selected = true;
                            c.highlight.tail = true;
                        }
                        SessionState::Erasing { curve }
                    }
                    None => SessionState::Idle,
                });
            }
        }

        Ok(SessionState::Idle)
    }

    // ── Drag-Zweige ─────────────────────────────────────────────────

    fn drag_draw(
        &self,
        scene: &mut OverlayScene,
        id: ShapeId,
        s: Vec2,
        event: PointerEvent,
    ) -> Result<SessionState> {
        let draw_threshold = self.draw_threshold();
        let can_join = {
            let Some(curve) = scene.freeform_mut(id) else {
                warn!("drag_draw: Kurve {id:?} verschwunden");
                return Ok(SessionState::Idle);
            };
            if event.modifiers.erase {
                curve.truncate_scratch();
                return Ok(SessionState::Erasing { curve: id });
            }
            !curve.is_degenerate()
        };

        // Anschluss an eine fremde Kurve ersetzt das Anhängen; der rohe
        // Zeigerpunkt zählt, nicht der geglättete.
        if can_join {
            if let Some((other, end, distance)) =
                scene.nearest_freeform_endpoint(event.domain, Some(id))
            {
                if distance <= draw_threshold {
                    let joined = reshape::join(scene, id, other, end)?;
                    debug!("Zeichnung in {joined:?} aufgegangen");
                    return Ok(SessionState::Idle);
                }
            }
        }

        if let Some(curve) = scene.freeform_mut(id) {
            if curve.last_node().map_or(true, |last| last.distance(s) > draw_threshold) {
                curve.append_node(s);
            }
        }

        Ok(SessionState::Drawing { curve: id })
    }

    fn drag_erase(&self, scene: &mut OverlayScene, id: ShapeId, s: Vec2) -> Result<SessionState> {
        let erase_threshold = self.erase_threshold();
        let Some(curve) = scene.freeform_mut(id) else {
            warn!("drag_erase: Kurve {id:?} verschwunden");
            return Ok(SessionState::Idle);
        };

        if let Some(last) = curve.last_node() {
            if last.distance(s) <= erase_threshold {
                curve.delete_last_node()?;
            }
        }
        if curve.is_degenerate() {
            scene.remove(id);
            debug!("Kurve {id:?} vollständig wegradiert");
            return Ok(SessionState::Idle);
        }
        Ok(SessionState::Erasing { curve: id })
    }

    fn drag_edit(
        &self,
        scene: &mut OverlayScene,
        id: ShapeId,
        mut tendril: Tendril,
        s: Vec2,
        event: PointerEvent,
    ) -> Result<SessionState> {
        let Some(curve) = scene.freeform_mut(id) else {
            warn!("drag_edit: Kurve {id:?} verschwunden");
            return Ok(SessionState::Idle);
        };

        let step = tendril.extend_or_reconnect(
            curve,
            s,
            self.reconnect_threshold(),
            self.draw_threshold(),
            event.modifiers.keep_extending,
        )?;

        match step {
            TendrilStep::Reconnected => {
                curve.selected = false;
                curve.highlight.clear();
                Ok(SessionState::Idle)
            }
            TendrilStep::Extended | TendrilStep::Waiting => {
                curve.highlight.node = Some(tendril.start);
                Ok(SessionState::Editing { curve: id, tendril })
            }
        }
    }

    /// Gemeinsamer Abschluss nach Drawing, Erasing oder Editing.
    fn settle_curve(&self, scene: &mut OverlayScene, id: ShapeId) {
        let degenerate = match scene.freeform_mut(id) {
            Some(curve) => {
                curve.truncate_scratch();
                curve.drawing_in_progress = false;
                curve.highlight.clear();
                curve.is_degenerate()
            }
            None => false,
        };
        if degenerate {
            scene.remove(id);
            debug!("Degenerierte Kurve {id:?} verworfen");
        }
    }
}
