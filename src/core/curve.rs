//! Freiform-Kurve: Knotenpuffer plus lazy berechnete Kennwerte
//! (Länge, Bounding-Box) und Auswahl-/Highlight-Zustand.

use glam::Vec2;

use anyhow::Result;

use super::geometry::{nearest_point_on_polyline, DistanceResult};
use super::node_buffer::NodeBuffer;

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Umschließende Box einer Punktmenge. `None` bei leerer Menge.
    pub fn of_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    /// Distanz eines Punkts zur Box; 0 im Inneren.
    pub fn distance_to(&self, query: Vec2) -> f32 {
        let clamped = query.clamp(self.min, self.max);
        clamped.distance(query)
    }
}

/// Welche Teile einer Kurve hervorgehoben gezeichnet werden.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HighlightState {
    /// Kreis am ersten Knoten
    pub head: bool,
    /// Kreis am letzten Knoten
    pub tail: bool,
    /// Kreis an einem inneren Knoten (Splice-Anker)
    pub node: Option<usize>,
}

impl HighlightState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy)]
struct CurveCache {
    length: f32,
    bounds: Option<Bounds>,
}

/// Eine interaktiv editierbare Freiform-Kurve.
///
/// Länge und Bounding-Box werden erst bei Zugriff berechnet und bleiben
/// gültig, bis eine mutierende Operation den Cache verwirft.
#[derive(Debug, Clone)]
pub struct Curve {
    buffer: NodeBuffer,
    cache: Option<CurveCache>,
    /// `true`, solange die Kurve gerade per Drag gezeichnet wird
    pub drawing_in_progress: bool,
    /// Auswahl-Flag (steuert Farbe und Glow)
    pub selected: bool,
    /// Hervorgehobene Knoten
    pub highlight: HighlightState,
}

impl Curve {
    /// Neue Kurve mit einem einzelnen Startpunkt (Zeichenbeginn).
    pub fn new_at(p: Vec2) -> Self {
        Self {
            buffer: NodeBuffer::with_first_point(p),
            cache: None,
            drawing_in_progress: true,
            selected: false,
            highlight: HighlightState::default(),
        }
    }

    /// Fertige Kurve aus einer Punktliste (ohne Scratch-Slots).
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self {
            buffer: NodeBuffer::from_points(points),
            cache: None,
            drawing_in_progress: false,
            selected: false,
            highlight: HighlightState::default(),
        }
    }

    // ── Lesender Zugriff ────────────────────────────────────────────

    pub fn nodes(&self) -> &[Vec2] {
        self.buffer.active_points()
    }

    /// Alle Puffer-Slots inklusive Scratch, für Render-Schnappschüsse.
    pub fn all_nodes(&self) -> &[Vec2] {
        self.buffer.all_points()
    }

    pub fn node_count(&self) -> usize {
        self.buffer.active_count()
    }

    pub fn node(&self, index: usize) -> Result<Vec2> {
        self.buffer.point(index)
    }

    pub fn first_node(&self) -> Option<Vec2> {
        self.buffer.first()
    }

    pub fn last_node(&self) -> Option<Vec2> {
        self.buffer.last()
    }

    pub fn is_degenerate(&self) -> bool {
        self.buffer.is_degenerate()
    }

    pub fn buffer(&self) -> &NodeBuffer {
        &self.buffer
    }

    /// Nächster Punkt auf der Kurve zu `query`.
    pub fn nearest_point(&self, query: Vec2) -> Option<DistanceResult> {
        nearest_point_on_polyline(self.nodes(), query)
    }

    // ── Kennwerte (lazy) ────────────────────────────────────────────

    fn cache(&mut self) -> CurveCache {
        if let Some(cache) = self.cache {
            return cache;
        }
        let nodes = self.buffer.active_points();
        let length = nodes.windows(2).map(|w| w[0].distance(w[1])).sum();
        let cache = CurveCache {
            length,
            bounds: Bounds::of_points(nodes),
        };
        self.cache = Some(cache);
        cache
    }

    /// Polylinien-Länge über alle aktiven Knoten.
    pub fn length(&mut self) -> f32 {
        self.cache().length
    }

    /// Bounding-Box der aktiven Knoten.
    pub fn bounds(&mut self) -> Option<Bounds> {
        self.cache().bounds
    }

    /// Distanz zur Bounding-Box — billiger Vorfilter für Szene-Abfragen.
    pub fn distance_to_bounding_box(&mut self, query: Vec2) -> f32 {
        self.bounds().map_or(f32::INFINITY, |b| b.distance_to(query))
    }

    /// Mehrzeilige Kennwert-Zusammenfassung für Statuszeilen.
    pub fn statistics(&mut self) -> String {
        let count = self.node_count();
        let length = self.length();
        match self.bounds() {
            Some(b) => format!(
                "Bounds = ({}, {}), ({}, {})\nNumber of Nodes = {}\nCurve Length = {}",
                b.min.x, b.min.y, b.max.x, b.max.y, count, length
            ),
            None => format!("Number of Nodes = {count}\nCurve Length = {length}"),
        }
    }

    // ── Mutationen (verwerfen den Cache) ────────────────────────────

    pub fn append_node(&mut self, p: Vec2) {
        self.buffer.append(p);
        self.cache = None;
    }

    pub fn insert_node_before(&mut self, index: usize, p: Vec2) -> Result<()> {
        self.buffer.insert_before(index, p)?;
        self.cache = None;
        Ok(())
    }

    /// Entfernt die Knoten strikt zwischen `i1` und `i2`.
    pub fn delete_node_range(&mut self, i1: usize, i2: usize) -> Result<usize> {
        let victims = self.buffer.delete_range(i1, i2)?;
        self.cache = None;
        Ok(victims)
    }

    pub fn delete_node_at(&mut self, index: usize) -> Result<()> {
        self.buffer.delete_at(index)?;
        self.cache = None;
        Ok(())
    }

    /// Entfernt den letzten Knoten (Radier-Modus).
    pub fn delete_last_node(&mut self) -> Result<()> {
        let last = self.node_count().saturating_sub(1);
        self.delete_node_at(last)
    }

    pub fn reverse_nodes(&mut self) {
        self.buffer.reverse();
        self.cache = None;
    }

    /// Verwirft alle Scratch-Slots nach Abschluss eines Drags.
    pub fn truncate_scratch(&mut self) {
        self.buffer.truncate();
        self.cache = None;
    }
}
