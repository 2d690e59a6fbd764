//! Wachsender Punkt-Puffer mit getrennter aktiver Länge und Kapazität.
//!
//! Slots hinter `active` sind Scratch-Slots: sie wiederholen den letzten
//! echten Punkt, damit ein Renderer, der den ganzen Puffer liest, während
//! eines laufenden Drags konsistente Geometrie sieht.

use anyhow::{bail, Result};
use glam::Vec2;

/// Initiale Kapazität eines neu angelegten Puffers.
pub const INITIAL_NODE_CAPACITY: usize = 100;

/// Punkt-Puffer einer Freiform-Kurve.
///
/// Invariante: `0 <= active_count() <= capacity()`; alle Slots ab
/// `active_count()` enthalten eine Wiederholung des letzten aktiven Punkts.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBuffer {
    points: Vec<Vec2>,
    active: usize,
}

impl NodeBuffer {
    /// Erstellt einen Puffer mit einem ersten Punkt und voller Scratch-Kapazität.
    pub fn with_first_point(p: Vec2) -> Self {
        Self {
            points: vec![p; INITIAL_NODE_CAPACITY],
            active: 1,
        }
    }

    /// Erstellt einen Puffer ohne Scratch-Slots (`active_count == capacity`).
    pub fn from_points(points: Vec<Vec2>) -> Self {
        let active = points.len();
        Self { points, active }
    }

    /// Anzahl der echten Knoten.
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Gesamtlänge des Puffers inklusive Scratch-Slots.
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn der Puffer keine darstellbare Kurve mehr trägt.
    pub fn is_degenerate(&self) -> bool {
        self.active < 2
    }

    /// Die echten Knoten.
    pub fn active_points(&self) -> &[Vec2] {
        &self.points[..self.active]
    }

    /// Alle Slots inklusive Scratch — für Renderer-Schnappschüsse während eines Drags.
    pub fn all_points(&self) -> &[Vec2] {
        &self.points
    }

    /// Liest den Knoten an `index`.
    pub fn point(&self, index: usize) -> Result<Vec2> {
        if index >= self.active {
            bail!("Knotenindex {index} außerhalb von 0..{}", self.active);
        }
        Ok(self.points[index])
    }

    /// Erster echter Knoten.
    pub fn first(&self) -> Option<Vec2> {
        self.active_points().first().copied()
    }

    /// Letzter echter Knoten.
    pub fn last(&self) -> Option<Vec2> {
        self.active_points().last().copied()
    }

    /// Hängt einen Knoten an. Bei vollem Puffer verdoppelt sich die Kapazität;
    /// alle Scratch-Slots werden mit `p` gefüllt.
    pub fn append(&mut self, p: Vec2) {
        if self.active == self.points.len() {
            let doubled = (self.points.len() * 2).max(1);
            self.resize_to(doubled);
        }
        for slot in &mut self.points[self.active..] {
            *slot = p;
        }
        self.active += 1;
    }

    /// Fügt `p` vor dem Knoten an `index` ein (Rechts-Shift des Restes).
    pub fn insert_before(&mut self, index: usize, p: Vec2) -> Result<()> {
        if index >= self.active {
            bail!("insert_before: Index {index} außerhalb von 0..{}", self.active);
        }
        if self.active == self.points.len() {
            let doubled = (self.points.len() * 2).max(1);
            self.resize_to(doubled);
        }
        for i in (index..self.active).rev() {
            self.points[i + 1] = self.points[i];
        }
        self.points[index] = p;
        self.active += 1;
        Ok(())
    }

    /// Entfernt die Knoten strikt zwischen `i1` und `i2` (Opfer `i1+1..i2`).
    ///
    /// `i2 == i1 + 1` ist ein No-op. Aktive Länge und Kapazität sinken beide
    /// um die Opferanzahl. Gibt die Anzahl entfernter Knoten zurück.
    pub fn delete_range(&mut self, i1: usize, i2: usize) -> Result<usize> {
        if i1 >= i2 || i2 >= self.active {
            bail!(
                "delete_range: ungültiges Intervall ({i1}, {i2}) bei {} aktiven Knoten",
                self.active
            );
        }
        if i2 == i1 + 1 {
            return Ok(0);
        }
        let victims = i2 - i1 - 1;
        self.points.drain(i1 + 1..i2);
        self.active -= victims;
        Ok(victims)
    }

    /// Entfernt genau einen Knoten und verwirft dabei alle Scratch-Slots.
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        if index >= self.active {
            bail!("delete_at: Index {index} außerhalb von 0..{}", self.active);
        }
        self.points.remove(index);
        self.active -= 1;
        self.points.truncate(self.active);
        Ok(())
    }

    /// Kehrt die Knotenreihenfolge um. Scratch-Slots werden vorher verworfen.
    pub fn reverse(&mut self) {
        self.truncate();
        self.points.reverse();
    }

    /// Verwirft alle Scratch-Slots (`capacity == active_count`).
    pub fn truncate(&mut self) {
        self.points.truncate(self.active);
    }

    /// Ändert die Kapazität. Beim Wachsen wiederholen neue Slots den letzten
    /// vorhandenen Punkt; beim Schrumpfen fällt der Schwanz weg.
    pub fn resize_to(&mut self, new_capacity: usize) {
        let fill = self.points.last().copied().unwrap_or(Vec2::ZERO);
        self.points.resize(new_capacity, fill);
        self.active = self.active.min(new_capacity);
    }
}
