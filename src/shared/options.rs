//! Zentrale Konfiguration für den Freiform-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//!
//! Alle Schwellwerte sind in Bildschirmpixeln angegeben; die Session
//! rechnet sie über ihren `pixel_scale` (Domäneneinheiten pro Pixel)
//! in Domänenkoordinaten um.

use serde::{Deserialize, Serialize};

// ── Schwellwerte (Bildschirmpixel) ──────────────────────────────────

/// Mindestabstand zum letzten Knoten, bevor beim Zeichnen ein neuer gesetzt wird.
pub const DRAW_THRESHOLD_PX: f32 = 2.0;
/// Radius, innerhalb dessen der Radier-Modus eine Kurve bzw. ihr Ende greift.
pub const ERASE_THRESHOLD_PX: f32 = 10.0;
/// Radius, innerhalb dessen ein Klick auf einen inneren Kurvenpunkt das Splice-Editing startet.
pub const EDIT_THRESHOLD_PX: f32 = 6.0;
/// Abstand, bei dem eine Tendril wieder an die Kurve angeschlossen wird.
pub const RECONNECT_THRESHOLD_PX: f32 = 1.0;
/// Radius, innerhalb dessen ein Klick auf einen Endknoten das Zeichnen fortsetzt.
pub const RESUME_THRESHOLD_PX: f32 = 10.0;

// ── Glättung ────────────────────────────────────────────────────────

/// Faktor der einfachen exponentiellen Glättung roher Pointer-Samples.
pub const SMOOTHING_FACTOR: f32 = 0.35;

// ── Highlight-Rendering ─────────────────────────────────────────────

/// Breite des Offset-Bands (Glow) in Bildschirmpixeln.
pub const HIGHLIGHT_WIDTH_PX: f32 = 5.0;
/// Farbe des Auswahl-Glows (RGBA: Gelb, stark transparent).
pub const GLOW_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 0.15];
/// Farbe hervorgehobener Knoten (RGBA: Grün, halbtransparent).
pub const NODE_HIGHLIGHT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 0.5];

// ── Shape-Rendering ─────────────────────────────────────────────────

/// Standard-Farbe nicht selektierter Shapes (RGBA: Cyan).
pub const SHAPE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe selektierter Shapes (RGBA: Gelb).
pub const SHAPE_COLOR_SELECTED: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Zur Laufzeit änderbare Editor-Einstellungen.
///
/// Wird von der Host-Anwendung per serde persistiert; fehlende Felder
/// fallen auf die Defaults zurück.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Zeichen-Schwellwert in Pixeln
    pub draw_threshold_px: f32,
    /// Radier-Schwellwert in Pixeln
    pub erase_threshold_px: f32,
    /// Edit-Schwellwert in Pixeln
    pub edit_threshold_px: f32,
    /// Reconnect-Schwellwert in Pixeln
    pub reconnect_threshold_px: f32,
    /// Resume-Schwellwert in Pixeln
    pub resume_threshold_px: f32,
    /// Glättungsfaktor für Pointer-Samples
    pub smoothing_factor: f32,
    /// Breite des Highlight-Bands in Pixeln
    pub highlight_width_px: f32,
    /// Farbe des Auswahl-Glows
    pub glow_color: [f32; 4],
    /// Farbe hervorgehobener Knoten
    pub node_highlight_color: [f32; 4],
    /// Standard-Shape-Farbe
    pub shape_color: [f32; 4],
    /// Farbe selektierter Shapes
    pub selected_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            draw_threshold_px: DRAW_THRESHOLD_PX,
            erase_threshold_px: ERASE_THRESHOLD_PX,
            edit_threshold_px: EDIT_THRESHOLD_PX,
            reconnect_threshold_px: RECONNECT_THRESHOLD_PX,
            resume_threshold_px: RESUME_THRESHOLD_PX,
            smoothing_factor: SMOOTHING_FACTOR,
            highlight_width_px: HIGHLIGHT_WIDTH_PX,
            glow_color: GLOW_COLOR,
            node_highlight_color: NODE_HIGHLIGHT_COLOR,
            shape_color: SHAPE_COLOR_DEFAULT,
            selected_color: SHAPE_COLOR_SELECTED,
        }
    }
}
