//! Freiform-Werkzeug: interaktives Zeichnen, Radieren und Splice-Editing.
//!
//! - [`state`]: Pointer-Zustandsmaschine ([`FreeformSession`])
//! - [`tendril`]: Splice-Auswuchs beim Editieren innerer Kurvenpunkte
//! - [`reshape`]: Zusammenfügen und Auftrennen von Kurven

pub mod reshape;
pub mod state;
pub mod tendril;

pub use state::{FreeformSession, PointerEvent, PointerModifiers, SessionState};
pub use tendril::{Tendril, TendrilStep};

#[cfg(test)]
mod tests;
