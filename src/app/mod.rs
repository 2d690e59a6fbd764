//! Interaktionsschicht: Werkzeuge, die Pointer-Ereignisse in
//! Szenenoperationen übersetzen.

pub mod freeform;
