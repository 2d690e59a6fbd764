//! Füttert die Session mit beliebigen Pointer-Sequenzen: kein Handler
//! darf fehlschlagen, und die Szene darf keine degenerierte Kurve
//! behalten, sobald die Interaktion beendet ist.

#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;

use overlay_curve_editor::{
    FreeformSession, OverlayScene, PointerEvent, PointerModifiers, SessionState,
};

fuzz_target!(|data: &[u8]| {
    let mut scene = OverlayScene::new();
    let mut session = FreeformSession::default();
    let mut down = false;

    for chunk in data.chunks_exact(4) {
        let x = chunk[1] as f32 - 128.0;
        let y = chunk[2] as f32 - 128.0;
        let event = PointerEvent {
            screen: Vec2::new(x, y),
            domain: Vec2::new(x, y),
            modifiers: PointerModifiers {
                erase: chunk[3] & 1 != 0,
                keep_extending: chunk[3] & 2 != 0,
            },
        };
        let result = match chunk[0] % 3 {
            0 => {
                down = true;
                session.on_pointer_down(&mut scene, event)
            }
            1 => session.on_pointer_drag(&mut scene, event),
            _ => {
                down = false;
                session.on_pointer_up(&mut scene, event)
            }
        };
        assert!(result.is_ok(), "Handler darf nie fehlschlagen: {result:?}");
    }

    if !down {
        assert!(matches!(session.state(), SessionState::Idle));
        for (_, shape) in scene.iter() {
            if let Some(curve) = shape.as_freeform() {
                assert!(curve.node_count() >= 2);
            }
        }
    }
});
