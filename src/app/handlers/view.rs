//! Handler für Kamera, Viewport und Anwendungssteuerung.

use crate::app::AppState;
use crate::core::MapCamera;
use glam::DVec2;

/// Setzt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta_px: DVec2) {
    state.view.camera.pan_by_pixels(delta_px);
}

/// Zoomt die Kamera, optional ortsfest um einen Fokuspunkt.
pub fn zoom(state: &mut AppState, delta: f64, focus_px: Option<DVec2>) {
    let viewport = state.view.viewport_size;
    state.view.camera.zoom_by(delta, focus_px, viewport);
}

/// Setzt die Kamera auf den konfigurierten Standard-Ausschnitt zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = MapCamera::new(
        DVec2::new(
            state.options.default_center[0],
            state.options.default_center[1],
        ),
        state.options.default_zoom,
    );
    log::info!("Kamera zurückgesetzt");
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
