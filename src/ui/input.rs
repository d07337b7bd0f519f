//! Viewport-Input-Handling: Maus-Events, Drag-Pan, Scroll-Zoom → AppIntent.

use crate::app::{AppIntent, EditorMode};
use crate::core::MapCamera;
use crate::shared::options::CAMERA_SCROLL_ZOOM_PER_100PX;
use glam::DVec2;

/// Verwaltet den Input-Zustand für das Karten-Viewport.
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Cursor-Position; unterdrückt redundante
    /// `CursorMoved`-Events bei stillstehender Maus
    last_cursor: Option<DVec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &MapCamera,
        popup_open: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(collect_keyboard_intents(ui, popup_open));

        // Cursor-Position (nur bei Änderung melden)
        if let Some(pointer_pos) = response.hover_pos() {
            let lonlat = screen_pos_to_lonlat(pointer_pos, response, viewport_size, camera);
            if self.last_cursor != Some(lonlat) {
                self.last_cursor = Some(lonlat);
                events.push(AppIntent::CursorMoved { lonlat });
            }
        }

        // Primärklick → Interaktions-Automat
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let lonlat = screen_pos_to_lonlat(pointer_pos, response, viewport_size, camera);
                events.push(AppIntent::MapClicked { lonlat });
            }
        }

        // Kamera-Pan per Primär-Drag (Karte folgt der Maus)
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta_px: DVec2::new(-delta.x as f64, -delta.y as f64),
                });
            }
        }

        // Scroll-Zoom auf Mausposition
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll.abs() > f32::EPSILON {
                let focus_px = response.hover_pos().map(|pos| {
                    let local = pos - response.rect.min;
                    DVec2::new(local.x as f64, local.y as f64)
                });
                events.push(AppIntent::CameraZoom {
                    delta: scroll as f64 / 100.0 * CAMERA_SCROLL_ZOOM_PER_100PX,
                    focus_px,
                });
            }
        }

        events
    }
}

/// Tastatur-Shortcuts: Moduswahl, Abbruch, Zoom.
fn collect_keyboard_intents(ui: &egui::Ui, popup_open: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.input(|i| {
        if i.key_pressed(egui::Key::Num1) {
            events.push(AppIntent::SetEditorModeRequested {
                mode: EditorMode::AddPoint,
            });
        }
        if i.key_pressed(egui::Key::Num2) {
            events.push(AppIntent::SetEditorModeRequested {
                mode: EditorMode::AddLine,
            });
        }
        if i.key_pressed(egui::Key::Escape) {
            // Erst das Popup schließen, sonst den Modus verlassen
            if popup_open {
                events.push(AppIntent::PopupCloseRequested);
            } else {
                events.push(AppIntent::SetEditorModeRequested {
                    mode: EditorMode::Idle,
                });
            }
        }
        if i.key_pressed(egui::Key::Plus) {
            events.push(AppIntent::ZoomInRequested);
        }
        if i.key_pressed(egui::Key::Minus) {
            events.push(AppIntent::ZoomOutRequested);
        }
    });

    events
}

/// Rechnet eine Bildschirmposition in Lon/Lat um.
fn screen_pos_to_lonlat(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &MapCamera,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_lonlat(DVec2::new(local.x as f64, local.y as f64), viewport_size)
}
