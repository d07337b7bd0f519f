//! Inspektions-Popup, am Feature-Anker über der Karte verankert.

use crate::app::{AppIntent, AppState};

/// Rendert das Inspektions-Popup (falls offen) und gibt erzeugte
/// Events zurück.
///
/// Der Anker kommt bereits längengrad-normalisiert aus dem State; hier
/// wird er nur noch in Screen-Koordinaten umgerechnet.
pub fn render_popup(ctx: &egui::Context, rect: egui::Rect, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(popup) = &state.popup else {
        return events;
    };

    let viewport = [rect.width(), rect.height()];
    let px = state.view.camera.lonlat_to_screen(popup.anchor, viewport);
    let pos = egui::pos2(rect.min.x + px.x as f32, rect.min.y + px.y as f32 - 10.0);

    egui::Area::new(egui::Id::new("feature_popup"))
        .fixed_pos(pos)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Erstellt: {}", popup.text));
                    if ui.small_button("✕").clicked() {
                        events.push(AppIntent::PopupCloseRequested);
                    }
                });
            });
        });

    events
}
