//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Points: {} | Lines: {}",
                state.point_count(),
                state.line_count()
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2} | Zentrum: ({:.4}, {:.4})",
                state.view.camera.zoom, state.view.camera.center.x, state.view.camera.center.y
            ));

            ui.separator();

            if let Some(cursor) = state.editor.cursor {
                ui.label(format!("Cursor: ({:.4}, {:.4})", cursor.x, cursor.y));
            } else {
                ui.label("Cursor: –");
            }

            ui.separator();

            ui.label(format!("Modus: {}", state.editor.mode.label()));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
