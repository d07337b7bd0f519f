//! Toolbar für Moduswahl und Layer-Controls.

use crate::app::{AppIntent, AppState, EditorMode};
use crate::core::LayerKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            // ── Moduswahl ──
            let point_btn = egui::Button::new("📍 Add Point (1)");
            if ui
                .add(point_btn.selected(active == EditorMode::AddPoint))
                .clicked()
            {
                events.push(AppIntent::SetEditorModeRequested {
                    mode: EditorMode::AddPoint,
                });
            }

            let line_btn = egui::Button::new("📐 Add Line (2)");
            if ui
                .add(line_btn.selected(active == EditorMode::AddLine))
                .clicked()
            {
                events.push(AppIntent::SetEditorModeRequested {
                    mode: EditorMode::AddLine,
                });
            }

            ui.separator();

            // ── Layer-Controls pro Kategorie ──
            for kind in LayerKind::ALL {
                render_layer_controls(ui, state, kind, &mut events);
            }

            ui.separator();

            // ── Kamera ──
            if ui.button("➕").on_hover_text("Zoom in").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("➖").on_hover_text("Zoom out").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("⌂").on_hover_text("Ansicht zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            // Linienbau-Status
            if active == EditorMode::AddLine {
                ui.separator();
                if state.editor.pending.is_empty() {
                    ui.label("Wähle Startpunkt");
                } else {
                    ui.label("Startpunkt gesetzt → Wähle Endpunkt");
                }
            }
        });
    });

    events
}

/// Sichtbarkeits-Toggle und Bulk-Delete für eine Kategorie.
fn render_layer_controls(
    ui: &mut egui::Ui,
    state: &AppState,
    kind: LayerKind,
    events: &mut Vec<AppIntent>,
) {
    let layer = state.layers.layer(kind);

    let eye = if layer.visible { "👁" } else { "🚫" };
    let toggle_btn = egui::Button::new(format!("{} {}", eye, kind.label()));
    if ui
        .add(toggle_btn.selected(layer.visible))
        .on_hover_text("Sichtbarkeit umschalten")
        .clicked()
    {
        events.push(AppIntent::LayerVisibilityToggled { kind });
    }

    // Delete nur anbieten wenn es etwas zu löschen gibt
    if ui
        .add_enabled(!layer.is_empty(), egui::Button::new("🗑"))
        .on_hover_text(format!("Alle {} löschen", kind.label()))
        .clicked()
    {
        events.push(AppIntent::ClearLayerRequested { kind });
    }
}
