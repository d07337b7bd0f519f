//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fällt die zentrale Entscheidung des Interaktions-Automaten:
//! ob ein Kartenklick ein Feature erstellt, einen Linien-Stützpunkt
//! anhängt oder ein bestehendes Feature inspiziert.

use super::state::EditorMode;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{self, FeatureHit};
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SetEditorModeRequested { mode } => vec![AppCommand::SetEditorMode { mode }],
        AppIntent::MapClicked { lonlat } => map_click(state, lonlat),
        AppIntent::CursorMoved { lonlat } => vec![AppCommand::SetCursorPosition { lonlat }],
        AppIntent::LayerVisibilityToggled { kind } => {
            vec![AppCommand::ToggleLayerVisibility { kind }]
        }
        AppIntent::ClearLayerRequested { kind } => vec![AppCommand::ClearLayer { kind }],
        AppIntent::PopupCloseRequested => vec![AppCommand::ClosePopup],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_px } => vec![AppCommand::PanCamera { delta_px }],
        AppIntent::CameraZoom { delta, focus_px } => {
            vec![AppCommand::ZoomCamera { delta, focus_px }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            delta: state.options.camera_zoom_step,
            focus_px: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            delta: -state.options.camera_zoom_step,
            focus_px: None,
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Entscheidet, was ein Primärklick auf die Karte auslöst.
///
/// Hit-Test gegen die gerenderten Layer, dann modusabhängig:
/// - `AddLine` mit ausstehendem Punkt: der Linienbau gewinnt, der Klick
///   wird immer als Stützpunkt angehängt (Inspect unterdrückt).
/// - `AddLine` mit leerem Puffer / `AddPoint`: Treffer → Inspektion
///   (der Modus bleibt aktiv), freie Fläche → erstellen.
/// - `Idle`: Treffer → Inspektion, sonst No-op.
fn map_click(state: &AppState, lonlat: DVec2) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    if state.popup.is_some() {
        commands.push(AppCommand::ClosePopup);
    }

    let hit = core::pick_topmost(
        &state.layers,
        &state.view.camera,
        state.view.viewport_size,
        lonlat,
        state.options.pick_radius_px as f64,
    );

    match state.editor.mode {
        EditorMode::AddLine if !state.editor.pending.is_empty() => {
            commands.push(AppCommand::AppendLinePoint { lonlat });
        }
        EditorMode::AddLine => match hit {
            Some(hit) => commands.push(open_popup_command(hit, lonlat.x)),
            None => commands.push(AppCommand::AppendLinePoint { lonlat }),
        },
        EditorMode::AddPoint => match hit {
            Some(hit) => commands.push(open_popup_command(hit, lonlat.x)),
            None => commands.push(AppCommand::CommitPoint { lonlat }),
        },
        EditorMode::Idle => {
            if let Some(hit) = hit {
                commands.push(open_popup_command(hit, lonlat.x));
            }
        }
    }

    commands
}

fn open_popup_command(hit: FeatureHit, click_lon: f64) -> AppCommand {
    AppCommand::OpenFeaturePopup {
        anchor: hit.anchor,
        click_lon,
        created: hit.created,
    }
}

#[cfg(test)]
mod tests;
