//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Einziger stabiler Event-Dispatcher: die UI erzeugt Intents, das
/// Intent-Mapping entscheidet anhand des Zustands, und Commands werden
/// sequenziell ausgeführt. Handler laufen bis zum Ende durch, bevor das
/// nächste Event verarbeitet wird.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktions-Automat ===
            AppCommand::SetEditorMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::CommitPoint { lonlat } => handlers::editing::commit_point(state, lonlat),
            AppCommand::AppendLinePoint { lonlat } => {
                handlers::editing::append_line_point(state, lonlat)
            }
            AppCommand::SetCursorPosition { lonlat } => {
                handlers::editing::set_cursor(state, lonlat)
            }

            // === Layer-Controls ===
            AppCommand::ToggleLayerVisibility { kind } => {
                handlers::layers::toggle_visibility(state, kind)
            }
            AppCommand::ClearLayer { kind } => handlers::layers::clear_layer(state, kind),

            // === Inspektion ===
            AppCommand::OpenFeaturePopup {
                anchor,
                click_lon,
                created,
            } => handlers::inspect::open_popup(state, anchor, click_lon, created),
            AppCommand::ClosePopup => handlers::inspect::close_popup(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_px } => handlers::view::pan(state, delta_px),
            AppCommand::ZoomCamera { delta, focus_px } => {
                handlers::view::zoom(state, delta, focus_px)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
        }

        Ok(())
    }
}
