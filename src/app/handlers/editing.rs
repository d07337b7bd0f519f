//! Handler für den Interaktions-Automaten: Modus, Punkt- und Linien-Commit.

use crate::app::state::EditorMode;
use crate::app::AppState;
use glam::DVec2;

/// Erstellungsdatum für neue Features (lokale Zeit).
fn current_date() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Wechselt den Interaktionsmodus.
///
/// Ein angefangener Linienzug wird dabei verworfen: Puffer und Preview
/// gehören ausschließlich zum Linienmodus.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    if !state.editor.pending.is_empty() {
        log::info!(
            "Linienbau verworfen ({} ausstehender Stützpunkt)",
            state.editor.pending.len()
        );
    }
    state.editor.discard_line_construction();
    state.editor.mode = mode;
    log::info!("Interaktionsmodus: {}", mode.label());
}

/// Committed ein Punkt-Feature an der Klickposition.
///
/// Nach erfolgreicher Erstellung fällt der Modus auf `Idle` zurück.
pub fn commit_point(state: &mut AppState, lonlat: DVec2) {
    if state.editor.mode != EditorMode::AddPoint {
        log::warn!("CommitPoint außerhalb des AddPoint-Modus ignoriert");
        return;
    }

    let id = state.layers.points.append_point(lonlat, current_date());
    state.editor.mode = EditorMode::Idle;

    log::info!(
        "Punkt {} bei ({:.4}, {:.4}) erstellt",
        id,
        lonlat.x,
        lonlat.y
    );
}

/// Hängt einen Stützpunkt an den Linien-Puffer an.
///
/// Beim zweiten Punkt wird der Linienzug committed, der Puffer geleert
/// (und damit die Preview verworfen) und der Modus auf `Idle` gesetzt.
pub fn append_line_point(state: &mut AppState, lonlat: DVec2) {
    if state.editor.mode != EditorMode::AddLine {
        log::warn!("AppendLinePoint außerhalb des AddLine-Modus ignoriert");
        return;
    }

    state.editor.pending.push(lonlat);

    if state.editor.pending.len() < 2 {
        log::info!(
            "Linien-Stützpunkt ({:.4}, {:.4}) gepuffert",
            lonlat.x,
            lonlat.y
        );
        return;
    }

    let coordinates = std::mem::take(&mut state.editor.pending);
    state.editor.mode = EditorMode::Idle;

    match state.layers.lines.append_line(coordinates, current_date()) {
        Some(id) => log::info!("Linie {} committed", id),
        None => log::warn!("Linien-Commit abgewiesen"),
    }
}

/// Aktualisiert die Cursor-Position (Preview und Status-Bar).
pub fn set_cursor(state: &mut AppState, lonlat: DVec2) {
    state.editor.cursor = Some(lonlat);
}
