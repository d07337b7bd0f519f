//! Handler für Layer-Controls: Sichtbarkeit und Bulk-Delete.

use crate::app::state::EditorMode;
use crate::app::AppState;
use crate::core::LayerKind;

/// Schaltet die Sichtbarkeit einer Kategorie um.
///
/// Die Daten bleiben unberührt; erneutes Einblenden stellt alle zuvor
/// erstellten Features wieder her.
pub fn toggle_visibility(state: &mut AppState, kind: LayerKind) {
    let layer = state.layers.layer_mut(kind);
    layer.visible = !layer.visible;
    log::info!(
        "Layer {} {}",
        kind.label(),
        if layer.visible {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}

/// Leert die Kollektion einer Kategorie (Bulk-Delete).
///
/// Läuft dabei ein Linienbau, werden Puffer und Preview verworfen und
/// der Modus fällt auf `Idle` zurück, unabhängig davon welche
/// Kategorie gelöscht wurde.
pub fn clear_layer(state: &mut AppState, kind: LayerKind) {
    let removed = state.layers.layer(kind).len();
    state.layers.layer_mut(kind).clear();

    if state.editor.mode == EditorMode::AddLine && !state.editor.pending.is_empty() {
        state.editor.discard_line_construction();
        state.editor.mode = EditorMode::Idle;
        log::info!("Linienbau durch Bulk-Delete abgebrochen");
    }

    log::info!("Layer {} geleert ({} Features entfernt)", kind.label(), removed);
}
