//! Handler für das Inspektions-Popup.

use crate::app::state::PopupState;
use crate::app::AppState;
use crate::core::geo;
use glam::DVec2;

/// Fallback-Text wenn ein Feature kein Erstellungsdatum trägt.
const CREATED_UNSPECIFIED: &str = "unspecified";

/// Öffnet das Inspektions-Popup für ein getroffenes Feature.
///
/// Der Anker-Längengrad wird in den Wrap-Zyklus des auslösenden Klicks
/// normalisiert, damit das Popup an der Antimeridian-Grenze nicht um
/// die halbe Welt versetzt erscheint.
pub fn open_popup(state: &mut AppState, anchor: DVec2, click_lon: f64, created: Option<String>) {
    let lon = geo::wrap_longitude_near(anchor.x, click_lon);
    let text = created.unwrap_or_else(|| CREATED_UNSPECIFIED.to_string());

    log::info!("Inspektion: Feature vom {}", text);
    state.popup = Some(PopupState {
        anchor: DVec2::new(lon, anchor.y),
        text,
    });
}

/// Schließt das Inspektions-Popup.
pub fn close_popup(state: &mut AppState) {
    state.popup = None;
}
