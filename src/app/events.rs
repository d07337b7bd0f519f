//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorMode;
use crate::core::LayerKind;
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Interaktionsmodus wechseln ("Add Point"/"Add Line"-Buttons)
    SetEditorModeRequested { mode: EditorMode },
    /// Primärklick auf die Karte (Lon/Lat der Klickposition)
    MapClicked { lonlat: DVec2 },
    /// Cursor über der Karte bewegt (Preview und Status-Bar)
    CursorMoved { lonlat: DVec2 },
    /// Sichtbarkeit einer Kategorie umschalten
    LayerVisibilityToggled { kind: LayerKind },
    /// Alle Features einer Kategorie löschen
    ClearLayerRequested { kind: LayerKind },
    /// Inspektions-Popup schließen
    PopupCloseRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben (Drag-Pan)
    CameraPan { delta_px: DVec2 },
    /// Kamera zoomen (Scroll), optional auf einen Fokuspunkt in Screen-Pixeln
    CameraZoom { delta: f64, focus_px: Option<DVec2> },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf den Standard-Ausschnitt zurücksetzen
    ResetCameraRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Interaktionsmodus setzen (verwirft einen angefangenen Linienzug)
    SetEditorMode { mode: EditorMode },
    /// Punkt-Feature mit aktuellem Datum committen
    CommitPoint { lonlat: DVec2 },
    /// Stützpunkt an den Linien-Puffer anhängen (Commit beim zweiten)
    AppendLinePoint { lonlat: DVec2 },
    /// Cursor-Position aktualisieren
    SetCursorPosition { lonlat: DVec2 },
    /// Sichtbarkeit einer Kategorie umschalten
    ToggleLayerVisibility { kind: LayerKind },
    /// Kollektion einer Kategorie leeren
    ClearLayer { kind: LayerKind },
    /// Inspektions-Popup für ein getroffenes Feature öffnen
    OpenFeaturePopup {
        /// Anker-Koordinate wie gespeichert (unnormalisiert)
        anchor: DVec2,
        /// Längengrad des auslösenden Klicks (Wrap-Referenz)
        click_lon: f64,
        /// Erstellungsdatum des Features, falls gesetzt
        created: Option<String>,
    },
    /// Inspektions-Popup schließen
    ClosePopup,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Pixel-Delta verschieben
    PanCamera { delta_px: DVec2 },
    /// Kamera um `delta` Level zoomen, optional ortsfest um einen Fokuspunkt
    ZoomCamera { delta: f64, focus_px: Option<DVec2> },
    /// Kamera auf den Standard-Ausschnitt zurücksetzen
    ResetCamera,
    /// Anwendung beenden
    RequestExit,
}
