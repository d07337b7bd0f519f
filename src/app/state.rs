//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{LayerSet, MapCamera};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Aktueller Interaktionsmodus des Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Kein Erstellmodus: Klicks inspizieren nur bestehende Features
    #[default]
    Idle,
    /// Nächster Klick auf freie Fläche erstellt einen Punkt-Marker
    AddPoint,
    /// Klicks sammeln Stützpunkte für einen Linienzug
    AddLine,
}

impl EditorMode {
    /// Anzeigename für Status-Bar und Logging.
    pub fn label(&self) -> &'static str {
        match self {
            EditorMode::Idle => "Idle",
            EditorMode::AddPoint => "Add Point",
            EditorMode::AddLine => "Add Line",
        }
    }
}

/// Zustand des Interaktions-Werkzeugs.
pub struct EditorToolState {
    /// Aktiver Modus
    pub mode: EditorMode,
    /// Ausstehende Linien-Stützpunkte (0 oder 1; Commit beim zweiten)
    pub pending: Vec<DVec2>,
    /// Letzte Cursor-Position über der Karte (Lon/Lat)
    pub cursor: Option<DVec2>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Idle, leerer Puffer).
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Idle,
            pending: Vec::new(),
            cursor: None,
        }
    }

    /// Verwirft Linien-Puffer und damit die abgeleitete Preview.
    pub fn discard_line_construction(&mut self) {
        self.pending.clear();
    }

    /// Preview-Segment vom ausstehenden Stützpunkt zum Cursor.
    ///
    /// Nur vorhanden solange genau ein Punkt aussteht; rein visuell,
    /// wird nie committed.
    pub fn preview_segment(&self) -> Option<(DVec2, DVec2)> {
        if self.mode != EditorMode::AddLine || self.pending.len() != 1 {
            return None;
        }
        let start = self.pending[0];
        self.cursor.map(|cursor| (start, cursor))
    }
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

/// Geöffnetes Inspektions-Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    /// Anker in Lon/Lat, Längengrad bereits in den Wrap-Zyklus
    /// des auslösenden Klicks normalisiert
    pub anchor: DVec2,
    /// Anzeigetext (Erstellungsdatum des Features)
    pub text: String,
}

/// View-bezogener Anwendungszustand.
pub struct ViewState {
    /// Web-Mercator-Kamera
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand mit dem konfigurierten Standard-Ausschnitt.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            camera: MapCamera::new(
                DVec2::new(options.default_center[0], options.default_center[1]),
                options.default_zoom,
            ),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Punkt- und Linien-Layer
    pub layers: LayerSet,
    /// View-State
    pub view: ViewState,
    /// Werkzeug-State (Modus, Linien-Puffer, Cursor)
    pub editor: EditorToolState,
    /// Geöffnetes Inspektions-Popup (None = geschlossen)
    pub popup: Option<PopupState>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Style-Quelle)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            layers: LayerSet::new(),
            view: ViewState::new(&options),
            editor: EditorToolState::new(),
            popup: None,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Punkt-Features zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.layers.points.len()
    }

    /// Gibt die Anzahl der Linien-Features zurück (für UI-Anzeige).
    pub fn line_count(&self) -> usize {
        self.layers.lines.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
