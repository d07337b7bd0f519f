//! Zentrale Konfiguration für den GeoMark Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Standard-Kartenzentrum (Lon/Lat, Grad).
pub const DEFAULT_CENTER: [f64; 2] = [37.618423, 55.751244];
/// Standard-Zoom-Level.
pub const DEFAULT_ZOOM: f64 = 10.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts (Level).
pub const CAMERA_ZOOM_STEP: f64 = 1.0;
/// Zoom-Level pro 100 Pixel Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_PER_100PX: f64 = 0.5;

// ── Selektion / Hit-Test ────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln für den Feature-Hit-Test.
pub const PICK_RADIUS_PX: f32 = 10.0;

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Radius der Punkt-Marker in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 7.0;
/// Füllfarbe der Punkt-Marker (RGBA: MapLibre-Blau).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.49, 0.75, 1.0];

// ── Linien-Rendering ────────────────────────────────────────────────

/// Linienstärke in Screen-Pixeln.
pub const LINE_WIDTH_PX: f32 = 3.0;
/// Farbe der Linienzüge (RGBA: Grün).
pub const LINE_COLOR: [f32; 4] = [0.1, 0.7, 0.3, 1.0];

// ── Preview-Rendering ───────────────────────────────────────────────

/// Strichlänge der gestrichelten Preview-Linie (Pixel).
pub const PREVIEW_DASH_PX: f32 = 8.0;
/// Lückenlänge der gestrichelten Preview-Linie (Pixel).
pub const PREVIEW_GAP_PX: f32 = 6.0;
/// Preview-Farbe bei kurzem Segment (RGBA: Cyan).
pub const PREVIEW_COLOR_NEAR: [f32; 4] = [0.0, 0.8, 1.0, 0.9];
/// Preview-Farbe bei langem Segment (RGBA: Orange).
pub const PREVIEW_COLOR_FAR: [f32; 4] = [1.0, 0.6, 0.1, 0.9];
/// Segmentlänge (Pixel), ab der die Preview vollständig umgefärbt ist.
pub const PREVIEW_RECOLOR_LENGTH_PX: f32 = 400.0;

// ── Style-Quelle ────────────────────────────────────────────────────

/// URL-Template der Basemap; `{key}` wird durch den API-Key ersetzt.
pub const STYLE_URL_TEMPLATE: &str =
    "https://api.maptiler.com/maps/streets/style.json?key={key}";
/// Environment-Variable, die den konfigurierten API-Key übersteuert.
pub const API_KEY_ENV: &str = "GEOMARK_API_KEY";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geomark_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Rendering ───────────────────────────────────────────────
    /// Radius der Punkt-Marker in Screen-Pixeln
    pub point_radius_px: f32,
    /// Füllfarbe der Punkt-Marker (RGBA)
    pub point_color: [f32; 4],
    /// Linienstärke in Screen-Pixeln
    pub line_width_px: f32,
    /// Farbe der Linienzüge (RGBA)
    pub line_color: [f32; 4],

    // ── Preview ─────────────────────────────────────────────────
    /// Preview-Farbe bei kurzem Segment
    pub preview_color_near: [f32; 4],
    /// Preview-Farbe bei langem Segment
    pub preview_color_far: [f32; 4],
    /// Segmentlänge (Pixel), ab der die Preview vollständig umgefärbt ist
    #[serde(default = "default_preview_recolor_length_px")]
    pub preview_recolor_length_px: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Pick-Radius für den Feature-Hit-Test in Screen-Pixeln
    pub pick_radius_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Standard-Kartenzentrum (Lon/Lat)
    pub default_center: [f64; 2],
    /// Standard-Zoom-Level
    pub default_zoom: f64,
    /// Zoom-Schritt bei Buttons/Shortcuts (Level)
    pub camera_zoom_step: f64,

    // ── Style-Quelle ────────────────────────────────────────────
    /// URL-Template der Basemap (`{key}` = API-Key-Platzhalter)
    #[serde(default = "default_style_url")]
    pub style_url: String,
    /// API-Key; leer = nur über Environment-Variable
    #[serde(default)]
    pub api_key: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius_px: POINT_RADIUS_PX,
            point_color: POINT_COLOR,
            line_width_px: LINE_WIDTH_PX,
            line_color: LINE_COLOR,

            preview_color_near: PREVIEW_COLOR_NEAR,
            preview_color_far: PREVIEW_COLOR_FAR,
            preview_recolor_length_px: PREVIEW_RECOLOR_LENGTH_PX,

            pick_radius_px: PICK_RADIUS_PX,

            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            camera_zoom_step: CAMERA_ZOOM_STEP,

            style_url: STYLE_URL_TEMPLATE.to_string(),
            api_key: String::new(),
        }
    }
}

/// Serde-Default für `preview_recolor_length_px` (Abwärtskompatibilität).
fn default_preview_recolor_length_px() -> f32 {
    PREVIEW_RECOLOR_LENGTH_PX
}

/// Serde-Default für `style_url` (Abwärtskompatibilität).
fn default_style_url() -> String {
    STYLE_URL_TEMPLATE.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geomark_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geomark_editor.toml")
    }

    /// Löst das Style-URL-Template mit dem API-Key auf.
    ///
    /// Die Environment-Variable [`API_KEY_ENV`] übersteuert den
    /// konfigurierten Key. Ohne Key (und mit `{key}`-Platzhalter im
    /// Template) gibt es keine Basemap → `None`.
    pub fn resolved_style_url(&self) -> Option<String> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| self.api_key.clone());

        if self.style_url.is_empty() {
            return None;
        }
        if self.style_url.contains("{key}") && key.is_empty() {
            return None;
        }
        Some(self.style_url.replace("{key}", &key))
    }
}
