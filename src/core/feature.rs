//! Feature-Datenmodell: Geometrie plus Eigenschaften.

use glam::DVec2;
use std::collections::BTreeMap;

/// Eindeutige Feature-ID innerhalb eines Layers.
pub type FeatureId = u64;

/// Property-Schlüssel für das Erstellungsdatum.
pub const PROP_CREATED: &str = "created";

/// Geometrie eines Features in Lon/Lat-Koordinaten (Grad).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Einzelner Punkt
    Point(DVec2),
    /// Linienzug mit geordneter Koordinatenfolge (mindestens 2 Punkte)
    Line(Vec<DVec2>),
}

/// Ein geometrisches Feature mit Property-Map.
///
/// Features sind nach der Erstellung unveränderlich; es gibt keine
/// Edit-Operation. Die Property-Map enthält mindestens das
/// Erstellungsdatum unter [`PROP_CREATED`].
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// ID innerhalb des besitzenden Layers
    pub id: FeatureId,
    /// Geometrie (Punkt oder Linienzug)
    pub geometry: Geometry,
    /// Eigenschaften (Schlüssel → Wert)
    pub properties: BTreeMap<String, String>,
}

impl Feature {
    /// Erstellt ein Punkt-Feature mit Erstellungsdatum.
    pub fn point(id: FeatureId, lonlat: DVec2, created: String) -> Self {
        Self {
            id,
            geometry: Geometry::Point(lonlat),
            properties: BTreeMap::from([(PROP_CREATED.to_string(), created)]),
        }
    }

    /// Erstellt ein Linien-Feature mit Erstellungsdatum.
    pub fn line(id: FeatureId, coordinates: Vec<DVec2>, created: String) -> Self {
        Self {
            id,
            geometry: Geometry::Line(coordinates),
            properties: BTreeMap::from([(PROP_CREATED.to_string(), created)]),
        }
    }

    /// Gibt das Erstellungsdatum zurück, falls gesetzt.
    pub fn created(&self) -> Option<&str> {
        self.properties.get(PROP_CREATED).map(String::as_str)
    }

    /// Repräsentative Koordinate des Features (Popup-Anker).
    ///
    /// Für Punkte die Position selbst, für Linien der erste Stützpunkt.
    pub fn anchor(&self) -> DVec2 {
        match &self.geometry {
            Geometry::Point(pos) => *pos,
            Geometry::Line(coords) => coords.first().copied().unwrap_or(DVec2::ZERO),
        }
    }
}
