//! Layer-Kollektionen: benannte, geordnete Feature-Mengen mit Sichtbarkeit.

use super::feature::{Feature, FeatureId};
use glam::DVec2;

/// Feature-Kategorie, identifiziert einen Layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Punkt-Marker
    Points,
    /// Linienzüge
    Lines,
}

impl LayerKind {
    /// Alle Kategorien in Render-Reihenfolge (Linien unter Punkten).
    pub const ALL: [LayerKind; 2] = [LayerKind::Lines, LayerKind::Points];

    /// Anzeigename für UI und Logging.
    pub fn label(&self) -> &'static str {
        match self {
            LayerKind::Points => "Points",
            LayerKind::Lines => "Lines",
        }
    }
}

/// Ein Layer: geordnete Feature-Menge mit Sichtbarkeits-Flag.
///
/// Mutation erfolgt als direktes Append auf der eigenen Kollektion statt
/// Read-Modify-Write der Gesamtmenge. Die Einfüge-Reihenfolge ist
/// gleichzeitig die Render-Reihenfolge (später = obenauf).
pub struct FeatureLayer {
    /// Kategorie dieses Layers
    pub kind: LayerKind,
    features: Vec<Feature>,
    /// Sichtbarkeit; versteckte Layer werden weder gezeichnet noch getroffen
    pub visible: bool,
    next_id: FeatureId,
}

impl FeatureLayer {
    /// Erstellt einen leeren, sichtbaren Layer.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            features: Vec::new(),
            visible: true,
            next_id: 1,
        }
    }

    /// Hängt ein Punkt-Feature an und gibt dessen ID zurück.
    pub fn append_point(&mut self, lonlat: DVec2, created: String) -> FeatureId {
        let id = self.take_id();
        self.features.push(Feature::point(id, lonlat, created));
        id
    }

    /// Hängt ein Linien-Feature an und gibt dessen ID zurück.
    ///
    /// Linien mit weniger als 2 Stützpunkten werden abgewiesen.
    pub fn append_line(&mut self, coordinates: Vec<DVec2>, created: String) -> Option<FeatureId> {
        if coordinates.len() < 2 {
            log::warn!(
                "Linie mit {} Stützpunkt(en) abgewiesen (mindestens 2 nötig)",
                coordinates.len()
            );
            return None;
        }
        let id = self.take_id();
        self.features.push(Feature::line(id, coordinates, created));
        Some(id)
    }

    /// Leert die Kollektion (Bulk-Delete). Sichtbarkeit bleibt erhalten.
    pub fn clear(&mut self) {
        self.features.clear();
    }

    /// Gibt die Anzahl der Features zurück.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück wenn der Layer keine Features enthält.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Read-only Sicht auf alle Features in Einfüge-Reihenfolge.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    fn take_id(&mut self) -> FeatureId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Die beiden Feature-Layer des Editors.
pub struct LayerSet {
    /// Punkt-Marker-Layer
    pub points: FeatureLayer,
    /// Linien-Layer
    pub lines: FeatureLayer,
}

impl LayerSet {
    /// Erstellt leere Punkt- und Linien-Layer.
    pub fn new() -> Self {
        Self {
            points: FeatureLayer::new(LayerKind::Points),
            lines: FeatureLayer::new(LayerKind::Lines),
        }
    }

    /// Layer-Zugriff per Kategorie.
    pub fn layer(&self, kind: LayerKind) -> &FeatureLayer {
        match kind {
            LayerKind::Points => &self.points,
            LayerKind::Lines => &self.lines,
        }
    }

    /// Mutabler Layer-Zugriff per Kategorie.
    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut FeatureLayer {
        match kind {
            LayerKind::Points => &mut self.points,
            LayerKind::Lines => &mut self.lines,
        }
    }
}

impl Default for LayerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_point_grows_collection_in_order() {
        let mut layer = FeatureLayer::new(LayerKind::Points);
        let a = layer.append_point(DVec2::new(1.0, 2.0), "d1".to_string());
        let b = layer.append_point(DVec2::new(3.0, 4.0), "d2".to_string());

        assert_eq!(layer.len(), 2);
        assert_ne!(a, b);
        assert_eq!(layer.features()[0].anchor(), DVec2::new(1.0, 2.0));
        assert_eq!(layer.features()[1].anchor(), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn test_append_line_rejects_single_vertex() {
        let mut layer = FeatureLayer::new(LayerKind::Lines);
        assert!(layer
            .append_line(vec![DVec2::new(1.0, 1.0)], "d".to_string())
            .is_none());
        assert!(layer.is_empty());
    }

    #[test]
    fn test_clear_keeps_visibility() {
        let mut layer = FeatureLayer::new(LayerKind::Points);
        layer.append_point(DVec2::ZERO, "d".to_string());
        layer.visible = false;
        layer.clear();

        assert!(layer.is_empty());
        assert!(!layer.visible);
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut layer = FeatureLayer::new(LayerKind::Points);
        let first = layer.append_point(DVec2::ZERO, "d".to_string());
        layer.clear();
        let second = layer.append_point(DVec2::ZERO, "d".to_string());
        assert!(second > first);
    }

    #[test]
    fn test_layer_set_access_by_kind() {
        let mut layers = LayerSet::new();
        layers
            .layer_mut(LayerKind::Points)
            .append_point(DVec2::ZERO, "d".to_string());

        assert_eq!(layers.layer(LayerKind::Points).len(), 1);
        assert_eq!(layers.layer(LayerKind::Lines).len(), 0);
    }
}
