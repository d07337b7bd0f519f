//! Web-Mercator-Kamera für Pan und Zoom auf der Weltkarte.

use super::geo;
use glam::DVec2;

/// Kamera mit Lon/Lat-Zentrum und fraktionalem Zoom-Level.
///
/// Koordinaten sind durchgängig `DVec2` mit `x = Längengrad`,
/// `y = Breitengrad` (Grad). Screen-Positionen sind Pixel relativ zur
/// linken oberen Viewport-Ecke.
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kartenzentrum in Lon/Lat (Grad)
    pub center: DVec2,
    /// Zoom-Level (Web-Map-Konvention: Weltbreite = 256 · 2^zoom Pixel)
    pub zoom: f64,
}

impl MapCamera {
    /// Kachelgröße der Weltkarte bei Zoom 0 (Pixel).
    pub const TILE_SIZE: f64 = 256.0;
    /// Minimales Zoom-Level.
    pub const ZOOM_MIN: f64 = 0.0;
    /// Maximales Zoom-Level.
    pub const ZOOM_MAX: f64 = 22.0;

    /// Erstellt eine Kamera mit Zentrum und Zoom-Level.
    pub fn new(center: DVec2, zoom: f64) -> Self {
        Self {
            center: DVec2::new(geo::wrap_longitude(center.x), geo::clamp_latitude(center.y)),
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Weltbreite in Pixeln beim aktuellen Zoom-Level.
    pub fn world_size_px(&self) -> f64 {
        Self::TILE_SIZE * self.zoom.exp2()
    }

    /// Projiziert Lon/Lat in Welt-Pixel (Web-Mercator).
    pub fn project(&self, lonlat: DVec2) -> DVec2 {
        let world = self.world_size_px();
        let lat = geo::clamp_latitude(lonlat.y).to_radians();
        let x = (lonlat.x + 180.0) / 360.0 * world;
        let y = (1.0 - lat.tan().asinh() / std::f64::consts::PI) / 2.0 * world;
        DVec2::new(x, y)
    }

    /// Inverse Projektion von Welt-Pixeln nach Lon/Lat.
    pub fn unproject(&self, world_px: DVec2) -> DVec2 {
        let world = self.world_size_px();
        let lon = world_px.x / world * 360.0 - 180.0;
        let merc_y = std::f64::consts::PI * (1.0 - 2.0 * world_px.y / world);
        let lat = merc_y.sinh().atan().to_degrees();
        DVec2::new(lon, lat)
    }

    /// Konvertiert Lon/Lat zu Screen-Pixeln im Viewport.
    ///
    /// Der Längengrad wird vorab in den Wrap-Zyklus des Kamerazentrums
    /// verschoben, damit Features nahe der Antimeridian-Grenze auf der
    /// richtigen Seite des Viewports erscheinen.
    pub fn lonlat_to_screen(&self, lonlat: DVec2, viewport_size: [f32; 2]) -> DVec2 {
        let wrapped = DVec2::new(geo::wrap_longitude_near(lonlat.x, self.center.x), lonlat.y);
        let center_px = self.project(self.center);
        let point_px = self.project(wrapped);
        let half = DVec2::new(viewport_size[0] as f64 / 2.0, viewport_size[1] as f64 / 2.0);
        point_px - center_px + half
    }

    /// Konvertiert Screen-Pixel im Viewport zu Lon/Lat.
    pub fn screen_to_lonlat(&self, screen_pos: DVec2, viewport_size: [f32; 2]) -> DVec2 {
        let center_px = self.project(self.center);
        let half = DVec2::new(viewport_size[0] as f64 / 2.0, viewport_size[1] as f64 / 2.0);
        let lonlat = self.unproject(center_px + screen_pos - half);
        DVec2::new(geo::wrap_longitude(lonlat.x), lonlat.y)
    }

    /// Verschiebt das Kartenzentrum um ein Pixel-Delta (Pan).
    pub fn pan_by_pixels(&mut self, delta_px: DVec2) {
        let center_px = self.project(self.center);
        let moved = self.unproject(center_px + delta_px);
        self.center = DVec2::new(geo::wrap_longitude(moved.x), geo::clamp_latitude(moved.y));
    }

    /// Ändert das Zoom-Level um `delta` Stufen, optional um einen
    /// Fokuspunkt (Screen-Pixel), der dabei ortsfest bleibt.
    pub fn zoom_by(&mut self, delta: f64, focus_px: Option<DVec2>, viewport_size: [f32; 2]) {
        let new_zoom = (self.zoom + delta).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        match focus_px {
            Some(focus) => {
                // Lon/Lat unter dem Cursor merken, Zoom anwenden, dann das
                // Zentrum so nachziehen dass der Punkt liegen bleibt
                let anchor = self.screen_to_lonlat(focus, viewport_size);
                self.zoom = new_zoom;
                let drifted = self.lonlat_to_screen(anchor, viewport_size);
                self.pan_by_pixels(drifted - focus);
            }
            None => self.zoom = new_zoom,
        }
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(DVec2::ZERO, Self::ZOOM_MIN)
    }
}
