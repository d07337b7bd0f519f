//! Karten-Viewport: Basemap, Feature-Layer und Linien-Preview.

use crate::app::AppState;
use crate::core::{Geometry, LayerKind, MapCamera};
use crate::shared::options::{PREVIEW_DASH_PX, PREVIEW_GAP_PX};
use glam::DVec2;

/// Zeichnet den kompletten Karteninhalt in das Viewport-Rechteck.
///
/// Reihenfolge: Basemap, dann Layer in [`LayerKind::ALL`]-Ordnung
/// (Linien unter Punkten), zuoberst die Preview des Linienbaus.
pub fn render_map(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let camera = &state.view.camera;
    let viewport = [rect.width(), rect.height()];

    draw_basemap(painter, rect, camera, state);
    draw_layers(painter, rect, state, viewport);
    draw_preview(painter, rect, state, viewport);
}

/// Rechnet Lon/Lat in eine absolute Screen-Position im Viewport um.
fn to_screen(camera: &MapCamera, rect: egui::Rect, viewport: [f32; 2], lonlat: DVec2) -> egui::Pos2 {
    let px = camera.lonlat_to_screen(lonlat, viewport);
    egui::pos2(rect.min.x + px.x as f32, rect.min.y + px.y as f32)
}

/// Konvertiert eine RGBA-Farbe aus den Optionen in `Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

// ── Basemap ─────────────────────────────────────────────────────────

/// Zeichnet die Basemap: geladene Style-Textur falls verfügbar,
/// sonst ein Gradnetz als Fallback.
fn draw_basemap(painter: &egui::Painter, rect: egui::Rect, camera: &MapCamera, state: &AppState) {
    if let Some(url) = state.options.resolved_style_url() {
        if draw_basemap_texture(painter, rect, camera, &url) {
            return;
        }
    }
    draw_graticule(painter, rect, camera);
}

/// Versucht, die Basemap-Textur über die egui-Loader zu beziehen und
/// als Weltkarte zu zeichnen. Gibt `false` zurück solange nichts
/// Zeichenbares vorliegt (lädt noch oder Fehler).
fn draw_basemap_texture(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &MapCamera,
    url: &str,
) -> bool {
    let poll = painter.ctx().try_load_texture(
        url,
        egui::TextureOptions::LINEAR,
        egui::SizeHint::default(),
    );

    let texture = match poll {
        Ok(egui::load::TexturePoll::Ready { texture }) => texture,
        Ok(egui::load::TexturePoll::Pending { .. }) => return false,
        Err(_) => return false,
    };

    let viewport = [rect.width(), rect.height()];
    let world = camera.world_size_px() as f32;
    let origin = to_screen(camera, rect, viewport, DVec2::new(-180.0, crate::core::geo::MAX_LATITUDE));
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

    // Drei Weltkopien nebeneinander, damit der Rand am Antimeridian
    // nahtlos durchläuft
    for copy in -1..=1 {
        let min = egui::pos2(origin.x + copy as f32 * world, origin.y);
        let world_rect = egui::Rect::from_min_size(min, egui::vec2(world, world));
        if world_rect.intersects(rect) {
            painter.image(texture.id, world_rect, uv, egui::Color32::WHITE);
        }
    }
    true
}

/// Gradnetz-Abstand in Grad, abhängig vom Zoom-Level.
fn graticule_step(zoom: f64) -> f64 {
    if zoom >= 10.0 {
        0.5
    } else if zoom >= 7.0 {
        2.0
    } else if zoom >= 4.0 {
        10.0
    } else {
        30.0
    }
}

/// Fallback-Basemap: dunkler Grund mit Meridianen und Breitenkreisen.
fn draw_graticule(painter: &egui::Painter, rect: egui::Rect, camera: &MapCamera) {
    painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 26, 30));

    let viewport = [rect.width(), rect.height()];
    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(55));
    let step = graticule_step(camera.zoom);

    // Meridiane über den sichtbaren Längenbereich
    let half_lon = (viewport[0] as f64 / camera.world_size_px()) * 180.0;
    let mut lon = ((camera.center.x - half_lon) / step).floor() * step;
    let lon_end = camera.center.x + half_lon;
    while lon <= lon_end {
        let x = to_screen(camera, rect, viewport, DVec2::new(lon, camera.center.y)).x;
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            stroke,
        );
        lon += step;
    }

    // Breitenkreise, nur die im Viewport sichtbaren
    let mut lat = -crate::core::geo::MAX_LATITUDE;
    while lat <= crate::core::geo::MAX_LATITUDE {
        let y = to_screen(camera, rect, viewport, DVec2::new(camera.center.x, lat)).y;
        if y >= rect.min.y && y <= rect.max.y {
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
        }
        lat += step;
    }
}

// ── Feature-Layer ───────────────────────────────────────────────────

/// Zeichnet alle sichtbaren Layer in Render-Reihenfolge.
fn draw_layers(painter: &egui::Painter, rect: egui::Rect, state: &AppState, viewport: [f32; 2]) {
    let camera = &state.view.camera;
    let point_color = color32(state.options.point_color);
    let line_stroke = egui::Stroke::new(state.options.line_width_px, color32(state.options.line_color));

    for kind in LayerKind::ALL {
        let layer = state.layers.layer(kind);
        if !layer.visible {
            continue;
        }

        for feature in layer.features() {
            match &feature.geometry {
                Geometry::Point(lonlat) => {
                    let pos = to_screen(camera, rect, viewport, *lonlat);
                    if rect.expand(state.options.point_radius_px).contains(pos) {
                        painter.circle_filled(pos, state.options.point_radius_px, point_color);
                    }
                }
                Geometry::Line(coords) => {
                    let points: Vec<egui::Pos2> = coords
                        .iter()
                        .map(|&lonlat| to_screen(camera, rect, viewport, lonlat))
                        .collect();
                    painter.add(egui::Shape::line(points, line_stroke));
                }
            }
        }
    }
}

// ── Preview ─────────────────────────────────────────────────────────

/// Zeichnet die gestrichelte Linien-Preview vom ausstehenden
/// Stützpunkt zum Cursor. Die Farbe wandert mit wachsender
/// Segmentlänge von `preview_color_near` nach `preview_color_far`.
fn draw_preview(painter: &egui::Painter, rect: egui::Rect, state: &AppState, viewport: [f32; 2]) {
    let Some((start, end)) = state.editor.preview_segment() else {
        return;
    };

    let camera = &state.view.camera;
    let a = to_screen(camera, rect, viewport, start);
    let b = to_screen(camera, rect, viewport, end);

    let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();
    let t = (length / state.options.preview_recolor_length_px).clamp(0.0, 1.0);
    let color = lerp_color(state.options.preview_color_near, state.options.preview_color_far, t);

    let stroke = egui::Stroke::new(state.options.line_width_px, color);
    painter.extend(egui::Shape::dashed_line(
        &[a, b],
        stroke,
        PREVIEW_DASH_PX,
        PREVIEW_GAP_PX,
    ));

    // Startpunkt des Linienbaus sichtbar markieren
    painter.circle_filled(a, state.options.point_radius_px * 0.6, color);
}

/// Lineare Interpolation zweier RGBA-Farben.
fn lerp_color(near: [f32; 4], far: [f32; 4], t: f32) -> egui::Color32 {
    let mut mixed = [0.0f32; 4];
    for i in 0..4 {
        mixed[i] = near[i] + (far[i] - near[i]) * t;
    }
    color32(mixed)
}
