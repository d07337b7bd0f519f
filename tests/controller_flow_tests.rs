use geomark_editor::app::handlers;
use geomark_editor::{AppCommand, AppController, AppIntent, AppState, EditorMode};
use geomark_editor::{Geometry, LayerKind};
use glam::DVec2;

/// App-State mit realistischer Viewport-Größe.
fn editor_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state
}

fn set_mode(controller: &mut AppController, state: &mut AppState, mode: EditorMode) {
    controller
        .handle_intent(state, AppIntent::SetEditorModeRequested { mode })
        .expect("Moduswechsel sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, state: &mut AppState, lon: f64, lat: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::MapClicked {
                lonlat: DVec2::new(lon, lat),
            },
        )
        .expect("Kartenklick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_add_point_click_creates_point_at_clicked_coordinate() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 37.62, 55.75);

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.editor.mode, EditorMode::Idle);

    let feature = &state.layers.points.features()[0];
    assert_eq!(feature.anchor(), DVec2::new(37.62, 55.75));
    assert!(feature.created().is_some());

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::CommitPoint { .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_inspect_during_add_point_keeps_mode_and_creates_nothing() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 10.0, 20.0);
    assert_eq!(state.point_count(), 1);

    // Klick exakt auf das bestehende Feature: Inspektion statt Erstellung
    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 10.0, 20.0);

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.editor.mode, EditorMode::AddPoint);
    assert!(state.popup.is_some());
}

#[test]
fn test_two_clicks_commit_line_in_click_order_and_reset() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 1.0, 2.0);

    assert_eq!(state.line_count(), 0);
    assert_eq!(state.editor.pending.len(), 1);

    click(&mut controller, &mut state, 3.0, 4.0);

    assert_eq!(state.line_count(), 1);
    assert!(state.editor.pending.is_empty());
    assert_eq!(state.editor.mode, EditorMode::Idle);

    match &state.layers.lines.features()[0].geometry {
        Geometry::Line(coords) => {
            assert_eq!(coords, &vec![DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0)]);
        }
        other => panic!("Unerwartete Geometrie: {other:?}"),
    }
}

#[test]
fn test_pending_line_point_wins_over_inspect() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 5.0, 5.0);

    // Erster Linien-Stützpunkt auf freier Fläche
    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 6.0, 6.0);
    assert_eq!(state.editor.pending.len(), 1);

    // Zweiter Klick trifft den bestehenden Punkt: der Linienbau gewinnt
    click(&mut controller, &mut state, 5.0, 5.0);

    assert!(state.popup.is_none());
    assert_eq!(state.line_count(), 1);
    assert_eq!(state.editor.mode, EditorMode::Idle);

    match &state.layers.lines.features()[0].geometry {
        Geometry::Line(coords) => assert_eq!(coords[1], DVec2::new(5.0, 5.0)),
        other => panic!("Unerwartete Geometrie: {other:?}"),
    }
}

#[test]
fn test_add_line_with_empty_buffer_inspects_instead_of_appending() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 5.0, 5.0);

    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 5.0, 5.0);

    assert!(state.popup.is_some());
    assert!(state.editor.pending.is_empty());
    assert_eq!(state.editor.mode, EditorMode::AddLine);
}

#[test]
fn test_mode_switch_discards_pending_buffer() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 1.0, 1.0);
    assert_eq!(state.editor.pending.len(), 1);

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);

    assert!(state.editor.pending.is_empty());
    assert!(state.editor.preview_segment().is_none());
    assert_eq!(state.line_count(), 0);
}

#[test]
fn test_visibility_toggle_roundtrip_preserves_features() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 1.0, 1.0);
    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 2.0, 2.0);

    let before: Vec<DVec2> = state
        .layers
        .points
        .features()
        .iter()
        .map(|f| f.anchor())
        .collect();

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::LayerVisibilityToggled {
                    kind: LayerKind::Points,
                },
            )
            .expect("Sichtbarkeits-Toggle sollte ohne Fehler durchlaufen");
    }

    assert!(state.layers.points.visible);
    let after: Vec<DVec2> = state
        .layers
        .points
        .features()
        .iter()
        .map(|f| f.anchor())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_hidden_features_are_not_inspectable() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 10.0, 10.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerVisibilityToggled {
                kind: LayerKind::Points,
            },
        )
        .expect("Sichtbarkeits-Toggle sollte ohne Fehler durchlaufen");

    click(&mut controller, &mut state, 10.0, 10.0);

    assert!(state.popup.is_none());
}

#[test]
fn test_bulk_delete_clears_only_target_category() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 1.0, 1.0);
    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 2.0, 2.0);
    click(&mut controller, &mut state, 3.0, 3.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ClearLayerRequested {
                kind: LayerKind::Points,
            },
        )
        .expect("Bulk-Delete sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.line_count(), 1);
}

#[test]
fn test_bulk_delete_mid_line_resets_construction() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 1.0, 1.0);
    assert_eq!(state.editor.pending.len(), 1);

    // Bulk-Delete der ANDEREN Kategorie bricht den Linienbau ebenfalls ab
    controller
        .handle_intent(
            &mut state,
            AppIntent::ClearLayerRequested {
                kind: LayerKind::Points,
            },
        )
        .expect("Bulk-Delete sollte ohne Fehler durchlaufen");

    assert!(state.editor.pending.is_empty());
    assert_eq!(state.editor.mode, EditorMode::Idle);
}

#[test]
fn test_popup_anchor_is_normalized_across_antimeridian() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    state.view.camera.center = DVec2::new(179.0, 0.0);
    state.view.camera.zoom = 2.0;

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, -179.0, 0.0);
    assert_eq!(state.point_count(), 1);

    // Klick bei +179°: trifft das Feature bei -179° (2° Abstand, bei
    // Zoom 2 deutlich unter dem Pick-Radius)
    click(&mut controller, &mut state, 179.0, 0.0);

    let popup = state.popup.as_ref().expect("Popup sollte offen sein");
    assert!((popup.anchor.x - 179.0).abs() <= 180.0);
    // Normalisiert in den Zyklus des Klicks: +181° statt -179°
    assert!((popup.anchor.x - 181.0).abs() < 1e-9);
}

#[test]
fn test_popup_without_created_property_shows_unspecified() {
    let mut state = editor_state();

    handlers::inspect::open_popup(&mut state, DVec2::new(10.0, 10.0), 10.0, None);

    let popup = state.popup.as_ref().expect("Popup sollte offen sein");
    assert_eq!(popup.text, "unspecified");
}

#[test]
fn test_click_with_open_popup_closes_it_first() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddPoint);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 10.0, 10.0);
    assert!(state.popup.is_some());

    // Klick auf freie Fläche im Idle-Modus: nur Popup schließen
    click(&mut controller, &mut state, 50.0, 50.0);

    assert!(state.popup.is_none());
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_camera_zoom_intent_changes_zoom_level() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    let before = state.view.camera.zoom;

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomInRequested sollte ohne Fehler durchlaufen");

    assert!(state.view.camera.zoom > before);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCameraRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.camera.zoom, before);
}

#[test]
fn test_cursor_move_updates_preview_segment() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    set_mode(&mut controller, &mut state, EditorMode::AddLine);
    click(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CursorMoved {
                lonlat: DVec2::new(4.0, 5.0),
            },
        )
        .expect("CursorMoved sollte ohne Fehler durchlaufen");

    let (start, end) = state
        .editor
        .preview_segment()
        .expect("Preview sollte aktiv sein");
    assert_eq!(start, DVec2::new(1.0, 1.0));
    assert_eq!(end, DVec2::new(4.0, 5.0));
}
