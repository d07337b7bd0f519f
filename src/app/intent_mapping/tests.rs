use glam::DVec2;

use crate::app::state::{EditorMode, PopupState};
use crate::app::{AppCommand, AppIntent, AppState};

use super::map_intent_to_commands;

/// App-State mit sichtbarem Viewport, Kamera-Zentrum auf (0, 0).
fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state.view.camera.center = DVec2::ZERO;
    state
}

#[test]
fn idle_click_on_empty_space_maps_to_nothing() {
    let state = state_with_viewport();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            lonlat: DVec2::new(10.0, 20.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn idle_click_on_feature_maps_to_popup() {
    let mut state = state_with_viewport();
    state
        .layers
        .points
        .append_point(DVec2::ZERO, "2024-01-01".to_string());

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { lonlat: DVec2::ZERO });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::OpenFeaturePopup { .. }));
}

#[test]
fn add_point_click_on_empty_space_maps_to_commit() {
    let mut state = state_with_viewport();
    state.editor.mode = EditorMode::AddPoint;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            lonlat: DVec2::new(5.0, 5.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::CommitPoint { .. }));
}

#[test]
fn add_point_click_on_feature_maps_to_popup_not_commit() {
    let mut state = state_with_viewport();
    state
        .layers
        .points
        .append_point(DVec2::ZERO, "2024-01-01".to_string());
    state.editor.mode = EditorMode::AddPoint;

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { lonlat: DVec2::ZERO });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::OpenFeaturePopup { .. }));
}

#[test]
fn add_line_click_on_feature_with_empty_buffer_maps_to_popup() {
    let mut state = state_with_viewport();
    state
        .layers
        .points
        .append_point(DVec2::ZERO, "2024-01-01".to_string());
    state.editor.mode = EditorMode::AddLine;

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { lonlat: DVec2::ZERO });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::OpenFeaturePopup { .. }));
}

#[test]
fn add_line_click_on_feature_with_pending_point_appends_anyway() {
    let mut state = state_with_viewport();
    state
        .layers
        .points
        .append_point(DVec2::ZERO, "2024-01-01".to_string());
    state.editor.mode = EditorMode::AddLine;
    state.editor.pending.push(DVec2::new(1.0, 1.0));

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { lonlat: DVec2::ZERO });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::AppendLinePoint { .. }));
}

#[test]
fn click_with_open_popup_prepends_close() {
    let mut state = state_with_viewport();
    state.popup = Some(PopupState {
        anchor: DVec2::ZERO,
        text: "2024-01-01".to_string(),
    });
    state.editor.mode = EditorMode::AddPoint;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MapClicked {
            lonlat: DVec2::new(5.0, 5.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ClosePopup));
    assert!(matches!(commands[1], AppCommand::CommitPoint { .. }));
}

#[test]
fn hidden_layer_is_not_inspectable() {
    let mut state = state_with_viewport();
    state
        .layers
        .points
        .append_point(DVec2::ZERO, "2024-01-01".to_string());
    state.layers.points.visible = false;

    let commands = map_intent_to_commands(&state, AppIntent::MapClicked { lonlat: DVec2::ZERO });

    assert!(commands.is_empty());
}

#[test]
fn zoom_in_requested_uses_configured_step() {
    let state = state_with_viewport();

    let commands = map_intent_to_commands(&state, AppIntent::ZoomInRequested);

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::ZoomCamera { delta, focus_px } => {
            assert_eq!(delta, state.options.camera_zoom_step);
            assert!(focus_px.is_none());
        }
        _ => panic!("unerwartetes Command"),
    }
}
