//! GeoMark Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, EditorToolState, PopupState,
    ViewState,
};
pub use core::{
    Feature, FeatureHit, FeatureId, FeatureLayer, Geometry, LayerKind, LayerSet, MapCamera,
};
pub use shared::EditorOptions;
