//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Layer, View, Editor).
pub mod state;

pub use crate::core::MapCamera;
pub use crate::core::{LayerKind, LayerSet};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, EditorMode, EditorToolState, PopupState, ViewState};
