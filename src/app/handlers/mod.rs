//! Feature-Handler: führen Commands auf dem AppState aus.

pub mod editing;
pub mod inspect;
pub mod layers;
pub mod view;
