//! Core-Datenmodell: Features, Layer, Kamera und Hit-Testing.

pub mod camera;
pub mod feature;
pub mod geo;
pub mod layer;

pub use camera::MapCamera;
pub use feature::{Feature, FeatureId, Geometry, PROP_CREATED};
pub use hit_test::{pick_topmost, FeatureHit};
pub use layer::{FeatureLayer, LayerKind, LayerSet};
