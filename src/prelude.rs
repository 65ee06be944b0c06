//! Prelude module for common graticule types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use graticule::prelude::*;`

pub use crate::core::{
    config::GraticuleConfig,
    geo::{LatLng, Point, ProjectedExtent},
    projection::{Projection, ProjectionAdapter, WebMercator},
    viewport::{TileGeometry, Viewport},
};

pub use crate::grid::{
    auto_step::AdaptiveStepController,
    descriptors::{Axis, GraticuleStyle, GridLine, Label, LabelStyle, LineStyle},
    generator::{compute_graticule, Graticule, GraticuleEngine},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    graticule::GraticuleLayer,
};

pub use crate::rendering::context::{DrawCommand, RenderContext};

#[cfg(feature = "egui")]
pub use crate::ui::{overlay::GraticuleOverlay, painter::paint_queue};

pub use crate::GraticuleError;
