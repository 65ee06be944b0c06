//! # maplet-graticule
//!
//! Latitude/longitude grid overlay for pannable, zoomable tiled maps.
//!
//! The engine takes the current viewport (pixel size, normalized center and
//! map zoom), the tile geometry of the base layer and a [`GraticuleConfig`],
//! and produces the dashed grid lines and degree labels that are visible on
//! screen. Nothing is cached between calls: a host can recompute on every
//! frame of a drag or wheel gesture.
//!
//! ```
//! use graticule::prelude::*;
//!
//! let viewport = Viewport::new(1000.0, 1000.0, 0.5, 0.5, 8.0);
//! let graticule = compute_graticule(&viewport, &TileGeometry::default(), &GraticuleConfig::default());
//! assert!(!graticule.is_empty());
//! ```

pub mod core;
pub mod grid;
pub mod layers;
pub mod prelude;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::GraticuleConfig,
    geo::{LatLng, Point, ProjectedExtent},
    interpolation::{LinearInterpolation, SpaceMapper},
    projection::{Projection, ProjectionAdapter, WebMercator},
    viewport::{ScreenExtent, TileGeometry, Viewport},
};

pub use grid::{
    auto_step::AdaptiveStepController,
    descriptors::{Axis, GridLine, Label, LineStyle},
    generator::{compute_graticule, Graticule, GraticuleEngine},
    range::{RangeRule, StepRange},
};

pub use layers::{base::LayerTrait, graticule::GraticuleLayer};

pub use rendering::context::{DrawCommand, RenderContext};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GraticuleError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GraticuleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = GraticuleError;
