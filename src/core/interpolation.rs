//! Affine mappings between the grid's coordinate spaces.
//!
//! Four spaces are involved: normalized map units (`[0, 1]` over the whole
//! world), world pixels at the current tile zoom, projected meters, and
//! screen pixels (world pixels shifted by the viewport's left/top edge).
//! Every mapping between them is a two-point linear interpolation.

use crate::core::geo::{Point, ProjectedExtent};
use crate::core::viewport::{ScreenExtent, Viewport};

/// `y = y0 + (x - x0) * (y1 - y0) / (x1 - x0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearInterpolation {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl LinearInterpolation {
    /// Map through the points `(x0, y0)` and `(x1, y1)`. `x0 != x1`.
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            x0: from.0,
            y0: from.1,
            x1: to.0,
            y1: to.1,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        self.y0 + (x - self.x0) * (self.y1 - self.y0) / (self.x1 - self.x0)
    }

    /// The same line with the axes swapped
    pub fn inverse(&self) -> Self {
        Self::new((self.y0, self.x0), (self.y1, self.x1))
    }
}

/// All mappings for one viewport at one world size.
///
/// Built fresh for every computation; holds no reference to the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceMapper {
    world_size: f64,
    extent: ProjectedExtent,
    screen: ScreenExtent,
    map_to_world: LinearInterpolation,
    world_to_meters: LinearInterpolation,
    meters_to_screen_x: LinearInterpolation,
    meters_to_screen_y: LinearInterpolation,
}

impl SpaceMapper {
    pub fn new(viewport: &Viewport, world_size: f64, extent: ProjectedExtent) -> Self {
        let screen = viewport.screen_extent(world_size);
        Self {
            world_size,
            extent,
            screen,
            map_to_world: LinearInterpolation::new((0.0, 0.0), (1.0, world_size)),
            world_to_meters: LinearInterpolation::new((0.0, extent.min), (world_size, extent.max)),
            meters_to_screen_x: LinearInterpolation::new(
                (extent.min, -screen.left),
                (extent.max, -screen.left + world_size),
            ),
            meters_to_screen_y: LinearInterpolation::new(
                (extent.min, -screen.top),
                (extent.max, -screen.top + world_size),
            ),
        }
    }

    pub fn world_size(&self) -> f64 {
        self.world_size
    }

    /// The world pixel position of the projection origin
    pub fn seam(&self) -> f64 {
        self.world_size / 2.0
    }

    pub fn extent(&self) -> ProjectedExtent {
        self.extent
    }

    pub fn screen(&self) -> &ScreenExtent {
        &self.screen
    }

    pub fn map_to_world(&self, normalized: f64) -> f64 {
        self.map_to_world.apply(normalized)
    }

    pub fn world_to_map(&self, world_px: f64) -> f64 {
        self.map_to_world.inverse().apply(world_px)
    }

    pub fn world_to_meters(&self, world_px: f64) -> f64 {
        self.world_to_meters.apply(world_px)
    }

    pub fn meters_to_world(&self, meters: f64) -> f64 {
        self.world_to_meters.inverse().apply(meters)
    }

    pub fn meters_to_screen_x(&self, meters: f64) -> f64 {
        self.meters_to_screen_x.apply(meters)
    }

    pub fn screen_x_to_meters(&self, screen_px: f64) -> f64 {
        self.meters_to_screen_x.inverse().apply(screen_px)
    }

    pub fn meters_to_screen_y(&self, meters: f64) -> f64 {
        self.meters_to_screen_y.apply(meters)
    }

    pub fn screen_y_to_meters(&self, screen_px: f64) -> f64 {
        self.meters_to_screen_y.inverse().apply(screen_px)
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(screen.x + self.screen.left, screen.y + self.screen.top)
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x - self.screen.left, world.y - self.screen.top)
    }
}
