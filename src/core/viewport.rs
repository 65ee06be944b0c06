use crate::core::constants::{MAX_TILE_ZOOM, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// The current view of the map: pixel size, normalized center and map zoom.
///
/// `center_x`/`center_y` are positions in the whole world, `0.0` being the
/// left/top edge and `1.0` the right/bottom edge. `zoom` is the map zoom,
/// where `log2(tile_size)` shows the world as a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the drawing surface in pixels
    pub width: f64,
    /// Height of the drawing surface in pixels
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(width: f64, height: f64, center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            width,
            height,
            center_x,
            center_y,
            zoom,
        }
    }

    /// A viewport nothing can be drawn into: no area, or a non-finite input
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
            || !self.center_x.is_finite()
            || !self.center_y.is_finite()
            || !self.zoom.is_finite()
    }

    /// Screen rectangle in world pixels for a world of the given size
    pub fn screen_extent(&self, world_size: f64) -> ScreenExtent {
        let center_x = self.center_x * world_size;
        let center_y = self.center_y * world_size;
        ScreenExtent {
            left: center_x - self.width * 0.5,
            top: center_y - self.height * 0.5,
            right: center_x + self.width * 0.5,
            bottom: center_y + self.height * 0.5,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 0.5, 0.5, (TILE_SIZE as f64).log2())
    }
}

/// Static tile layout of the base layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGeometry {
    /// Square tile size in pixels
    pub tile_size: u32,
    /// Highest integral tile zoom
    pub max_zoom: u8,
}

impl TileGeometry {
    pub fn new(tile_size: u32, max_zoom: u8) -> Self {
        Self {
            tile_size,
            max_zoom,
        }
    }

    fn tile_size_px(&self) -> f64 {
        self.tile_size.max(1) as f64
    }

    /// Nearest integral tile zoom for a map zoom, clamped to `[0, max_zoom]`.
    /// NaN maps to 0.
    pub fn tile_zoom(&self, map_zoom: f64) -> u8 {
        if map_zoom.is_nan() {
            return 0;
        }
        let zoom = (map_zoom - self.tile_size_px().log2()).round();
        zoom.clamp(0.0, self.max_zoom as f64) as u8
    }

    /// Pixel size of the whole world at the nearest tile zoom. Always positive.
    pub fn world_size(&self, map_zoom: f64) -> f64 {
        self.tile_size_px() * 2_f64.powi(self.tile_zoom(map_zoom) as i32)
    }
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self::new(TILE_SIZE, MAX_TILE_ZOOM)
    }
}

/// Viewport edges in world pixels. `left`/`top` may be negative and
/// `right`/`bottom` may exceed the world size when the world is smaller
/// than the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenExtent {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_size() {
        let tiles = TileGeometry::default();
        assert_eq!(tiles.world_size(8.0), 256.0);
        assert_eq!(tiles.world_size(10.0), 1024.0);
        assert_eq!(tiles.world_size(10.4), 1024.0);
        assert_eq!(tiles.world_size(10.5), 2048.0);
    }

    #[test]
    fn test_tile_zoom_limits() {
        let tiles = TileGeometry::new(256, 18);
        assert_eq!(tiles.tile_zoom(-40.0), 0);
        assert_eq!(tiles.tile_zoom(400.0), 18);
        assert_eq!(tiles.tile_zoom(f64::NAN), 0);
        assert_eq!(tiles.tile_zoom(f64::INFINITY), 18);
        assert_eq!(tiles.tile_zoom(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_zero_tile_size_stays_positive() {
        let tiles = TileGeometry::new(0, 18);
        assert!(tiles.world_size(3.0) > 0.0);
    }

    #[test]
    fn test_screen_extent() {
        let viewport = Viewport::new(1000.0, 500.0, 0.5, 0.25, 8.0);
        let extent = viewport.screen_extent(256.0);
        assert_eq!(extent.left, -372.0);
        assert_eq!(extent.right, 628.0);
        assert_eq!(extent.top, -186.0);
        assert_eq!(extent.bottom, 314.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(!Viewport::default().is_degenerate());
        assert!(Viewport::new(0.0, 100.0, 0.5, 0.5, 8.0).is_degenerate());
        assert!(Viewport::new(100.0, -1.0, 0.5, 0.5, 8.0).is_degenerate());
        assert!(Viewport::new(100.0, 100.0, f64::NAN, 0.5, 8.0).is_degenerate());
        assert!(Viewport::new(100.0, 100.0, 0.5, 0.5, f64::INFINITY).is_degenerate());
    }
}
