//! Zoom-driven step rescaling.
//!
//! With auto-step on, each tile zoom level halves the spacing of the grid so
//! roughly the same number of lines stays on screen.

use crate::core::config::GraticuleConfig;
use crate::core::viewport::TileGeometry;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdaptiveStepController {
    tiles: TileGeometry,
}

impl AdaptiveStepController {
    pub fn new(tiles: TileGeometry) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &TileGeometry {
        &self.tiles
    }

    /// `standard / 2^tile_zoom`
    pub fn step_for_zoom(&self, standard: f64, map_zoom: f64) -> f64 {
        standard / 2_f64.powi(self.tiles.tile_zoom(map_zoom) as i32)
    }

    /// Configuration to use after a zoom change. Unchanged unless both
    /// `auto_step` and `show` are set.
    pub fn rescale(&self, config: &GraticuleConfig, map_zoom: f64) -> GraticuleConfig {
        if !(config.auto_step && config.show) {
            return config.clone();
        }

        let latitudes_step =
            config.clamp_step(self.step_for_zoom(config.latitudes_step_standard, map_zoom));
        let longitudes_step =
            config.clamp_step(self.step_for_zoom(config.longitudes_step_standard, map_zoom));

        if latitudes_step != config.latitudes_step || longitudes_step != config.longitudes_step {
            log::info!(
                "auto-step at tile zoom {}: latitudes {} -> {}, longitudes {} -> {}",
                self.tiles.tile_zoom(map_zoom),
                config.latitudes_step,
                latitudes_step,
                config.longitudes_step,
                longitudes_step
            );
        }

        GraticuleConfig {
            latitudes_step,
            longitudes_step,
            ..config.clone()
        }
    }
}
