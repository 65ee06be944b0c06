//! Graticule overlay as a map layer.

use crate::core::config::GraticuleConfig;
use crate::core::projection::{Projection, WebMercator};
use crate::core::viewport::{TileGeometry, Viewport};
use crate::grid::auto_step::AdaptiveStepController;
use crate::grid::descriptors::{GraticuleStyle, SerializableColor};
use crate::grid::generator::{Graticule, GraticuleEngine};
use crate::layers::base::{LayerProperties, LayerTrait, LayerType};
use crate::rendering::context::RenderContext;
use crate::Result;

/// Layer that draws the latitude/longitude grid over a tiled base map.
///
/// Holds the current configuration; the host calls
/// [`on_zoom_changed`](Self::on_zoom_changed) from its zoom handler so that
/// auto-step can follow the map, and [`render`](LayerTrait::render) on every
/// frame.
pub struct GraticuleLayer<P: Projection = WebMercator> {
    properties: LayerProperties,
    engine: GraticuleEngine<P>,
    steps: AdaptiveStepController,
    config: GraticuleConfig,
}

impl GraticuleLayer<WebMercator> {
    pub fn new(id: String, name: String) -> Self {
        Self::with_engine(id, name, GraticuleEngine::new())
    }
}

impl<P: Projection> GraticuleLayer<P> {
    pub fn with_engine(id: String, name: String, engine: GraticuleEngine<P>) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Graticule),
            engine,
            steps: AdaptiveStepController::default(),
            config: GraticuleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GraticuleConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    pub fn with_tiles(mut self, tiles: TileGeometry) -> Self {
        self.steps = AdaptiveStepController::new(tiles);
        self
    }

    pub fn config(&self) -> &GraticuleConfig {
        &self.config
    }

    pub fn tiles(&self) -> &TileGeometry {
        self.steps.tiles()
    }

    pub fn engine(&self) -> &GraticuleEngine<P> {
        &self.engine
    }

    /// Replace the configuration. Steps outside the configured bounds are
    /// clamped; inconsistent bounds are rejected.
    pub fn set_config(&mut self, config: GraticuleConfig) -> Result<()> {
        config.validate()?;
        self.config = config.clamped();
        Ok(())
    }

    /// Recompute the steps for a new map zoom when auto-step is on
    pub fn on_zoom_changed(&mut self, map_zoom: f64) {
        self.config = self.steps.rescale(&self.config, map_zoom);
    }

    /// Lines and labels for `viewport` under the current configuration
    pub fn compute(&self, viewport: &Viewport) -> Graticule {
        self.engine.compute(viewport, self.steps.tiles(), &self.config)
    }

    fn faded(&self, color: SerializableColor) -> SerializableColor {
        let alpha = (color.a as f32 * self.properties.opacity).round() as u8;
        SerializableColor { a: alpha, ..color }
    }

    fn frame_style(&self) -> GraticuleStyle {
        let mut style = self.engine.style().clone();
        style.line.color = self.faded(style.line.color);
        style.label.color = self.faded(style.label.color);
        style
    }
}

impl<P: Projection> LayerTrait for GraticuleLayer<P> {
    fn id(&self) -> &str {
        &self.properties.id
    }

    fn name(&self) -> &str {
        &self.properties.name
    }

    fn layer_type(&self) -> LayerType {
        self.properties.layer_type
    }

    fn is_visible(&self) -> bool {
        self.properties.visible && self.config.show
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties.visible = visible;
    }

    fn opacity(&self) -> f32 {
        self.properties.opacity
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.properties.opacity = opacity.clamp(0.0, 1.0);
    }

    fn z_index(&self) -> i32 {
        self.properties.z_index
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.properties.z_index = z_index;
    }

    fn render(&mut self, context: &mut RenderContext, viewport: &Viewport) -> Result<()> {
        if !self.is_visible() {
            return Ok(());
        }

        let graticule = self.compute(viewport);
        let style = self.frame_style();

        // Labels are queued first so the lines are painted over them
        for label in &graticule.labels {
            context.render_text(
                &label.text,
                label.position,
                label.rotation_degrees,
                &style.label,
            )?;
        }
        for line in &graticule.lines {
            let (from, to) = line.absolute_segment();
            context.render_line(from, to, &style.line)?;
        }

        log::trace!(
            "layer '{}' queued {} lines, {} labels",
            self.properties.id,
            graticule.lines.len(),
            graticule.labels.len()
        );
        Ok(())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        let config: GraticuleConfig = serde_json::from_value(options)?;
        self.set_config(config)
    }
}
