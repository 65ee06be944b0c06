use crate::core::projection::Projection;
use crate::core::viewport::Viewport;
use crate::layers::{base::LayerTrait, graticule::GraticuleLayer};
use crate::rendering::context::RenderContext;
use crate::ui::painter::paint_queue;
use egui::{Response, Sense, Ui, Vec2, Widget};

/// Draws a [`GraticuleLayer`] over whatever map the host painted in the same
/// area. The viewport's size is taken from the allocated rect; center and
/// zoom come from the host.
pub struct GraticuleOverlay<'a, P: Projection> {
    layer: &'a mut GraticuleLayer<P>,
    center: (f64, f64),
    zoom: f64,
    size: Option<Vec2>,
}

impl<'a, P: Projection> GraticuleOverlay<'a, P> {
    pub fn new(layer: &'a mut GraticuleLayer<P>, center_x: f64, center_y: f64, zoom: f64) -> Self {
        Self {
            layer,
            center: (center_x, center_y),
            zoom,
            size: None,
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }
}

impl<'a, P: Projection> Widget for GraticuleOverlay<'a, P> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = self.size.unwrap_or_else(|| ui.available_size());
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        let viewport = Viewport::new(
            rect.width() as f64,
            rect.height() as f64,
            self.center.0,
            self.center.1,
            self.zoom,
        );

        let width = rect.width().max(0.0) as u32;
        let height = rect.height().max(0.0) as u32;
        match RenderContext::new(width, height) {
            Ok(mut context) => match self.layer.render(&mut context, &viewport) {
                Ok(()) => paint_queue(ui.painter(), rect, context.get_drawing_queue()),
                Err(e) => log::warn!("graticule render failed: {}", e),
            },
            Err(e) => log::debug!("graticule overlay skipped: {}", e),
        }

        response
    }
}
