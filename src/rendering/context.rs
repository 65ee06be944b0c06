use crate::{
    core::geo::Point,
    grid::descriptors::{LabelStyle, LineStyle},
    GraticuleError, Result,
};

/// Rendering context that collects drawing instructions for a surface
pub struct RenderContext {
    pub width: u32,
    pub height: u32,
    /// Drawing primitives queue, consumed by whatever surface draws the frame
    pub drawing_queue: Vec<DrawCommand>,
}

/// Commands that can be issued to the render context
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Text {
        text: String,
        position: Point,
        /// Clockwise, around `position`
        rotation_degrees: f64,
        style: LabelStyle,
    },
}

impl RenderContext {
    /// Create a new render context
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GraticuleError::Render(format!(
                "render surface must have an area, got {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            drawing_queue: Vec::new(),
        })
    }

    /// Begin a frame
    pub fn begin_frame(&mut self) -> Result<()> {
        self.drawing_queue.clear();
        Ok(())
    }

    /// Queue a straight line between two screen points
    pub fn render_line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<()> {
        self.drawing_queue.push(DrawCommand::Line {
            from,
            to,
            style: style.clone(),
        });
        Ok(())
    }

    /// Queue a text run anchored at its upper-left corner
    pub fn render_text(
        &mut self,
        text: &str,
        position: Point,
        rotation_degrees: f64,
        style: &LabelStyle,
    ) -> Result<()> {
        self.drawing_queue.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            rotation_degrees,
            style: style.clone(),
        });
        Ok(())
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }

    /// Clear the drawing queue
    pub fn clear_queue(&mut self) {
        self.drawing_queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_context_is_rejected() {
        assert!(matches!(RenderContext::new(0, 10), Err(GraticuleError::Render(_))));
        assert!(RenderContext::new(10, 10).is_ok());
    }

    #[test]
    fn test_queue() {
        let mut ctx = RenderContext::new(100, 100).unwrap();
        ctx.render_line(Point::new(0.0, 1.0), Point::new(100.0, 1.0), &LineStyle::default())
            .unwrap();
        ctx.render_text("30", Point::new(0.0, 6.0), 0.0, &LabelStyle::default())
            .unwrap();
        assert_eq!(ctx.get_drawing_queue().len(), 2);

        ctx.begin_frame().unwrap();
        assert!(ctx.get_drawing_queue().is_empty());
    }
}
