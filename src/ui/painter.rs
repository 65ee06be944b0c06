//! Paints a queued graticule frame with egui.

use crate::core::geo::Point;
use crate::rendering::context::DrawCommand;
use egui::{epaint::TextShape, FontId, Painter, Pos2, Rect, Shape, Stroke};

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

/// Paint `queue` into the map area whose top-left corner is `rect.min`.
/// Everything is clipped to `rect`.
pub fn paint_queue(painter: &Painter, rect: Rect, queue: &[DrawCommand]) {
    let painter = painter.with_clip_rect(rect);
    let origin = rect.min;

    for command in queue {
        match command {
            DrawCommand::Line { from, to, style } => {
                let stroke = Stroke::new(style.width, egui::Color32::from(style.color));
                let points = [to_screen(origin, *from), to_screen(origin, *to)];
                match style.dash_pattern.as_slice() {
                    [dash, gap, ..] => {
                        painter.extend(Shape::dashed_line(&points, stroke, *dash, *gap));
                    }
                    _ => {
                        painter.line_segment(points, stroke);
                    }
                }
            }
            DrawCommand::Text {
                text,
                position,
                rotation_degrees,
                style,
            } => {
                let galley = painter.layout_no_wrap(
                    text.clone(),
                    FontId::proportional(style.font_size),
                    egui::Color32::from(style.color),
                );
                let mut shape = TextShape::new(to_screen(origin, *position), galley);
                shape.angle = (*rotation_degrees as f32).to_radians();
                painter.add(Shape::Text(shape));
            }
        }
    }
}
