use kurbo::{Point, Rect};

use crate::color::Rgba;
use crate::font::FontHandle;
use crate::gradient;
use crate::surface::Surface;
use crate::wave::{self, WaveSpec};

/// One layer of a composition. Composers build an ordered `Vec<DrawOp>` so
/// the z-order is a plain value that tests can inspect; `execute_ops`
/// paints the list front to back onto a surface.
#[derive(Clone, Debug)]
pub enum DrawOp {
    GradientV {
        rect: Rect,
        start: Rgba,
        end: Rgba,
    },
    Wave(WaveSpec),
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    FillEllipse {
        bbox: Rect,
        color: Rgba,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Rgba,
    },
    Text {
        font: FontHandle,
        origin: Point,
        text: String,
        color: Rgba,
    },
}

pub fn execute_ops(surface: &mut Surface, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::GradientV { rect, start, end } => {
                gradient::fill_vertical(surface, *rect, *start, *end);
            }
            DrawOp::Wave(spec) => wave::draw_wave(surface, spec),
            DrawOp::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawOp::FillEllipse { bbox, color } => surface.fill_ellipse(*bbox, *color),
            DrawOp::FillPolygon { points, color } => surface.fill_polygon(points, *color),
            DrawOp::Text {
                font,
                origin,
                text,
                color,
            } => font.draw(surface, *origin, text, *color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_paint_in_list_order() {
        let mut s = Surface::new(8, 8, Rgba::rgb(0, 0, 0));
        let ops = vec![
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 8.0, 8.0),
                color: Rgba::rgb(255, 0, 0),
            },
            DrawOp::FillRect {
                rect: Rect::new(2.0, 2.0, 6.0, 6.0),
                color: Rgba::rgb(0, 0, 255),
            },
        ];
        execute_ops(&mut s, &ops);
        assert_eq!(s.pixel(0, 0), Some(Rgba::rgb(255, 0, 0)));
        assert_eq!(s.pixel(4, 4), Some(Rgba::rgb(0, 0, 255)));
    }

    #[test]
    fn text_op_uses_its_font_handle() {
        let mut s = Surface::new(64, 32, Rgba::rgb(0, 0, 0));
        let ops = vec![DrawOp::Text {
            font: FontHandle::fallback(14.0),
            origin: Point::new(2.0, 2.0),
            text: "EP".to_string(),
            color: Rgba::rgb(255, 255, 255),
        }];
        let before = s.data().to_vec();
        execute_ops(&mut s, &ops);
        assert_ne!(s.data(), &before[..]);
    }
}
