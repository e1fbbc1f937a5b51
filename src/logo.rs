use kurbo::{Point, Rect};

use crate::color::{Rgba, Theme};
use crate::font::{FontHandle, FontStyle};
use crate::plan::{DrawOp, execute_ops};
use crate::surface::Surface;

pub const LOGO_SIZE: u32 = 512;

const MARK: &str = "EP";
const MARK_SIZE: f32 = 60.0;
const GLOW_RADIUS: f64 = 200.0;
const NOTE_SIZE: f64 = 180.0;

/// The logo's layer list: ring-approximated radial glow, large note glyph,
/// smaller flagless note, three corner accents, the "EP" mark. The glow is
/// deliberately drawn as discrete concentric circles; the banding that
/// produces is part of the look.
pub fn logo_ops(theme: &Theme) -> Vec<DrawOp> {
    let center = f64::from(LOGO_SIZE) / 2.0;
    let mut ops = Vec::new();

    let mut radius = GLOW_RADIUS as i64;
    while radius > 0 {
        let r = radius as f64;
        let ratio = r / GLOW_RADIUS;
        ops.push(DrawOp::FillEllipse {
            bbox: Rect::new(center - r, center - r, center + r, center + r),
            color: theme.primary.lerp(theme.gradient_start, ratio),
        });
        radius -= 2;
    }

    // Large note: head, stem, wavy flag.
    let note_x = center;
    let note_y = center + 30.0;
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(
            note_x - NOTE_SIZE / 2.0,
            note_y - NOTE_SIZE / 4.0,
            note_x - NOTE_SIZE / 6.0,
            note_y + NOTE_SIZE / 4.0,
        ),
        color: theme.text,
    });
    ops.push(DrawOp::FillRect {
        rect: Rect::new(
            note_x - NOTE_SIZE / 6.0,
            note_y - NOTE_SIZE,
            note_x - NOTE_SIZE / 8.0,
            note_y - NOTE_SIZE / 4.0,
        ),
        color: theme.text,
    });
    ops.push(DrawOp::FillPolygon {
        points: vec![
            Point::new(note_x - NOTE_SIZE / 8.0, note_y - NOTE_SIZE),
            Point::new(note_x + NOTE_SIZE / 6.0, note_y - NOTE_SIZE + 20.0),
            Point::new(note_x + NOTE_SIZE / 5.0, note_y - NOTE_SIZE + 50.0),
            Point::new(note_x - NOTE_SIZE / 8.0, note_y - NOTE_SIZE + 60.0),
        ],
        color: theme.secondary,
    });

    // Second, smaller note up-and-right of the first, no flag.
    let note2_x = note_x + NOTE_SIZE / 3.0;
    let note2_y = note_y - 20.0;
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(note2_x - 25.0, note2_y - 15.0, note2_x - 5.0, note2_y + 5.0),
        color: theme.text,
    });
    ops.push(DrawOp::FillRect {
        rect: Rect::new(note2_x - 5.0, note2_y - 60.0, note2_x, note2_y - 15.0),
        color: theme.text,
    });

    // Corner accents in the three theme colors.
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(center - 220.0, center - 220.0, center - 180.0, center - 180.0),
        color: theme.accent,
    });
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(center + 180.0, center + 180.0, center + 220.0, center + 220.0),
        color: theme.secondary,
    });
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(center + 180.0, center - 220.0, center + 220.0, center - 180.0),
        color: theme.primary,
    });

    let mark_font = FontHandle::resolve(FontStyle::Bold, MARK_SIZE);
    ops.push(DrawOp::Text {
        font: mark_font,
        origin: Point::new(center - 30.0, center - 180.0),
        text: MARK.to_string(),
        color: theme.text,
    });

    ops
}

#[tracing::instrument(skip(theme))]
pub fn compose_logo(theme: &Theme) -> Surface {
    let mut surface = Surface::new(LOGO_SIZE, LOGO_SIZE, Rgba::transparent());
    execute_ops(&mut surface, &logo_ops(theme));
    surface
}
