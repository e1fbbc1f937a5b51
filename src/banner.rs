use kurbo::{Point, Rect};

use crate::color::{Rgba, Theme};
use crate::font::{FontHandle, FontStyle};
use crate::plan::{DrawOp, execute_ops};
use crate::surface::Surface;
use crate::wave::WaveSpec;

pub const BANNER_WIDTH: u32 = 1200;
pub const BANNER_HEIGHT: u32 = 300;

const TITLE: &str = "ERROR PARTY";
const SUBTITLE: &str = "Your Music Universe";
const TITLE_SIZE: f32 = 80.0;
const SUBTITLE_SIZE: f32 = 32.0;

/// The banner's layer list, bottom to top: gradient, three background
/// waves, the note icon, title with drop shadow, subtitle, accent dots.
/// The dark base fill is the surface's creation color.
pub fn banner_ops(theme: &Theme) -> Vec<DrawOp> {
    let center_x = f64::from(BANNER_WIDTH) / 2.0;
    let center_y = f64::from(BANNER_HEIGHT) / 2.0;

    let mut ops = vec![DrawOp::GradientV {
        rect: Rect::new(0.0, 0.0, f64::from(BANNER_WIDTH), f64::from(BANNER_HEIGHT)),
        start: theme.gradient_start,
        end: theme.gradient_end,
    }];

    ops.push(DrawOp::Wave(WaveSpec::new(
        Point::new(50.0, 80.0),
        400.0,
        80.0,
        theme.primary.with_alpha(100),
    )));
    ops.push(DrawOp::Wave(WaveSpec::new(
        Point::new(200.0, 150.0),
        500.0,
        60.0,
        theme.secondary.with_alpha(80),
    )));
    ops.push(DrawOp::Wave(WaveSpec::new(
        Point::new(400.0, 100.0),
        600.0,
        100.0,
        theme.accent.with_alpha(60),
    )));

    // Note icon left of center: head, stem, accent dot.
    let note_x = center_x - 200.0;
    let note_y = center_y;
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(note_x - 30.0, note_y - 20.0, note_x - 10.0, note_y),
        color: theme.primary,
    });
    ops.push(DrawOp::FillRect {
        rect: Rect::new(note_x - 10.0, note_y - 60.0, note_x - 5.0, note_y - 20.0),
        color: theme.primary,
    });
    ops.push(DrawOp::FillEllipse {
        bbox: Rect::new(note_x - 15.0, note_y - 65.0, note_x, note_y - 55.0),
        color: theme.secondary,
    });

    let title_font = FontHandle::resolve(FontStyle::Bold, TITLE_SIZE);
    let subtitle_font = FontHandle::resolve(FontStyle::Regular, SUBTITLE_SIZE);

    // Centered with a slight rightward offset to balance the icon.
    let title_x = center_x - title_font.measure(TITLE) / 2.0 + 50.0;
    ops.push(DrawOp::Text {
        font: title_font.clone(),
        origin: Point::new(title_x + 3.0, center_y - 35.0),
        text: TITLE.to_string(),
        color: Rgba::rgb(0, 0, 0),
    });
    ops.push(DrawOp::Text {
        font: title_font,
        origin: Point::new(title_x, center_y - 38.0),
        text: TITLE.to_string(),
        color: theme.primary,
    });

    let subtitle_x = center_x - subtitle_font.measure(SUBTITLE) / 2.0 + 50.0;
    ops.push(DrawOp::Text {
        font: subtitle_font,
        origin: Point::new(subtitle_x, center_y + 35.0),
        text: SUBTITLE.to_string(),
        color: theme.secondary,
    });

    for i in 0..10 {
        let x = 100.0 + f64::from(i) * 100.0;
        let y = if i % 2 == 0 { 40.0 } else { 260.0 };
        ops.push(DrawOp::FillEllipse {
            bbox: Rect::new(x - 4.0, y - 4.0, x + 4.0, y + 4.0),
            color: theme.accent,
        });
    }

    ops
}

#[tracing::instrument(skip(theme))]
pub fn compose_banner(theme: &Theme) -> Surface {
    let mut surface = Surface::new(BANNER_WIDTH, BANNER_HEIGHT, theme.bg_dark);
    execute_ops(&mut surface, &banner_ops(theme));
    surface
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_has_fixed_dimensions() {
        let s = compose_banner(&Theme::default());
        assert_eq!(s.width(), BANNER_WIDTH);
        assert_eq!(s.height(), BANNER_HEIGHT);
    }

    #[test]
    fn banner_is_fully_opaque() {
        let s = compose_banner(&Theme::default());
        assert!(s.data().iter().skip(3).step_by(4).all(|&a| a == 255));
    }

    #[test]
    fn top_left_pixel_is_gradient_start() {
        let theme = Theme::default();
        let s = compose_banner(&theme);
        assert_eq!(s.pixel(0, 0), Some(theme.gradient_start));
    }

    #[test]
    fn accent_dot_covers_its_center() {
        let theme = Theme::default();
        let s = compose_banner(&theme);
        assert_eq!(s.pixel(100, 40), Some(theme.accent));
        assert_eq!(s.pixel(200, 260), Some(theme.accent));
    }

    #[test]
    fn layer_order_is_gradient_waves_icon_text_dots() {
        let theme = Theme::default();
        let ops = banner_ops(&theme);
        assert_eq!(ops.len(), 20);

        assert!(matches!(ops[0], DrawOp::GradientV { .. }));
        assert!(ops[1..4].iter().all(|op| matches!(op, DrawOp::Wave(_))));
        assert!(matches!(ops[4], DrawOp::FillEllipse { .. }));
        assert!(matches!(ops[5], DrawOp::FillRect { .. }));
        assert!(matches!(ops[6], DrawOp::FillEllipse { .. }));

        // Shadow strictly below the title, title below the subtitle.
        let DrawOp::Text { color: shadow, .. } = &ops[7] else {
            panic!("expected shadow text op");
        };
        let DrawOp::Text { color: title, .. } = &ops[8] else {
            panic!("expected title text op");
        };
        assert_eq!(*shadow, Rgba::rgb(0, 0, 0));
        assert_eq!(*title, theme.primary);
        assert!(matches!(ops[9], DrawOp::Text { .. }));

        assert!(
            ops[10..]
                .iter()
                .all(|op| matches!(op, DrawOp::FillEllipse { .. }))
        );
    }

    #[test]
    fn shadow_is_offset_three_pixels_down_right() {
        let ops = banner_ops(&Theme::default());
        let (DrawOp::Text { origin: shadow, .. }, DrawOp::Text { origin: title, .. }) =
            (&ops[7], &ops[8])
        else {
            panic!("expected two text ops");
        };
        assert_eq!(shadow.x - title.x, 3.0);
        assert_eq!(shadow.y - title.y, 3.0);
    }
}
