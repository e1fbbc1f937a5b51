use kurbo::Rect;

use crate::color::Rgba;
use crate::surface::Surface;

/// Paints `rect` row by row, linearly interpolating from `start` (top) to
/// `end` (bottom). Row 0 is exactly `start`; the last row lands within one
/// unit per channel of `end` since the ratio `y/height` never reaches 1.
pub fn fill_vertical(surface: &mut Surface, rect: Rect, start: Rgba, end: Rgba) {
    let height = rect.height();
    if height <= 0.0 {
        return;
    }

    let y0 = rect.y0.round() as i64;
    let y1 = rect.y1.round() as i64;
    for (row, y) in (y0..y1).enumerate() {
        let ratio = row as f64 / height;
        let color = start.lerp(end, ratio);
        surface.fill_rect(Rect::new(rect.x0, y as f64, rect.x1, (y + 1) as f64), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_surface(h: u32, start: Rgba, end: Rgba) -> Surface {
        let mut s = Surface::new(4, h, Rgba::rgb(0, 0, 0));
        fill_vertical(&mut s, Rect::new(0.0, 0.0, 4.0, h as f64), start, end);
        s
    }

    #[test]
    fn first_row_is_start_color() {
        let start = Rgba::rgb(30, 41, 59);
        let end = Rgba::rgb(17, 24, 39);
        let s = gradient_surface(300, start, end);
        assert_eq!(s.pixel(0, 0), Some(start));
    }

    #[test]
    fn last_row_approximates_end_color() {
        let start = Rgba::rgb(30, 41, 59);
        let end = Rgba::rgb(17, 24, 39);
        let s = gradient_surface(300, start, end);
        let last = s.pixel(0, 299).unwrap();
        assert!(last.r.abs_diff(end.r) <= 1);
        assert!(last.g.abs_diff(end.g) <= 1);
        assert!(last.b.abs_diff(end.b) <= 1);
    }

    #[test]
    fn channels_are_monotonic() {
        let start = Rgba::rgb(200, 10, 100);
        let end = Rgba::rgb(20, 240, 100);
        let s = gradient_surface(64, start, end);
        let mut prev = s.pixel(0, 0).unwrap();
        for y in 1..64 {
            let cur = s.pixel(0, y).unwrap();
            assert!(cur.r <= prev.r);
            assert!(cur.g >= prev.g);
            assert_eq!(cur.b, 100);
            prev = cur;
        }
    }

    #[test]
    fn does_not_touch_outside_rect() {
        let mut s = Surface::new(8, 8, Rgba::rgb(1, 2, 3));
        fill_vertical(
            &mut s,
            Rect::new(2.0, 2.0, 6.0, 6.0),
            Rgba::rgb(255, 255, 255),
            Rgba::rgb(0, 0, 0),
        );
        assert_eq!(s.pixel(0, 0), Some(Rgba::rgb(1, 2, 3)));
        assert_eq!(s.pixel(7, 7), Some(Rgba::rgb(1, 2, 3)));
        assert_eq!(s.pixel(1, 4), Some(Rgba::rgb(1, 2, 3)));
        assert_eq!(s.pixel(6, 4), Some(Rgba::rgb(1, 2, 3)));
    }
}
