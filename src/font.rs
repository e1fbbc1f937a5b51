use std::path::Path;
use std::sync::Arc;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use kurbo::Point;

use crate::color::Rgba;
use crate::error::{BrandError, BrandResult};
use crate::surface::Surface;

/// Which candidate list to walk when resolving a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Regular,
}

impl FontStyle {
    fn candidates(self) -> &'static [&'static str] {
        match self {
            FontStyle::Bold => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "C:/Windows/Fonts/arialbd.ttf",
                "C:/Windows/Fonts/Arial.ttf",
            ],
            FontStyle::Regular => &[
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "C:/Windows/Fonts/Arial.ttf",
            ],
        }
    }
}

/// A text-rendering resource bound to one pixel size. `face == None` selects
/// the built-in 5×7 bitmap font, which needs no external resource and
/// cannot fail to load.
#[derive(Clone)]
pub struct FontHandle {
    face: Option<Arc<fontdue::Font>>,
    size: f32,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("size", &self.size)
            .field("fallback", &self.face.is_none())
            .finish()
    }
}

impl FontHandle {
    /// Walks the candidate paths for `style` and returns the first face that
    /// loads. Every failure is "try the next one"; exhaustion yields the
    /// bitmap fallback, so this never returns an error.
    pub fn resolve(style: FontStyle, size: f32) -> Self {
        for path in style.candidates() {
            match load_candidate(Path::new(path)) {
                Ok(face) => {
                    tracing::debug!(path, size, "resolved font candidate");
                    return Self {
                        face: Some(face),
                        size,
                    };
                }
                Err(err) => tracing::debug!(path, %err, "font candidate unavailable"),
            }
        }
        tracing::debug!(size, "no font candidate resolved, using built-in bitmap font");
        Self::fallback(size)
    }

    /// The guaranteed-available handle backed by the built-in bitmap font.
    pub fn fallback(size: f32) -> Self {
        Self { face: None, size }
    }

    pub fn is_fallback(&self) -> bool {
        self.face.is_none()
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Pixel width of `text` as a single line.
    pub fn measure(&self, text: &str) -> f64 {
        match &self.face {
            Some(face) => {
                let layout = self.layout_of(face, text);
                f64::from(
                    layout
                        .glyphs()
                        .iter()
                        .map(|g| g.x + g.width as f32)
                        .fold(0.0f32, f32::max),
                )
            }
            None => bitmap::measure(text, self.bitmap_scale()),
        }
    }

    /// Draws `text` with its top-left corner at `origin`.
    pub fn draw(&self, surface: &mut Surface, origin: Point, text: &str, color: Rgba) {
        match &self.face {
            Some(face) => {
                let layout = self.layout_of(face, text);
                for g in layout.glyphs() {
                    if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                        continue;
                    }
                    let (metrics, coverage) = face.rasterize_config(g.key);
                    let gx = (origin.x + f64::from(g.x)).round() as i64;
                    let gy = (origin.y + f64::from(g.y)).round() as i64;
                    for row in 0..metrics.height {
                        for col in 0..metrics.width {
                            let cov = coverage[row * metrics.width + col];
                            if cov == 0 {
                                continue;
                            }
                            let a = ((u16::from(color.a) * u16::from(cov) + 127) / 255) as u8;
                            surface.blend_pixel(
                                gx + col as i64,
                                gy + row as i64,
                                color.with_alpha(a),
                            );
                        }
                    }
                }
            }
            None => bitmap::draw(surface, origin, text, self.bitmap_scale(), color),
        }
    }

    fn layout_of(&self, face: &Arc<fontdue::Font>, text: &str) -> Layout {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[face.as_ref()], &TextStyle::new(text, self.size, 0));
        layout
    }

    fn bitmap_scale(&self) -> f64 {
        f64::from(self.size) / bitmap::BASE_HEIGHT
    }
}

fn load_candidate(path: &Path) -> BrandResult<Arc<fontdue::Font>> {
    let bytes = std::fs::read(path)?;
    let face = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| BrandError::font(format!("{}: {e}", path.display())))?;
    Ok(Arc::new(face))
}

/// Minimal built-in 5×7 bitmap font. Uppercase letters, digits and a few
/// punctuation marks; lowercase folds to uppercase, anything else renders
/// as a blank advance.
mod bitmap {
    use kurbo::{Point, Rect};

    use crate::color::Rgba;
    use crate::surface::Surface;

    pub const BASE_HEIGHT: f64 = 7.0;
    const ADVANCE: f64 = 6.0;

    pub fn measure(text: &str, scale: f64) -> f64 {
        text.chars().count() as f64 * ADVANCE * scale
    }

    pub fn draw(surface: &mut Surface, origin: Point, text: &str, scale: f64, color: Rgba) {
        let mut pen_x = origin.x;
        for ch in text.chars() {
            if let Some(rows) = glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..5u32 {
                        if bits & (0b1_0000 >> col) != 0 {
                            let x0 = pen_x + f64::from(col) * scale;
                            let y0 = origin.y + row as f64 * scale;
                            surface.fill_rect(Rect::new(x0, y0, x0 + scale, y0 + scale), color);
                        }
                    }
                }
            }
            pen_x += ADVANCE * scale;
        }
    }

    fn glyph(ch: char) -> Option<[u8; 7]> {
        let rows = match ch.to_ascii_uppercase() {
            'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
            'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
            'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
            'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
            'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
            'G' => [0x0E, 0x11, 0x10, 0x10, 0x13, 0x11, 0x0F],
            'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
            'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
            'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
            'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
            'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
            'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
            'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
            'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
            'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
            'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
            'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
            'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
            'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
            'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
            'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
            'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
            'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
            'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
            '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
            '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
            '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
            '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
            '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
            '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
            '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
            '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
            '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
            '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
            '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
            ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
            '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
            '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
            '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
            '\'' => [0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00],
            _ => return None,
        };
        Some(rows)
    }
}
