use kurbo::{Point, Rect};

use crate::color::Rgba;

/// Mutable RGBA8 pixel buffer (straight alpha) that one composer owns for
/// the duration of a composition, then hands to the emitter.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some(Rgba::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Source-over blend of `color` onto one pixel. Out-of-bounds
    /// coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        if color.a == 0 {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        if color.a == 255 {
            self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }

        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        let out = over(dst, [color.r, color.g, color.b, color.a]);
        self.data[i..i + 4].copy_from_slice(&out);
    }

    /// Fills the half-open pixel rectangle covered by `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let x0 = rect.x0.round() as i64;
        let y0 = rect.y0.round() as i64;
        let x1 = rect.x1.round() as i64;
        let y1 = rect.y1.round() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Fills the ellipse inscribed in `bbox` by horizontal spans.
    pub fn fill_ellipse(&mut self, bbox: Rect, color: Rgba) {
        let cx = (bbox.x0 + bbox.x1) / 2.0;
        let cy = (bbox.y0 + bbox.y1) / 2.0;
        let rx = (bbox.x1 - bbox.x0) / 2.0;
        let ry = (bbox.y1 - bbox.y0) / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        let y0 = bbox.y0.floor() as i64;
        let y1 = bbox.y1.ceil() as i64;
        for y in y0..y1 {
            let ny = (y as f64 + 0.5 - cy) / ry;
            let rem = 1.0 - ny * ny;
            if rem <= 0.0 {
                continue;
            }
            let half = rx * rem.sqrt();
            let xs = (cx - half).round() as i64;
            let xe = (cx + half).round() as i64;
            for x in xs..xe {
                self.blend_pixel(x, y, color);
            }
        }
    }

    /// Even-odd scanline fill of a closed polygon.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        if points.len() < 3 {
            return;
        }

        let y_min = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let y_max = points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut xs: Vec<f64> = Vec::with_capacity(points.len());
        for y in (y_min.floor() as i64)..(y_max.ceil() as i64) {
            let yc = y as f64 + 0.5;
            xs.clear();
            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                // Half-open edge rule so a vertex on the scanline counts once.
                if (a.y <= yc && b.y > yc) || (b.y <= yc && a.y > yc) {
                    xs.push(a.x + (yc - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            xs.sort_by(|p, q| p.partial_cmp(q).unwrap_or(std::cmp::Ordering::Equal));
            for pair in xs.chunks_exact(2) {
                let xs0 = pair[0].round() as i64;
                let xs1 = pair[1].round() as i64;
                for x in xs0..xs1 {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Strokes a connected polyline with round caps/joins. Each covered
    /// pixel is blended exactly once, so translucent strokes do not darken
    /// where segments overlap.
    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }

        let r = width / 2.0;
        let mut covered = vec![false; (self.width as usize) * (self.height as usize)];
        for seg in points.windows(2) {
            mark_capsule(&mut covered, self.width, self.height, seg[0], seg[1], r);
        }
        for (i, hit) in covered.iter().enumerate() {
            if *hit {
                let x = (i % self.width as usize) as i64;
                let y = (i / self.width as usize) as i64;
                self.blend_pixel(x, y, color);
            }
        }
    }
}

/// Marks every pixel whose center lies within distance `r` of segment ab.
fn mark_capsule(mask: &mut [bool], width: u32, height: u32, a: Point, b: Point, r: f64) {
    let x0 = ((a.x.min(b.x) - r).floor() as i64).max(0);
    let x1 = ((a.x.max(b.x) + r).ceil() as i64).min(i64::from(width));
    let y0 = ((a.y.min(b.y) - r).floor() as i64).max(0);
    let y1 = ((a.y.max(b.y) + r).ceil() as i64).min(i64::from(height));

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            if dist_to_segment(p, a, b) <= r {
                mask[(y as usize) * (width as usize) + x as usize] = true;
            }
        }
    }
}

fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

/// Straight-alpha source-over. Integer math, round-to-nearest.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u32::from(src[3]);
    let da_scaled = mul_div255(u32::from(dst[3]), 255 - sa);
    let oa = sa + da_scaled;
    if oa == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * sa + u32::from(dst[i]) * da_scaled;
        out[i] = ((num + oa / 2) / oa) as u8;
    }
    out[3] = oa as u8;
    out
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}
