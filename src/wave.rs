use kurbo::Point;

use crate::color::Rgba;
use crate::surface::Surface;

const STROKE_WIDTH: f64 = 4.0;

/// One decorative waveform: a sampled sine stroked as a polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSpec {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub color: Rgba,
    pub samples: u32,
}

impl WaveSpec {
    pub fn new(origin: Point, width: f64, height: f64, color: Rgba) -> Self {
        Self {
            origin,
            width,
            height,
            color,
            samples: 20,
        }
    }

    /// Sample positions along the wave. Point `i` sits at
    /// `x = origin.x + width*i/n`, `y = origin.y + height/2 + sin(i*0.5)*height/3`.
    pub fn points(&self) -> Vec<Point> {
        let n = self.samples;
        (0..n)
            .map(|i| {
                let x = self.origin.x + self.width * f64::from(i) / f64::from(n);
                let y = self.origin.y
                    + self.height / 2.0
                    + (f64::from(i) * 0.5).sin() * self.height / 3.0;
                Point::new(x, y)
            })
            .collect()
    }
}

/// Strokes the wave onto `surface`. Fewer than two samples is a no-op: a
/// connected polyline needs at least two points.
pub fn draw_wave(surface: &mut Surface, spec: &WaveSpec) {
    let points = spec.points();
    if points.len() < 2 {
        return;
    }
    surface.stroke_polyline(&points, STROKE_WIDTH, spec.color);
}
