/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation with rounding, `t` in [0,1].
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn mix(a: u8, b: u8, t: f64) -> u8 {
            (f64::from(a) * (1.0 - t) + f64::from(b) * t).round() as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: mix(self.r, other.r, t),
            g: mix(self.g, other.g, t),
            b: mix(self.b, other.b, t),
            a: mix(self.a, other.a, t),
        }
    }
}

/// Fixed brand palette, shared read-only by both composers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub bg_dark: Rgba,
    pub gradient_start: Rgba,
    pub gradient_end: Rgba,
    pub text: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgba::rgb(147, 51, 234),       // purple-600
            secondary: Rgba::rgb(236, 72, 153),     // pink-500
            accent: Rgba::rgb(59, 130, 246),        // blue-500
            bg_dark: Rgba::rgb(17, 24, 39),         // gray-900
            gradient_start: Rgba::rgb(30, 41, 59),  // slate-800
            gradient_end: Rgba::rgb(17, 24, 39),    // gray-900
            text: Rgba::rgb(255, 255, 255),
        }
    }
}
