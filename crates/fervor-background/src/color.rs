//! Color compositing for the background canvas.

use ratatui::style::Color;

/// Linear RGB accumulator, channels in 0.0-255.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Opaque black, the canvas clear color.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub fn from_u8((r, g, b): (u8, u8, u8)) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Quantize to a terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        )
    }
}

/// Source-over composite of `over` with the given alpha onto `base`.
pub fn blend(base: Rgb, over: Rgb, alpha: f32) -> Rgb {
    let a = alpha.clamp(0.0, 1.0);
    Rgb {
        r: base.r * (1.0 - a) + over.r * a,
        g: base.g * (1.0 - a) + over.g * a,
        b: base.b * (1.0 - a) + over.b * a,
    }
}
