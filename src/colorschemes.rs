// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use colors_transform::{Color, Hsl};
use image::Rgb;

/// Attractor sets with at most this many points take a palette color.
pub const MAX_PALETTE_SIZE: usize = 30;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const FOREGROUND: Rgb<u8> = Rgb([0, 0, 0]);

const COLOR_PALETTE: [Rgb<u8>; MAX_PALETTE_SIZE] = [
    Rgb([75, 0, 85]),
    Rgb([123, 0, 140]),
    Rgb([134, 0, 151]),
    Rgb([56, 0, 163]),
    Rgb([0, 0, 181]),
    Rgb([0, 0, 213]),
    Rgb([0, 56, 221]),
    Rgb([0, 125, 221]),
    Rgb([0, 146, 221]),
    Rgb([0, 160, 199]),
    Rgb([0, 170, 168]),
    Rgb([0, 170, 144]),
    Rgb([0, 163, 83]),
    Rgb([0, 154, 0]),
    Rgb([0, 175, 0]),
    Rgb([0, 199, 0]),
    Rgb([0, 220, 0]),
    Rgb([0, 242, 0]),
    Rgb([44, 255, 0]),
    Rgb([176, 255, 0]),
    Rgb([216, 245, 0]),
    Rgb([241, 231, 0]),
    Rgb([252, 210, 0]),
    Rgb([255, 177, 0]),
    Rgb([255, 129, 0]),
    Rgb([255, 33, 0]),
    Rgb([241, 0, 0]),
    Rgb([219, 0, 0]),
    Rgb([208, 0, 0]),
    Rgb([204, 76, 76]),
];

/// How points of the diagram are colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    /// Every point uses [`FOREGROUND`].
    #[default]
    Monochrome,
    /// Points are colored by the size of the attractor set they belong to.
    AttractorSize,
}

/// Determine a color on a hue ramp for a normalized value *c* in [0, 1].
pub fn get_ramp_color(c: f64) -> Rgb<u8> {
    let n = c.clamp(0.0, 1.0);

    // NOTE: in HSL, we have that H in [0, 360], S in [0, 100] and L in [0, 100]
    // and we stop at purple so that both ends are distinguishable
    let hue = (n * 300.0).round() as f32;
    let (r, g, b) = Hsl::from(hue, 100.0, 45.0).to_rgb().as_tuple();
    Rgb([r.round() as u8, g.round() as u8, b.round() as u8])
}

/// Determine the color of a point whose attractor set has *size* elements.
///
/// Small sets (cycles, essentially) take a fixed palette color, while larger
/// sets are placed on a hue ramp using the logarithm of their size relative
/// to *max_size*.
pub fn get_attractor_color(size: usize, max_size: usize) -> Rgb<u8> {
    match size {
        0 => BACKGROUND,
        1..=MAX_PALETTE_SIZE => COLOR_PALETTE[size - 1],
        _ => {
            let lo = (MAX_PALETTE_SIZE as f64).ln();
            let hi = (max_size.max(size) as f64).ln();
            if hi <= lo {
                get_ramp_color(0.0)
            } else {
                get_ramp_color(((size as f64).ln() - lo) / (hi - lo))
            }
        }
    }
}

impl ColorScheme {
    pub fn color(&self, size: usize, max_size: usize) -> Rgb<u8> {
        match self {
            ColorScheme::Monochrome => FOREGROUND,
            ColorScheme::AttractorSize => get_attractor_color(size, max_size),
        }
    }
}
