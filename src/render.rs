// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::Path;

use image::{ImageError, Rgb, RgbImage};
use tracing::debug;

use crate::colorschemes::{ColorScheme, BACKGROUND};
use crate::gallery::Exhibit;
use crate::sweep::SweepResult;

// {{{ Error

#[derive(Debug)]
pub enum RenderError {
    /// The image has no pixels.
    EmptyImage,
    /// The plot window has zero or non-finite width or height.
    DegenerateWindow,
    /// The coordinate sequences do not have the same length.
    MismatchedLengths,
    /// Failed to encode or write the image.
    Image(ImageError),
}

impl RenderError {
    fn as_str(&self) -> &'static str {
        match *self {
            RenderError::EmptyImage => "Image has zero width or height",
            RenderError::DegenerateWindow => "Plot window has an empty or non-finite extent",
            RenderError::MismatchedLengths => "Coordinate sequences have different lengths",
            RenderError::Image(_) => "Failed to write image",
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Image(err) => write!(fmt, "{}: {}", self.as_str(), err),
            _ => fmt.write_str(self.as_str()),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ImageError> for RenderError {
    fn from(err: ImageError) -> Self {
        RenderError::Image(err)
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

// }}}

// {{{ options

/// Everything the renderer needs to know about the plot.
///
/// Points are given as `(mu, x)` pairs: growth rate runs left to right and
/// the state value runs bottom to top.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Width and height of the image in pixels.
    pub bounds: (usize, usize),
    /// Point at the upper left corner, i.e. `(mu_lower, x_upper)`.
    pub upper_left: (f64, f64),
    /// Point at the lower right corner, i.e. `(mu_upper, x_lower)`.
    pub lower_right: (f64, f64),
    /// Radius of each point in pixels (0 draws a single pixel).
    pub point_radius: usize,
    pub background: Rgb<u8>,
    pub scheme: ColorScheme,
}

impl RenderOptions {
    pub fn new(bounds: (usize, usize), exhibit: &Exhibit) -> Self {
        RenderOptions {
            bounds,
            upper_left: (exhibit.mu_start, exhibit.x_upper),
            lower_right: (exhibit.mu_end, exhibit.x_lower),
            point_radius: 0,
            background: BACKGROUND,
            scheme: ColorScheme::Monochrome,
        }
    }

    pub fn with_point_radius(mut self, point_radius: usize) -> Self {
        self.point_radius = point_radius;
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_window(mut self, upper_left: (f64, f64), lower_right: (f64, f64)) -> Self {
        self.upper_left = upper_left;
        self.lower_right = lower_right;
        self
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.bounds.0 == 0 || self.bounds.1 == 0 {
            return Err(RenderError::EmptyImage);
        }

        let width = self.lower_right.0 - self.upper_left.0;
        let height = self.upper_left.1 - self.lower_right.1;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(RenderError::DegenerateWindow);
        }

        Ok(())
    }
}

// }}}

// {{{ helpers

/// Translate a point `(mu, x)` to pixel coordinates `(column, row)`.
///
/// Returns `None` for points outside of the window (including NaNs). Points
/// on the right and bottom edges are put in the last column and row.
pub fn point_to_pixel(
    bounds: (usize, usize),
    point: (f64, f64),
    upper_left: (f64, f64),
    lower_right: (f64, f64),
) -> Option<(usize, usize)> {
    let (mu, x) = point;
    if !(upper_left.0 <= mu && mu <= lower_right.0 && lower_right.1 <= x && x <= upper_left.1) {
        return None;
    }

    let (width, height) = (lower_right.0 - upper_left.0, upper_left.1 - lower_right.1);
    // rows grow downwards, but the state value grows upwards
    let column = ((mu - upper_left.0) / width * (bounds.0 as f64)) as usize;
    let row = ((upper_left.1 - x) / height * (bounds.1 as f64)) as usize;

    Some((column.min(bounds.0 - 1), row.min(bounds.1 - 1)))
}

fn draw_point(pixels: &mut RgbImage, center: (usize, usize), radius: usize, color: Rgb<u8>) {
    let (width, height) = (pixels.width() as i64, pixels.height() as i64);
    let (cx, cy) = (center.0 as i64, center.1 as i64);
    // any larger disk covers the whole image anyway
    let diagonal = ((width * width + height * height) as f64).sqrt().ceil() as usize;
    let r = radius.min(diagonal) as i64;

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }

            let (px, py) = (cx + dx, cy + dy);
            if 0 <= px && px < width && 0 <= py && py < height {
                pixels.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

// }}}

// {{{ render

/// Render a scatter plot of the points `(mus[i], xs[i])` into *pixels*.
///
/// The color of the i-th point is given by `colors(i)`. Returns the number
/// of points that fell inside the window.
pub fn render_scatter<F>(
    pixels: &mut RgbImage,
    mus: &[f64],
    xs: &[f64],
    colors: F,
    options: &RenderOptions,
) -> RenderResult<usize>
where
    F: Fn(usize) -> Rgb<u8>,
{
    options.validate()?;
    if mus.len() != xs.len() {
        return Err(RenderError::MismatchedLengths);
    }

    let bounds = (pixels.width() as usize, pixels.height() as usize);
    if bounds.0 == 0 || bounds.1 == 0 {
        return Err(RenderError::EmptyImage);
    }

    let (upper_left, lower_right) = (options.upper_left, options.lower_right);

    let mut ndrawn = 0;
    for (i, (&mu, &x)) in mus.iter().zip(xs).enumerate() {
        if let Some(pixel) = point_to_pixel(bounds, (mu, x), upper_left, lower_right) {
            draw_point(pixels, pixel, options.point_radius, colors(i));
            ndrawn += 1;
        }
    }

    Ok(ndrawn)
}

/// Render the bifurcation diagram of a sweep into a new image.
pub fn render_diagram(result: &SweepResult, options: &RenderOptions) -> RenderResult<RgbImage> {
    options.validate()?;

    let (mus, xs) = result.flatten();

    // size of the attractor set each point belongs to
    let sizes: Vec<usize> = result
        .entries
        .iter()
        .flat_map(|(_, values)| std::iter::repeat(values.len()).take(values.len()))
        .collect();
    let max_size = sizes.iter().copied().max().unwrap_or(0);

    let mut pixels = RgbImage::from_pixel(
        options.bounds.0 as u32,
        options.bounds.1 as u32,
        options.background,
    );
    let scheme = options.scheme;
    let ndrawn = render_scatter(
        &mut pixels,
        &mus,
        &xs,
        |i| scheme.color(sizes[i], max_size),
        options,
    )?;

    debug!("Drew {} of {} points", ndrawn, mus.len());
    Ok(pixels)
}

pub fn save_image(pixels: &RgbImage, path: &Path) -> RenderResult<()> {
    pixels.save(path)?;
    Ok(())
}

// }}}

// {{{ tests


// }}}
