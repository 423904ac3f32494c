// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

use crate::colorschemes::ColorScheme;
use crate::gallery::{Exhibit, ExhibitName};
use crate::logistic::{LogisticMap, DEFAULT_MAXIT, DEFAULT_X0};
use crate::render::RenderOptions;
use crate::sweep::BifurcationSweep;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Render the bifurcation diagram of the logistic map")]
pub struct Args {
    /// Named region of the diagram to render
    #[arg(long, value_enum, default_value_t = ExhibitName::Full)]
    pub exhibit: ExhibitName,

    /// First growth rate of the sweep (overrides the exhibit)
    #[arg(long, allow_negative_numbers = true)]
    pub mu_start: Option<f64>,

    /// Exclusive upper bound of the sweep (overrides the exhibit)
    #[arg(long, allow_negative_numbers = true)]
    pub mu_end: Option<f64>,

    /// Step between growth rates
    #[arg(long, default_value_t = 0.01, allow_negative_numbers = true)]
    pub increment: f64,

    /// Initial state of every orbit
    #[arg(long, default_value_t = DEFAULT_X0, allow_negative_numbers = true)]
    pub x0: f64,

    /// Number of iterations per growth rate
    #[arg(long, default_value_t = DEFAULT_MAXIT)]
    pub iterations: usize,

    /// Output image (PNG)
    #[arg(short, long, default_value = "bifurcation.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 1600)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 1000)]
    pub height: usize,

    /// Point radius in pixels
    #[arg(long, default_value_t = 0)]
    pub point_radius: usize,

    /// Color points by the size of their attractor set
    #[arg(long, default_value_t = false)]
    pub color_by_size: bool,

    /// Evaluate growth rates in parallel
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Exhibit with the command-line overrides applied.
    pub fn window(&self) -> Exhibit {
        let exhibit = self.exhibit.exhibit();
        Exhibit {
            mu_start: self.mu_start.unwrap_or(exhibit.mu_start),
            mu_end: self.mu_end.unwrap_or(exhibit.mu_end),
            ..exhibit
        }
    }

    pub fn sweep(&self) -> BifurcationSweep {
        let window = self.window();
        BifurcationSweep::new(
            window.mu_start,
            window.mu_end,
            self.increment,
            LogisticMap::new(self.x0, self.iterations),
        )
    }

    pub fn render_options(&self) -> RenderOptions {
        let scheme = if self.color_by_size {
            ColorScheme::AttractorSize
        } else {
            ColorScheme::Monochrome
        };

        RenderOptions::new((self.width, self.height), &self.window())
            .with_point_radius(self.point_radius)
            .with_scheme(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::gallery::{EXHIBIT_FULL, EXHIBIT_WINDOW_3};

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bifurcation"]).unwrap();

        assert_eq!(args.window(), EXHIBIT_FULL);
        assert_eq!(args.output, PathBuf::from("bifurcation.png"));
        assert!(!args.parallel);

        let sweep = args.sweep();
        assert_eq!(sweep.mu_start, 2.6);
        assert_eq!(sweep.mu_end, 4.0);
        assert_eq!(sweep.increment, 0.01);
        assert_eq!(sweep.map, LogisticMap::new(0.4, 100_000));

        let options = args.render_options();
        assert_eq!(options.bounds, (1600, 1000));
        assert_eq!(options.upper_left, (2.6, 1.0));
        assert_eq!(options.lower_right, (4.0, 0.0));
        assert_eq!(options.scheme, ColorScheme::Monochrome);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "bifurcation",
            "--exhibit",
            "window3",
            "--mu-end",
            "3.84",
            "--increment",
            "0.001",
            "--iterations",
            "1000",
            "--color-by-size",
        ])
        .unwrap();

        let window = args.window();
        assert_eq!(window.mu_start, EXHIBIT_WINDOW_3.mu_start);
        assert_eq!(window.mu_end, 3.84);

        let sweep = args.sweep();
        assert_eq!(sweep.increment, 0.001);
        assert_eq!(sweep.map.maxit, 1000);
        assert_eq!(args.render_options().scheme, ColorScheme::AttractorSize);
    }

    #[test]
    fn test_negative_values() {
        let args = Args::try_parse_from(["bifurcation", "--increment", "-0.1"]).unwrap();
        assert_eq!(args.increment, -0.1);
        assert!(args.sweep().samples().is_empty());
    }
}
