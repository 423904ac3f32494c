// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use clap::ValueEnum;

/// A region of the bifurcation diagram worth looking at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exhibit {
    /// Growth rates covered by the sweep (upper bound is exclusive).
    pub mu_start: f64,
    pub mu_end: f64,
    /// Range of state values shown on the vertical axis.
    pub x_lower: f64,
    pub x_upper: f64,
}

pub const EXHIBIT_FULL: Exhibit = Exhibit {
    mu_start: 2.6,
    mu_end: 4.0,
    x_lower: 0.0,
    x_upper: 1.0,
};

/// Period-doubling cascade up to the onset of chaos.
pub const EXHIBIT_DOUBLING: Exhibit = Exhibit {
    mu_start: 3.4,
    mu_end: 3.6,
    x_lower: 0.3,
    x_upper: 0.9,
};

/// The period-3 window.
pub const EXHIBIT_WINDOW_3: Exhibit = Exhibit {
    mu_start: 3.82,
    mu_end: 3.86,
    x_lower: 0.0,
    x_upper: 1.0,
};

pub const EXHIBIT_CHAOS: Exhibit = Exhibit {
    mu_start: 3.5,
    mu_end: 4.0,
    x_lower: 0.0,
    x_upper: 1.0,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExhibitName {
    #[default]
    Full,
    Doubling,
    #[value(name = "window3")]
    Window3,
    Chaos,
}

impl ExhibitName {
    pub fn exhibit(self) -> Exhibit {
        match self {
            ExhibitName::Full => EXHIBIT_FULL,
            ExhibitName::Doubling => EXHIBIT_DOUBLING,
            ExhibitName::Window3 => EXHIBIT_WINDOW_3,
            ExhibitName::Chaos => EXHIBIT_CHAOS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhibits_are_ordered() {
        for name in ExhibitName::value_variants() {
            let exhibit = name.exhibit();
            assert!(exhibit.mu_start < exhibit.mu_end, "{:?}", name);
            assert!(exhibit.x_lower < exhibit.x_upper, "{:?}", name);
            assert!(0.0 < exhibit.mu_start && exhibit.mu_end <= 4.0, "{:?}", name);
        }
    }

    #[test]
    fn test_default_exhibit() {
        assert_eq!(ExhibitName::default().exhibit(), EXHIBIT_FULL);
    }
}
