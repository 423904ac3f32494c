// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

/// Default starting point for the iteration.
pub const DEFAULT_X0: f64 = 0.4;
/// Default number of iterations used to estimate an attractor.
pub const DEFAULT_MAXIT: usize = 100_000;

/// Fraction of the orbit that is considered transient and discarded.
const TRANSIENT_FRACTION: f64 = 0.8;
/// Attractor values are rounded to this many decimal places.
const ROUND_DIGITS: usize = 6;

// {{{ structs

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogisticMap {
    /// Growth rate of the map.
    pub mu: f64,
    /// Starting point for the iteration.
    pub x0: f64,
    /// Number of iterations used to estimate the attractor.
    pub maxit: usize,
}

impl LogisticMap {
    pub fn new(x0: f64, maxit: usize) -> Self {
        LogisticMap {
            mu: 0.0,
            x0,
            maxit,
        }
    }

    pub fn at(self, mu: f64) -> Self {
        LogisticMap { mu, ..self }
    }
}

impl Default for LogisticMap {
    fn default() -> Self {
        LogisticMap::new(DEFAULT_X0, DEFAULT_MAXIT)
    }
}

// }}}

// {{{ helpers

/// Evaluate the logistic map
///
/// $$
///     f(x) = \mu x (1 - x).
/// $$
#[inline]
pub fn logistic_step(mu: f64, x: f64) -> f64 {
    mu * x * (1.0 - x)
}

/// Number of leading iterates that are thrown away for an orbit of length
/// *maxit*. Ties are rounded to even.
pub fn transient_length(maxit: usize) -> usize {
    ((maxit as f64) * TRANSIENT_FRACTION).round_ties_even() as usize
}

/// Round *x* to *digits* decimal places.
///
/// The decimal expansion of the exact binary value is rounded, so values that
/// sit just below a half (e.g. `0.1234565`, stored as `0.12345649999...`)
/// round down. Scaling by `10^digits` first would round those up.
fn round_to_digits(x: f64, digits: usize) -> f64 {
    if !x.is_finite() {
        return x;
    }

    format!("{:.*}", digits, x).parse().unwrap_or(x)
}

// }}}

// {{{ attractor

/// Estimate the attractor of the logistic map at the growth rate of *map*.
///
/// The map is iterated `maxit` times starting from `x0` (the seed itself is
/// not part of the orbit). The first 80% of the orbit is discarded and the
/// remaining iterates are rounded to 6 digits and deduplicated. The result is
/// sorted in ascending order.
///
/// Nothing is validated: a diverging orbit gives back whatever the rounding
/// produces, including infinities and NaNs.
pub fn logistic_attractor(map: &LogisticMap) -> Vec<f64> {
    let mu = map.mu;
    let skip = transient_length(map.maxit);

    let mut x = map.x0;
    let mut values: Vec<f64> = Vec::with_capacity(map.maxit.saturating_sub(skip));
    for i in 0..map.maxit {
        x = logistic_step(mu, x);
        if i >= skip {
            values.push(round_to_digits(x, ROUND_DIGITS));
        }
    }

    values.sort_unstable_by(f64::total_cmp);
    values.dedup_by(|a, b| a == b || (a.is_nan() && b.is_nan()));
    values
}

/// Determine the attractor set for a growth rate *mu* from *x0* using *maxit*
/// iterations. See [`logistic_attractor`].
pub fn attractor_set(mu: f64, x0: f64, maxit: usize) -> Vec<f64> {
    logistic_attractor(&LogisticMap::new(x0, maxit).at(mu))
}

// }}}

// {{{ tests


// }}}
