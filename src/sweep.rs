// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

use rayon::prelude::*;
use tracing::debug;

use crate::logistic::{logistic_attractor, LogisticMap, DEFAULT_MAXIT};

// {{{ structs

/// A sweep over growth rates in `[mu_start, mu_end)`.
#[derive(Clone, Copy, Debug)]
pub struct BifurcationSweep {
    pub mu_start: f64,
    /// Exclusive upper bound of the sweep.
    pub mu_end: f64,
    pub increment: f64,
    /// Map used for every sample (its growth rate is overwritten).
    pub map: LogisticMap,
}

/// Attractor sets keyed by growth rate, in sweep order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepResult {
    pub entries: Vec<(f64, Vec<f64>)>,
}

// }}}

// {{{ sweep

impl BifurcationSweep {
    pub fn new(mu_start: f64, mu_end: f64, increment: f64, map: LogisticMap) -> Self {
        BifurcationSweep {
            mu_start,
            mu_end,
            increment,
            map,
        }
    }

    /// Growth rates visited by the sweep.
    ///
    /// The k-th sample is `mu_start + k * increment`, which keeps the rounding
    /// error of a single product instead of summing one per step. A sample
    /// that lands a few ulps below `mu_end` is still included, e.g.
    /// `2.8 + 8 * 0.1 < 3.6`.
    ///
    /// Non-positive increments and non-finite bounds give an empty sweep.
    pub fn samples(&self) -> Vec<f64> {
        let finite = self.mu_start.is_finite() && self.mu_end.is_finite();
        if !(self.increment > 0.0) || !self.increment.is_finite() || !finite {
            return Vec::new();
        }

        (0usize..)
            .map(|k| self.mu_start + (k as f64) * self.increment)
            .take_while(|&mu| mu < self.mu_end)
            .collect()
    }

    pub fn run(&self) -> SweepResult {
        let entries: Vec<(f64, Vec<f64>)> = self
            .samples()
            .into_iter()
            .map(|mu| (mu, logistic_attractor(&self.map.at(mu))))
            .collect();

        debug!("Sweep evaluated {} growth rates", entries.len());
        SweepResult { entries }
    }

    /// Same as [`BifurcationSweep::run`], but growth rates are evaluated on
    /// the rayon thread pool. The order of the entries is the sweep order.
    pub fn run_parallel(&self) -> SweepResult {
        let map = self.map;
        let entries: Vec<(f64, Vec<f64>)> = self
            .samples()
            .into_par_iter()
            .map(|mu| (mu, logistic_attractor(&map.at(mu))))
            .collect();

        debug!(
            "Sweep evaluated {} growth rates on {} threads",
            entries.len(),
            rayon::current_num_threads()
        );
        SweepResult { entries }
    }
}

/// Compute the attractor sets for all growth rates in `[mu_start, mu_end)`
/// starting from *x0*.
pub fn create_bifurcation_dict(mu_start: f64, mu_end: f64, x0: f64, increment: f64) -> SweepResult {
    BifurcationSweep::new(mu_start, mu_end, increment, LogisticMap::new(x0, DEFAULT_MAXIT)).run()
}

// }}}

// {{{ flatten

impl SweepResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of points in the diagram.
    pub fn npoints(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn get(&self, mu: f64) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(m, _)| *m == mu)
            .map(|(_, values)| values.as_slice())
    }

    /// Flatten the result into the coordinates of a scatter plot.
    ///
    /// Each growth rate is repeated once for every value in its attractor set.
    pub fn flatten(&self) -> (Vec<f64>, Vec<f64>) {
        let npoints = self.npoints();
        let mut mus = Vec::with_capacity(npoints);
        let mut xs = Vec::with_capacity(npoints);

        for (mu, values) in &self.entries {
            for &x in values {
                mus.push(*mu);
                xs.push(x);
            }
        }

        (mus, xs)
    }
}

// }}}

// {{{ tests

#[cfg(test)]
mod tests {
    use super::*;

    use crate::logistic::{attractor_set, DEFAULT_X0};

    fn sweep(mu_start: f64, mu_end: f64, increment: f64, maxit: usize) -> BifurcationSweep {
        BifurcationSweep::new(mu_start, mu_end, increment, LogisticMap::new(DEFAULT_X0, maxit))
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let result = create_bifurcation_dict(3.0, 3.02, DEFAULT_X0, 0.01);
        let mus: Vec<f64> = result.entries.iter().map(|(mu, _)| *mu).collect();

        assert_eq!(mus, vec![3.0, 3.01]);
        assert_eq!(
            result.get(3.0),
            Some(attractor_set(3.0, DEFAULT_X0, DEFAULT_MAXIT).as_slice())
        );
        assert_eq!(result.get(3.01).map(|v| v.len()), Some(2));
        assert_eq!(result.get(3.02), None);
    }

    #[test]
    fn test_default_sample_count() {
        let samples = sweep(2.6, 4.0, 0.01, 1).samples();

        assert_eq!(samples.len(), 140);
        assert_eq!(samples[0], 2.6);
        assert!(samples.iter().all(|&mu| mu < 4.0));
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_sweeps() {
        assert!(sweep(3.0, 3.0, 0.01, 10).run().is_empty());
        assert!(sweep(3.5, 3.0, 0.01, 10).run().is_empty());
        assert!(sweep(3.0, 3.5, 0.0, 10).run().is_empty());
        assert!(sweep(3.0, 3.5, -0.1, 10).run().is_empty());
        assert!(sweep(3.0, 3.5, f64::NAN, 10).run().is_empty());
        assert!(sweep(3.0, 3.5, f64::INFINITY, 10).run().is_empty());
    }

    #[test]
    fn test_non_finite_bounds() {
        assert!(sweep(3.0, f64::INFINITY, 0.01, 10).samples().is_empty());
        assert!(sweep(f64::NEG_INFINITY, 3.0, 0.01, 10).samples().is_empty());
        assert!(sweep(f64::NAN, 3.0, 0.01, 10).samples().is_empty());
        assert!(sweep(3.0, f64::NAN, 0.01, 10).samples().is_empty());
    }

    #[test]
    fn test_boundary_drift() {
        // 2.8 + 8 * 0.1 == 3.5999999999999996 is still below 3.6
        let samples = sweep(2.8, 3.6, 0.1, 1).samples();
        assert_eq!(samples.len(), 9);
        assert!(samples[8] < 3.6);

        assert_eq!(sweep(2.8, 3.55, 0.1, 1).samples().len(), 8);
    }

    #[test]
    fn test_matches_estimator() {
        let result = sweep(2.8, 3.55, 0.1, 20_000).run();

        assert_eq!(result.len(), 8);
        for (mu, values) in &result.entries {
            assert_eq!(*values, attractor_set(*mu, DEFAULT_X0, 20_000));
        }
    }

    #[test]
    fn test_flatten() {
        let result = sweep(2.8, 3.6, 0.05, 20_000).run();
        let (mus, xs) = result.flatten();

        assert_eq!(mus.len(), xs.len());
        assert_eq!(mus.len(), result.npoints());

        let mut offset = 0;
        for (mu, values) in &result.entries {
            let count = mus.iter().filter(|&&m| m == *mu).count();
            assert_eq!(count, values.len());

            assert!(mus[offset..offset + values.len()].iter().all(|m| m == mu));
            assert_eq!(&xs[offset..offset + values.len()], values.as_slice());
            offset += values.len();
        }
    }

    #[test]
    fn test_flatten_empty() {
        let (mus, xs) = SweepResult::default().flatten();
        assert!(mus.is_empty() && xs.is_empty());

        let (mus, xs) = sweep(2.8, 3.0, 0.1, 0).run().flatten();
        assert!(mus.is_empty() && xs.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let s = sweep(2.6, 4.0, 0.02, 5_000);
        assert_eq!(s.run(), s.run_parallel());
    }
}

// }}}
