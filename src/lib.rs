// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bifurcation diagrams of the logistic map
//!
//! $$
//!     x_{n + 1} = \mu x_n (1 - x_n).
//! $$
//!
//! For every growth rate $\mu$ in a sweep, [`logistic::attractor_set`]
//! estimates the values the orbit settles into and [`render`] turns the
//! collected [`sweep::SweepResult`] into a scatter plot.

#![warn(rust_2018_idioms)]

pub mod cli;
pub mod colorschemes;
pub mod gallery;
pub mod logistic;
pub mod render;
pub mod sweep;
