// SPDX-FileCopyrightText: 2024 Alexandru Fikl <alexfikl@gmail.com>
// SPDX-License-Identifier: MIT

#![warn(rust_2018_idioms)]

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bifurcation::cli::Args;
use bifurcation::render::{render_diagram, save_image};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let sweep = args.sweep();
    let options = args.render_options();
    options.validate().context("Invalid plot options")?;

    info!(
        "Sweeping mu in [{}, {}) with increment {} (x0 {} maxit {})",
        sweep.mu_start, sweep.mu_end, sweep.increment, sweep.map.x0, sweep.map.maxit
    );

    let now = Instant::now();
    let result = if args.parallel {
        sweep.run_parallel()
    } else {
        sweep.run()
    };
    info!(
        "Computed {} growth rates ({} points) in {:.3}s",
        result.len(),
        result.npoints(),
        now.elapsed().as_secs_f32()
    );

    let now = Instant::now();
    let pixels = render_diagram(&result, &options).context("Failed to render diagram")?;
    debug!("Rendered in {:.3}s", now.elapsed().as_secs_f32());

    save_image(&pixels, &args.output)
        .with_context(|| format!("Failed to save '{}'", args.output.display()))?;
    info!("Saved bifurcation diagram to '{}'", args.output.display());

    Ok(())
}
