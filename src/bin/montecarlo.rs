//! Monte Carlo Binary
//!
//! Estimates the mean and variance of cos²Z for standard normal Z,
//! with a 99.9% confidence interval on the mean.

use anyhow::Context;
use playlab::montecarlo::Estimate;
use playlab::random::Dice;
use playlab::*;

fn main() -> anyhow::Result<()> {
    log();
    log::info!("{:<32}{:<32}", "drawing monte carlo samples", MONTE_CARLO_SAMPLES);
    let sample = montecarlo::sample(&mut Dice::random(), MONTE_CARLO_SAMPLES);
    let estimate = Estimate::try_from_sample(&sample).context("estimate from empty sample")?;
    println!("{}", estimate);
    Ok(())
}
