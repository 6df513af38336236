//! Monte Carlo estimate of E[cos²Z] for standard normal Z,
//! with a 99.9% confidence interval around the sample mean.

mod estimate;
mod sampler;

pub use estimate::*;
pub use sampler::*;
