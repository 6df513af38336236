//! Injectable source of randomness.
//!
//! Every stochastic step in the crate draws through [`RandomSource`],
//! so experiments can run on OS entropy while tests run on a fixed seed.

mod dice;
mod source;

pub use dice::*;
pub use source::*;
