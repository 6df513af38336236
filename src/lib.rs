//! Learning-in-games and sampling experiments.
//!
//! - `fictitious` — fictitious play for two-player general-sum games
//! - `montecarlo` — Monte Carlo estimate of E[cos²Z] with a confidence interval
//! - `bandit` — Thompson sampling vs UCB on a Bernoulli k-armed bandit
//! - `random` — the injectable random source all three draw from
#![allow(dead_code)]

pub mod bandit;
pub mod fictitious;
pub mod montecarlo;
pub mod random;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, payoffs, and regrets.
pub type Utility = f64;
/// Strategy weights, arm success rates, and empirical frequencies.
pub type Probability = f64;
/// Bernoulli bandit payout, either 0 or 1.
pub type Reward = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// FICTITIOUS PLAY
// ============================================================================
/// Rounds of random play that seed the opponent tallies.
pub const FICTITIOUS_WARMUP_ROUNDS: usize = 1;
/// Total rounds of a play-through, warm-up included.
pub const FICTITIOUS_TOTAL_ROUNDS: usize = 10000;
/// Slack allowed when checking that a mixed strategy sums to one.
pub const PROBABILITY_TOLERANCE: Probability = 1e-9;

// ============================================================================
// MONTE CARLO
// ============================================================================
/// Number of i.i.d. draws of cos²Z.
pub const MONTE_CARLO_SAMPLES: usize = 10000;
/// Two-sided standard normal quantile at the 99.9% confidence level.
pub const CONFIDENCE_Z_999: f64 = 3.291;

// ============================================================================
// MULTI-ARMED BANDIT
// ============================================================================
/// Known arm probabilities for the posterior convergence experiment.
pub const BANDIT_CONVERGENCE_ARMS: [Probability; 3] = [0.2, 0.5, 0.9];
/// Pulls per arm in the posterior convergence experiment.
pub const BANDIT_CONVERGENCE_SAMPLES: usize = 1200;
/// Arms in the randomly drawn bandit of the policy comparison.
pub const BANDIT_ARMS: usize = 3;
/// Policy comparison runs this many pulls per arm.
pub const BANDIT_ITERATIONS_PER_ARM: usize = 1000;
/// Exploration constants for UCB, log-spaced from 1e-3 to 1e0.
pub const UCB_EXPLORATION: [f64; 4] = [1e-3, 1e-2, 1e-1, 1e0];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
