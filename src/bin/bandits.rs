//! Bandits Binary
//!
//! 1. pulls each arm of a known bandit repeatedly and reports how its
//!    posterior concentrates on the true success rate
//! 2. pits Thompson sampling against UCB at several exploration
//!    constants on a random bandit and ranks them by cumulative regret

use anyhow::Context;
use playlab::bandit::*;
use playlab::random::Dice;
use playlab::*;

fn main() -> anyhow::Result<()> {
    log();
    let ref mut rng = Dice::random();

    let bandit = Bandit::try_from(BANDIT_CONVERGENCE_ARMS.to_vec()).context("convergence bandit")?;
    log::info!("{:<32}{:<32}", "tracking posterior convergence", BANDIT_CONVERGENCE_SAMPLES);
    for arm in 0..bandit.len() {
        let convergence = Convergence::run(&bandit, arm, BANDIT_CONVERGENCE_SAMPLES, rng)?;
        println!("{}", convergence);
    }

    let bandit = Bandit::random(BANDIT_ARMS, rng);
    let iterations = BANDIT_ITERATIONS_PER_ARM * BANDIT_ARMS;
    println!("{}", bandit);
    log::info!("{:<32}{:<32}", "comparing bandit policies", iterations);
    let mut trajectories = vec![Trajectory::run(
        &bandit,
        &mut Thompson::new(BANDIT_ARMS),
        iterations,
        rng,
    )?];
    for c in UCB_EXPLORATION {
        trajectories.push(Trajectory::run(&bandit, &mut Ucb::new(BANDIT_ARMS, c), iterations, rng)?);
    }
    println!("{}", Leaderboard::new(&trajectories));
    Ok(())
}
