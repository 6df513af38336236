//! Fictitious Play Binary
//!
//! Plays the assignment's 3x4 general-sum game and prints how often
//! each player ended up choosing each action.

use anyhow::Context;
use playlab::fictitious::Config;
use playlab::fictitious::Report;
use playlab::random::Dice;
use playlab::*;

fn main() -> anyhow::Result<()> {
    log();
    let config = Config::default();
    let ref mut game = config.build().context("configure fictitious play")?;
    log::info!(
        "{:<32}{:<32}",
        "playing fictitious rounds",
        format!("{} ({} warm-up)", game.total(), game.warmup())
    );
    game.play(&mut Dice::random()).context("play fictitious game")?;
    print!("{}", Report::from(&*game));
    Ok(())
}
