//! Fictitious play for two-player general-sum games.
//!
//! Each [`Agent`] keeps a running tally of what its opponent has played.
//! A [`Game`] lets both agents explore by sampling their mixed strategies
//! for a few warm-up rounds, then switches both to best-responding against
//! the empirical distribution of the other's past actions.
//!
//! # Module Structure
//!
//! - `action` — the Action marker trait
//! - `strategy` — mixed strategies over an action set
//! - `rewards` — per-player payoff tables
//! - `tally` — opponent action counts
//! - `agent` — a learning player
//! - `game` — the round driver
//! - `report` — empirical frequencies as console text
//! - `config` — the experiment parameters

mod action;
mod agent;
mod config;
mod error;
mod game;
mod mode;
mod report;
mod rewards;
mod strategy;
mod tally;

pub use action::*;
pub use agent::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use mode::*;
pub use report::*;
pub use rewards::*;
pub use strategy::*;
pub use tally::*;
