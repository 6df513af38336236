//! Bernoulli k-armed bandits and the policies that play them.
//!
//! [`Thompson`] samples each arm's Beta posterior and plays the best draw.
//! [`Ucb`] plays the arm with the highest optimistic mean. A [`Trajectory`]
//! records which arms a policy pulled and the regret that accrued, and a
//! [`Convergence`] follows the posterior of a single arm as it is pulled.

mod bandit;
mod convergence;
mod error;
#[cfg(feature = "server")]
mod leaderboard;
mod policy;
mod thompson;
mod trajectory;
mod ucb;

pub use bandit::*;
pub use convergence::*;
pub use error::*;
#[cfg(feature = "server")]
pub use leaderboard::*;
pub use policy::*;
pub use thompson::*;
pub use trajectory::*;
pub use ucb::*;
