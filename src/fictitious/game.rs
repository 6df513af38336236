use super::action::Action;
use super::agent::Agent;
use super::error::Error;
use crate::random::RandomSource;

/// two fictitious players and a fixed schedule:
/// `warmup` rounds of exploration, then best responses
/// until `total` rounds have been played.
#[derive(Debug, Clone)]
pub struct Game<A, B>
where
    A: Action,
    B: Action,
{
    p1: Agent<A, B>,
    p2: Agent<B, A>,
    warmup: usize,
    total: usize,
}

impl<A, B> Game<A, B>
where
    A: Action,
    B: Action,
{
    pub fn new(p1: Agent<A, B>, p2: Agent<B, A>, warmup: usize, total: usize) -> Result<Self, Error> {
        if warmup > total {
            return Err(Error::RoundsOrder { warmup, total });
        }
        Ok(Self {
            p1,
            p2,
            warmup,
            total,
        })
    }

    pub fn p1(&self) -> &Agent<A, B> {
        &self.p1
    }
    pub fn p2(&self) -> &Agent<B, A> {
        &self.p2
    }
    pub fn warmup(&self) -> usize {
        self.warmup
    }
    pub fn total(&self) -> usize {
        self.total
    }

    /// one full play-through from a clean slate.
    /// tallies are reset first, so replaying never accumulates.
    pub fn play<R>(&mut self, rng: &mut R) -> Result<(), Error>
    where
        R: RandomSource,
    {
        self.p1.reset_tally();
        self.p2.reset_tally();
        self.p1.explore();
        self.p2.explore();
        for _ in 0..self.warmup {
            self.play_round(rng)?;
        }
        log::debug!("{:<32}{:<32}", "finished warm-up rounds", self.warmup);
        self.p1.respond();
        self.p2.respond();
        for _ in self.warmup..self.total {
            self.play_round(rng)?;
        }
        log::debug!("{:<32}{:<32}", "finished play-through", self.total);
        Ok(())
    }

    /// simultaneous moves: both players commit before either observes.
    /// p1 chooses, then p2 chooses, then p1 records, then p2 records.
    pub fn play_round<R>(&mut self, rng: &mut R) -> Result<(), Error>
    where
        R: RandomSource,
    {
        let a = self.p1.select_action(rng);
        let b = self.p2.select_action(rng);
        self.p1.record_opponent_action(&b)?;
        self.p2.record_opponent_action(&a)?;
        Ok(())
    }
}
