use super::action::Action;
use super::error::Error;
use crate::Utility;
use std::collections::HashSet;

/// one player's payoffs, indexed by (own action, opponent action).
/// rows are own actions, columns are opponent actions; the column
/// set is also this player's view of what the opponent can do.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardTable<A, B>
where
    A: Action,
    B: Action,
{
    rows: Vec<A>,
    cols: Vec<B>,
    payoffs: Vec<Vec<Utility>>,
}

impl<A, B> RewardTable<A, B>
where
    A: Action,
    B: Action,
{
    /// `payoffs[i][j]` is the reward for playing `rows[i]` against `cols[j]`.
    pub fn new(rows: Vec<A>, cols: Vec<B>, payoffs: Vec<Vec<Utility>>) -> Result<Self, Error> {
        if rows.is_empty() || cols.is_empty() {
            return Err(Error::NoActions);
        }
        if let Some(a) = Self::duplicate(&rows) {
            return Err(Error::DuplicateAction(a.to_string()));
        }
        if let Some(b) = Self::duplicate(&cols) {
            return Err(Error::DuplicateAction(b.to_string()));
        }
        if payoffs.len() != rows.len() || payoffs.iter().any(|row| row.len() != cols.len()) {
            return Err(Error::ShapeMismatch {
                rows: rows.len(),
                cols: cols.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            payoffs,
        })
    }

    fn duplicate<X>(xs: &[X]) -> Option<&X>
    where
        X: Action,
    {
        let ref mut seen = HashSet::with_capacity(xs.len());
        xs.iter().find(|x| !seen.insert(*x))
    }

    pub fn rows(&self) -> &[A] {
        &self.rows
    }

    /// the opponent's action set, as known through payoffs.
    pub fn cols(&self) -> &[B] {
        &self.cols
    }

    /// payoffs against each opponent action, in column order.
    pub fn row(&self, action: &A) -> Option<&[Utility]> {
        self.rows
            .iter()
            .position(|a| a == action)
            .map(|i| self.payoffs[i].as_slice())
    }

    pub fn reward(&self, action: &A, opponent: &B) -> Option<Utility> {
        let j = self.cols.iter().position(|b| b == opponent)?;
        self.row(action).map(|row| row[j])
    }
}
