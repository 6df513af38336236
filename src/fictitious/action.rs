use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// marker trait for anything a player can do.
/// labels only need to be comparable, hashable, and printable;
/// the two players of a game may use entirely different types.
pub trait Action: Clone + Eq + Hash + Debug + Display {}

impl<T> Action for T where T: Clone + Eq + Hash + Debug + Display {}
