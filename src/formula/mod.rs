mod clause;
mod clause_set;
mod literal;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

pub use self::{
    clause::Clause,
    clause_set::{power_set, ClauseSet},
    literal::Literal,
};

/// Anything usable as a Boolean variable name.
pub trait Variable: Clone + Eq + Hash + Display + Debug {}

impl<T: Clone + Eq + Hash + Display + Debug> Variable for T {}

/// Pushes `var` unless already present, keeping first-seen order.
fn push_unique<V: Variable>(vars: &mut Vec<V>, var: &V) {
    if !vars.contains(var) {
        vars.push(var.clone());
    }
}
