use std::{collections::HashMap, ops::Index};

use crate::{
    error::{Error, Result},
    formula::Variable,
};

/// Total mapping from a fixed set of variables to truth values.
///
/// Every variable starts out `true`. Variables not supplied at construction
/// are unknown, and looking them up is an error.
#[derive(Clone, Debug)]
pub struct Assignment<V> {
    values: HashMap<V, bool>,
}

impl<V: Variable> Assignment<V> {
    pub fn new(vars: impl IntoIterator<Item = V>) -> Self {
        Self {
            values: vars.into_iter().map(|var| (var, true)).collect(),
        }
    }

    pub fn get(&self, var: &V) -> Result<bool> {
        self.values
            .get(var)
            .copied()
            .ok_or_else(|| Error::UnknownVariable(var.to_string()))
    }

    /// Only variables known at construction can be changed.
    pub fn set(&mut self, var: &V, value: bool) -> Result<()> {
        match self.values.get_mut(var) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::UnknownVariable(var.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Variable> Index<&V> for Assignment<V> {
    type Output = bool;

    /// Panics on an unknown variable, use [`Assignment::get`] to handle it.
    fn index(&self, var: &V) -> &Self::Output {
        match self.values.get(var) {
            Some(value) => value,
            None => panic!("variable {var} is not part of the assignment"),
        }
    }
}
