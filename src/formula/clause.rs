use std::fmt;

use crate::{
    assignment::Assignment,
    error::{Error, Result},
};

use super::{push_unique, Literal, Variable};

/// Disjunction of exactly three literals.
///
/// Literal slots may repeat a variable or even a literal. Two clauses are
/// equal iff their literal *sets* are equal, so order and repetition are
/// irrelevant.
#[derive(Clone, Debug)]
pub struct Clause<V> {
    literals: [Literal<V>; 3],
}

impl<V: Variable> Clause<V> {
    pub fn new(a: Literal<V>, b: Literal<V>, c: Literal<V>) -> Self {
        Self {
            literals: [a, b, c],
        }
    }

    pub fn literals(&self) -> &[Literal<V>; 3] {
        &self.literals
    }

    /// Distinct variables in first-seen order.
    pub fn variables(&self) -> Vec<V> {
        let mut vars = Vec::with_capacity(3);
        for lit in &self.literals {
            push_unique(&mut vars, lit.variable());
        }
        vars
    }

    pub fn contains_variable(&self, var: &V) -> bool {
        self.literals.iter().any(|lit| lit.variable() == var)
    }

    pub fn variable_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.literals
            .iter()
            .filter(|lit| lit.variable() == var)
            .collect()
    }

    pub fn positive_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.literals
            .iter()
            .filter(|lit| lit.variable() == var && lit.is_positive())
            .collect()
    }

    pub fn negative_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.literals
            .iter()
            .filter(|lit| lit.variable() == var && lit.is_negative())
            .collect()
    }

    pub fn valid(&self, assignment: &Assignment<V>) -> Result<bool> {
        for lit in &self.literals {
            if lit.value(assignment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn subset_of(&self, other: &Self) -> bool {
        self.literals
            .iter()
            .all(|lit| other.literals.contains(lit))
    }
}

impl<V: Variable> PartialEq for Clause<V> {
    fn eq(&self, other: &Self) -> bool {
        self.subset_of(other) && other.subset_of(self)
    }
}

impl<V: Variable> Eq for Clause<V> {}

impl<V: Variable> TryFrom<Vec<Literal<V>>> for Clause<V> {
    type Error = Error;

    fn try_from(literals: Vec<Literal<V>>) -> Result<Self> {
        let found = literals.len();
        let literals: [Literal<V>; 3] = literals
            .try_into()
            .map_err(|_| Error::Arity { found })?;
        Ok(Self { literals })
    }
}

impl<V: Variable> fmt::Display for Clause<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.literals;
        write!(f, "({a} OR {b} OR {c})")
    }
}
