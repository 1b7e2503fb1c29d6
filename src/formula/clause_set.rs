use std::{fmt, slice};

use crate::{assignment::Assignment, error::Result};

use super::{push_unique, Clause, Literal, Variable};

/// Conjunction of clauses, kept in insertion order.
///
/// The container does not enforce uniqueness. Clauses are never modified in
/// place, only added, removed or swapped out wholesale.
#[derive(Clone, Debug)]
pub struct ClauseSet<V> {
    clauses: Vec<Clause<V>>,
}

impl<V: Variable> ClauseSet<V> {
    pub fn new(clauses: Vec<Clause<V>>) -> Self {
        Self { clauses }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Clause<V>> {
        self.clauses.iter()
    }

    pub fn clauses(&self) -> &[Clause<V>] {
        &self.clauses
    }

    pub fn into_clauses(self) -> Vec<Clause<V>> {
        self.clauses
    }

    /// Distinct variables over all clauses, in first-seen order.
    pub fn variables(&self) -> Vec<V> {
        let mut vars = vec![];
        for lit in self.clauses.iter().flat_map(|clause| clause.literals()) {
            push_unique(&mut vars, lit.variable());
        }
        vars
    }

    pub fn variable_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.variable_occurrences(var))
            .collect()
    }

    pub fn positive_variable_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.positive_occurrences(var))
            .collect()
    }

    pub fn negative_variable_occurrences(&self, var: &V) -> Vec<&Literal<V>> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.negative_occurrences(var))
            .collect()
    }

    pub fn clauses_containing(&self, var: &V) -> Vec<Clause<V>> {
        self.clauses
            .iter()
            .filter(|clause| clause.contains_variable(var))
            .cloned()
            .collect()
    }

    pub fn add_clause(&mut self, clause: Clause<V>) {
        self.clauses.push(clause);
    }

    /// Removes the first clause equal to `clause`.
    pub fn remove_clause(&mut self, clause: &Clause<V>) -> bool {
        match self.clauses.iter().position(|c| c == clause) {
            Some(i) => {
                self.clauses.remove(i);
                true
            }
            None => false,
        }
    }

    /// Removes one equal clause per entry of `clauses`, returns how many were found.
    pub fn remove_clauses(&mut self, clauses: &[Clause<V>]) -> usize {
        let mut removed = 0;
        for clause in clauses {
            if self.remove_clause(clause) {
                removed += 1;
            }
        }
        removed
    }

    pub fn replace_all(&mut self, clauses: Vec<Clause<V>>) {
        self.clauses = clauses;
    }

    pub fn valid(&self, assignment: &Assignment<V>) -> Result<bool> {
        for clause in &self.clauses {
            if !clause.valid(assignment)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Every subset of the clauses, from the full set down to the empty one.
    ///
    /// There are `2^len` of them, so only call this on tiny sets.
    pub fn power_set(&self) -> Vec<Vec<Clause<V>>> {
        power_set(&self.clauses)
    }
}

/// All subsets of `items`; subsets containing `items[0]` come first.
pub fn power_set<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items.split_first() {
        None => vec![vec![]],
        Some((first, rest)) => {
            let without = power_set(rest);
            let mut res: Vec<Vec<T>> = without
                .iter()
                .map(|subset| {
                    let mut with = Vec::with_capacity(subset.len() + 1);
                    with.push(first.clone());
                    with.extend(subset.iter().cloned());
                    with
                })
                .collect();
            res.extend(without);
            res
        }
    }
}

impl<V> Default for ClauseSet<V> {
    fn default() -> Self {
        Self { clauses: vec![] }
    }
}

impl<V: Variable> FromIterator<Clause<V>> for ClauseSet<V> {
    fn from_iter<I: IntoIterator<Item = Clause<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, V: Variable> IntoIterator for &'a ClauseSet<V> {
    type Item = &'a Clause<V>;
    type IntoIter = slice::Iter<'a, Clause<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Variable> fmt::Display for ClauseSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                writeln!(f, " AND")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}
