use std::fmt;

use tracing::info;

use crate::formula::{ClauseSet, Variable};

use super::{decompose, Reducer};

/// A rewrite rule. Each application fires at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Drops every clause of a variable that occurs with a single polarity.
    LoneVariable,
    /// Drops a clause mentioning fewer than three distinct variables.
    ShortClause,
    /// Collapses a group of equal clauses into one.
    DuplicateClause,
    /// Reduces variable-disjoint halves of the clause set independently.
    Decomposition,
}

impl Rule {
    /// Always-on rules, in priority order.
    pub const DEFAULT: [Rule; 3] = [
        Rule::LoneVariable,
        Rule::ShortClause,
        Rule::DuplicateClause,
    ];

    /// Tries a single firing against `clauses`.
    /// Returns the number of clauses removed if the rule fired.
    pub fn apply<V: Variable>(
        self,
        reducer: &Reducer,
        clauses: &mut ClauseSet<V>,
    ) -> Option<usize> {
        let removed = match self {
            Rule::LoneVariable => lone_variable(clauses),
            Rule::ShortClause => short_clause(clauses),
            Rule::DuplicateClause => duplicate_clause(clauses),
            Rule::Decomposition => decompose::split(reducer, clauses),
        }?;
        info!("removed {} clause(s) by the {} rule", removed, self);
        Some(removed)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::LoneVariable => "lone variable",
            Rule::ShortClause => "short clause",
            Rule::DuplicateClause => "duplicate clause",
            Rule::Decomposition => "decomposition",
        };
        f.write_str(name)
    }
}

fn lone_variable<V: Variable>(clauses: &mut ClauseSet<V>) -> Option<usize> {
    let var = clauses.variables().into_iter().find(|var| {
        clauses.positive_variable_occurrences(var).is_empty()
            != clauses.negative_variable_occurrences(var).is_empty()
    })?;

    let containing = clauses.clauses_containing(&var);
    Some(clauses.remove_clauses(&containing))
}

// Not equisatisfiability preserving in general: a clause like (a OR a OR b)
// constrains the formula, yet it is dropped all the same.
fn short_clause<V: Variable>(clauses: &mut ClauseSet<V>) -> Option<usize> {
    let short = clauses
        .iter()
        .find(|clause| clause.variables().len() < 3)?
        .clone();

    clauses.remove_clause(&short);
    Some(1)
}

fn duplicate_clause<V: Variable>(clauses: &mut ClauseSet<V>) -> Option<usize> {
    let (clause, copies) = clauses.iter().find_map(|clause| {
        let copies = clauses.iter().filter(|other| *other == clause).count();
        (copies > 1).then(|| (clause.clone(), copies))
    })?;

    let removed = clauses.remove_clauses(&vec![clause.clone(); copies]);
    debug_assert_eq!(removed, copies);
    clauses.add_clause(clause);
    Some(copies - 1)
}
