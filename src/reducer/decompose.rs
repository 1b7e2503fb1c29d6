//! Independent-component decomposition.
//!
//! Searches all two-way partitions of the clause set for halves that share no
//! variable and reduces each half on its own. The search walks the power set
//! of the clauses, so its cost is exponential in the clause count; the
//! reducer refuses to run it above [`ReducerConfig::decomposition_limit`].
//!
//! [`ReducerConfig::decomposition_limit`]: super::ReducerConfig::decomposition_limit

use tracing::{trace, warn};

use crate::formula::{power_set, ClauseSet, Variable};

use super::Reducer;

/// Variable sets of halves already reduced during one search.
struct Explored<V>(Vec<Vec<V>>);

impl<V: Variable> Explored<V> {
    fn contains(&self, vars: &[V]) -> bool {
        self.0.iter().any(|seen| {
            seen.iter().all(|var| vars.contains(var))
                && vars.iter().all(|var| seen.contains(var))
        })
    }
}

fn partition<V: Variable>(
    clauses: &ClauseSet<V>,
    subset: &[usize],
) -> (ClauseSet<V>, ClauseSet<V>) {
    let mut inside = vec![false; clauses.len()];
    for &i in subset {
        inside[i] = true;
    }

    let mut part = ClauseSet::default();
    let mut rest = ClauseSet::default();
    for (clause, inside) in clauses.iter().zip(inside) {
        if inside {
            part.add_clause(clause.clone());
        } else {
            rest.add_clause(clause.clone());
        }
    }
    (part, rest)
}

/// Fires on the first variable-disjoint partition whose halves shrink when
/// reduced independently; the clause set becomes the two reduced halves.
pub(super) fn split<V: Variable>(reducer: &Reducer, clauses: &mut ClauseSet<V>) -> Option<usize> {
    let count = clauses.len();
    let limit = reducer.config().decomposition_limit;
    if count > limit {
        warn!("skipping decomposition of {count} clauses (limit is {limit})");
        return None;
    }

    let indices: Vec<usize> = (0..count).collect();
    let mut explored = Explored(vec![]);

    for subset in power_set(&indices) {
        if subset.is_empty() || subset.len() == count {
            continue;
        }

        let (mut part, mut rest) = partition(clauses, &subset);
        let part_vars = part.variables();
        let rest_vars = rest.variables();

        if part_vars.iter().any(|var| rest_vars.contains(var)) {
            continue;
        }
        if explored.contains(&part_vars) || explored.contains(&rest_vars) {
            continue;
        }

        trace!(
            "independent components of {} and {} clauses",
            part.len(),
            rest.len()
        );
        explored.0.push(part_vars);

        let part_changed = reducer.reduce(&mut part);
        let rest_changed = reducer.reduce(&mut rest);
        if part_changed || rest_changed {
            let mut merged = part.into_clauses();
            merged.extend(rest.into_clauses());
            clauses.replace_all(merged);
            return Some(count - clauses.len());
        }
    }

    None
}
