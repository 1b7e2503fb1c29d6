use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::formula::{Clause, ClauseSet, Literal};

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub var_count: usize,
    pub clause_count: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            var_count: 3,
            clause_count: 100,
            seed: 0,
        }
    }
}

/// Uniformly random 3-CNF over variables `1..=var_count`.
///
/// Each literal slot is drawn independently from all `2 * var_count`
/// literals, so clauses may repeat variables.
pub fn random_formula(config: &GeneratorConfig) -> ClauseSet<usize> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    if config.var_count == 0 {
        return ClauseSet::default();
    }

    let mut literal = || {
        let var = rng.random_range(1..=config.var_count);
        Literal::with_polarity(var, rng.random::<bool>())
    };

    (0..config.clause_count)
        .map(|_| Clause::new(literal(), literal(), literal()))
        .collect()
}
