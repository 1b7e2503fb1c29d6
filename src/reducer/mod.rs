mod decompose;
mod rules;

use tracing::{debug, trace};

use crate::formula::{ClauseSet, Variable};

pub use self::rules::Rule;

pub const DEFAULT_DECOMPOSITION_LIMIT: usize = 16;

#[derive(Clone, Debug)]
pub struct ReducerConfig {
    pub decomposition: bool,
    /// The search visits `2^n` subsets of `n` clauses.
    pub decomposition_limit: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            decomposition: false,
            decomposition_limit: DEFAULT_DECOMPOSITION_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleStats {
    pub firings: usize,
    pub removed: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub passes: usize,
    pub lone_variable: RuleStats,
    pub short_clause: RuleStats,
    pub duplicate_clause: RuleStats,
    pub decomposition: RuleStats,
}

impl Stats {
    fn record(&mut self, rule: Rule, removed: usize) {
        let entry = match rule {
            Rule::LoneVariable => &mut self.lone_variable,
            Rule::ShortClause => &mut self.short_clause,
            Rule::DuplicateClause => &mut self.duplicate_clause,
            Rule::Decomposition => &mut self.decomposition,
        };
        entry.firings += 1;
        entry.removed += removed;
    }

    pub fn firings(&self) -> usize {
        self.rules().map(|stats| stats.firings).sum()
    }

    pub fn removed(&self) -> usize {
        self.rules().map(|stats| stats.removed).sum()
    }

    pub fn changed(&self) -> bool {
        self.firings() > 0
    }

    fn rules(&self) -> impl Iterator<Item = &RuleStats> {
        [
            &self.lone_variable,
            &self.short_clause,
            &self.duplicate_clause,
            &self.decomposition,
        ]
        .into_iter()
    }
}

/// Applies rewrite rules to a clause set until none of them fires.
#[derive(Clone, Debug)]
pub struct Reducer {
    config: ReducerConfig,
    rules: Vec<Rule>,
}

impl Reducer {
    pub fn new(config: ReducerConfig) -> Self {
        let mut rules = Rule::DEFAULT.to_vec();
        if config.decomposition {
            rules.push(Rule::Decomposition);
        }
        Self { config, rules }
    }

    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn reduce<V: Variable>(&self, clauses: &mut ClauseSet<V>) -> bool {
        self.reduce_with_stats(clauses).changed()
    }

    /// Runs the rules in priority order. Whenever one fires, the scan starts
    /// over from the first rule; a pass in which nothing fires ends the run.
    ///
    /// Every firing removes at least one clause, so there are at most as many
    /// firings as initial clauses.
    pub fn reduce_with_stats<V: Variable>(&self, clauses: &mut ClauseSet<V>) -> Stats {
        let mut stats = Stats::default();

        'pass: loop {
            stats.passes += 1;
            trace!("pass {} over {} clauses", stats.passes, clauses.len());

            for &rule in &self.rules {
                if let Some(removed) = rule.apply(self, clauses) {
                    stats.record(rule, removed);
                    continue 'pass;
                }
            }
            break;
        }

        debug!(
            "reached fixed point after {} firings, {} clauses left",
            stats.firings(),
            clauses.len()
        );
        stats
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new(ReducerConfig::default())
    }
}

pub fn reduce<V: Variable>(clauses: &mut ClauseSet<V>, enable_decomposition: bool) -> bool {
    let config = ReducerConfig {
        decomposition: enable_decomposition,
        ..Default::default()
    };
    Reducer::new(config).reduce(clauses)
}

#[cfg(test)]
mod tests {
    use crate::{
        assignment::Assignment,
        formula::{Clause, ClauseSet, Literal},
    };

    use super::{reduce, Reducer, ReducerConfig, Rule, RuleStats};

    fn clause(lits: [&'static str; 3]) -> Clause<&'static str> {
        let [a, b, c] = lits.map(|lit| match lit.strip_prefix('-') {
            Some(var) => Literal::negative(var),
            None => Literal::new(lit),
        });
        Clause::new(a, b, c)
    }

    #[test]
    fn rule_order() {
        assert_eq!(
            Reducer::default().rules(),
            &[Rule::LoneVariable, Rule::ShortClause, Rule::DuplicateClause]
        );

        let reducer = Reducer::new(ReducerConfig {
            decomposition: true,
            ..Default::default()
        });
        assert_eq!(reducer.rules().last(), Some(&Rule::Decomposition));
    }

    #[test]
    fn duplicates_collapse() {
        // two copies of (a OR b OR c) next to (-a OR -b OR -c)
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["a", "b", "c"]),
            clause(["-a", "-b", "-c"]),
        ]);

        assert!(reduce(&mut clauses, false));
        assert_eq!(
            clauses.clauses(),
            &[clause(["-a", "-b", "-c"]), clause(["a", "b", "c"])]
        );

        assert!(!reduce(&mut clauses, false));
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn lone_variable() {
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["a", "-b", "-c"]),
            clause(["-b", "c", "d"]),
            clause(["b", "-c", "-d"]),
            clause(["b", "-c", "d"]),
            clause(["-b", "c", "-d"]),
        ]);

        assert!(reduce(&mut clauses, false));
        assert_eq!(clauses.len(), 4);
        assert!(clauses.clauses_containing(&"a").is_empty());
    }

    #[test]
    fn short_clause() {
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "a", "b"]),
            clause(["a", "b", "c"]),
            clause(["-a", "-b", "-c"]),
        ]);

        assert!(reduce(&mut clauses, false));
        assert_eq!(
            clauses.clauses(),
            &[clause(["a", "b", "c"]), clause(["-a", "-b", "-c"])]
        );
    }

    #[test]
    fn cascade() {
        // removing the lone d makes a lone, which empties the set
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["-a", "-b", "d"]),
            clause(["a", "-b", "-c"]),
            clause(["a", "b", "-c"]),
        ]);

        let stats = Reducer::default().reduce_with_stats(&mut clauses);
        assert!(clauses.is_empty());
        assert_eq!(
            stats.lone_variable,
            RuleStats {
                firings: 2,
                removed: 4
            }
        );
        assert_eq!(stats.removed(), 4);
        assert_eq!(stats.passes, 3);
    }

    #[test]
    fn unchanged() {
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["-a", "-b", "-c"]),
        ]);

        let stats = Reducer::default().reduce_with_stats(&mut clauses);
        assert!(!stats.changed());
        assert_eq!(stats.passes, 1);
        assert_eq!(clauses.len(), 2);

        let mut empty = ClauseSet::<&str>::default();
        assert!(!reduce(&mut empty, true));
    }

    #[test]
    fn decomposition_agrees_with_default_rules() {
        let input = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["c", "b", "a"]),
            clause(["-a", "-b", "-c"]),
            clause(["d", "e", "f"]),
            clause(["-d", "-e", "-f"]),
            clause(["d", "d", "e"]),
        ]);

        let mut plain = input.clone();
        let mut decomposed = input;
        assert!(reduce(&mut plain, false));
        assert!(reduce(&mut decomposed, true));
        assert_eq!(plain.clauses(), decomposed.clauses());
    }

    #[test]
    fn reduced_set_stays_checkable() {
        let mut clauses = ClauseSet::new(vec![
            clause(["a", "b", "c"]),
            clause(["-a", "-b", "-c"]),
            clause(["-a", "-b", "-c"]),
        ]);
        reduce(&mut clauses, false);

        let assignment = Assignment::new(clauses.variables());
        assert!(clauses.valid(&assignment).is_ok());
        assert!(!clauses.valid(&assignment).unwrap());
    }
}
