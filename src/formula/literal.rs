use std::{fmt, ops::Not};

use crate::{assignment::Assignment, error::Result};

use super::Variable;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal<V> {
    variable: V,
    positive: bool,
}

impl<V: Variable> Literal<V> {
    pub fn new(variable: V) -> Self {
        Self::with_polarity(variable, true)
    }

    pub fn negative(variable: V) -> Self {
        Self::with_polarity(variable, false)
    }

    pub fn with_polarity(variable: V, positive: bool) -> Self {
        Self { variable, positive }
    }

    pub fn variable(&self) -> &V {
        &self.variable
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    pub fn negate(&self) -> Self {
        Self::with_polarity(self.variable.clone(), !self.positive)
    }

    /// Fails if `assignment` has no value for the variable.
    pub fn value(&self, assignment: &Assignment<V>) -> Result<bool> {
        Ok(self.positive == assignment.get(&self.variable)?)
    }
}

impl<V: Variable> Not for Literal<V> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::with_polarity(self.variable, !self.positive)
    }
}

impl<V: Variable> Not for &Literal<V> {
    type Output = Literal<V>;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<V: Variable> fmt::Display for Literal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.variable)
        } else {
            write!(f, "-{}", self.variable)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{assignment::Assignment, error::Error};

    use super::Literal;

    #[test]
    fn negation() {
        let a = Literal::new("a");
        let not_a = !&a;

        assert!(a.is_positive());
        assert!(not_a.is_negative());
        assert_eq!(not_a.variable(), &"a");
        assert_eq!(!not_a, a);
        assert_eq!(a.negate(), Literal::negative("a"));
    }

    #[test]
    fn equality_and_hash() {
        let set: HashSet<Literal<&str>> = [
            Literal::new("a"),
            Literal::new("a"),
            Literal::negative("a"),
            Literal::new("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
        assert_ne!(Literal::new(1), Literal::new(2));
    }

    #[test]
    fn value() {
        let mut assignment = Assignment::new(["a", "b"]);
        assignment.set(&"b", false).unwrap();

        assert!(Literal::new("a").value(&assignment).unwrap());
        assert!(!Literal::negative("a").value(&assignment).unwrap());
        assert!(!Literal::new("b").value(&assignment).unwrap());
        assert!(Literal::negative("b").value(&assignment).unwrap());
        assert!(matches!(
            Literal::new("c").value(&assignment),
            Err(Error::UnknownVariable(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Literal::new(3).to_string(), "3");
        assert_eq!(Literal::negative("x").to_string(), "-x");
    }
}
