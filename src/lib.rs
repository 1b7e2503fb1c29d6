pub mod assignment;
pub mod error;
pub mod formula;
pub mod generate;
pub mod io;
pub mod reducer;

pub use assignment::Assignment;
pub use error::{Error, Result};
pub use formula::{Clause, ClauseSet, Literal, Variable};
pub use reducer::{reduce, Reducer, ReducerConfig, Rule, Stats};
