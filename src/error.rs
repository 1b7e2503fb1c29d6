use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("clause has {found} literals, expected 3")]
    Arity { found: usize },

    #[error("variable {0} is not part of the assignment")]
    UnknownVariable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
