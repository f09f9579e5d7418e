use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnagramError {
    /// Tried to take away letters that the pool does not have.
    #[error("cannot subtract letters that are not a subset of the pool")]
    NotSubset,

    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown search strategy {0:?} (expected \"trie\" or \"combination\")")]
    UnknownStrategy(String),

    #[error("invalid {what} bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds {
        what: &'static str,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, AnagramError>;
