use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid score {input:?}: {source}")]
    InvalidScore {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Score {input:?} does not fit in a 64-bit integer")]
    ScoreOutOfRange { input: String },

    #[error("Sort write target {index} is out of bounds for length {len}")]
    SortOutOfBounds { index: usize, len: usize },

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
