use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("negative input: {0}")]
    NegativeInput(i64),

    #[error("mismatch at n = {n}: fast = {fast}, reference = {reference}")]
    Mismatch { n: i64, fast: i128, reference: i128 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
