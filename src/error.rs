use std::io;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read integer token: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseBigIntError),
    #[error("unexpected end of input while expecting an integer")]
    UnexpectedEof,
}
