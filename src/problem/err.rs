//! Errors raised while building or reading problem data.

/// Failure to build an [`Instance`](super::Instance) or read a pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// The instance has no tasks.
    Empty,
    /// A task weight is negative.
    NegativeWeight { index: usize, weight: i64 },
    /// The declared task count does not match the number of weights.
    LengthMismatch { declared: usize, actual: usize },
    /// The input ended before all expected tokens were read.
    UnexpectedEof { expected: &'static str },
    /// A token could not be parsed as an integer.
    InvalidToken { token: String },
    /// A worker index in a pairing lies outside `[0, N)`.
    OutOfRange { value: usize, n: usize },
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::Empty => write!(f, "instance has no tasks"),
            ProblemError::NegativeWeight { index, weight } => {
                write!(f, "task {index} has negative weight {weight}")
            }
            ProblemError::LengthMismatch { declared, actual } => {
                write!(f, "expected {declared} entries, found {actual}")
            }
            ProblemError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input while reading {expected}")
            }
            ProblemError::InvalidToken { token } => write!(f, "invalid integer token `{token}`"),
            ProblemError::OutOfRange { value, n } => {
                write!(f, "worker index {value} out of range [0, {n})")
            }
        }
    }
}

impl std::error::Error for ProblemError {}
