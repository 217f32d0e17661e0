//! Error types for the minimizer.
//!
//! Recoverable conditions (bad user input, an oversized exact-cover search, an
//! incomplete cover) are reported through [`Error`]. Broken internal
//! preconditions, such as combining cubes of different widths, panic instead.

use std::fmt;

use crate::types::Minterm;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The main error type of the minimizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A minterm or don't-care value violates an input constraint.
    #[error("invalid input value {value}: {violation}")]
    InvalidInput {
        /// The offending value, as supplied by the caller
        value: i64,
        /// The violated constraint
        violation: InputViolation,
    },

    /// The requested number of variables is not supported.
    #[error("width {width} exceeds the maximum supported width {max}")]
    WidthTooLarge {
        /// The requested width
        width: u32,
        /// The largest supported width
        max: u32,
    },

    /// A textual cube pattern contains a character other than `0`, `1` or `-`.
    #[error("invalid cube pattern {pattern:?}: unexpected character at position {position}")]
    InvalidPattern {
        /// The pattern that failed to parse
        pattern: String,
        /// Character position of the first offending character
        position: usize,
    },

    /// Petrick's method would have to enumerate too many candidate subsets.
    #[error("Petrick's method over {implicants} implicants exceeds the limit of {limit}")]
    SearchTooLarge {
        /// Number of candidate implicants left after reduction
        implicants: usize,
        /// The configured limit
        limit: usize,
    },

    /// The chosen implicants leave some required minterms uncovered.
    #[error("incomplete cover: minterms {uncovered:?} are not covered by the chosen implicants")]
    IncompleteCover {
        /// Required minterms not covered by any chosen implicant, ascending
        uncovered: Vec<Minterm>,
    },
}

/// The constraint violated by an invalid input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputViolation {
    /// The value is below zero.
    Negative,
    /// The value does not fit into the given number of variables.
    OutOfRange {
        /// Number of variables of the function
        width: u32,
    },
    /// The value is listed both as a minterm and as a don't-care.
    OverlapsDontCare,
}

impl fmt::Display for InputViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputViolation::Negative => write!(f, "negative"),
            InputViolation::OutOfRange { width } => {
                write!(f, "out of range for {} variables (must be below 2^{})", width, width)
            }
            InputViolation::OverlapsDontCare => write!(f, "overlaps don't-care set"),
        }
    }
}
