//! Type-safe wrappers for the input space of a Boolean function.
//!
//! A function over `n` variables is given by the input combinations
//! (minterms) it covers. Each combination is an integer in `[0, 2^n)`,
//! most-significant bit first when printed.
use std::fmt;

/// An input combination of the Boolean variables, encoded as an integer.
pub type Minterm = u64;

/// Number of Boolean variables of a function (the bit width `n`).
///
/// # Invariants
///
/// - `n <= MAX_WIDTH`, so every minterm and every bit mask fits into a [`Minterm`]
/// - Width 0 is valid: it has exactly one input combination, `0`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Width(u32);

impl Width {
    /// Largest supported number of variables.
    pub const MAX_WIDTH: u32 = 63;

    /// Creates a new width.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_WIDTH`.
    pub fn new(n: u32) -> Self {
        assert!(n <= Self::MAX_WIDTH, "Width must be <= {}, got {}", Self::MAX_WIDTH, n);
        Width(n)
    }

    /// Creates a width, or returns `None` if `n` exceeds [`Width::MAX_WIDTH`].
    pub fn try_new(n: u32) -> Option<Self> {
        if n <= Self::MAX_WIDTH {
            Some(Width(n))
        } else {
            None
        }
    }

    /// Returns the raw number of variables.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Mask with all `n` low bits set.
    pub fn mask(self) -> Minterm {
        (1 << self.0) - 1
    }

    /// Number of input combinations, `2^n`.
    pub fn universe_size(self) -> u64 {
        1 << self.0
    }

    /// Checks whether `term` is an input combination of this width.
    pub fn contains(self, term: Minterm) -> bool {
        term < self.universe_size()
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}
