//! Minimizer configuration.
//!
//! All policy knobs live in one [`Config`] value which is passed by reference
//! through every stage of the pipeline. Use `Config::default()` for the
//! standard settings and struct update syntax to change individual fields.
//!
//! ```
//! use qm_rs::config::{ColumnRule, Config};
//!
//! let config = Config {
//!     petrick_only: true,
//!     column_rule: ColumnRule::Dominating,
//!     ..Config::default()
//! };
//! assert!(config.petrick_only);
//! ```

use crate::cost::CostModel;

/// How free bits rank against fixed bits in the canonical cube order.
///
/// The canonical order is only used for deterministic output and tie-breaks,
/// never for the correctness of the cover.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TieBreak {
    /// Order `0 < 1 < -`: a free bit ranks after both fixed values.
    #[default]
    FreeLast,
    /// Order `0 < - < 1`: a free bit ranks between the fixed values.
    FreeBetween,
}

/// Which minterm column dominance removes.
///
/// For two remaining minterms `t` and `t'` let `covering(t)` be the set of
/// non-essential implicants covering `t`, and suppose `covering(t) ⊆ covering(t')`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ColumnRule {
    /// Remove `t`, the minterm whose covering set is contained in another one.
    ///
    /// Identical columns are all removed. This can drop a minterm which no
    /// later stage covers; the minimizer then reports
    /// [`Error::IncompleteCover`](crate::error::Error::IncompleteCover).
    #[default]
    Subsumed,
    /// Remove `t'`, the dominating column (the textbook rule).
    ///
    /// Among identical columns only the smallest minterm is kept.
    Dominating,
}

/// Configuration of the minimization pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Weights of the cost function (default: 1 per literal, 1 per product term)
    pub cost: CostModel,
    /// Skip dominance reduction and go straight to Petrick's method (default: false)
    pub petrick_only: bool,
    /// Canonical ordering policy for tie-breaks and output (default: `FreeLast`)
    pub tie_break: TieBreak,
    /// Direction of column dominance (default: `Subsumed`)
    pub column_rule: ColumnRule,
    /// Largest number of candidate implicants Petrick's method may enumerate (default: 24, at most 63)
    pub max_petrick_implicants: usize,
}

impl Config {
    /// Upper bound for [`Config::max_petrick_implicants`]: candidate subsets are `u64` bit masks.
    pub const PETRICK_HARD_LIMIT: usize = 63;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cost: CostModel::default(),
            petrick_only: false,
            tie_break: TieBreak::default(),
            column_rule: ColumnRule::default(),
            max_petrick_implicants: 24,
        }
    }
}
