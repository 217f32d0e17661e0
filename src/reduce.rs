//! Dominance reduction of the prime implicant table.
//!
//! The table has one row per non-essential prime implicant (NEPI) and one
//! column per required minterm not yet covered. Two reductions shrink it:
//!
//! - **Column dominance** drops minterm columns whose covering rows relate by
//!   inclusion to those of another column. The direction is configurable, see
//!   [`ColumnRule`].
//! - **Row dominance** promotes a NEPI to the cover when it covers every
//!   remaining minterm of another NEPI at no higher cost.
//!
//! The minimizer alternates both with essential extraction until the
//! [`CoverState`] stops changing.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::config::{ColumnRule, TieBreak};
use crate::cost::CostFunction;
use crate::cube::Cube;
use crate::essential::essential_implicants;
use crate::types::Minterm;

/// Intermediate state of the covering problem.
///
/// Invariants between stages: `minterms` are the required minterms not covered
/// by any cube of `epis`, and `epis ∪ nepis` are all prime implicants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverState {
    /// Implicants chosen for the cover
    pub epis: BTreeSet<Cube>,
    /// Implicants not (yet) chosen
    pub nepis: BTreeSet<Cube>,
    /// Required minterms still to be covered
    pub minterms: BTreeSet<Minterm>,
}

impl CoverState {
    /// Starts with no chosen implicants.
    pub fn new(primes: BTreeSet<Cube>, minterms: BTreeSet<Minterm>) -> Self {
        Self {
            epis: BTreeSet::new(),
            nepis: primes,
            minterms,
        }
    }

    /// Moves `cube` from the NEPIs into the cover and drops the minterms it covers.
    pub fn promote(&mut self, cube: Cube) {
        self.nepis.remove(&cube);
        for term in cube.iter() {
            self.minterms.remove(&term);
        }
        self.epis.insert(cube);
    }

    /// Promotes every NEPI that is the sole cover of a remaining minterm.
    ///
    /// Returns the number of promoted implicants.
    pub fn extract_essentials(&mut self) -> usize {
        let essentials = essential_implicants(&self.nepis, &self.minterms);
        let count = essentials.len();
        for cube in essentials {
            self.promote(cube);
        }
        count
    }

    /// Whether every required minterm is covered.
    pub fn is_resolved(&self) -> bool {
        self.minterms.is_empty()
    }

    /// For every remaining minterm, the indices (in `nepis` order) of the NEPIs covering it.
    pub fn coverage(&self) -> BTreeMap<Minterm, BitSet> {
        let mut coverage: BTreeMap<Minterm, BitSet> = self
            .minterms
            .iter()
            .map(|&t| (t, BitSet::new(self.nepis.len())))
            .collect();
        for (i, cube) in self.nepis.iter().enumerate() {
            for term in cube.iter() {
                if let Some(rows) = coverage.get_mut(&term) {
                    rows.insert(i);
                }
            }
        }
        coverage
    }
}

/// Removes dominated minterm columns according to `rule`.
///
/// All decisions are taken on the table as it was on entry, then applied at
/// once. Returns the number of removed minterms.
pub fn column_dominance(state: &mut CoverState, rule: ColumnRule) -> usize {
    let coverage = state.coverage();

    let removed: Vec<Minterm> = coverage
        .iter()
        .filter(|&(&t, rows)| {
            let dominator = coverage.iter().find(|&(&other, other_rows)| {
                other != t
                    && match rule {
                        ColumnRule::Subsumed => rows.is_subset(other_rows),
                        ColumnRule::Dominating => {
                            other_rows.is_proper_subset(rows) || (other < t && other_rows == rows)
                        }
                    }
            });
            if let Some((other, _)) = dominator {
                trace!("column {} dropped against column {}", t, other);
            }
            dominator.is_some()
        })
        .map(|(&t, _)| t)
        .collect();

    for t in &removed {
        state.minterms.remove(t);
    }
    debug!("column dominance ({:?}) removed minterms {:?}", rule, removed);
    removed.len()
}

/// Finds the NEPIs to promote by row dominance.
///
/// For each NEPI `i` covering some remaining minterm, its dominator is the
/// first other NEPI `j` (in set order) with `i.dominated_by(j)` restricted to
/// the remaining minterms. A NEPI is promoted if it is the dominator of some
/// NEPI and is either undominated itself, or mutually dominating with its own
/// dominator and first in canonical order.
pub fn row_dominants(
    nepis: &BTreeSet<Cube>,
    minterms: &BTreeSet<Minterm>,
    cost: &dyn CostFunction,
    tie_break: TieBreak,
) -> Vec<Cube> {
    let mut dominators: BTreeMap<&Cube, &Cube> = BTreeMap::new();
    for i in nepis {
        if !i.covers_any(minterms) {
            continue;
        }
        if let Some(j) = nepis
            .iter()
            .find(|&j| j != i && i.dominated_by(j, cost, Some(minterms)))
        {
            trace!("row {} is dominated by row {}", i, j);
            dominators.insert(i, j);
        }
    }

    let dominating: BTreeSet<&Cube> = dominators.values().copied().collect();
    nepis
        .iter()
        .filter(|&i| dominating.contains(i))
        .filter(|&i| match dominators.get(i) {
            None => true,
            Some(&j) => {
                dominators.get(j) == Some(&i) && i.cmp_canonical(j, tie_break).is_lt()
            }
        })
        .cloned()
        .collect()
}

/// Repeatedly promotes row dominators until none are left or all minterms are covered.
///
/// Returns the number of promoted implicants.
pub fn row_dominance(state: &mut CoverState, cost: &dyn CostFunction, tie_break: TieBreak) -> usize {
    let mut promoted = 0;
    let mut dominants = row_dominants(&state.nepis, &state.minterms, cost, tie_break);
    while !dominants.is_empty() {
        for cube in dominants {
            debug!("row dominance promotes {}", cube);
            state.promote(cube);
            promoted += 1;
        }
        if state.is_resolved() {
            break;
        }
        dominants = row_dominants(&state.nepis, &state.minterms, cost, tie_break);
    }
    promoted
}
