//! Petrick's method: exact minimum-cost cover of the remaining minterms.
//!
//! Each remaining minterm yields a clause "one of the NEPIs covering me is
//! chosen"; a set of NEPIs is a cover iff it satisfies the product of all
//! these clauses. Candidate sets are enumerated as bit masks over the
//! candidate NEPIs, so the search is exponential in their number and guarded
//! by [`Config::max_petrick_implicants`].
//!
//! # Determinism
//!
//! Candidates are indexed in canonical order (see [`Cube::cmp_canonical`]) and
//! masks are visited in ascending numeric order. Only a strictly cheaper cover
//! replaces the current best, so among several minimum-cost covers the one
//! with the numerically smallest mask is selected.

use log::debug;

use crate::config::Config;
use crate::cost::CostFunction;
use crate::cube::Cube;
use crate::error::{Error, Result};
use crate::reduce::CoverState;

/// A minimum-cost choice of NEPIs covering all remaining minterms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The chosen implicants, in canonical order
    pub cubes: Vec<Cube>,
    /// Sum of the costs of the chosen implicants
    pub cost: u64,
    /// The chosen candidates as a bit mask over the canonical candidate order
    pub mask: u64,
}

/// NEPIs that cover at least one remaining minterm, in canonical order.
pub fn candidates(state: &CoverState, config: &Config) -> Vec<Cube> {
    let mut candidates: Vec<Cube> = state
        .nepis
        .iter()
        .filter(|c| c.covers_any(&state.minterms))
        .cloned()
        .collect();
    candidates.sort_by(|a, b| a.cmp_canonical(b, config.tie_break));
    candidates
}

/// Finds the minimum-cost set of NEPIs covering every remaining minterm of `state`.
///
/// Returns `Ok(None)` if no such set exists, which only happens when some
/// remaining minterm is covered by no NEPI at all.
pub fn petrick(state: &CoverState, cost: &dyn CostFunction, config: &Config) -> Result<Option<Selection>> {
    let candidates = candidates(state, config);
    let k = candidates.len();
    let limit = config.max_petrick_implicants.min(Config::PETRICK_HARD_LIMIT);
    if k > limit {
        return Err(Error::SearchTooLarge { implicants: k, limit });
    }

    // One clause per minterm: the candidates covering it.
    let clauses: Vec<u64> = state
        .minterms
        .iter()
        .map(|&t| {
            candidates
                .iter()
                .enumerate()
                .filter(|(_, c)| c.contains(t))
                .fold(0u64, |mask, (i, _)| mask | 1 << i)
        })
        .collect();
    let costs: Vec<u64> = candidates.iter().map(|c| cost.cost(c)).collect();
    debug!(
        "Petrick: {} candidates, {} clauses, {} subsets",
        k,
        clauses.len(),
        1u64 << k
    );

    let mut best: Option<(u64, u64)> = None;
    for mask in 0..1u64 << k {
        if !clauses.iter().all(|&clause| clause & mask != 0) {
            continue;
        }
        let total: u64 = (0..k).filter(|&i| mask >> i & 1 == 1).map(|i| costs[i]).sum();
        if best.is_none_or(|(_, best_cost)| total < best_cost) {
            best = Some((mask, total));
        }
    }

    Ok(best.map(|(mask, total)| {
        let cubes: Vec<Cube> = candidates
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| mask >> i & 1 == 1)
            .map(|(_, c)| c)
            .collect();
        debug!("Petrick: selected mask {:#b} with cost {}", mask, total);
        Selection {
            cubes,
            cost: total,
            mask,
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;
    use crate::config::TieBreak;
    use crate::cost::CostModel;
    use crate::types::Minterm;

    fn cubes(patterns: &[&str]) -> BTreeSet<Cube> {
        patterns.iter().map(|p| Cube::from_pattern(p).unwrap()).collect()
    }

    fn set(terms: impl IntoIterator<Item = Minterm>) -> BTreeSet<Minterm> {
        terms.into_iter().collect()
    }

    fn names(selection: &Selection) -> Vec<String> {
        selection.cubes.iter().map(|c| c.to_string()).collect()
    }

    fn cyclic() -> CoverState {
        CoverState::new(
            cubes(&["00-", "0-0", "-01", "-10", "1-1", "11-"]),
            set([0, 1, 2, 5, 6, 7]),
        )
    }

    #[test]
    fn test_candidates_order() {
        let state = cyclic();
        let order: Vec<String> = candidates(&state, &Config::default()).iter().map(|c| c.to_string()).collect();
        assert_eq!(order, vec!["00-", "0-0", "11-", "1-1", "-01", "-10"]);
    }

    #[test]
    fn test_cyclic_free_last() {
        let config = Config::default();
        let selection = petrick(&cyclic(), &config.cost, &config).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["0-0", "11-", "-01"]);
        assert_eq!(selection.cost, 9);
        assert_eq!(selection.mask, 0b010110);
    }

    #[test]
    fn test_cyclic_free_between() {
        let config = Config {
            tie_break: TieBreak::FreeBetween,
            ..Config::default()
        };
        let selection = petrick(&cyclic(), &config.cost, &config).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["00-", "-10", "1-1"]);
        assert_eq!(selection.cost, 9);
    }

    #[test]
    fn test_prefers_cheaper_cover() {
        // Either 0-- alone or the pair 000, 01- covers {0, 2, 3}
        let state = CoverState::new(cubes(&["0--", "000", "01-"]), set([0, 2, 3]));
        let config = Config::default();
        let selection = petrick(&state, &config.cost, &config).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["0--"]);
        assert_eq!(selection.cost, 2);

        // Make terms expensive and literals free: still one term wins
        let heavy = CostModel::new(0, 10);
        let selection = petrick(&state, &heavy, &config).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["0--"]);
        assert_eq!(selection.cost, 10);
    }

    #[test]
    fn test_custom_cost_function() {
        // Penalize 0-- so that the two smaller cubes win
        let state = CoverState::new(cubes(&["0--", "000", "01-"]), set([0, 2, 3]));
        let cost = |c: &Cube| -> u64 { if c.len() == 4 { 100 } else { 1 } };
        let selection = petrick(&state, &cost, &Config::default()).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["000", "01-"]);
        assert_eq!(selection.cost, 2);
    }

    #[test]
    fn test_irrelevant_nepis_are_not_candidates() {
        let state = CoverState::new(cubes(&["00-", "11-"]), set([0]));
        let config = Config::default();
        assert_eq!(candidates(&state, &config).len(), 1);
        let selection = petrick(&state, &config.cost, &config).unwrap().unwrap();
        assert_eq!(names(&selection), vec!["00-"]);
    }

    #[test]
    fn test_nothing_left() {
        let state = CoverState::new(cubes(&["00-"]), set([]));
        let config = Config::default();
        let selection = petrick(&state, &config.cost, &config).unwrap().unwrap();
        assert!(selection.cubes.is_empty());
        assert_eq!(selection.cost, 0);
    }

    #[test]
    fn test_infeasible() {
        let state = CoverState::new(cubes(&["00-"]), set([0, 7]));
        let config = Config::default();
        assert_eq!(petrick(&state, &config.cost, &config).unwrap(), None);
    }

    #[test]
    fn test_search_limit() {
        let config = Config {
            max_petrick_implicants: 4,
            ..Config::default()
        };
        assert_eq!(
            petrick(&cyclic(), &config.cost, &config),
            Err(Error::SearchTooLarge { implicants: 6, limit: 4 })
        );
    }
}
