//! The minimization pipeline.
//!
//! [`Minimizer`] sequences the stages into a terminating pipeline:
//!
//! 1. find all prime implicants;
//! 2. promote essential prime implicants and drop the minterms they cover;
//! 3. apply column dominance;
//! 4. apply row dominance;
//! 5. run Petrick's method on whatever is left.
//!
//! Stages 2–4 repeat until the state no longer changes. With
//! [`Config::petrick_only`] stages 3 and 4 are skipped entirely.
//!
//! # Example
//!
//! ```
//! use qm_rs::minimize::{Minimizer, Problem};
//!
//! // f(a, b, c) = Σm(0, 1, 2, 3) = a'
//! let problem = Problem::new(3, [0, 1, 2, 3], []).unwrap();
//! let solution = Minimizer::default().minimize(&problem).unwrap();
//! assert_eq!(solution.to_string(), "EPIs=[0--], NEPIs=[]");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::config::{Config, TieBreak};
use crate::cost::CostFunction;
use crate::cube::Cube;
use crate::error::{Error, InputViolation, Result};
use crate::petrick::petrick;
use crate::primes::prime_implicants;
use crate::reduce::{column_dominance, row_dominance, CoverState};
use crate::trace::{NoTrace, Snapshot, Stage, TraceObserver};
use crate::types::{Minterm, Width};

/// A validated minimization problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    width: Width,
    minterms: BTreeSet<Minterm>,
    dont_cares: BTreeSet<Minterm>,
}

impl Problem {
    /// Validates the input of a minimization.
    ///
    /// Values are checked minterms first, then don't-cares, each in the given
    /// order; the first violation is reported. Duplicates are merged.
    pub fn new(
        width: u32,
        minterms: impl IntoIterator<Item = i64>,
        dont_cares: impl IntoIterator<Item = i64>,
    ) -> Result<Self> {
        let width = Width::try_new(width).ok_or(Error::WidthTooLarge {
            width,
            max: Width::MAX_WIDTH,
        })?;

        let check = |value: i64| -> Result<Minterm> {
            if value < 0 {
                return Err(Error::InvalidInput {
                    value,
                    violation: InputViolation::Negative,
                });
            }
            let term = value as Minterm;
            if !width.contains(term) {
                return Err(Error::InvalidInput {
                    value,
                    violation: InputViolation::OutOfRange { width: width.bits() },
                });
            }
            Ok(term)
        };

        let minterms = minterms.into_iter().map(&check).collect::<Result<BTreeSet<_>>>()?;
        let mut checked_dont_cares = BTreeSet::new();
        for value in dont_cares {
            let term = check(value)?;
            if minterms.contains(&term) {
                return Err(Error::InvalidInput {
                    value,
                    violation: InputViolation::OverlapsDontCare,
                });
            }
            checked_dont_cares.insert(term);
        }

        Ok(Self {
            width,
            minterms,
            dont_cares: checked_dont_cares,
        })
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn minterms(&self) -> &BTreeSet<Minterm> {
        &self.minterms
    }

    pub fn dont_cares(&self) -> &BTreeSet<Minterm> {
        &self.dont_cares
    }
}

/// Result of a minimization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The chosen cover: essential implicants plus those selected by reduction and Petrick's method
    pub epis: BTreeSet<Cube>,
    /// Prime implicants left out of the cover
    pub nepis: BTreeSet<Cube>,
}

impl Solution {
    /// Iterates over the cubes of the cover.
    pub fn cover(&self) -> impl Iterator<Item = &Cube> {
        self.epis.iter()
    }

    /// Whether some cube of the cover contains `term`.
    pub fn covers(&self, term: Minterm) -> bool {
        self.epis.iter().any(|c| c.contains(term))
    }

    /// Total cost of the cover under `cost`.
    pub fn total_cost(&self, cost: &dyn CostFunction) -> u64 {
        self.epis.iter().map(|c| cost.cost(c)).sum()
    }

    /// The cover in canonical order.
    pub fn sorted_epis(&self, tie_break: TieBreak) -> Vec<&Cube> {
        sorted(&self.epis, tie_break)
    }

    /// The left-out implicants in canonical order.
    pub fn sorted_nepis(&self, tie_break: TieBreak) -> Vec<&Cube> {
        sorted(&self.nepis, tie_break)
    }

    /// Renders the result line with cubes in canonical order under `tie_break`.
    pub fn render(&self, tie_break: TieBreak) -> String {
        let join = |cubes: Vec<&Cube>| cubes.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
        format!(
            "EPIs=[{}], NEPIs=[{}]",
            join(self.sorted_epis(tie_break)),
            join(self.sorted_nepis(tie_break))
        )
    }
}

fn sorted(cubes: &BTreeSet<Cube>, tie_break: TieBreak) -> Vec<&Cube> {
    let mut cubes: Vec<&Cube> = cubes.iter().collect();
    cubes.sort_by(|a, b| a.cmp_canonical(b, tie_break));
    cubes
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(TieBreak::default()))
    }
}

/// Runs the minimization pipeline under a fixed [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: Config,
}

impl Minimizer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `problem` with the configured cost model.
    pub fn minimize(&self, problem: &Problem) -> Result<Solution> {
        self.minimize_with(problem, &self.config.cost, &mut NoTrace)
    }

    /// Minimizes `problem`, reporting every stage to `observer`.
    pub fn minimize_traced(&self, problem: &Problem, observer: &mut dyn TraceObserver) -> Result<Solution> {
        self.minimize_with(problem, &self.config.cost, observer)
    }

    /// Minimizes `problem` under an arbitrary cost function.
    ///
    /// Fails with [`Error::IncompleteCover`] if the resulting cover misses a
    /// required minterm, and with [`Error::SearchTooLarge`] if Petrick's
    /// method would exceed the configured candidate limit.
    pub fn minimize_with(
        &self,
        problem: &Problem,
        cost: &dyn CostFunction,
        observer: &mut dyn TraceObserver,
    ) -> Result<Solution> {
        let config = &self.config;
        debug!(
            "minimize: width={}, minterms={:?}, dont_cares={:?}",
            problem.width, problem.minterms, problem.dont_cares
        );

        let pis = prime_implicants(problem.width, &problem.minterms, &problem.dont_cares);
        let mut state = CoverState::new(pis.clone(), problem.minterms.clone());
        emit(observer, Stage::PrimeImplicants, &pis, &state);

        loop {
            state.extract_essentials();
            emit(observer, Stage::Essentials, &pis, &state);

            if state.is_resolved() || state.nepis.is_empty() || config.petrick_only {
                break;
            }

            let before = state.clone();

            column_dominance(&mut state, config.column_rule);
            emit(observer, Stage::ColumnDominance, &pis, &state);

            row_dominance(&mut state, cost, config.tie_break);
            emit(observer, Stage::RowDominance, &pis, &state);

            if state == before {
                debug!("reduction reached a fixpoint");
                break;
            }
        }

        if !state.minterms.is_empty() && !state.nepis.is_empty() {
            if let Some(selection) = petrick(&state, cost, config)? {
                for cube in selection.cubes {
                    state.promote(cube);
                }
                state.minterms.clear();
            }
            emit(observer, Stage::Petrick, &pis, &state);
        }

        let uncovered: Vec<Minterm> = problem
            .minterms
            .iter()
            .copied()
            .filter(|&t| !state.epis.iter().any(|c| c.contains(t)))
            .collect();
        if !uncovered.is_empty() {
            debug!("cover misses minterms {:?}", uncovered);
            return Err(Error::IncompleteCover { uncovered });
        }

        Ok(Solution {
            epis: state.epis,
            nepis: state.nepis,
        })
    }
}

fn emit(observer: &mut dyn TraceObserver, stage: Stage, pis: &BTreeSet<Cube>, state: &CoverState) {
    let snapshot = Snapshot {
        stage,
        pis,
        epis: &state.epis,
        nepis: &state.nepis,
        minterms: &state.minterms,
    };
    debug!("{}", snapshot.render(TieBreak::default()));
    observer.observe(&snapshot);
}

/// Minimizes the function of `width` variables given by `minterms` and
/// `dont_cares` with the default configuration.
pub fn minimize(
    width: u32,
    minterms: impl IntoIterator<Item = i64>,
    dont_cares: impl IntoIterator<Item = i64>,
) -> Result<Solution> {
    let problem = Problem::new(width, minterms, dont_cares)?;
    Minimizer::default().minimize(&problem)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::config::ColumnRule;

    fn patterns<'a>(cubes: impl IntoIterator<Item = &'a Cube>) -> Vec<String> {
        cubes.into_iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_problem_validation() {
        assert_eq!(
            Problem::new(3, [0, 8], []),
            Err(Error::InvalidInput {
                value: 8,
                violation: InputViolation::OutOfRange { width: 3 }
            })
        );
        assert_eq!(
            Problem::new(3, [0, -2], []),
            Err(Error::InvalidInput {
                value: -2,
                violation: InputViolation::Negative
            })
        );
        assert_eq!(
            Problem::new(3, [0, 1], [5, 1]),
            Err(Error::InvalidInput {
                value: 1,
                violation: InputViolation::OverlapsDontCare
            })
        );
        assert_eq!(
            Problem::new(64, [0], []),
            Err(Error::WidthTooLarge { width: 64, max: 63 })
        );

        let problem = Problem::new(3, [3, 1, 1], [7]).unwrap();
        assert_eq!(problem.minterms().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(problem.dont_cares().len(), 1);
    }

    #[test]
    fn test_single_cube() {
        let solution = minimize(3, [0, 1, 2, 3], []).unwrap();
        assert_eq!(patterns(&solution.epis), vec!["0--"]);
        assert!(solution.nepis.is_empty());
        assert_eq!(solution.to_string(), "EPIs=[0--], NEPIs=[]");
    }

    #[test]
    fn test_zero_width() {
        let solution = minimize(0, [0], []).unwrap();
        assert_eq!(solution.epis.len(), 1);
        assert!(solution.covers(0));
        assert!(solution.nepis.is_empty());
    }

    #[test]
    fn test_constant_false() {
        let solution = minimize(3, [], [1, 2]).unwrap();
        assert!(solution.epis.is_empty());
    }

    #[test]
    fn test_row_dominance_resolves_rest() {
        let solution = minimize(4, [0, 4, 8, 10, 11, 12], [13, 15]).unwrap();
        assert_eq!(patterns(solution.sorted_epis(TieBreak::FreeLast)), vec!["101-", "--00"]);
        assert_eq!(solution.nepis.len(), 4);
        assert_eq!(solution.total_cost(&Config::default().cost), 7);
    }

    #[test]
    fn test_trace_stages() {
        let problem = Problem::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
        let mut stages = Vec::new();
        let mut record = |s: &Snapshot<'_>| stages.push(s.stage);
        let solution = Minimizer::default().minimize_traced(&problem, &mut record).unwrap();
        assert_eq!(
            stages,
            vec![
                Stage::PrimeImplicants,
                Stage::Essentials,
                Stage::ColumnDominance,
                Stage::RowDominance,
                Stage::Petrick,
            ]
        );
        assert_eq!(solution.to_string(), "EPIs=[0-0, 11-, -01], NEPIs=[00-, 1-1, -10]");
    }

    #[test]
    fn test_essentials_cover_everything() {
        // 00- and -11 are essential and cover all minterms; 0-1 is left over
        let problem = Problem::new(3, [0, 1, 3, 7], []).unwrap();
        let mut stages = Vec::new();
        let mut record = |s: &Snapshot<'_>| stages.push((s.stage, s.minterms.len(), s.nepis.len()));
        let solution = Minimizer::default().minimize_traced(&problem, &mut record).unwrap();
        assert_eq!(stages, vec![(Stage::PrimeImplicants, 4, 3), (Stage::Essentials, 0, 1)]);
        assert_eq!(solution.to_string(), "EPIs=[00-, -11], NEPIs=[0-1]");
    }

    #[test]
    fn test_petrick_only_skips_reduction() {
        let problem = Problem::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
        let minimizer = Minimizer::new(Config {
            petrick_only: true,
            ..Config::default()
        });
        let mut stages = Vec::new();
        let mut record = |s: &Snapshot<'_>| stages.push(s.stage);
        let solution = minimizer.minimize_traced(&problem, &mut record).unwrap();
        assert_eq!(stages, vec![Stage::PrimeImplicants, Stage::Essentials, Stage::Petrick]);
        assert_eq!(solution.total_cost(&minimizer.config().cost), 9);
    }

    #[test]
    fn test_incomplete_cover_is_reported() {
        // Column dominance as configured by default drops minterm 12 for good
        let problem = Problem::new(4, [0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], []).unwrap();
        assert_eq!(
            Minimizer::default().minimize(&problem),
            Err(Error::IncompleteCover { uncovered: vec![12] })
        );

        let minimizer = Minimizer::new(Config {
            column_rule: ColumnRule::Dominating,
            ..Config::default()
        });
        let solution = minimizer.minimize(&problem).unwrap();
        assert_eq!(
            patterns(solution.sorted_epis(TieBreak::FreeLast)),
            vec!["11--", "-0-0", "-11-", "-1-1"]
        );
    }

    #[test]
    fn test_search_limit_is_reported() {
        let problem = Problem::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
        let minimizer = Minimizer::new(Config {
            max_petrick_implicants: 2,
            ..Config::default()
        });
        assert_eq!(
            minimizer.minimize(&problem),
            Err(Error::SearchTooLarge { implicants: 6, limit: 2 })
        );
    }

    #[test]
    fn test_custom_cost() {
        // Only the number of terms matters
        let problem = Problem::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
        let terms_only = |_: &Cube| -> u64 { 1 };
        let solution = Minimizer::default()
            .minimize_with(&problem, &terms_only, &mut NoTrace)
            .unwrap();
        assert_eq!(solution.epis.len(), 3);
        assert_eq!(solution.total_cost(&terms_only), 3);
    }
}
