//! Stage-by-stage observation of the minimization pipeline.
//!
//! After every named stage the minimizer hands a [`Snapshot`] of its state to
//! a [`TraceObserver`]. Observers are purely passive: they cannot influence
//! the result.
//!
//! ```
//! use qm_rs::minimize::{Minimizer, Problem};
//! use qm_rs::trace::Snapshot;
//!
//! let problem = Problem::new(3, [0, 1, 2, 3], []).unwrap();
//! let mut stages = Vec::new();
//! let mut record = |s: &Snapshot<'_>| stages.push(s.stage.index());
//! Minimizer::default().minimize_traced(&problem, &mut record).unwrap();
//! assert_eq!(stages, vec![1, 2]);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::config::TieBreak;
use crate::cube::{format_sorted, Cube};
use crate::types::Minterm;

/// Named stages of the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stage {
    PrimeImplicants,
    Essentials,
    ColumnDominance,
    RowDominance,
    Petrick,
}

impl Stage {
    /// 1-based stage number.
    pub fn index(self) -> usize {
        match self {
            Stage::PrimeImplicants => 1,
            Stage::Essentials => 2,
            Stage::ColumnDominance => 3,
            Stage::RowDominance => 4,
            Stage::Petrick => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::PrimeImplicants => "Find all PIs",
            Stage::Essentials => "Find all EPIs",
            Stage::ColumnDominance => "Apply column dominance",
            Stage::RowDominance => "Apply row dominance",
            Stage::Petrick => "Apply Petrick's method",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process({}): {}", self.index(), self.title())
    }
}

/// The pipeline state right after a stage.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub stage: Stage,
    /// All prime implicants
    pub pis: &'a BTreeSet<Cube>,
    /// Implicants chosen so far
    pub epis: &'a BTreeSet<Cube>,
    /// Implicants not chosen so far
    pub nepis: &'a BTreeSet<Cube>,
    /// Required minterms not covered yet
    pub minterms: &'a BTreeSet<Minterm>,
}

impl Snapshot<'_> {
    /// Renders the snapshot as a single progress line, cubes in canonical order.
    ///
    /// Example: `Process(2): Find all EPIs: pis=[0--], epis=[0--], nepis=EMPTY, minterms=EMPTY`
    pub fn render(&self, tie_break: TieBreak) -> String {
        let minterms = if self.minterms.is_empty() {
            "EMPTY".to_string()
        } else {
            let items: Vec<String> = self.minterms.iter().map(|t| t.to_string()).collect();
            format!("{{{}}}", items.join(", "))
        };
        format!(
            "{}: pis={}, epis={}, nepis={}, minterms={}",
            self.stage,
            format_sorted(self.pis, tie_break),
            format_sorted(self.epis, tie_break),
            format_sorted(self.nepis, tie_break),
            minterms
        )
    }
}

/// Receives a snapshot after every stage.
pub trait TraceObserver {
    fn observe(&mut self, snapshot: &Snapshot<'_>);
}

/// Observer ignoring every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceObserver for NoTrace {
    fn observe(&mut self, _snapshot: &Snapshot<'_>) {}
}

impl<F> TraceObserver for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        self(snapshot)
    }
}

/// Observer forwarding rendered snapshots to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver {
    pub tie_break: TieBreak,
}

impl TraceObserver for LogObserver {
    fn observe(&mut self, snapshot: &Snapshot<'_>) {
        log::info!("{}", snapshot.render(self.tie_break));
    }
}
