//! Essential prime implicant extraction.
//!
//! A prime implicant is *essential* if it is the only prime covering some
//! required minterm; every cover built from primes must contain it.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::cube::Cube;
use crate::types::Minterm;

/// Counts, for every required minterm, how many of `primes` cover it.
pub fn coverage_counts<'a>(
    primes: impl IntoIterator<Item = &'a Cube>,
    minterms: &BTreeSet<Minterm>,
) -> BTreeMap<Minterm, usize> {
    let mut counts: BTreeMap<Minterm, usize> = minterms.iter().map(|&t| (t, 0)).collect();
    for prime in primes {
        for term in prime.iter() {
            if let Some(count) = counts.get_mut(&term) {
                *count += 1;
            }
        }
    }
    counts
}

/// Returns the primes which are the unique cover of at least one required minterm.
///
/// Don't-cares are not passed in `minterms` and therefore never make a prime essential.
pub fn essential_implicants(primes: &BTreeSet<Cube>, minterms: &BTreeSet<Minterm>) -> BTreeSet<Cube> {
    let counts = coverage_counts(primes, minterms);
    primes
        .iter()
        .filter(|prime| {
            let unique = prime.iter().find(|t| counts.get(t) == Some(&1));
            if let Some(term) = unique {
                trace!("{} is essential: sole cover of {}", prime, term);
            }
            unique.is_some()
        })
        .cloned()
        .collect()
}
